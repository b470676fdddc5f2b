//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Device name cannot be empty")]
    EmptyDeviceName,

    #[error("Device id cannot be empty")]
    EmptyDeviceId,
}
