//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod confirmation;
pub mod device_directory;
pub mod progress;
pub mod session_provider;
