//! Device directory ports
//!
//! Two narrow contracts over the remote device-management service:
//!
//! - [`DeviceLookup`]: find device records by display name
//! - [`NotesStore`]: read and partially update the notes field of one device
//!
//! Both are implemented by the Graph adapter in the infrastructure layer and
//! by in-memory doubles in tests.

use crate::ports::session_provider::Session;
use async_trait::async_trait;
use devnotes_domain::{DeviceId, DeviceName, DeviceRecord, NoteValue};
use thiserror::Error;

/// Errors resolving a device name to a device id
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("No device named '{name}' was found")]
    NotFound { name: String },

    #[error("Device name '{name}' is ambiguous: {count} devices match")]
    Ambiguous { name: String, count: usize },

    #[error("Device lookup failed: {0}")]
    Request(String),
}

/// Errors reading the notes field
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("Device {0} no longer exists")]
    DeviceNotFound(String),

    #[error("Failed to read notes: {0}")]
    Request(String),
}

/// Errors writing the notes field
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Device {0} no longer exists")]
    DeviceNotFound(String),

    #[error("Notes update rejected (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Failed to write notes: {0}")]
    Request(String),
}

/// Port for looking up devices by display name.
#[async_trait]
pub trait DeviceLookup: Send + Sync {
    /// Return every record whose display name equals `name`, in server order.
    ///
    /// An empty vector is a successful lookup with no match; deciding what
    /// zero or several matches mean is left to the caller.
    async fn find_by_name(
        &self,
        session: &Session,
        name: &DeviceName,
    ) -> Result<Vec<DeviceRecord>, LookupError>;
}

/// Port for reading and writing a device's notes field.
#[async_trait]
pub trait NotesStore: Send + Sync {
    /// Read the notes field. An unset field is returned as the empty note.
    async fn get_notes(&self, session: &Session, id: &DeviceId) -> Result<NoteValue, ReadError>;

    /// Replace the notes field, leaving every other property untouched.
    ///
    /// Success does not guarantee an immediate read returns the new value.
    async fn set_notes(
        &self,
        session: &Session,
        id: &DeviceId,
        value: &NoteValue,
    ) -> Result<(), WriteError>;
}
