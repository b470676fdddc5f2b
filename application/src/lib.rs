//! Application layer for devnotes
//!
//! This crate contains the notes use cases and the port definitions their
//! adapters implement. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    confirmation::{AutoAccept, AutoDecline, ConfirmationError, ConfirmationPort},
    device_directory::{DeviceLookup, LookupError, NotesStore, ReadError, WriteError},
    progress::{NoProgress, NotesProgressNotifier},
    session_provider::{AuthError, Session, SessionProvider},
};
pub use use_cases::manage_notes::{ManageNotesError, ManageNotesInput, ManageNotesUseCase};
pub use use_cases::resolve_device::resolve_device_id;
