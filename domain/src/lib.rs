//! Domain layer for devnotes
//!
//! This crate contains the value objects and outcomes of the notes workflow.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Device**: a managed device record, addressed by a server-assigned
//!   [`DeviceId`] and looked up by its human-readable [`DeviceName`]
//! - **Note**: the free-text operator annotation stored on the device
//!   ([`NoteValue`])
//! - **Outcome**: what a single invocation did ([`NotesOutcome`])

pub mod core;
pub mod device;
pub mod notes;

// Re-export commonly used types
pub use crate::core::error::DomainError;
pub use device::{
    entities::DeviceRecord,
    policy::ResolutionPolicy,
    value_objects::{DeviceId, DeviceName},
};
pub use notes::{
    outcome::{NotesOutcome, OverwritePrompt},
    phase::NotesPhase,
    value_objects::{NoteValue, NotesRequest},
};
