//! Outcome of a notes invocation

use super::value_objects::NoteValue;
use crate::device::value_objects::DeviceName;

/// What the operator is asked before an existing note is replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverwritePrompt {
    pub device: DeviceName,
    pub existing: NoteValue,
    pub requested: NoteValue,
}

/// Result of one invocation of the notes workflow.
///
/// Every path through the workflow ends in exactly one of these; there is no
/// other state carried between steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotesOutcome {
    /// Read-only report of the current note
    Current { device: DeviceName, note: NoteValue },
    /// The operator declined to overwrite an existing note
    Unchanged {
        device: DeviceName,
        existing: NoteValue,
        requested: NoteValue,
    },
    /// The note was written and read back
    Updated {
        device: DeviceName,
        previous: NoteValue,
        current: NoteValue,
    },
    /// Dry run: the write that would have been issued
    WouldUpdate {
        device: DeviceName,
        previous: NoteValue,
        requested: NoteValue,
    },
}
