//! Notes workflow phases

/// Remote step the notes workflow is currently performing.
///
/// ```text
/// Resolving -> Reading -> [Writing -> Verifying]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotesPhase {
    /// Looking up the device id by display name
    Resolving,
    /// Fetching the current note
    Reading,
    /// Applying the partial update
    Writing,
    /// Re-reading the note after a write
    Verifying,
}

impl NotesPhase {
    pub fn display_name(&self) -> &'static str {
        match self {
            NotesPhase::Resolving => "Resolving device",
            NotesPhase::Reading => "Reading notes",
            NotesPhase::Writing => "Writing notes",
            NotesPhase::Verifying => "Verifying notes",
        }
    }
}
