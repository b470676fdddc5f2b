//! Note value objects

/// Free-text note stored on a device (Value Object)
///
/// Opaque text with no schema. An unset remote field is represented as the
/// empty note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteValue(String);

impl NoteValue {
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    /// The empty note (field unset on the device)
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// True when the note holds no visible text.
    ///
    /// Whitespace-only notes count as blank so they never trigger the
    /// overwrite confirmation.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NoteValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the operator asked for in one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotesRequest {
    /// Report the current note
    Read,
    /// Replace the note with the given value
    Write(NoteValue),
}

impl NotesRequest {
    /// Build a request from the optional notes argument.
    ///
    /// An absent or blank argument means read-only.
    pub fn from_argument(notes: Option<String>) -> Self {
        match notes {
            Some(value) if !value.trim().is_empty() => NotesRequest::Write(NoteValue::new(value)),
            _ => NotesRequest::Read,
        }
    }
}
