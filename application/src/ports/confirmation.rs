//! Confirmation port for guarded overwrites.
//!
//! Before an existing, non-blank note is replaced the controller asks this
//! port for a yes/no answer. Keeping the question behind a trait lets the
//! controller run headless with a scripted answer.
//!
//! # Built-in Implementations
//!
//! - [`AutoDecline`] - Always answers "no" (the default answer)
//! - [`AutoAccept`] - Always answers "yes" (`--yes`)
//!
//! For interactive use, see `ConsolePrompt` in the presentation layer.

use async_trait::async_trait;
use devnotes_domain::OverwritePrompt;

/// Error type for confirmation operations.
///
/// These represent failures while asking, not the operator's answer.
#[derive(Debug, Clone)]
pub enum ConfirmationError {
    /// Input/output error (e.g., terminal read failure)
    IoError(String),
}

impl std::fmt::Display for ConfirmationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfirmationError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for ConfirmationError {}

/// Port for asking the operator whether to overwrite an existing note.
#[async_trait]
pub trait ConfirmationPort: Send + Sync {
    /// Returns `Ok(true)` only on an explicit "yes".
    async fn confirm(&self, prompt: &OverwritePrompt) -> Result<bool, ConfirmationError>;
}

/// Answers every prompt with "no".
///
/// Equivalent to accepting the default answer, so a non-interactive run never
/// overwrites an existing note.
pub struct AutoDecline;

#[async_trait]
impl ConfirmationPort for AutoDecline {
    async fn confirm(&self, _prompt: &OverwritePrompt) -> Result<bool, ConfirmationError> {
        Ok(false)
    }
}

/// Answers every prompt with "yes".
pub struct AutoAccept;

#[async_trait]
impl ConfirmationPort for AutoAccept {
    async fn confirm(&self, _prompt: &OverwritePrompt) -> Result<bool, ConfirmationError> {
        Ok(true)
    }
}
