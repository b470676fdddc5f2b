//! Progress notification port
//!
//! Defines the interface for reporting progress while remote calls run.

use devnotes_domain::NotesPhase;

/// Callback for progress updates during the notes workflow
///
/// Implementations live in the presentation layer (e.g. a terminal spinner).
pub trait NotesProgressNotifier: Send + Sync {
    /// Called before the remote call for a phase is issued
    fn on_phase_start(&self, phase: NotesPhase);

    /// Called when the remote call for a phase returns
    fn on_phase_complete(&self, phase: NotesPhase, success: bool);

    /// Called before the workflow blocks on operator input.
    ///
    /// Spinners must be cleared here so the prompt is readable.
    fn on_awaiting_input(&self) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl NotesProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: NotesPhase) {}
    fn on_phase_complete(&self, _phase: NotesPhase, _success: bool) {}
}
