//! Spinner shown while a remote call is in flight

use colored::Colorize;
use devnotes_application::NotesProgressNotifier;
use devnotes_domain::NotesPhase;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports workflow progress with a single terminal spinner.
///
/// indicatif hides the spinner when stderr is not a terminal.
pub struct SpinnerProgress {
    current: Mutex<Option<ProgressBar>>,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn clear(&self) {
        if let Ok(mut current) = self.current.lock() {
            if let Some(pb) = current.take() {
                pb.finish_and_clear();
            }
        }
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl NotesProgressNotifier for SpinnerProgress {
    fn on_phase_start(&self, phase: NotesPhase) {
        self.clear();

        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(format!("{}...", phase.display_name()));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut current) = self.current.lock() {
            *current = Some(pb);
        }
    }

    fn on_phase_complete(&self, phase: NotesPhase, success: bool) {
        self.clear();
        if !success {
            eprintln!("{} {} failed", "x".red(), phase.display_name());
        }
    }

    fn on_awaiting_input(&self) {
        self.clear();
    }
}
