//! Console output formatter for notes outcomes

use colored::Colorize;
use devnotes_domain::{NoteValue, NotesOutcome};

/// Formats notes outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Force colored output on or off for the whole process
    pub fn set_color(enabled: bool) {
        colored::control::set_override(enabled);
    }

    /// Format an outcome as the final report line(s)
    pub fn format(outcome: &NotesOutcome) -> String {
        match outcome {
            NotesOutcome::Current { device, note } => {
                if note.is_blank() {
                    format!("Device {} has no notes set.", Self::device(device.as_str()))
                } else {
                    format!(
                        "Device {} has note {}",
                        Self::device(device.as_str()),
                        Self::note(note)
                    )
                }
            }
            NotesOutcome::Unchanged {
                device, existing, ..
            } => format!(
                "{} Note on device {} was not changed. It is still {}",
                "-".yellow(),
                Self::device(device.as_str()),
                Self::note(existing)
            ),
            NotesOutcome::Updated {
                device,
                previous,
                current,
            } => {
                let mut output = format!(
                    "{} Device {} now has note {}",
                    "v".green(),
                    Self::device(device.as_str()),
                    Self::note(current)
                );
                if !previous.is_blank() {
                    output.push_str(&format!(
                        "\n  {} {}",
                        "previously".dimmed(),
                        Self::note(previous)
                    ));
                }
                output
            }
            NotesOutcome::WouldUpdate {
                device,
                previous,
                requested,
            } => {
                let from = if previous.is_blank() {
                    "(no notes)".dimmed().to_string()
                } else {
                    Self::note(previous)
                };
                format!(
                    "{} would change note on device {} from {} to {}",
                    "What if:".cyan().bold(),
                    Self::device(device.as_str()),
                    from,
                    Self::note(requested)
                )
            }
        }
    }

    fn device(name: &str) -> String {
        format!("\"{}\"", name).cyan().bold().to_string()
    }

    fn note(note: &NoteValue) -> String {
        format!("\"{}\"", note.as_str()).yellow().to_string()
    }
}
