//! Console confirmation prompt for overwriting an existing note.
//!
//! ```text
//! Device VM-1874-39 already has a note:
//!   Laddstation: 33
//! New note:
//!   Laddstation: 99
//! Overwrite the existing note? [y/N]
//! ```
//!
//! An empty answer, end of input, or a non-terminal stdin all mean "no".

use async_trait::async_trait;
use colored::Colorize;
use devnotes_application::{ConfirmationError, ConfirmationPort};
use devnotes_domain::OverwritePrompt;
use devnotes_domain::core::string::{single_line, truncate};
use std::io::{self, BufRead, IsTerminal, Write};

/// Longest note excerpt shown in the prompt, in bytes
const PREVIEW_LEN: usize = 200;

/// Terminal-based [`ConfirmationPort`].
pub struct ConsolePrompt {
    interactive: bool,
}

impl ConsolePrompt {
    /// Prompt only when stdin is a terminal.
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_terminal(),
        }
    }

    /// Interpret one line of input.
    ///
    /// Returns `None` for input that is neither yes nor no.
    pub fn parse_answer(input: &str) -> Option<bool> {
        match input.trim().to_lowercase().as_str() {
            "" | "n" | "no" => Some(false),
            "y" | "yes" => Some(true),
            _ => None,
        }
    }

    /// Show the prompt and read answers until one is recognised.
    pub fn ask<R: BufRead, W: Write>(
        prompt: &OverwritePrompt,
        input: &mut R,
        output: &mut W,
    ) -> Result<bool, ConfirmationError> {
        let io_err = |e: io::Error| ConfirmationError::IoError(e.to_string());

        writeln!(output).map_err(io_err)?;
        writeln!(
            output,
            "Device {} already has a note:",
            prompt.device.as_str().cyan().bold()
        )
        .map_err(io_err)?;
        writeln!(output, "  {}", preview(prompt.existing.as_str()).yellow()).map_err(io_err)?;
        writeln!(output, "New note:").map_err(io_err)?;
        writeln!(output, "  {}", preview(prompt.requested.as_str()).green()).map_err(io_err)?;

        loop {
            write!(output, "Overwrite the existing note? [y/N] ").map_err(io_err)?;
            output.flush().map_err(io_err)?;

            let mut line = String::new();
            if input.read_line(&mut line).map_err(io_err)? == 0 {
                writeln!(output).map_err(io_err)?;
                return Ok(false);
            }

            match Self::parse_answer(&line) {
                Some(answer) => return Ok(answer),
                None => {
                    writeln!(output, "Please answer y or n.").map_err(io_err)?;
                }
            }
        }
    }
}

impl Default for ConsolePrompt {
    fn default() -> Self {
        Self::new()
    }
}

fn preview(note: &str) -> String {
    truncate(&single_line(note), PREVIEW_LEN)
}

#[async_trait]
impl ConfirmationPort for ConsolePrompt {
    async fn confirm(&self, prompt: &OverwritePrompt) -> Result<bool, ConfirmationError> {
        if !self.interactive {
            eprintln!(
                "{} stdin is not a terminal; keeping the existing note (use --yes to overwrite)",
                "!".yellow()
            );
            return Ok(false);
        }

        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        Self::ask(prompt, &mut input, &mut output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devnotes_domain::{DeviceName, NoteValue};
    use std::io::Cursor;

    fn prompt() -> OverwritePrompt {
        OverwritePrompt {
            device: DeviceName::try_new("VM-1874-39").unwrap(),
            existing: NoteValue::new("Laddstation: 33"),
            requested: NoteValue::new("Laddstation: 99"),
        }
    }

    fn ask(input: &str) -> (bool, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        let answer = ConsolePrompt::ask(&prompt(), &mut reader, &mut output).unwrap();
        (answer, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_answer() {
        assert_eq!(ConsolePrompt::parse_answer("y\n"), Some(true));
        assert_eq!(ConsolePrompt::parse_answer(" YES "), Some(true));
        assert_eq!(ConsolePrompt::parse_answer("n"), Some(false));
        assert_eq!(ConsolePrompt::parse_answer("No"), Some(false));
        assert_eq!(ConsolePrompt::parse_answer("\n"), Some(false));
        assert_eq!(ConsolePrompt::parse_answer("maybe"), None);
    }

    #[test]
    fn test_ask_shows_existing_and_new_note() {
        let (answer, output) = ask("y\n");
        assert!(answer);
        assert!(output.contains("VM-1874-39"));
        assert!(output.contains("Laddstation: 33"));
        assert!(output.contains("Laddstation: 99"));
        assert!(output.contains("[y/N]"));
    }

    #[test]
    fn test_ask_defaults_to_no() {
        assert!(!ask("\n").0);
    }

    #[test]
    fn test_ask_eof_is_no() {
        assert!(!ask("").0);
    }

    #[test]
    fn test_ask_repeats_on_unrecognised_input() {
        let (answer, output) = ask("sure\nyes\n");
        assert!(answer);
        assert!(output.contains("Please answer y or n."));
        assert_eq!(output.matches("[y/N]").count(), 2);
    }

    #[tokio::test]
    async fn test_non_interactive_declines_without_reading() {
        let prompt_port = ConsolePrompt { interactive: false };
        assert!(!prompt_port.confirm(&prompt()).await.unwrap());
    }

    #[test]
    fn test_preview_flattens_multiline_notes() {
        assert_eq!(preview("Rack 4\nshelf 2"), "Rack 4 / shelf 2");
        assert!(preview(&"x".repeat(500)).ends_with("..."));
    }
}
