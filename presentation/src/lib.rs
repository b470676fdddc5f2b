//! Presentation layer for devnotes
//!
//! This crate contains the CLI definition, the console confirmation prompt,
//! output formatting and progress display.

pub mod cli;
pub mod confirm;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use confirm::console_prompt::ConsolePrompt;
pub use output::console::ConsoleFormatter;
pub use progress::spinner::SpinnerProgress;
