//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for devnotes
#[derive(Parser, Debug)]
#[command(name = "devnotes")]
#[command(author, version, about = "Look up or update the notes field of a managed device")]
#[command(long_about = r#"
devnotes reads or replaces the free-text notes of an Intune managed device
through the Microsoft Graph API.

Without NOTES the current note is printed. With NOTES the note is replaced;
if the device already has a note you are asked before it is overwritten
(default: no).

Configuration files are loaded from (in priority order):
1. DEVNOTES_* environment variables (e.g. DEVNOTES_AUTH__CLIENT_SECRET)
2. --config <path>     Explicit config file
3. ./devnotes.toml     Project-level config
4. ~/.config/devnotes/config.toml   Global config

Example:
  devnotes VM-1874-39
  devnotes VM-1874-39 "Laddstation: 99"
  devnotes --what-if VM-1874-39 "Laddstation: 99"
"#)]
pub struct Cli {
    /// Display name of the device
    pub device_name: Option<String>,

    /// New note text (omit to print the current note)
    pub notes: Option<String>,

    /// Overwrite an existing note without asking
    #[arg(short, long)]
    pub yes: bool,

    /// Show what would be written without changing anything
    #[arg(long)]
    pub what_if: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files (environment still applies)
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
