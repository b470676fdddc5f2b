//! Configuration loading for devnotes
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DEVNOTES_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./devnotes.toml` or `./.devnotes.toml`
//! 4. Global: `$XDG_CONFIG_HOME/devnotes/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAuthConfig, FileConfig, FileGraphConfig, FileLookupConfig,
    FileOutputConfig,
};
pub use loader::ConfigLoader;
