//! Infrastructure layer for devnotes
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod auth;
pub mod config;
pub mod graph;

#[cfg(test)]
pub(crate) mod test_http;

// Re-export commonly used types
pub use auth::{ClientCredentialsProvider, StaticTokenProvider, session_provider_from_config};
pub use config::{
    ConfigLoader, ConfigValidationError, FileAuthConfig, FileConfig, FileGraphConfig,
    FileLookupConfig, FileOutputConfig,
};
pub use graph::{GraphDeviceClient, GraphEndpoints, GraphError};
