//! Session provider adapters
//!
//! Implements [`SessionProvider`] for the two ways an operator can
//! authenticate against the Graph API:
//!
//! - [`StaticTokenProvider`]: a bearer token obtained elsewhere
//! - [`ClientCredentialsProvider`]: OAuth2 client-credentials grant

pub mod client_credentials;
pub mod static_token;

pub use client_credentials::ClientCredentialsProvider;
pub use static_token::StaticTokenProvider;

use crate::config::FileAuthConfig;
use devnotes_application::SessionProvider;
use std::sync::Arc;
use tracing::debug;

/// Pick the session provider for the given configuration.
///
/// A configured `access_token` wins; otherwise the client-credentials grant
/// is used and reports any missing keys from `ensure_available`.
pub fn session_provider_from_config(
    config: &FileAuthConfig,
    http: reqwest::Client,
) -> Arc<dyn SessionProvider> {
    match config.access_token.as_deref().map(str::trim) {
        Some(token) if !token.is_empty() => {
            debug!("Using pre-acquired access token");
            Arc::new(StaticTokenProvider::new(token))
        }
        _ => {
            debug!("Using client-credentials grant");
            Arc::new(ClientCredentialsProvider::from_config(config, http))
        }
    }
}
