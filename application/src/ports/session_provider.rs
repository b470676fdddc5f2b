//! Session provider port
//!
//! Establishes the authenticated context every remote call runs under.
//!
//! Bootstrapping is split into two stages so each can be tested on its own:
//!
//! ```text
//! ensure_available()  -- are credentials configured? (no network)
//!        ↓
//! acquire_session()   -- token exchange
//!        ↓
//! Session (read-only for the rest of the process)
//! ```

use async_trait::async_trait;
use thiserror::Error;

/// Errors that prevent a session from being established.
///
/// All of them are fatal: no lookup or notes call is attempted afterwards.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authentication is not configured: {0}")]
    NotConfigured(String),

    #[error("Token request failed: {0}")]
    Transport(String),

    #[error("Token request rejected (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Invalid token response: {0}")]
    InvalidResponse(String),
}

/// Authenticated context for remote API calls.
///
/// Created once at process start and never mutated. `Debug` output never
/// contains the token.
#[derive(Clone)]
pub struct Session {
    access_token: String,
}

impl Session {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    /// Bearer token for the `Authorization` header
    pub fn bearer_token(&self) -> &str {
        &self.access_token
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Port for acquiring an authenticated [`Session`].
///
/// # Implementations
///
/// - **Client credentials (OAuth2)**: `ClientCredentialsProvider` in the
///   infrastructure layer
/// - **Pre-acquired token**: `StaticTokenProvider` in the infrastructure layer
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Short name of the authentication method, for logs
    fn name(&self) -> &'static str;

    /// Verify that the provider has what it needs to authenticate.
    ///
    /// Must not perform network I/O.
    fn ensure_available(&self) -> Result<(), AuthError>;

    /// Establish a session.
    async fn acquire_session(&self) -> Result<Session, AuthError>;
}
