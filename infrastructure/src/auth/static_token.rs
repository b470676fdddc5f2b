//! Pre-acquired bearer token

use async_trait::async_trait;
use devnotes_application::{AuthError, Session, SessionProvider};

/// Session provider for a token obtained externally
/// (e.g. `az account get-access-token --resource-type ms-graph`).
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl SessionProvider for StaticTokenProvider {
    fn name(&self) -> &'static str {
        "static-token"
    }

    fn ensure_available(&self) -> Result<(), AuthError> {
        if self.token.trim().is_empty() {
            return Err(AuthError::NotConfigured(
                "auth.access_token is empty".to_string(),
            ));
        }
        Ok(())
    }

    async fn acquire_session(&self) -> Result<Session, AuthError> {
        Ok(Session::new(self.token.trim()))
    }
}
