//! OAuth2 client-credentials grant against the Microsoft identity platform.
//!
//! ```text
//! POST {authority}/{tenant_id}/oauth2/v2.0/token
//! grant_type=client_credentials&client_id=..&client_secret=..&scope=..
//! ```

use crate::config::FileAuthConfig;
use async_trait::async_trait;
use devnotes_application::{AuthError, Session, SessionProvider};
use serde::Deserialize;
use tracing::{debug, info};

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
}

/// Error body returned by the token endpoint
#[derive(Deserialize)]
struct TokenErrorResponse {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

/// Session provider using an app registration's client secret.
pub struct ClientCredentialsProvider {
    http: reqwest::Client,
    authority: String,
    scope: String,
    tenant_id: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
}

impl ClientCredentialsProvider {
    pub fn from_config(config: &FileAuthConfig, http: reqwest::Client) -> Self {
        Self {
            http,
            authority: config.authority.trim_end_matches('/').to_string(),
            scope: config.scope.clone(),
            tenant_id: non_blank(&config.tenant_id),
            client_id: non_blank(&config.client_id),
            client_secret: non_blank(&config.client_secret),
        }
    }

    /// Token endpoint for the configured tenant
    pub fn token_url(&self) -> Option<String> {
        self.tenant_id
            .as_ref()
            .map(|tenant| format!("{}/{}/oauth2/v2.0/token", self.authority, tenant))
    }

    fn missing_keys(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.tenant_id.is_none() {
            missing.push("auth.tenant_id");
        }
        if self.client_id.is_none() {
            missing.push("auth.client_id");
        }
        if self.client_secret.is_none() {
            missing.push("auth.client_secret");
        }
        missing
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Extract a readable message from a token endpoint error body.
fn token_error_message(body: &str) -> String {
    match serde_json::from_str::<TokenErrorResponse>(body) {
        Ok(err) => match err.error_description {
            // Descriptions carry trace ids on following lines
            Some(desc) => format!(
                "{}: {}",
                err.error,
                desc.lines().next().unwrap_or_default().trim()
            ),
            None => err.error,
        },
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

#[async_trait]
impl SessionProvider for ClientCredentialsProvider {
    fn name(&self) -> &'static str {
        "client-credentials"
    }

    fn ensure_available(&self) -> Result<(), AuthError> {
        let missing = self.missing_keys();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AuthError::NotConfigured(format!(
                "missing {} (or set auth.access_token)",
                missing.join(", ")
            )))
        }
    }

    async fn acquire_session(&self) -> Result<Session, AuthError> {
        self.ensure_available()?;
        let url = self
            .token_url()
            .ok_or_else(|| AuthError::NotConfigured("missing auth.tenant_id".to_string()))?;
        let (Some(client_id), Some(client_secret)) = (&self.client_id, &self.client_secret) else {
            return Err(AuthError::NotConfigured(
                "missing client credentials".to_string(),
            ));
        };

        debug!("Requesting token from {}", url);
        let response = self
            .http
            .post(&url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", client_id.as_str()),
                ("client_secret", client_secret.as_str()),
                ("scope", self.scope.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                message: token_error_message(&body),
            });
        }

        let token: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))?;
        if let Some(kind) = &token.token_type {
            if !kind.eq_ignore_ascii_case("bearer") {
                return Err(AuthError::InvalidResponse(format!(
                    "unsupported token type '{}'",
                    kind
                )));
            }
        }

        match token.expires_in {
            Some(secs) if secs <= 0 => {
                return Err(AuthError::InvalidResponse(format!(
                    "token already expired (expires_in {})",
                    secs
                )));
            }
            Some(secs) => debug!("Token lifetime: {}s", secs),
            None => debug!("Token response carries no lifetime"),
        }
        info!("Acquired token for client {}", client_id);
        Ok(Session::new(token.access_token))
    }
}
