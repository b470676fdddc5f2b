//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.
//!
//! ```toml
//! [graph]
//! base_url = "https://graph.microsoft.com"
//! api_version = "beta"
//!
//! [auth]
//! tenant_id = "contoso.onmicrosoft.com"
//! client_id = "00000000-0000-0000-0000-000000000000"
//! # client_secret is best supplied as DEVNOTES_AUTH__CLIENT_SECRET
//!
//! [lookup]
//! policy = "strict"
//! ```

use devnotes_domain::ResolutionPolicy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("graph.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("{0} cannot be empty")]
    EmptyValue(&'static str),

    #[error("graph.base_url must start with http:// or https://, got '{0}'")]
    InvalidBaseUrl(String),
}

/// Raw Graph API configuration from TOML
///
/// Endpoint shapes are configuration because the service versions its API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGraphConfig {
    /// Service root, without API version
    pub base_url: String,
    /// API version path segment (`beta` exposes the notes property)
    pub api_version: String,
    /// Path of the managed device collection below the version segment
    pub devices_path: String,
    /// Property holding the device display name
    pub name_field: String,
    /// Property holding the notes text
    pub notes_field: String,
    /// Timeout in seconds for each HTTP request
    pub timeout_seconds: Option<u64>,
}

impl Default for FileGraphConfig {
    fn default() -> Self {
        Self {
            base_url: "https://graph.microsoft.com".to_string(),
            api_version: "beta".to_string(),
            devices_path: "deviceManagement/managedDevices".to_string(),
            name_field: "deviceName".to_string(),
            notes_field: "notes".to_string(),
            timeout_seconds: None,
        }
    }
}

/// Raw authentication configuration from TOML
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAuthConfig {
    /// Identity platform root
    pub authority: String,
    /// OAuth2 scope requested for the Graph token
    pub scope: String,
    /// Directory (tenant) id or domain
    pub tenant_id: Option<String>,
    /// Application (client) id
    pub client_id: Option<String>,
    /// Client secret for the client-credentials grant
    pub client_secret: Option<String>,
    /// Pre-acquired bearer token; takes precedence over client credentials
    pub access_token: Option<String>,
}

impl Default for FileAuthConfig {
    fn default() -> Self {
        Self {
            authority: "https://login.microsoftonline.com".to_string(),
            scope: "https://graph.microsoft.com/.default".to_string(),
            tenant_id: None,
            client_id: None,
            client_secret: None,
            access_token: None,
        }
    }
}

impl std::fmt::Debug for FileAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("FileAuthConfig")
            .field("authority", &self.authority)
            .field("scope", &self.scope)
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &redact(&self.client_secret))
            .field("access_token", &redact(&self.access_token))
            .finish()
    }
}

/// Raw device lookup configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLookupConfig {
    /// What to do when several devices share a display name
    pub policy: ResolutionPolicy,
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub graph: FileGraphConfig,
    pub auth: FileAuthConfig,
    pub lookup: FileLookupConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(0) = self.graph.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        let required = [
            ("graph.base_url", &self.graph.base_url),
            ("graph.api_version", &self.graph.api_version),
            ("graph.devices_path", &self.graph.devices_path),
            ("graph.name_field", &self.graph.name_field),
            ("graph.notes_field", &self.graph.notes_field),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigValidationError::EmptyValue(key));
            }
        }

        let base = self.graph.base_url.trim();
        if !(base.starts_with("https://") || base.starts_with("http://")) {
            return Err(ConfigValidationError::InvalidBaseUrl(base.to_string()));
        }

        Ok(())
    }
}
