//! Error types for the Graph adapter

use devnotes_application::{LookupError, ReadError, WriteError};
use serde::Deserialize;
use thiserror::Error;

/// Result type alias for Graph operations
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors that can occur when talking to the Graph API
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),
}

impl GraphError {
    pub fn status(&self) -> Option<u16> {
        match self {
            GraphError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Build a status error from a non-2xx response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        GraphError::Status {
            status,
            message: api_error_message(body),
        }
    }
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Extract `error.code` / `error.message` from a Graph error body, falling
/// back to the raw text.
pub fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => match (envelope.error.code, envelope.error.message) {
            (Some(code), Some(message)) if !message.is_empty() => format!("{}: {}", code, message),
            (Some(code), _) => code,
            (None, Some(message)) => message,
            (None, None) => "unknown error".to_string(),
        },
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

impl From<GraphError> for LookupError {
    fn from(err: GraphError) -> Self {
        LookupError::Request(err.to_string())
    }
}

impl GraphError {
    pub fn into_read_error(self, device_id: &str) -> ReadError {
        match self.status() {
            Some(404) => ReadError::DeviceNotFound(device_id.to_string()),
            _ => ReadError::Request(self.to_string()),
        }
    }

    pub fn into_write_error(self, device_id: &str) -> WriteError {
        match self {
            GraphError::Status { status: 404, .. } => {
                WriteError::DeviceNotFound(device_id.to_string())
            }
            GraphError::Status { status, message } if (400..500).contains(&status) => {
                WriteError::Rejected { status, message }
            }
            other => WriteError::Request(other.to_string()),
        }
    }
}
