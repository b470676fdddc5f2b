//! Name resolution policy

use serde::{Deserialize, Serialize};

/// How a display-name lookup that matches several records is resolved.
///
/// Display names are expected to be unique within a tenant, but nothing on
/// the server enforces it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolutionPolicy {
    /// Exactly one record must match (default)
    #[default]
    Strict,
    /// Take whichever record the server returns first
    FirstMatch,
}
