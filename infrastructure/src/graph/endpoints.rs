//! Graph endpoint composition
//!
//! Builds the collection and item URLs for managed devices and the OData
//! query options used against them. All shapes come from
//! [`FileGraphConfig`] so a new API version is a config change.

use super::error::{GraphError, Result};
use crate::config::FileGraphConfig;
use reqwest::Url;

/// Endpoint layout of the managed device collection.
#[derive(Debug, Clone)]
pub struct GraphEndpoints {
    base_url: String,
    api_version: String,
    devices_path: String,
    name_field: String,
    notes_field: String,
}

impl GraphEndpoints {
    pub fn from_config(config: &FileGraphConfig) -> Self {
        Self {
            base_url: config.base_url.trim().to_string(),
            api_version: config.api_version.trim().trim_matches('/').to_string(),
            devices_path: config.devices_path.trim().trim_matches('/').to_string(),
            name_field: config.name_field.trim().to_string(),
            notes_field: config.notes_field.trim().to_string(),
        }
    }

    pub fn name_field(&self) -> &str {
        &self.name_field
    }

    pub fn notes_field(&self) -> &str {
        &self.notes_field
    }

    /// `{base}/{version}/{devices_path}`
    pub fn collection_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| GraphError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| GraphError::InvalidUrl(self.base_url.clone()))?;
            segments.pop_if_empty();
            segments.push(&self.api_version);
            segments.extend(self.devices_path.split('/').filter(|s| !s.is_empty()));
        }
        Ok(url)
    }

    /// `{collection}/{id}`, with the id percent-encoded as one segment
    pub fn device_url(&self, id: &str) -> Result<Url> {
        let mut url = self.collection_url()?;
        url.path_segments_mut()
            .map_err(|_| GraphError::InvalidUrl(self.base_url.clone()))?
            .push(id);
        Ok(url)
    }

    /// `$filter` expression matching the display name exactly
    pub fn name_filter(&self, name: &str) -> String {
        format!("{} eq {}", self.name_field, odata_string_literal(name))
    }

    /// `$select` projection for lookup rows
    pub fn lookup_select(&self) -> String {
        format!("id,{}", self.name_field)
    }
}

/// Quote a value as an OData string literal (`'` is escaped as `''`).
pub fn odata_string_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
