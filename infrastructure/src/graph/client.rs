//! Graph device client
//!
//! One filtered collection query for lookup, one projected item read, and one
//! `PATCH` for the partial update. Pagination is not followed: the lookup is
//! an equality filter on the display name and only its first page matters.

use super::endpoints::GraphEndpoints;
use super::error::{GraphError, Result};
use crate::config::FileGraphConfig;
use async_trait::async_trait;
use devnotes_application::{
    DeviceLookup, LookupError, NotesStore, ReadError, Session, WriteError,
};
use devnotes_domain::{DeviceId, DeviceName, DeviceRecord, NoteValue};
use reqwest::Url;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, trace, warn};

const USER_AGENT: &str = concat!("devnotes/", env!("CARGO_PKG_VERSION"));

/// OData collection envelope
#[derive(Deserialize)]
struct ODataCollection {
    #[serde(default)]
    value: Vec<Map<String, Value>>,
}

/// Graph API adapter for managed device lookup and notes access
pub struct GraphDeviceClient {
    http: reqwest::Client,
    endpoints: GraphEndpoints,
}

impl GraphDeviceClient {
    pub fn new(http: reqwest::Client, endpoints: GraphEndpoints) -> Self {
        Self { http, endpoints }
    }

    pub fn from_config(config: &FileGraphConfig, http: reqwest::Client) -> Self {
        Self::new(http, GraphEndpoints::from_config(config))
    }

    /// Build the shared HTTP client (also used for the token request)
    pub fn http_client(timeout_seconds: Option<u64>) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(builder.build()?)
    }

    async fn get_json(&self, session: &Session, url: Url, query: &[(&str, &str)]) -> Result<Value> {
        debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .bearer_auth(session.bearer_token())
            .header(reqwest::header::ACCEPT, "application/json")
            .query(query)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        trace!("Response {}: {}", status, body);

        if !status.is_success() {
            return Err(GraphError::from_response(status.as_u16(), &body));
        }
        serde_json::from_str(&body).map_err(|e| GraphError::Decode(e.to_string()))
    }

    async fn patch_json(&self, session: &Session, url: Url, body: &Value) -> Result<()> {
        debug!("PATCH {}", url);
        let response = self
            .http
            .patch(url)
            .bearer_auth(session.bearer_token())
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_else(|e| {
                debug!("Failed to read error body: {}", e);
                String::new()
            });
            return Err(GraphError::from_response(status.as_u16(), &text));
        }
        Ok(())
    }

    /// Convert lookup rows into device records, skipping rows without an id.
    fn parse_records(&self, rows: Vec<Map<String, Value>>, queried: &DeviceName) -> Vec<DeviceRecord> {
        rows.into_iter()
            .filter_map(|row| {
                let id = row.get("id").and_then(Value::as_str)?;
                let Ok(id) = DeviceId::try_new(id) else {
                    warn!("Skipping device row with blank id");
                    return None;
                };
                let name = row
                    .get(self.endpoints.name_field())
                    .and_then(Value::as_str)
                    .and_then(|n| DeviceName::try_new(n).ok())
                    .unwrap_or_else(|| queried.clone());
                Some(DeviceRecord::new(id, name))
            })
            .collect()
    }

    /// Pull the notes property out of an item response; `null` or absent is
    /// the empty note.
    fn parse_notes(&self, item: &Value) -> Result<NoteValue> {
        match item.get(self.endpoints.notes_field()) {
            None | Some(Value::Null) => Ok(NoteValue::empty()),
            Some(Value::String(text)) => Ok(NoteValue::new(text.clone())),
            Some(other) => Err(GraphError::Decode(format!(
                "'{}' is not a string: {}",
                self.endpoints.notes_field(),
                other
            ))),
        }
    }
}

#[async_trait]
impl DeviceLookup for GraphDeviceClient {
    async fn find_by_name(
        &self,
        session: &Session,
        name: &DeviceName,
    ) -> std::result::Result<Vec<DeviceRecord>, LookupError> {
        let url = self.endpoints.collection_url()?;
        let filter = self.endpoints.name_filter(name.as_str());
        let select = self.endpoints.lookup_select();

        let body = self
            .get_json(session, url, &[("$filter", filter.as_str()), ("$select", select.as_str())])
            .await?;
        let collection: ODataCollection =
            serde_json::from_value(body).map_err(|e| LookupError::Request(e.to_string()))?;

        Ok(self.parse_records(collection.value, name))
    }
}

#[async_trait]
impl NotesStore for GraphDeviceClient {
    async fn get_notes(
        &self,
        session: &Session,
        id: &DeviceId,
    ) -> std::result::Result<NoteValue, ReadError> {
        let result: Result<NoteValue> = async {
            let url = self.endpoints.device_url(id.as_str())?;
            let item = self
                .get_json(session, url, &[("$select", self.endpoints.notes_field())])
                .await?;
            self.parse_notes(&item)
        }
        .await;

        result.map_err(|e| e.into_read_error(id.as_str()))
    }

    async fn set_notes(
        &self,
        session: &Session,
        id: &DeviceId,
        value: &NoteValue,
    ) -> std::result::Result<(), WriteError> {
        let mut body = Map::new();
        body.insert(
            self.endpoints.notes_field().to_string(),
            Value::String(value.as_str().to_string()),
        );

        let result: Result<()> = async {
            let url = self.endpoints.device_url(id.as_str())?;
            self.patch_json(session, url, &Value::Object(body)).await
        }
        .await;

        result.map_err(|e| e.into_write_error(id.as_str()))
    }
}
