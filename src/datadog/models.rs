use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

use crate::error::{DatadogError, Result};

// ============= Logs Request Models =============

/// Body of `POST /api/v2/logs/events/search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogsListRequest {
    pub filter: LogsQueryFilter,
    pub sort: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<LogsListPage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogsQueryFilter {
    pub query: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogsListPage {
    pub limit: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

// ============= Logs Response Models =============

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogsResponse {
    pub data: Option<Vec<LogEntry>>,
    pub meta: Option<LogsMeta>,
    pub errors: Option<Vec<String>>,
}

impl LogsResponse {
    pub fn entries(&self) -> &[LogEntry] {
        self.data.as_deref().unwrap_or_default()
    }

    /// Turn a non-empty `errors` list into an API error
    pub fn check_errors(&self) -> Result<()> {
        match &self.errors {
            Some(errors) if !errors.is_empty() => Err(DatadogError::ApiError(errors.join(", "))),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub log_type: Option<String>,
    pub attributes: Option<LogAttributes>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogAttributes {
    pub timestamp: Option<String>,
    pub tags: Option<Vec<String>>,
    pub host: Option<String>,
    pub service: Option<String>,
    pub message: Option<String>,
    pub status: Option<String>,
    pub attributes: Option<HashMap<String, serde_json::Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsMeta {
    pub page: Option<LogsPage>,
    pub elapsed: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsPage {
    pub after: Option<String>,
}

// ============= Monitors Models =============

/// The subset of a v1 monitor this server reads. Everything except the
/// identity fields may be absent in the API payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monitor {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub query: String,
    #[serde(rename = "type", default)]
    pub monitor_type: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub overall_state: Option<String>,
    #[serde(default)]
    pub last_triggered_ts: Option<i64>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub modified: Option<String>,
}

/// Missing and `null` both map to the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
