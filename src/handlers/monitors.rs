use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::datadog::models::Monitor;
use crate::datadog::{DatadogClient, MonitorsApi};
use crate::error::Result;
use crate::handlers::common::{ArgumentParser, ResponseFormatter, ToolOutcome, ToolResponse};

/// Monitors requested per lookup
pub const MONITOR_PAGE_SIZE: usize = 100;

const DEFAULT_TIMEFRAME_HOURS: i64 = 1;
const ERROR_PREFIX: &str = "Error fetching monitor states";

/// Flattened monitor state as returned by `get_monitor_states`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorRecord {
    pub id: String,
    pub name: String,
    pub query: String,
    pub status: Option<String>,
    pub last_triggered: Option<i64>,
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub monitor_type: Option<String>,
    pub created: Option<String>,
    pub modified: Option<String>,
}

impl From<Monitor> for MonitorRecord {
    fn from(monitor: Monitor) -> Self {
        Self {
            id: monitor.id.to_string(),
            name: monitor.name,
            query: monitor.query,
            status: monitor.overall_state,
            last_triggered: monitor.last_triggered_ts,
            message: monitor.message,
            monitor_type: monitor.monitor_type,
            created: monitor.created,
            modified: monitor.modified,
        }
    }
}

pub struct MonitorsHandler;

impl ArgumentParser for MonitorsHandler {}
impl ResponseFormatter for MonitorsHandler {}

impl MonitorsHandler {
    /// `get_monitor_states` tool entry point
    pub async fn states(config: &ClientConfig, params: &Value) -> ToolOutcome {
        ToolOutcome::from_result(Self::run(config, params).await, ERROR_PREFIX, ERROR_PREFIX)
    }

    async fn run(config: &ClientConfig, params: &Value) -> Result<ToolResponse> {
        let handler = MonitorsHandler;

        let name = handler.required_str(params, "name")?;
        let timeframe = handler.hours(params, "timeframe", DEFAULT_TIMEFRAME_HOURS)?;

        let client = DatadogClient::from_config(config)?;
        handler.find(&client, name, timeframe).await
    }

    /// List monitors and keep those whose name contains `name`, ignoring case.
    /// `timeframe` is accepted for parity with the prompt but does not filter.
    pub async fn find<A: MonitorsApi>(
        &self,
        api: &A,
        name: &str,
        _timeframe: i64,
    ) -> Result<ToolResponse> {
        let needle = name.to_lowercase();

        let monitors: Vec<MonitorRecord> = api
            .list_monitors(MONITOR_PAGE_SIZE)
            .await?
            .into_iter()
            .filter(|monitor| monitor.name.to_lowercase().contains(&needle))
            .map(MonitorRecord::from)
            .collect();

        log::debug!("Monitors matching '{}': {}", name, monitors.len());

        if monitors.is_empty() {
            return Ok(ToolResponse::Notice(format!(
                "No monitors found with name containing '{}'",
                name
            )));
        }

        self.format_records(&monitors)
    }
}
