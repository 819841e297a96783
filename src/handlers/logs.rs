use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::datadog::models::{LogEntry, LogsListPage, LogsListRequest, LogsQueryFilter};
use crate::datadog::{DatadogClient, LogsApi, fetch_logs_paginated};
use crate::error::Result;
use crate::handlers::common::{ArgumentParser, ResponseFormatter, ToolOutcome, ToolResponse};
use crate::utils::{extract_tag_value, trailing_window};

/// Entries requested by a single (unpaginated) search
pub const SINGLE_PAGE_LIMIT: usize = 100;

/// Matches error-level entries regardless of which attribute carries the level
pub const ERROR_SEVERITY_CLAUSE: &str = "(status:error OR level:error OR severity:error)";

const DEFAULT_TIMEFRAME_HOURS: i64 = 5;
const NEWEST_FIRST: &str = "-timestamp";

/// One log entry flattened for `get_k8s_logs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub timestamp: Option<String>,
    pub host: Option<String>,
    pub service: Option<String>,
    pub pod_name: Option<String>,
    pub namespace: Option<String>,
    pub container_name: Option<String>,
    pub message: Option<String>,
    pub status: Option<String>,
}

impl From<LogEntry> for LogRecord {
    fn from(entry: LogEntry) -> Self {
        let attrs = entry.attributes.unwrap_or_default();
        let tags = attrs.tags.unwrap_or_default();
        let tag = |prefix: &str| extract_tag_value(&tags, prefix).map(str::to_string);

        Self {
            pod_name: tag("pod_name:"),
            namespace: tag("kube_namespace:"),
            container_name: tag("kube_container_name:"),
            timestamp: attrs.timestamp,
            host: attrs.host,
            service: attrs.service,
            message: attrs.message,
            status: attrs.status,
        }
    }
}

/// Search query for error logs of `cluster`, optionally narrowed to `namespace`
pub fn build_error_query(cluster: &str, namespace: Option<&str>) -> String {
    let mut clauses = vec![
        format!("kube_cluster_name:{}", cluster),
        ERROR_SEVERITY_CLAUSE.to_string(),
    ];

    if let Some(ns) = namespace {
        clauses.push(format!("kube_namespace:{}", ns));
    }

    clauses.join(" AND ")
}

/// Newest-first search over the trailing `timeframe_hours`
pub fn build_logs_request(query: String, timeframe_hours: i64) -> LogsListRequest {
    let (from, to) = trailing_window(timeframe_hours);

    LogsListRequest {
        filter: LogsQueryFilter { query, from, to },
        sort: NEWEST_FIRST.to_string(),
        page: Some(LogsListPage {
            limit: SINGLE_PAGE_LIMIT,
            cursor: None,
        }),
    }
}

pub struct LogsHandler;

impl ArgumentParser for LogsHandler {}
impl ResponseFormatter for LogsHandler {}

impl LogsHandler {
    /// `get_k8s_logs` tool entry point
    pub async fn k8s_errors(config: &ClientConfig, params: &Value) -> ToolOutcome {
        ToolOutcome::from_result(Self::run(config, params).await, "Error", "Error fetching logs")
    }

    async fn run(config: &ClientConfig, params: &Value) -> Result<ToolResponse> {
        let handler = LogsHandler;

        let cluster = handler.required_str(params, "cluster")?;
        let namespace = handler.optional_str(params, "namespace");
        let timeframe = handler.hours(params, "timeframe", DEFAULT_TIMEFRAME_HOURS)?;
        let max_results = handler.optional_count(params, "max_results")?;

        let client = DatadogClient::from_config(config)?;
        handler
            .search(&client, cluster, namespace, timeframe, max_results)
            .await
    }

    /// Run the error-log search. Without `max_results` a single page of
    /// [`SINGLE_PAGE_LIMIT`] entries is requested; with it, pages are
    /// fetched until the cap or an empty page.
    pub async fn search<A: LogsApi>(
        &self,
        api: &A,
        cluster: &str,
        namespace: Option<&str>,
        timeframe_hours: i64,
        max_results: Option<usize>,
    ) -> Result<ToolResponse> {
        let query = build_error_query(cluster, namespace);
        log::debug!("Logs query: {}", query);

        let request = build_logs_request(query, timeframe_hours);

        let entries = match max_results {
            None => {
                let response = api.list_logs(&request).await?;
                response.check_errors()?;
                response.data.unwrap_or_default()
            }
            Some(cap) => fetch_logs_paginated(api, request, cap).collect_entries().await?,
        };

        let records: Vec<LogRecord> = entries.into_iter().map(LogRecord::from).collect();
        log::debug!("Logs returned for cluster '{}': {}", cluster, records.len());

        self.format_records(&records)
    }
}
