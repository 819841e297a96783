// In-memory Datadog API double
// Serves queued responses and records every request without touching the network

use datadog_k8s_mcp::datadog::models::{LogsListRequest, LogsResponse, Monitor};
use datadog_k8s_mcp::datadog::{LogsApi, MonitorsApi};
use datadog_k8s_mcp::{DatadogError, Result};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Recorded API call for verification
#[derive(Debug, Clone)]
pub enum ApiCall {
    ListLogs(LogsListRequest),
    ListMonitors { page_size: usize },
}

/// Queued reply: a JSON body or an error
pub enum MockReply {
    Json(Value),
    Error(DatadogError),
}

pub struct MockDatadogClient {
    log_pages: Mutex<VecDeque<MockReply>>,
    monitors: Mutex<VecDeque<MockReply>>,
    call_history: Mutex<Vec<ApiCall>>,
}

impl MockDatadogClient {
    pub fn new() -> Self {
        Self {
            log_pages: Mutex::new(VecDeque::new()),
            monitors: Mutex::new(VecDeque::new()),
            call_history: Mutex::new(Vec::new()),
        }
    }

    /// Queue a logs search response; once drained, searches return no data
    pub fn push_logs(&self, body: Value) -> &Self {
        self.log_pages.lock().unwrap().push_back(MockReply::Json(body));
        self
    }

    pub fn push_logs_error(&self, error: DatadogError) -> &Self {
        self.log_pages.lock().unwrap().push_back(MockReply::Error(error));
        self
    }

    /// Queue a monitor listing; once drained, listings are empty
    pub fn push_monitors(&self, body: Value) -> &Self {
        self.monitors.lock().unwrap().push_back(MockReply::Json(body));
        self
    }

    pub fn push_monitors_error(&self, error: DatadogError) -> &Self {
        self.monitors.lock().unwrap().push_back(MockReply::Error(error));
        self
    }

    pub fn get_call_history(&self) -> Vec<ApiCall> {
        self.call_history.lock().unwrap().clone()
    }

    /// Only the logs search requests, in order
    pub fn log_requests(&self) -> Vec<LogsListRequest> {
        self.get_call_history()
            .into_iter()
            .filter_map(|call| match call {
                ApiCall::ListLogs(request) => Some(request),
                ApiCall::ListMonitors { .. } => None,
            })
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.call_history.lock().unwrap().len()
    }
}

impl Default for MockDatadogClient {
    fn default() -> Self {
        Self::new()
    }
}

impl LogsApi for MockDatadogClient {
    async fn list_logs(&self, body: &LogsListRequest) -> Result<LogsResponse> {
        self.call_history
            .lock()
            .unwrap()
            .push(ApiCall::ListLogs(body.clone()));

        let reply = self.log_pages.lock().unwrap().pop_front();
        match reply {
            Some(MockReply::Json(value)) => Ok(serde_json::from_value(value)?),
            Some(MockReply::Error(e)) => Err(e),
            None => Ok(LogsResponse::default()),
        }
    }
}

impl MonitorsApi for MockDatadogClient {
    async fn list_monitors(&self, page_size: usize) -> Result<Vec<Monitor>> {
        self.call_history
            .lock()
            .unwrap()
            .push(ApiCall::ListMonitors { page_size });

        let reply = self.monitors.lock().unwrap().pop_front();
        match reply {
            Some(MockReply::Json(value)) => Ok(serde_json::from_value(value)?),
            Some(MockReply::Error(e)) => Err(e),
            None => Ok(Vec::new()),
        }
    }
}
