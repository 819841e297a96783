use std::future::Future;

use super::models::{LogsListRequest, LogsResponse, Monitor};
use crate::error::Result;

/// Log search endpoint. Implemented by [`super::DatadogClient`] and by
/// in-memory fakes in tests.
pub trait LogsApi {
    fn list_logs(&self, body: &LogsListRequest) -> impl Future<Output = Result<LogsResponse>>;
}

/// Monitor listing endpoint.
pub trait MonitorsApi {
    fn list_monitors(&self, page_size: usize) -> impl Future<Output = Result<Vec<Monitor>>>;
}
