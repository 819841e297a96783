use std::cmp::min;

use super::api::LogsApi;
use super::models::{LogEntry, LogsListPage, LogsListRequest, LogsResponse};
use crate::error::Result;

/// Result cap used when the caller does not pick one
pub const DEFAULT_MAX_RESULTS: usize = 1000;

/// Largest page the logs search endpoint serves
pub const MAX_PAGE_SIZE: usize = 100;

/// Lazy sequence of log pages for one query.
///
/// The page counter doubles as the cursor value sent to the API. Iteration
/// ends on the first empty page, once `max_results` rows have been seen, or
/// after the first error. A finished sequence cannot be restarted.
pub struct LogPages<'a, A: LogsApi> {
    api: &'a A,
    request: LogsListRequest,
    max_results: usize,
    page: usize,
    total: usize,
    finished: bool,
}

/// Start paginating `request` against `api`, stopping after `max_results` rows
pub fn fetch_logs_paginated<A: LogsApi>(
    api: &A,
    request: LogsListRequest,
    max_results: usize,
) -> LogPages<'_, A> {
    LogPages {
        api,
        request,
        max_results,
        page: 0,
        total: 0,
        finished: false,
    }
}

impl<'a, A: LogsApi> LogPages<'a, A> {
    /// Fetch the next non-empty page, or `None` once the sequence is exhausted
    pub async fn next_page(&mut self) -> Result<Option<LogsResponse>> {
        if self.finished || self.total >= self.max_results {
            self.finished = true;
            return Ok(None);
        }

        // TODO: switch to `meta.page.after` once the cursor contract of the search endpoint is confirmed
        self.request.page = Some(LogsListPage {
            limit: min(MAX_PAGE_SIZE, self.max_results - self.total),
            cursor: Some(self.page.to_string()),
        });

        let response = match self.api.list_logs(&self.request).await {
            Ok(response) => response,
            Err(e) => {
                self.finished = true;
                return Err(e);
            }
        };

        if let Err(e) = response.check_errors() {
            self.finished = true;
            return Err(e);
        }

        let rows = response.entries().len();
        if rows == 0 {
            self.finished = true;
            return Ok(None);
        }

        log::debug!(
            "Fetched log page {} with {} rows ({} total)",
            self.page,
            rows,
            self.total + rows
        );

        self.page += 1;
        self.total += rows;
        Ok(Some(response))
    }

    /// Drain the remaining pages into one list of entries
    pub async fn collect_entries(mut self) -> Result<Vec<LogEntry>> {
        let mut entries = Vec::new();
        while let Some(response) = self.next_page().await? {
            entries.extend(response.data.unwrap_or_default());
        }
        Ok(entries)
    }

    /// Number of pages emitted so far
    pub fn pages_fetched(&self) -> usize {
        self.page
    }

    /// Number of rows emitted so far
    pub fn rows_fetched(&self) -> usize {
        self.total
    }
}
