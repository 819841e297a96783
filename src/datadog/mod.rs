pub mod api;
pub mod client;
pub mod models;
pub mod pagination;

pub use api::{LogsApi, MonitorsApi};
pub use client::DatadogClient;
pub use pagination::{DEFAULT_MAX_RESULTS, LogPages, fetch_logs_paginated};
