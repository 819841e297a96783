use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::api::{LogsApi, MonitorsApi};
use super::models::*;
use crate::config::ClientConfig;
use crate::error::{DatadogError, Result};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client for one tool call. Built from a [`ClientConfig`] and dropped
/// when the call finishes.
#[derive(Debug)]
pub struct DatadogClient {
    client: Client,
    api_key: String,
    app_key: String,
    base_url: String,
}

impl DatadogClient {
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let credentials = config.credentials()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(DatadogError::NetworkError)?;

        Ok(Self {
            client,
            api_key: credentials.api_key,
            app_key: credentials.app_key,
            base_url: config.base_url(),
        })
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        endpoint: &str,
        query: Option<Vec<(&str, String)>>,
        body: Option<impl Serialize>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut request = self
            .client
            .request(method, &url)
            .header("DD-API-KEY", &self.api_key)
            .header("DD-APPLICATION-KEY", &self.app_key)
            .header("Content-Type", "application/json");

        if let Some(params) = query {
            request = request.query(&params);
        }

        if let Some(data) = body {
            request = request.json(&data);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(DatadogError::NetworkError)
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    Err(DatadogError::AuthError(error_text))
                }
                StatusCode::TOO_MANY_REQUESTS => Err(DatadogError::RateLimitError),
                StatusCode::REQUEST_TIMEOUT => Err(DatadogError::TimeoutError),
                _ => Err(DatadogError::ApiError(format!(
                    "HTTP {}: {}",
                    status, error_text
                ))),
            }
        }
    }
}

impl LogsApi for DatadogClient {
    async fn list_logs(&self, body: &LogsListRequest) -> Result<LogsResponse> {
        self.request(
            reqwest::Method::POST,
            "/api/v2/logs/events/search",
            None,
            Some(body),
        )
        .await
    }
}

impl MonitorsApi for DatadogClient {
    async fn list_monitors(&self, page_size: usize) -> Result<Vec<Monitor>> {
        self.request(
            reqwest::Method::GET,
            "/api/v1/monitor",
            Some(vec![("page_size", page_size.to_string())]),
            None::<()>,
        )
        .await
    }
}
