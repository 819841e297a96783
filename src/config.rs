use std::env;

use crate::error::{DatadogError, Result};

/// Regional endpoint used when `DD_SITE` is not set
pub const DEFAULT_SITE: &str = "datadoghq.eu";

/// Resolved API credentials for a single call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub app_key: String,
}

/// Client configuration, built once at startup and handed to every tool call.
///
/// Credentials are kept optional here: a server without keys still starts,
/// answers `tools/list`, and reports the missing keys per call.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    api_key: Option<String>,
    app_key: Option<String>,
    site: String,
    base_url: Option<String>,
}

impl ClientConfig {
    pub fn new(api_key: Option<String>, app_key: Option<String>, site: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
            app_key: app_key.filter(|k| !k.is_empty()),
            site: site.unwrap_or_else(|| DEFAULT_SITE.to_string()),
            base_url: None,
        }
    }

    /// Read `DD_API_KEY`, `DD_APP_KEY` and `DD_SITE` from the process environment
    pub fn from_env() -> Self {
        Self::new(
            env::var("DD_API_KEY").ok(),
            env::var("DD_APP_KEY").ok(),
            env::var("DD_SITE").ok(),
        )
    }

    /// Point the client at a different API root (mock servers, proxies)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn site(&self) -> &str {
        &self.site
    }

    pub fn base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| format!("https://api.{}", self.site))
    }

    pub fn credentials(&self) -> Result<Credentials> {
        match (&self.api_key, &self.app_key) {
            (Some(api_key), Some(app_key)) => Ok(Credentials {
                api_key: api_key.clone(),
                app_key: app_key.clone(),
            }),
            _ => Err(DatadogError::MissingCredentials),
        }
    }
}
