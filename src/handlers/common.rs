use crate::error::{DatadogError, Result};
use serde::Serialize;
use serde_json::{Value, json};

/// Text returned for every call made without both API keys
pub const MISSING_CREDENTIALS_TEXT: &str = "Error: Missing Datadog API credentials";

/// Successful handler output before it is rendered to text
#[derive(Debug, Clone, PartialEq)]
pub enum ToolResponse {
    /// Records rendered as indented JSON
    Records(Value),
    /// Plain informational text (e.g. nothing matched)
    Notice(String),
}

/// What a tool call hands back to the caller: one text block, flagged when
/// it describes a failure. Every handler result ends up here, errors included.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutcome {
    pub text: String,
    pub is_error: bool,
}

impl ToolOutcome {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }

    /// Render a handler result.
    ///
    /// `error_prefix` leads the text of provider failures, `log_context`
    /// labels the log line written for them.
    pub fn from_result(result: Result<ToolResponse>, error_prefix: &str, log_context: &str) -> Self {
        match result {
            Ok(ToolResponse::Records(records)) => Self::success(
                serde_json::to_string_pretty(&records)
                    .unwrap_or_else(|_| "Error formatting response".to_string()),
            ),
            Ok(ToolResponse::Notice(text)) => Self::success(text),
            Err(DatadogError::MissingCredentials) => Self::failure(MISSING_CREDENTIALS_TEXT),
            Err(DatadogError::InvalidInput(message)) => Self::failure(message),
            Err(e) => {
                log::error!("{}: {}", log_context, e);
                Self::failure(format!("{}: {}", error_prefix, e))
            }
        }
    }

    /// MCP `tools/call` result body
    pub fn to_content(&self) -> Value {
        json!({
            "content": [{
                "type": "text",
                "text": self.text
            }],
            "isError": self.is_error
        })
    }
}

pub trait ArgumentParser {
    /// Required, non-empty string argument
    fn required_str<'a>(&self, params: &'a Value, key: &str) -> Result<&'a str> {
        params[key]
            .as_str()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| DatadogError::InvalidInput(format!("Missing '{}' parameter", key)))
    }

    /// Optional string argument; null and empty strings count as unset
    fn optional_str<'a>(&self, params: &'a Value, key: &str) -> Option<&'a str> {
        params[key].as_str().filter(|s| !s.trim().is_empty())
    }

    /// Positive hour count, falling back to `default` when absent
    fn hours(&self, params: &Value, key: &str, default: i64) -> Result<i64> {
        match &params[key] {
            Value::Null => Ok(default),
            value => match value.as_i64() {
                Some(hours) if hours > 0 => Ok(hours),
                _ => Err(DatadogError::InvalidInput(format!(
                    "'{}' must be a positive number of hours",
                    key
                ))),
            },
        }
    }

    /// Optional positive count
    fn optional_count(&self, params: &Value, key: &str) -> Result<Option<usize>> {
        match &params[key] {
            Value::Null => Ok(None),
            value => value
                .as_u64()
                .and_then(|n| usize::try_from(n).ok())
                .map(Some)
                .ok_or_else(|| {
                    DatadogError::InvalidInput(format!(
                        "'{}' must be a non-negative integer",
                        key
                    ))
                }),
        }
    }
}

pub trait ResponseFormatter {
    /// Wrap serializable records for rendering
    fn format_records<T: Serialize>(&self, records: &[T]) -> Result<ToolResponse> {
        Ok(ToolResponse::Records(serde_json::to_value(records)?))
    }
}
