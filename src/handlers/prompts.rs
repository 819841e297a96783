use serde::Serialize;
use serde_json::{Value, json};

use crate::config::ClientConfig;
use crate::error::Result;
use crate::handlers::common::{ArgumentParser, ToolOutcome};
use crate::handlers::logs::{LogRecord, LogsHandler};
use crate::handlers::monitors::{MonitorRecord, MonitorsHandler};
use crate::utils::format_timestamp;

const DEFAULT_CLUSTER: &str = "rke2";
const DEFAULT_TIMEFRAME_HOURS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptContent {
    #[serde(rename = "type")]
    pub content_type: &'static str,
    pub text: String,
}

/// One role-tagged entry of a prompt transcript
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptMessage {
    pub role: Role,
    pub content: PromptContent,
}

impl PromptMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text)
    }

    fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            content: PromptContent {
                content_type: "text",
                text: text.into(),
            },
        }
    }

    pub fn text(&self) -> &str {
        &self.content.text
    }
}

/// Group error logs by service and describe each group.
///
/// `raw` is the text produced by `get_k8s_logs`; anything that is not a JSON
/// array of log records yields a parse-error message.
pub fn summarize_error_logs(cluster: &str, timeframe: i64, raw: &str) -> Vec<PromptMessage> {
    let mut messages = vec![PromptMessage::user(format!(
        "Error Analysis for cluster '{}' (last {} hours):",
        cluster, timeframe
    ))];

    let logs: Vec<LogRecord> = match serde_json::from_str(raw) {
        Ok(logs) => logs,
        Err(_) => {
            messages.push(PromptMessage::assistant("Error parsing log data."));
            return messages;
        }
    };

    if logs.is_empty() {
        messages.push(PromptMessage::assistant(
            "No errors found in the specified timeframe.",
        ));
        return messages;
    }

    // first-seen order; logs arrive newest first
    let mut by_service: Vec<(String, Vec<LogRecord>)> = Vec::new();
    for log in logs {
        let service = log.service.clone().unwrap_or_else(|| "unknown".to_string());
        match by_service.iter_mut().find(|(name, _)| *name == service) {
            Some((_, group)) => group.push(log),
            None => by_service.push((service, vec![log])),
        }
    }

    for (service, errors) in by_service {
        let latest = errors
            .first()
            .and_then(|log| log.message.as_deref())
            .unwrap_or("No message");
        messages.push(PromptMessage::assistant(format!(
            "Service {}: Found {} errors\nMost recent error: {}",
            service,
            errors.len(),
            latest
        )));
    }

    messages
}

/// List monitor states line by line from a `get_monitor_states` outcome
pub fn summarize_monitor_states(
    name: &str,
    timeframe: i64,
    outcome: &ToolOutcome,
) -> Vec<PromptMessage> {
    let mut messages = vec![PromptMessage::user(format!(
        "Monitor Analysis for '{}' (last {} hours):",
        name, timeframe
    ))];

    if outcome.is_error {
        messages.push(PromptMessage::assistant(outcome.text.clone()));
        return messages;
    }

    let no_data = || {
        PromptMessage::assistant(format!(
            "No monitor data found for '{}' in the last {} hours.",
            name, timeframe
        ))
    };

    let monitors: Vec<MonitorRecord> = match serde_json::from_str(&outcome.text) {
        Ok(monitors) => monitors,
        // plain-text notice, nothing matched
        Err(e) if e.is_syntax() || e.is_eof() => {
            messages.push(no_data());
            return messages;
        }
        Err(_) => {
            messages.push(PromptMessage::assistant("Error parsing monitor data."));
            return messages;
        }
    };

    if monitors.is_empty() {
        messages.push(no_data());
        return messages;
    }

    for monitor in monitors {
        let state = monitor.status.as_deref().unwrap_or("Unknown");
        let triggered = monitor
            .last_triggered
            .map(format_timestamp)
            .unwrap_or_else(|| "never".to_string());
        messages.push(PromptMessage::assistant(format!(
            "Monitor {}: State: {}, Last triggered: {}",
            monitor.name, state, triggered
        )));
    }

    messages
}

pub struct PromptsHandler;

impl ArgumentParser for PromptsHandler {}

impl PromptsHandler {
    /// `analyze_error_logs` prompt
    pub async fn analyze_error_logs(config: &ClientConfig, params: &Value) -> Result<Value> {
        let handler = PromptsHandler;

        let cluster = handler
            .optional_str(params, "cluster")
            .unwrap_or(DEFAULT_CLUSTER);
        let namespace = handler.optional_str(params, "namespace");
        let timeframe = handler.hours(params, "timeframe", DEFAULT_TIMEFRAME_HOURS)?;

        let outcome = LogsHandler::k8s_errors(
            config,
            &json!({
                "cluster": cluster,
                "namespace": namespace,
                "timeframe": timeframe
            }),
        )
        .await;

        let messages = summarize_error_logs(cluster, timeframe, &outcome.text);
        Ok(Self::format_prompt(
            format!("Error log analysis for cluster '{}'", cluster),
            &messages,
        ))
    }

    /// `analyze_monitors_data` prompt
    pub async fn analyze_monitors_data(config: &ClientConfig, params: &Value) -> Result<Value> {
        let handler = PromptsHandler;

        let name = handler.required_str(params, "name")?;
        let timeframe = handler.hours(params, "timeframe", DEFAULT_TIMEFRAME_HOURS)?;

        let outcome = MonitorsHandler::states(
            config,
            &json!({
                "name": name,
                "timeframe": timeframe
            }),
        )
        .await;

        let messages = summarize_monitor_states(name, timeframe, &outcome);
        Ok(Self::format_prompt(
            format!("Monitor analysis for '{}'", name),
            &messages,
        ))
    }

    /// MCP `prompts/get` result body
    pub fn format_prompt(description: String, messages: &[PromptMessage]) -> Value {
        json!({
            "description": description,
            "messages": messages
        })
    }
}
