// Test data builders for constructing mock API payloads

use serde_json::{Value, json};

/// Builder for `POST /api/v2/logs/events/search` responses
pub struct LogsResponseBuilder {
    logs: Vec<Value>,
    next_cursor: Option<String>,
}

impl LogsResponseBuilder {
    pub fn new() -> Self {
        Self {
            logs: Vec::new(),
            next_cursor: None,
        }
    }

    pub fn with_log(mut self, service: &str, message: &str, tags: &[&str]) -> Self {
        let n = self.logs.len();
        self.logs.push(json!({
            "id": format!("log-{}", n),
            "type": "log",
            "attributes": {
                "timestamp": format!("2024-05-01T12:00:{:02}Z", 59 - (n % 60)),
                "host": "node-1",
                "service": service,
                "status": "error",
                "message": message,
                "tags": tags,
            }
        }));
        self
    }

    /// Append `count` identical entries for `service`
    pub fn with_logs(mut self, service: &str, count: usize) -> Self {
        for i in 0..count {
            self = self.with_log(service, &format!("failure {}", i), &[]);
        }
        self
    }

    pub fn with_cursor(mut self, cursor: &str) -> Self {
        self.next_cursor = Some(cursor.to_string());
        self
    }

    pub fn build(self) -> Value {
        let mut result = json!({
            "data": self.logs,
        });

        if let Some(cursor) = self.next_cursor {
            result["meta"] = json!({"page": {"after": cursor}});
        }

        result
    }
}

impl Default for LogsResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `GET /api/v1/monitor` responses
pub struct MonitorsResponseBuilder {
    monitors: Vec<Value>,
}

impl MonitorsResponseBuilder {
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    pub fn with_monitor(mut self, name: &str, state: &str) -> Self {
        let id = 1000 + self.monitors.len() as i64;
        self.monitors.push(json!({
            "id": id,
            "name": name,
            "type": "metric alert",
            "query": format!("avg(last_5m):avg:{}{{*}} > 1", name.to_lowercase()),
            "overall_state": state,
        }));
        self
    }

    pub fn build(self) -> Value {
        Value::Array(self.monitors)
    }
}

impl Default for MonitorsResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logs_response_builder() {
        let response = LogsResponseBuilder::new()
            .with_log("api", "boom", &["pod_name:api-1"])
            .with_cursor("next_page_cursor")
            .build();

        assert_eq!(response["data"].as_array().unwrap().len(), 1);
        assert_eq!(response["data"][0]["attributes"]["tags"][0], "pod_name:api-1");
        assert_eq!(response["meta"]["page"]["after"], "next_page_cursor");
    }

    #[test]
    fn test_monitors_response_builder() {
        let response = MonitorsResponseBuilder::new()
            .with_monitor("CPU-Alert", "Alert")
            .with_monitor("Disk", "OK")
            .build();

        assert_eq!(response.as_array().unwrap().len(), 2);
        assert_eq!(response[1]["id"], 1001);
    }
}
