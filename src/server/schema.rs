use super::protocol::{JsonRpcRequest, JsonRpcResponse, Server};
use crate::error::Result;
use serde_json::{Value, json};

pub const MONITOR_STATES_TOOL: &str = "get_monitor_states";
pub const K8S_LOGS_TOOL: &str = "get_k8s_logs";
pub const ANALYZE_MONITORS_PROMPT: &str = "analyze_monitors_data";
pub const ANALYZE_ERROR_LOGS_PROMPT: &str = "analyze_error_logs";

pub fn tool_definitions() -> Value {
    json!([
        {
            "name": MONITOR_STATES_TOOL,
            "description": "Get monitor states for monitors whose name contains the given text (case-insensitive). Returns id, name, query, status, last trigger time, message, type and created/modified timestamps.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Monitor name, or part of it"
                    },
                    "timeframe": {
                        "type": "integer",
                        "description": "Hours to look back",
                        "default": 1
                    }
                },
                "required": ["name"]
            }
        },
        {
            "name": K8S_LOGS_TOOL,
            "description": "Search error logs of a Kubernetes cluster, newest first. Matches status, level or severity 'error'. Returns timestamp, host, service, pod, namespace, container, message and status per entry.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "cluster": {
                        "type": "string",
                        "description": "Value of the kube_cluster_name tag"
                    },
                    "namespace": {
                        "type": ["string", "null"],
                        "description": "Restrict to this kube_namespace"
                    },
                    "timeframe": {
                        "type": "integer",
                        "description": "Hours to look back",
                        "default": 5
                    },
                    "max_results": {
                        "type": "integer",
                        "description": "Fetch several pages until this many entries are collected. Without it a single page of 100 entries is returned."
                    }
                },
                "required": ["cluster"]
            }
        }
    ])
}

pub fn prompt_definitions() -> Value {
    json!([
        {
            "name": ANALYZE_MONITORS_PROMPT,
            "description": "Analyze monitor data for a specific monitor",
            "arguments": [
                {"name": "name", "description": "The name of the monitor to analyze", "required": true},
                {"name": "timeframe", "description": "Hours to look back for data (default: 3)", "required": false}
            ]
        },
        {
            "name": ANALYZE_ERROR_LOGS_PROMPT,
            "description": "Analyze error logs from a Kubernetes cluster, grouped by service",
            "arguments": [
                {"name": "cluster", "description": "The cluster name to analyze (default: rke2)", "required": false},
                {"name": "timeframe", "description": "Hours to look back for errors (default: 3)", "required": false},
                {"name": "namespace", "description": "Optional namespace filter", "required": false}
            ]
        }
    ])
}

impl Server {
    pub async fn handle_tools_list(
        &self,
        request: &JsonRpcRequest,
    ) -> Result<Option<JsonRpcResponse>> {
        if let Some(error_response) = self.ensure_initialized(&request.id).await {
            return Ok(Some(error_response));
        }

        let response =
            Self::create_success_response(json!({"tools": tool_definitions()}), request.id.clone());
        Ok(Some(response))
    }

    pub async fn handle_prompts_list(
        &self,
        request: &JsonRpcRequest,
    ) -> Result<Option<JsonRpcResponse>> {
        if let Some(error_response) = self.ensure_initialized(&request.id).await {
            return Ok(Some(error_response));
        }

        let response = Self::create_success_response(
            json!({"prompts": prompt_definitions()}),
            request.id.clone(),
        );
        Ok(Some(response))
    }
}
