// Common test utilities shared by the integration suites
#![allow(dead_code)]

pub mod builders;
pub mod fixtures;
pub mod mocks;

use datadog_k8s_mcp::ClientConfig;
use datadog_k8s_mcp::server::Server;
use datadog_k8s_mcp::server::protocol::JsonRpcRequest;
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Initialized server whose client talks to `base_url`
pub fn server_for(base_url: &str) -> Server {
    let config = ClientConfig::new(
        Some("test_api_key".to_string()),
        Some("test_app_key".to_string()),
        None,
    )
    .with_base_url(base_url);

    Server {
        config: Arc::new(config),
        initialized: Arc::new(RwLock::new(true)),
    }
}

pub fn tool_call(name: &str, arguments: Value) -> JsonRpcRequest {
    JsonRpcRequest {
        method: "tools/call".to_string(),
        params: Some(json!({"name": name, "arguments": arguments})),
        id: Some(json!(1)),
    }
}

pub fn prompt_get(name: &str, arguments: Value) -> JsonRpcRequest {
    JsonRpcRequest {
        method: "prompts/get".to_string(),
        params: Some(json!({"name": name, "arguments": arguments})),
        id: Some(json!(1)),
    }
}

/// Run a request and return `(text, is_error)` of the tool result
pub async fn call_tool(server: &Server, request: JsonRpcRequest) -> (String, bool) {
    let response = server
        .process_request(request)
        .await
        .expect("request processing failed")
        .expect("tools/call must answer");
    let result = response.result.expect("tool calls answer with a result");

    (
        result["content"][0]["text"]
            .as_str()
            .expect("text content")
            .to_string(),
        result["isError"].as_bool().unwrap_or(false),
    )
}

/// Run a `prompts/get` request and return the message texts with their roles
pub async fn get_prompt(server: &Server, request: JsonRpcRequest) -> Vec<(String, String)> {
    let response = server
        .process_request(request)
        .await
        .expect("request processing failed")
        .expect("prompts/get must answer");
    let result = response.result.expect("prompt answered with a result");

    result["messages"]
        .as_array()
        .expect("messages array")
        .iter()
        .map(|m| {
            (
                m["role"].as_str().unwrap_or_default().to_string(),
                m["content"]["text"].as_str().unwrap_or_default().to_string(),
            )
        })
        .collect()
}
