use log::error;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::RwLock;

use crate::config::ClientConfig;
use crate::error::Result;

pub const SERVER_NAME: &str = "Datadog-MCP-Server";

#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    pub method: String,
    pub params: Option<Value>,
    pub id: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct InitializeRequest {
    #[serde(alias = "protocolVersion")]
    pub protocol_version: String,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

pub struct Server {
    pub config: Arc<ClientConfig>,
    pub initialized: Arc<RwLock<bool>>,
}

impl Server {
    /// Create a standardized error response
    pub fn create_error_response(code: i32, message: String, id: Option<Value>) -> JsonRpcResponse {
        JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(JsonRpcError {
                code,
                message,
                data: None,
            }),
            id,
        }
    }

    /// Create a standardized success response
    pub fn create_success_response(result: Value, id: Option<Value>) -> JsonRpcResponse {
        JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result),
            error: None,
            id,
        }
    }

    pub fn new(config: ClientConfig) -> Self {
        Self {
            config: Arc::new(config),
            initialized: Arc::new(RwLock::new(false)),
        }
    }

    /// Refuse work until the client has sent `initialized`
    pub(crate) async fn ensure_initialized(&self, id: &Option<Value>) -> Option<JsonRpcResponse> {
        let initialized = self.initialized.read().await;
        if *initialized {
            None
        } else {
            Some(Self::create_error_response(
                -32002,
                "Server not initialized".to_string(),
                id.clone(),
            ))
        }
    }

    pub async fn run(self) -> Result<()> {
        let stdin = tokio::io::stdin();
        let mut reader = BufReader::new(stdin);
        let mut stdout = tokio::io::stdout();

        let mut buffer = String::new();

        loop {
            buffer.clear();

            let line = match reader.read_line(&mut buffer).await {
                Ok(0) => break,
                Ok(_) => buffer.trim(),
                Err(e) => {
                    error!("Failed to read from stdin: {}", e);
                    break;
                }
            };

            if line.is_empty() {
                continue;
            }

            let request: JsonRpcRequest = match serde_json::from_str(line) {
                Ok(req) => req,
                Err(e) => {
                    // Only answer parse errors we can correlate
                    if let Ok(partial) = serde_json::from_str::<Value>(line)
                        && let Some(id) = partial.get("id")
                    {
                        let mut error_response = Self::create_error_response(
                            -32700,
                            "Parse error".to_string(),
                            Some(id.clone()),
                        );
                        if let Some(error) = &mut error_response.error {
                            error.data = Some(json!({"details": e.to_string()}));
                        }
                        if let Ok(response_str) = serde_json::to_string(&error_response) {
                            let _ = stdout.write_all(response_str.as_bytes()).await;
                            let _ = stdout.write_all(b"\n").await;
                            let _ = stdout.flush().await;
                        }
                    }
                    continue;
                }
            };

            match self.process_request(request).await {
                Ok(Some(response)) => {
                    let response_str = match serde_json::to_string(&response) {
                        Ok(s) => s,
                        Err(_) => continue,
                    };

                    // A failed write means the client went away
                    if stdout.write_all(response_str.as_bytes()).await.is_err()
                        || stdout.write_all(b"\n").await.is_err()
                        || stdout.flush().await.is_err()
                    {
                        break;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    error!("Request processing error: {}", e);
                    let error_response = Self::create_error_response(-32603, e.to_string(), None);

                    if let Ok(response_str) = serde_json::to_string(&error_response) {
                        let _ = stdout.write_all(response_str.as_bytes()).await;
                        let _ = stdout.write_all(b"\n").await;
                        let _ = stdout.flush().await;
                    }
                }
            }
        }

        Ok(())
    }

    pub async fn process_request(
        &self,
        request: JsonRpcRequest,
    ) -> Result<Option<JsonRpcResponse>> {
        match request.method.as_str() {
            "initialize" => self.handle_initialize(&request).await,
            "initialized" | "notifications/initialized" => self.handle_initialized(&request).await,
            "tools/list" => self.handle_tools_list(&request).await,
            "tools/call" => self.handle_tool_call(&request).await,
            "prompts/list" => self.handle_prompts_list(&request).await,
            "prompts/get" => self.handle_prompt_get(&request).await,
            "resources/list" => Ok(Some(Self::create_success_response(
                json!({"resources": []}),
                request.id,
            ))),
            "shutdown" => Ok(Some(Self::create_success_response(json!({}), request.id))),
            // Notifications don't get responses
            "exit" | "notifications/cancelled" | "notifications/progress" => Ok(None),
            _ => Ok(Some(Self::create_error_response(
                -32601,
                format!("Method not found: {}", request.method),
                request.id,
            ))),
        }
    }

    pub async fn handle_initialize(
        &self,
        request: &JsonRpcRequest,
    ) -> Result<Option<JsonRpcResponse>> {
        let params: InitializeRequest = match &request.params {
            Some(p) => match serde_json::from_value(p.clone()) {
                Ok(params) => params,
                Err(e) => {
                    return Ok(Some(Self::create_error_response(
                        -32602,
                        format!("Invalid params: {}", e),
                        request.id.clone(),
                    )));
                }
            },
            None => {
                return Ok(Some(Self::create_error_response(
                    -32602,
                    "Missing params".to_string(),
                    request.id.clone(),
                )));
            }
        };

        // Echo the client's protocol version
        let response = Self::create_success_response(
            json!({
                "protocolVersion": params.protocol_version,
                "serverInfo": {
                    "name": SERVER_NAME,
                    "version": env!("CARGO_PKG_VERSION")
                },
                "capabilities": {
                    "tools": {},
                    "prompts": {}
                }
            }),
            request.id.clone(),
        );
        Ok(Some(response))
    }

    pub async fn handle_initialized(
        &self,
        _request: &JsonRpcRequest,
    ) -> Result<Option<JsonRpcResponse>> {
        {
            let mut initialized = self.initialized.write().await;
            *initialized = true;
        }

        log::info!("Client initialized, Datadog site: {}", self.config.site());
        Ok(None)
    }
}
