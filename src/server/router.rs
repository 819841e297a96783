use super::protocol::{JsonRpcRequest, JsonRpcResponse, Server};
use super::schema::{
    ANALYZE_ERROR_LOGS_PROMPT, ANALYZE_MONITORS_PROMPT, K8S_LOGS_TOOL, MONITOR_STATES_TOOL,
};
use crate::error::Result;
use crate::handlers;
use serde_json::Value;

impl Server {
    /// Pull `name` and `arguments` out of a `tools/call` or `prompts/get` request
    fn named_call<'a>(
        request: &'a JsonRpcRequest,
        kind: &str,
    ) -> std::result::Result<(&'a str, &'a Value), JsonRpcResponse> {
        let params = request.params.as_ref().ok_or_else(|| {
            Self::create_error_response(-32602, "Missing params".to_string(), request.id.clone())
        })?;

        let name = params["name"].as_str().ok_or_else(|| {
            Self::create_error_response(
                -32602,
                format!("Missing {} name", kind),
                request.id.clone(),
            )
        })?;

        Ok((name, &params["arguments"]))
    }

    pub async fn handle_tool_call(
        &self,
        request: &JsonRpcRequest,
    ) -> Result<Option<JsonRpcResponse>> {
        if let Some(error_response) = self.ensure_initialized(&request.id).await {
            return Ok(Some(error_response));
        }

        let (tool_name, arguments) = match Self::named_call(request, "tool") {
            Ok(call) => call,
            Err(error_response) => return Ok(Some(error_response)),
        };

        let outcome = match tool_name {
            MONITOR_STATES_TOOL => {
                handlers::monitors::MonitorsHandler::states(&self.config, arguments).await
            }
            K8S_LOGS_TOOL => handlers::logs::LogsHandler::k8s_errors(&self.config, arguments).await,
            _ => {
                let error_response = Self::create_error_response(
                    -32602,
                    format!("Unknown tool: {}", tool_name),
                    request.id.clone(),
                );
                return Ok(Some(error_response));
            }
        };

        let response = Self::create_success_response(outcome.to_content(), request.id.clone());
        Ok(Some(response))
    }

    pub async fn handle_prompt_get(
        &self,
        request: &JsonRpcRequest,
    ) -> Result<Option<JsonRpcResponse>> {
        if let Some(error_response) = self.ensure_initialized(&request.id).await {
            return Ok(Some(error_response));
        }

        let (prompt_name, arguments) = match Self::named_call(request, "prompt") {
            Ok(call) => call,
            Err(error_response) => return Ok(Some(error_response)),
        };

        let result = match prompt_name {
            ANALYZE_MONITORS_PROMPT => {
                handlers::prompts::PromptsHandler::analyze_monitors_data(&self.config, arguments)
                    .await
            }
            ANALYZE_ERROR_LOGS_PROMPT => {
                handlers::prompts::PromptsHandler::analyze_error_logs(&self.config, arguments)
                    .await
            }
            _ => {
                let error_response = Self::create_error_response(
                    -32602,
                    format!("Unknown prompt: {}", prompt_name),
                    request.id.clone(),
                );
                return Ok(Some(error_response));
            }
        };

        let response = match result {
            Ok(prompt) => Self::create_success_response(prompt, request.id.clone()),
            Err(e) => Self::create_error_response(
                -32602,
                format!("Invalid arguments: {}", e),
                request.id.clone(),
            ),
        };
        Ok(Some(response))
    }
}
