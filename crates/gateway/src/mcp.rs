//! The `/mcp` endpoint.
//!
//! Accepts `{"method": "tools/list"}` and
//! `{"method": "tools/call", "params": {"name", "arguments"}}`.
//!
//! Status mapping:
//! - body that does not parse as a request: 500 `{error}`
//! - `tools/call` params that are not `{name, arguments}`: 500 `{error}`
//! - tool protocol error (missing arguments, unknown tool): 500 `{error}`
//! - missing or unknown `method`: 400 `{error: "Unknown method"}`
//! - everything else, including unknown plants and bad zones: 200

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use veggietools_core::{ToolCall, ToolDefinition};

use crate::SharedState;

pub const TOOLS_LIST: &str = "tools/list";
pub const TOOLS_CALL: &str = "tools/call";

/// `method` and `params` stay untyped until the method is known, so a
/// `tools/list` with stray params still succeeds and a non-string method is
/// just an unknown method.
#[derive(Debug, Deserialize)]
struct McpRequest {
    #[serde(default)]
    method: Option<Value>,

    #[serde(default)]
    params: Option<Value>,
}

#[derive(Serialize)]
struct ToolsListResponse {
    tools: Vec<ToolDefinition>,
}

#[derive(Serialize)]
pub(crate) struct ErrorResponse {
    error: String,
}

pub(crate) fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

pub(crate) async fn mcp_handler(State(state): State<SharedState>, body: Bytes) -> Response {
    let request: McpRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Malformed MCP request body");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
        }
    };

    match request.method.as_ref().and_then(Value::as_str) {
        Some(TOOLS_LIST) => Json(ToolsListResponse {
            tools: veggietools_tools::catalog(),
        })
        .into_response(),

        Some(TOOLS_CALL) => {
            let call: ToolCall = match request.params {
                Some(params) => match serde_json::from_value(params) {
                    Ok(call) => call,
                    Err(e) => {
                        warn!(error = %e, "Malformed tools/call params");
                        return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
                    }
                },
                None => ToolCall::default(),
            };
            debug!(tool = %call.name, "tools/call");
            match state.dispatcher.call(&call) {
                Ok(result) => Json(result).into_response(),
                Err(e) => {
                    warn!(tool = %call.name, error = %e, "Tool call rejected");
                    error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
                }
            }
        }

        other => {
            warn!(method = ?other, "Unknown MCP method");
            error_response(StatusCode::BAD_REQUEST, "Unknown method")
        }
    }
}
