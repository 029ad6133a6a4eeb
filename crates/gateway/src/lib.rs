//! HTTP gateway for VeggieTools.
//!
//! Routes:
//! - `/health`: liveness payload
//! - `POST /mcp`: tool discovery and tool calls (see [`mcp`])
//! - `/api`: static service description
//! - anything else: plain-text 404
//!
//! Built on Axum. The knowledge store is read-only, so state is a plain
//! `Arc` with no locks.

pub mod mcp;

use std::sync::Arc;

use axum::{
    Router,
    extract::{DefaultBodyLimit, State},
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Json},
    routing::{any, post},
};
use serde::Serialize;
use serde_json::json;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};

use veggietools_config::AppConfig;
use veggietools_core::ToolName;
use veggietools_knowledge::KnowledgeStore;
use veggietools_tools::Dispatcher;

/// Shared application state for the gateway.
pub struct GatewayState {
    pub config: AppConfig,
    pub dispatcher: Dispatcher,
}

impl GatewayState {
    pub fn new(config: AppConfig, store: Arc<KnowledgeStore>) -> Self {
        Self {
            config,
            dispatcher: Dispatcher::new(store),
        }
    }
}

pub type SharedState = Arc<GatewayState>;

/// Build the Axum router with all gateway routes.
///
/// Layers applied:
/// - CORS (configured origins, or any origin when none are configured)
/// - Request body size limit
/// - HTTP trace logging
pub fn build_router(state: SharedState) -> Router {
    let cors = cors_layer(&state.config.gateway.allowed_origins);
    let body_limit = state.config.gateway.max_body_bytes;

    Router::new()
        .route("/health", any(health_handler))
        .route("/mcp", post(mcp::mcp_handler).fallback(not_found_handler))
        .route("/api", any(api_handler))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(std::time::Duration::from_secs(3600))
}

/// Start the gateway HTTP server and run until Ctrl-C.
pub async fn start(
    config: AppConfig,
    store: Arc<KnowledgeStore>,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.gateway.bind_addr();
    let plants = store.len();

    let state = Arc::new(GatewayState::new(config, store));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, plants, "Gateway listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

// --- Handlers ---

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    service: String,
    timestamp: String,
}

async fn health_handler(State(state): State<SharedState>) -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, "no-cache")],
        Json(HealthResponse {
            status: "healthy",
            service: state.config.service.name.clone(),
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        }),
    )
}

async fn api_handler(State(state): State<SharedState>) -> Json<serde_json::Value> {
    let tools: Vec<&str> = ToolName::ALL.iter().map(ToolName::as_str).collect();
    Json(json!({
        "name": "Veggie Tools MCP Server",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "A Model Context Protocol server for vegetable gardening assistance",
        "endpoints": {
            "health": "/health",
            "mcp": "/mcp (POST)",
            "api": "/api",
        },
        "tools": tools,
        "documentation": state.config.service.documentation,
    }))
}

async fn not_found_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_state() -> SharedState {
        Arc::new(GatewayState::new(
            AppConfig::default(),
            Arc::new(KnowledgeStore::builtin()),
        ))
    }

    fn app() -> Router {
        build_router(test_state())
    }

    async fn body_text(response: axum::response::Response) -> String {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8_lossy(&body).into_owned()
    }

    async fn post_mcp(body: &str) -> (StatusCode, Value) {
        let req = Request::builder()
            .method("POST")
            .uri("/mcp")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app().oneshot(req).await.unwrap();
        let status = response.status();
        let json = serde_json::from_str(&body_text(response).await).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn health_endpoint() {
        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "no-cache"
        );

        let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "veggie-tools-mcp");
        let ts = json["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
    }

    #[tokio::test]
    async fn health_does_not_depend_on_store_contents() {
        let empty = Arc::new(KnowledgeStore::from_parts(vec![], vec![]));
        let app = build_router(Arc::new(GatewayState::new(AppConfig::default(), empty)));
        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        assert_eq!(app.oneshot(req).await.unwrap().status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn tools_list() {
        let (status, json) = post_mcp(r#"{"method":"tools/list"}"#).await;
        assert_eq!(status, StatusCode::OK);
        let tools = json["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 7);
        assert_eq!(tools[0]["name"], "get_plant_info");
        assert!(tools[0]["inputSchema"].is_object());
    }

    #[tokio::test]
    async fn tools_call_returns_content_envelope() {
        let (status, json) = post_mcp(
            r#"{"method":"tools/call","params":{"name":"get_plant_info","arguments":{"plant":"black_krim_tomato"}}}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["content"][0]["type"], "text");
        let text = json["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("Days to Harvest:** 75-85 days"));
        assert_eq!(json["structuredContent"]["plant"]["name"], "Black Krim Tomato");
    }

    #[tokio::test]
    async fn unknown_plant_is_200() {
        let (status, json) = post_mcp(
            r#"{"method":"tools/call","params":{"name":"watering_guide","arguments":{"plant":"dragonfruit"}}}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["content"][0]["text"].as_str().unwrap().contains("not found"));
    }

    #[tokio::test]
    async fn bad_zone_is_200() {
        let (status, json) = post_mcp(
            r#"{"method":"tools/call","params":{"name":"planting_calendar","arguments":{"zone":11}}}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["content"][0]["text"]
            .as_str()
            .unwrap()
            .starts_with("Invalid zone."));
    }

    #[tokio::test]
    async fn missing_arguments_is_protocol_error() {
        let (status, json) =
            post_mcp(r#"{"method":"tools/call","params":{"name":"get_plant_info"}}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json["error"].as_str().unwrap().contains("Missing arguments"));
    }

    #[tokio::test]
    async fn unknown_tool_is_protocol_error() {
        let (status, json) = post_mcp(
            r#"{"method":"tools/call","params":{"name":"till_soil","arguments":{}}}"#,
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Unknown tool: till_soil");
    }

    #[tokio::test]
    async fn malformed_body_is_500() {
        let (status, json) = post_mcp("{not json").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn unknown_method_is_400() {
        let (status, json) = post_mcp(r#"{"method":"resources/list"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Unknown method");

        let (status, _) = post_mcp("{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn non_string_method_is_unknown_method() {
        let (status, json) = post_mcp(r#"{"method":5}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Unknown method");

        let (status, _) = post_mcp("[]").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn tools_list_ignores_params() {
        let (status, json) = post_mcp(r#"{"method":"tools/list","params":"x"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["tools"].as_array().unwrap().len(), 7);
    }

    #[tokio::test]
    async fn malformed_call_params_is_500() {
        let (status, json) = post_mcp(r#"{"method":"tools/call","params":"x"}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn api_describes_service() {
        let req = Request::builder().uri("/api").body(Body::empty()).unwrap();
        let response = app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["name"], "Veggie Tools MCP Server");
        assert_eq!(json["endpoints"]["mcp"], "/mcp (POST)");
        assert_eq!(json["tools"].as_array().unwrap().len(), 7);
    }

    #[tokio::test]
    async fn other_paths_are_plain_404() {
        for (method, uri) in [("GET", "/"), ("GET", "/mcp"), ("POST", "/tools")] {
            let req = Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap();
            let response = app().oneshot(req).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method} {uri}");
            assert_eq!(body_text(response).await, "Not Found");
        }
    }

    #[tokio::test]
    async fn oversized_body_rejected() {
        let mut config = AppConfig::default();
        config.gateway.max_body_bytes = 16;
        let state = Arc::new(GatewayState::new(
            config,
            Arc::new(KnowledgeStore::builtin()),
        ));
        let req = Request::builder()
            .method("POST")
            .uri("/mcp")
            .body(Body::from(r#"{"method":"tools/list","padding":"xxxxxxxxxxxxxxxx"}"#))
            .unwrap();
        let response = build_router(state).oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
