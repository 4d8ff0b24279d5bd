//! HTTP transport implementation.
//!
//! Stateless JSON-RPC over POST: every request is answered on its own, so
//! many clients can share one expense database. `GET /health` and `GET /`
//! serve liveness and discovery documents.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use rmcp::{ServerHandler, model::JsonObject};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::future::Future;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig, shutdown_signal};
use crate::core::{Error, McpServer};
use crate::domains::{resources::ResourceError, tools::ToolError};

/// MCP error code for an unknown resource URI.
const RESOURCE_NOT_FOUND: i32 = -32002;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// JSON-RPC request structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

impl JsonRpcResponse {
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
        }
    }

    pub fn method_not_found(id: Option<Value>) -> Self {
        Self::error(id, -32601, "Method not found")
    }

    pub fn invalid_request(id: Option<Value>) -> Self {
        Self::error(id, -32600, "Invalid Request")
    }

    pub fn invalid_params(id: Option<Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32602, msg)
    }

    pub fn internal_error(id: Option<Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32603, msg)
    }

    /// Map a server error onto the matching JSON-RPC error code.
    fn from_error(id: Option<Value>, err: Error) -> Self {
        match err {
            Error::Tool(ToolError::NotFound(_)) => Self::invalid_params(id, err.to_string()),
            Error::Resource(ResourceError::NotFound(_)) => {
                Self::error(id, RESOURCE_NOT_FOUND, err.to_string())
            }
            other => {
                warn!("Request failed: {}", other);
                Self::internal_error(id, other.to_string())
            }
        }
    }
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    server: McpServer,
    rpc_path: String,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Build the axum router for `server`.
    pub fn router(&self, server: McpServer) -> Router {
        let state = AppState {
            server,
            rpc_path: self.config.rpc_path.clone(),
        };

        let app = Router::new()
            .route(&self.config.rpc_path, post(handle_rpc))
            .route("/health", get(health_check))
            .route("/", get(root_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http());

        if self.config.enable_cors {
            app.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
        } else {
            app
        }
    }

    /// Serve until the listener fails or the process is signalled.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        self.run_until(server, shutdown_signal()).await
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests.
    pub async fn run_until<F>(self, server: McpServer, shutdown: F) -> TransportResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.address();
        let app = self.router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!(
            "Ready - listening on {} (JSON-RPC at POST {}, CORS {})",
            addr,
            self.config.rpc_path,
            if self.config.enable_cors { "enabled" } else { "disabled" }
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("HTTP listener on {} stopped", addr);
        Ok(())
    }
}

/// Root handler - describes the server and its endpoints.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "transport": "HTTP",
        "endpoints": {
            "rpc": state.rpc_path,
            "health": "/health"
        },
        "protocol": "JSON-RPC 2.0"
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[instrument(skip_all, fields(method = %request.method))]
async fn handle_rpc(
    State(state): State<AppState>,
    Json(request): Json<JsonRpcRequest>,
) -> impl IntoResponse {
    debug!("Received JSON-RPC request");
    (StatusCode::OK, Json(process_request(&state.server, request).await))
}

/// Answer a single JSON-RPC request.
pub async fn process_request(server: &McpServer, request: JsonRpcRequest) -> JsonRpcResponse {
    if request.jsonrpc != "2.0" {
        return JsonRpcResponse::invalid_request(request.id);
    }

    let JsonRpcRequest {
        id, method, params, ..
    } = request;

    match method.as_str() {
        "initialize" => match serde_json::to_value(server.get_info()) {
            Ok(info) => JsonRpcResponse::success(id, info),
            Err(e) => JsonRpcResponse::internal_error(id, e.to_string()),
        },

        "ping" => JsonRpcResponse::success(id, serde_json::json!({})),

        "tools/list" => {
            JsonRpcResponse::success(id, serde_json::json!({ "tools": server.list_tools() }))
        }

        "tools/call" => {
            let params = params.unwrap_or_default();
            let Some(name) = params.get("name").and_then(Value::as_str) else {
                return JsonRpcResponse::invalid_params(id, "Missing tool name");
            };
            let arguments = match params.get("arguments") {
                None | Some(Value::Null) => JsonObject::new(),
                Some(Value::Object(map)) => map.clone(),
                Some(_) => {
                    return JsonRpcResponse::invalid_params(id, "Tool arguments must be an object");
                }
            };

            info!("Calling tool {}", name);
            match server.call_tool(name, arguments).await {
                Ok(result) => JsonRpcResponse::success(id, result),
                Err(e) => JsonRpcResponse::from_error(id, e),
            }
        }

        "resources/list" => {
            let resources = server.list_resources().await;
            JsonRpcResponse::success(id, serde_json::json!({ "resources": resources }))
        }

        "resources/read" => {
            let Some(uri) = params
                .as_ref()
                .and_then(|p| p.get("uri"))
                .and_then(Value::as_str)
            else {
                return JsonRpcResponse::invalid_params(id, "Missing resource URI");
            };

            match server.read_resource(uri).await {
                Ok(result) => JsonRpcResponse::success(id, result),
                Err(e) => JsonRpcResponse::from_error(id, e),
            }
        }

        // Stateless: nothing to track, acknowledge and move on.
        m if m.starts_with("notifications/") => {
            debug!("Received notification: {}", m);
            JsonRpcResponse::success(id, Value::Null)
        }

        _ => {
            warn!("Unknown method: {}", method);
            JsonRpcResponse::method_not_found(id)
        }
    }
}
