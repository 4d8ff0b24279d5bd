//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to domain-specific services.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! The ToolRouter is built in `domains/tools/router.rs`; the HTTP transport
//! dispatches through `ToolRegistry` instead.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::config::Config;
use crate::domains::{
    ledger::LedgerStore,
    resources::{ResourceError, ResourceService},
    tools::{ToolError, ToolRegistry, build_tool_router},
};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between different domain services to handle MCP protocol messages.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Expense store shared by every tool.
    store: Arc<LedgerStore>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Open the expense database named by `config` and build the server.
    ///
    /// Fails if the database cannot be created or is not writable.
    pub fn open(config: Config) -> crate::Result<Self> {
        let store = LedgerStore::open(config.ledger.db_path.clone(), config.ledger.busy_timeout())?;
        Ok(Self::new(config, store))
    }

    /// Create a new MCP server around an already-open store.
    pub fn new(config: Config, store: LedgerStore) -> Self {
        let config = Arc::new(config);
        let store = Arc::new(store);

        let resource_service = Arc::new(ResourceService::new(config.resources.clone()));

        Self {
            tool_router: build_tool_router::<Self>(store.clone()),
            config,
            store,
            resource_service,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Checkpoint the database before the process exits.
    pub fn shutdown(&self) -> crate::Result<()> {
        info!("Closing expense database");
        self.store.close()?;
        Ok(())
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    ///
    /// Metadata comes from the same registry that dispatches HTTP calls.
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        ToolRegistry::get_all_tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema,
                    "outputSchema": t.output_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    ///
    /// Only an unknown tool is an `Err`; validation and storage failures
    /// come back as a result with `isError` set.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: JsonObject,
    ) -> crate::Result<serde_json::Value> {
        let registry = ToolRegistry::new(self.store.clone());
        let name = name.to_string();

        let result = tokio::task::spawn_blocking(move || registry.call_tool(&name, arguments))
            .await
            .map_err(|e| ToolError::internal(e.to_string()))??;

        serde_json::to_value(result).map_err(|e| ToolError::internal(e.to_string()).into())
    }

    /// List all available resources (for HTTP transport).
    pub async fn list_resources(&self) -> Vec<serde_json::Value> {
        let resources = self.resource_service.list_resources().await;

        resources
            .into_iter()
            .map(|r| {
                serde_json::json!({
                    "uri": r.uri,
                    "name": r.name,
                    "description": r.description,
                    "mimeType": r.mime_type
                })
            })
            .collect()
    }

    /// Read a resource by URI (for HTTP transport).
    pub async fn read_resource(&self, uri: &str) -> crate::Result<serde_json::Value> {
        let result = self.resource_service.read_resource(uri).await?;
        Ok(serde_json::json!({
            "contents": result.contents
        }))
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Personal expense tracker. Record expenses with add_expense, browse them with \
                 list_expenses, total them per category with summarize_expenses_by_category, and \
                 correct or remove entries with update_expense and delete_expense. Dates are \
                 YYYY-MM-DD. Suggested categories are served at expense:///categories."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| match e {
                ResourceError::NotFound(_) => McpError::resource_not_found(e.to_string(), None),
                other => {
                    warn!("Failed to read {}: {}", request.uri, other);
                    McpError::internal_error(other.to_string(), None)
                }
            })
    }
}
