//! Plumbing shared by every ledger tool.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, JsonObject, Tool},
};
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::domains::ledger::LedgerStore;
use crate::domains::tools::response::{error_result, parse_arguments};

/// Decode `arguments` and run `execute`, turning decode failures into a
/// `validation_error` result. Blocking: call from a blocking context.
pub fn dispatch<P, F>(arguments: JsonObject, store: &LedgerStore, execute: F) -> CallToolResult
where
    P: DeserializeOwned,
    F: FnOnce(&P, &LedgerStore) -> CallToolResult,
{
    match parse_arguments::<P>(arguments) {
        Ok(params) => execute(&params, store),
        Err(e) => error_result(&e),
    }
}

/// Build an rmcp route that runs a ledger tool on the blocking pool.
pub(crate) fn ledger_route<S, P, F>(tool: Tool, store: Arc<LedgerStore>, execute: F) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
    P: DeserializeOwned + 'static,
    F: Fn(&P, &LedgerStore) -> CallToolResult + Copy + Send + Sync + 'static,
{
    ToolRoute::new_dyn(tool, move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let store = store.clone();
        async move {
            tokio::task::spawn_blocking(move || dispatch::<P, F>(args, &store, execute))
                .await
                .map_err(|e| McpError::internal_error(format!("Tool task failed: {}", e), None))
        }
        .boxed()
    })
}
