//! Tool Registry - metadata and by-name dispatch for all tools.
//!
//! The stdio transport goes through the rmcp router; the HTTP transport
//! and tests dispatch here by tool name.

use std::sync::Arc;
use tracing::warn;

use rmcp::model::{CallToolResult, JsonObject, Tool};

use crate::domains::ledger::LedgerStore;

use super::definitions::{
    AddExpenseParams, AddExpenseTool, DeleteExpenseParams, DeleteExpenseTool, ListExpensesParams,
    ListExpensesTool, SummarizeExpensesParams, SummarizeExpensesTool, UpdateExpenseParams,
    UpdateExpenseTool, dispatch,
};
use super::error::ToolError;

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    store: Arc<LedgerStore>,
}

impl ToolRegistry {
    /// Create a new tool registry backed by `store`.
    pub fn new(store: Arc<LedgerStore>) -> Self {
        Self { store }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            AddExpenseTool::NAME,
            ListExpensesTool::NAME,
            SummarizeExpensesTool::NAME,
            DeleteExpenseTool::NAME,
            UpdateExpenseTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            AddExpenseTool::to_tool(),
            ListExpensesTool::to_tool(),
            SummarizeExpensesTool::to_tool(),
            DeleteExpenseTool::to_tool(),
            UpdateExpenseTool::to_tool(),
        ]
    }

    /// Dispatch a tool call by name.
    ///
    /// Blocking: runs the SQLite statement on the calling thread. Only an
    /// unknown tool name is an `Err`; every other failure is reported inside
    /// the returned `CallToolResult`.
    pub fn call_tool(&self, name: &str, arguments: JsonObject) -> Result<CallToolResult, ToolError> {
        let store = self.store.as_ref();
        let result = match name {
            AddExpenseTool::NAME => {
                dispatch::<AddExpenseParams, _>(arguments, store, AddExpenseTool::execute)
            }
            ListExpensesTool::NAME => {
                dispatch::<ListExpensesParams, _>(arguments, store, ListExpensesTool::execute)
            }
            SummarizeExpensesTool::NAME => dispatch::<SummarizeExpensesParams, _>(
                arguments,
                store,
                SummarizeExpensesTool::execute,
            ),
            DeleteExpenseTool::NAME => {
                dispatch::<DeleteExpenseParams, _>(arguments, store, DeleteExpenseTool::execute)
            }
            UpdateExpenseTool::NAME => {
                dispatch::<UpdateExpenseParams, _>(arguments, store, UpdateExpenseTool::execute)
            }
            _ => {
                warn!(
                    "Unknown tool requested: {} (available: {})",
                    name,
                    self.tool_names().join(", ")
                );
                return Err(ToolError::not_found(name));
            }
        };
        Ok(result)
    }
}
