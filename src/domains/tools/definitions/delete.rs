//! Delete expense tool definition.

use rmcp::{
    handler::server::tool::{ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

use super::common::ledger_route;
use crate::domains::ledger::LedgerStore;
use crate::domains::tools::response::{error_result, structured_result};

/// Parameters for the delete expense tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteExpenseParams {
    /// Id returned by `add_expense`.
    pub expense_id: i64,
}

/// Result of a delete operation.
#[derive(Debug, Serialize, JsonSchema)]
struct DeleteExpenseResult {
    /// Always "ok".
    status: String,
    /// Rows removed: 1 if the expense existed, 0 otherwise.
    deleted: usize,
}

/// Delete expense tool - removes one expense by id.
pub struct DeleteExpenseTool;

impl DeleteExpenseTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "delete_expense";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Delete an expense entry by its id. Deleting an id that does not exist is not an error and reports deleted=0.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(expense_id = params.expense_id))]
    pub fn execute(params: &DeleteExpenseParams, store: &LedgerStore) -> CallToolResult {
        info!("Delete expense tool called");

        match store.delete(params.expense_id) {
            Ok(deleted) => {
                if deleted == 0 {
                    info!("No expense with id {}", params.expense_id);
                }
                structured_result(&DeleteExpenseResult {
                    status: "ok".to_string(),
                    deleted,
                })
            }
            Err(e) => error_result(&e.into()),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<DeleteExpenseParams>(),
            annotations: None,
            output_schema: Some(cached_schema_for_type::<DeleteExpenseResult>()),
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>(store: Arc<LedgerStore>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ledger_route(Self::to_tool(), store, Self::execute)
    }
}
