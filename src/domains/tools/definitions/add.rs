//! Add expense tool definition.

use rmcp::{
    handler::server::tool::{ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

use super::common::ledger_route;
use crate::domains::ledger::{LedgerStore, NewExpense};
use crate::domains::tools::response::{error_result, structured_result};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the add expense tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddExpenseParams {
    /// Expense date in YYYY-MM-DD format.
    pub date: String,

    /// Amount spent. Negative values record refunds.
    pub amount: f64,

    /// Category name, e.g. "Food & Dining".
    pub category: String,

    /// Optional subcategory.
    #[serde(default)]
    pub subcategory: String,

    /// Optional free-form note.
    #[serde(default)]
    pub note: String,
}

// ============================================================================
// Output Structure
// ============================================================================

/// Result of adding an expense.
#[derive(Debug, Serialize, JsonSchema)]
struct AddExpenseResult {
    /// Always "success".
    status: String,
    /// Id assigned to the new expense.
    id: i64,
    message: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Add expense tool - inserts one row into the ledger.
pub struct AddExpenseTool;

impl AddExpenseTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add_expense";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Add a new expense entry to the database. Dates use YYYY-MM-DD format; subcategory and note are optional.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(date = %params.date, category = %params.category))]
    pub fn execute(params: &AddExpenseParams, store: &LedgerStore) -> CallToolResult {
        info!("Add expense tool called: {} on {}", params.amount, params.date);

        let expense = match NewExpense::new(
            params.date.as_str(),
            params.amount,
            params.category.as_str(),
            params.subcategory.as_str(),
            params.note.as_str(),
        ) {
            Ok(expense) => expense,
            Err(e) => return error_result(&e.into()),
        };

        match store.create(&expense) {
            Ok(id) => {
                info!("Added expense {}", id);
                structured_result(&AddExpenseResult {
                    status: "success".to_string(),
                    id,
                    message: "Expense added successfully".to_string(),
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
            input_schema: cached_schema_for_type::<AddExpenseParams>(),
            annotations: None,
            output_schema: Some(cached_schema_for_type::<AddExpenseResult>()),
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

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::ledger::DateRange;
    use crate::domains::tools::definitions::dispatch;
    use rmcp::model::JsonObject;
    use std::time::Duration;
    use tempfile::TempDir;

    fn test_store(dir: &TempDir) -> LedgerStore {
        LedgerStore::open(dir.path().join("expenses.db"), Duration::from_secs(5)).unwrap()
    }

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_add_expense() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let params = AddExpenseParams {
            date: "2024-01-05".to_string(),
            amount: 12.5,
            category: "Food & Dining".to_string(),
            subcategory: "Lunch".to_string(),
            note: String::new(),
        };
        let result = AddExpenseTool::execute(&params, &store);
        assert_eq!(result.is_error, Some(false));

        let structured = result.structured_content.unwrap();
        assert_eq!(structured["status"], "success");
        let id = structured["id"].as_i64().unwrap();

        let stored = store.get(id).unwrap().unwrap();
        assert_eq!(stored.subcategory, "Lunch");
        assert_eq!(stored.note, "");
    }

    #[test]
    fn test_optional_fields_default_to_empty() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let result = dispatch(
            args(serde_json::json!({
                "date": "2024-01-10",
                "amount": 40.0,
                "category": "Transportation"
            })),
            &store,
            AddExpenseTool::execute,
        );
        assert_eq!(result.is_error, Some(false));

        let listed = store
            .list(&DateRange::new("2024-01-10", "2024-01-10").unwrap())
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].subcategory, "");
        assert_eq!(listed[0].note, "");
    }

    #[test]
    fn test_missing_amount_is_validation_error() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let result = dispatch(
            args(serde_json::json!({ "date": "2024-01-10", "category": "Other" })),
            &store,
            AddExpenseTool::execute,
        );
        assert_eq!(result.is_error, Some(true));
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["status"], "error");
        assert_eq!(structured["kind"], "validation_error");
    }

    #[test]
    fn test_malformed_date_does_not_touch_storage() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let params = AddExpenseParams {
            date: "5 Jan 2024".to_string(),
            amount: 1.0,
            category: "Other".to_string(),
            subcategory: String::new(),
            note: String::new(),
        };
        let result = AddExpenseTool::execute(&params, &store);
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result.structured_content.unwrap()["kind"], "validation_error");

        let everything = DateRange::new("0000-01-01", "9999-12-31").unwrap();
        assert!(store.list(&everything).unwrap().is_empty());
    }

    #[test]
    fn test_tool_metadata() {
        let tool = AddExpenseTool::to_tool();
        assert_eq!(tool.name, "add_expense");
        assert!(tool.output_schema.is_some());
        let properties = tool.input_schema["properties"].as_object().unwrap();
        assert!(properties.contains_key("date"));
        assert!(properties.contains_key("note"));
    }
}
