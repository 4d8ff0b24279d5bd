//! Update expense tool definition.

use rmcp::{
    handler::server::tool::{ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::common::ledger_route;
use crate::domains::ledger::{LedgerStore, NewExpense};
use crate::domains::tools::response::{error_result, structured_result};

/// Parameters for the update expense tool.
///
/// Every field is replaced; omitted optional fields reset to empty.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateExpenseParams {
    /// Id of the expense to replace.
    pub expense_id: i64,

    /// Expense date in YYYY-MM-DD format.
    pub date: String,

    /// Amount spent. Negative values record refunds.
    pub amount: f64,

    /// Category name.
    pub category: String,

    /// Optional subcategory.
    #[serde(default)]
    pub subcategory: String,

    /// Optional free-form note.
    #[serde(default)]
    pub note: String,
}

/// Result of an update operation.
#[derive(Debug, Serialize, JsonSchema)]
struct UpdateExpenseResult {
    /// Always "ok".
    status: String,
    /// Rows updated: 1 if the expense existed, 0 otherwise.
    updated: usize,
}

/// Update expense tool - full-row replace of an existing expense.
pub struct UpdateExpenseTool;

impl UpdateExpenseTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "update_expense";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Update an existing expense entry by its id. All fields are replaced, so resupply every value. Reports updated=0 when the id does not exist.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(expense_id = params.expense_id))]
    pub fn execute(params: &UpdateExpenseParams, store: &LedgerStore) -> CallToolResult {
        info!("Update expense tool called");

        let updated = NewExpense::new(
            params.date.as_str(),
            params.amount,
            params.category.as_str(),
            params.subcategory.as_str(),
            params.note.as_str(),
        )
        .and_then(|expense| {
            if let Ok(Some(prior)) = store.get(params.expense_id) {
                debug!(?prior, "Replacing expense");
            }
            store.update(params.expense_id, &expense)
        });

        match updated {
            Ok(updated) => {
                if updated == 0 {
                    info!("No expense with id {}", params.expense_id);
                }
                structured_result(&UpdateExpenseResult {
                    status: "ok".to_string(),
                    updated,
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
            input_schema: cached_schema_for_type::<UpdateExpenseParams>(),
            annotations: None,
            output_schema: Some(cached_schema_for_type::<UpdateExpenseResult>()),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::ledger::DateRange;
    use std::time::Duration;
    use tempfile::TempDir;

    fn test_store(dir: &TempDir) -> LedgerStore {
        LedgerStore::open(dir.path().join("expenses.db"), Duration::from_secs(5)).unwrap()
    }

    fn params(expense_id: i64, date: &str) -> UpdateExpenseParams {
        UpdateExpenseParams {
            expense_id,
            date: date.to_string(),
            amount: 55.0,
            category: "Healthcare".to_string(),
            subcategory: "Pharmacy".to_string(),
            note: "prescription".to_string(),
        }
    }

    #[test]
    fn test_update_then_list_reflects_new_values() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        let id = store
            .create(&NewExpense::new("2024-01-05", 12.5, "Food & Dining", "", "").unwrap())
            .unwrap();

        let result = UpdateExpenseTool::execute(&params(id, "2024-01-07"), &store);
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["status"], "ok");
        assert_eq!(structured["updated"], 1);

        let listed = store
            .list(&DateRange::new("2024-01-01", "2024-01-31").unwrap())
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, id);
        assert_eq!(listed[0].date, "2024-01-07");
        assert_eq!(listed[0].amount, 55.0);
        assert_eq!(listed[0].category, "Healthcare");
        assert_eq!(listed[0].subcategory, "Pharmacy");
        assert_eq!(listed[0].note, "prescription");
    }

    #[test]
    fn test_update_missing_id_reports_zero() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let result = UpdateExpenseTool::execute(&params(999, "2024-01-07"), &store);
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.structured_content.unwrap()["updated"], 0);
    }

    #[test]
    fn test_update_rejects_malformed_date() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        let id = store
            .create(&NewExpense::new("2024-01-05", 12.5, "Food & Dining", "", "").unwrap())
            .unwrap();

        let result = UpdateExpenseTool::execute(&params(id, "07/01/2024"), &store);
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result.structured_content.unwrap()["kind"], "validation_error");
        assert_eq!(store.get(id).unwrap().unwrap().date, "2024-01-05");
    }
}
