//! List expenses tool definition.

use rmcp::{
    handler::server::tool::{ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

use super::common::ledger_route;
use crate::domains::ledger::{DateRange, Expense, LedgerStore};
use crate::domains::tools::response::{error_result, sequence_result};

/// Parameters for the list expenses tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListExpensesParams {
    /// First date to include (YYYY-MM-DD).
    pub start_date: String,

    /// Last date to include (YYYY-MM-DD).
    pub end_date: String,
}

/// Expenses within the requested range, newest first.
#[derive(Debug, Serialize, JsonSchema)]
struct ListExpensesResult {
    expenses: Vec<Expense>,
}

/// List expenses tool - returns every expense in an inclusive date range.
pub struct ListExpensesTool;

impl ListExpensesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_expenses";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List all expense entries within an inclusive date range (YYYY-MM-DD). Results are ordered newest first.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(start = %params.start_date, end = %params.end_date))]
    pub fn execute(params: &ListExpensesParams, store: &LedgerStore) -> CallToolResult {
        info!("List expenses tool called");

        let expenses = DateRange::new(params.start_date.as_str(), params.end_date.as_str())
            .and_then(|range| store.list(&range));

        match expenses {
            Ok(expenses) => {
                info!("Found {} expense(s)", expenses.len());
                let payload = ListExpensesResult { expenses };
                sequence_result(&payload.expenses, &payload)
            }
            Err(e) => error_result(&e.into()),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListExpensesParams>(),
            annotations: None,
            output_schema: Some(cached_schema_for_type::<ListExpensesResult>()),
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
    use crate::domains::ledger::NewExpense;
    use rmcp::model::RawContent;
    use std::time::Duration;
    use tempfile::TempDir;

    fn seeded_store(dir: &TempDir) -> LedgerStore {
        let store =
            LedgerStore::open(dir.path().join("expenses.db"), Duration::from_secs(5)).unwrap();
        for (date, amount, category) in [
            ("2024-01-05", 12.5, "Food & Dining"),
            ("2024-01-10", 40.0, "Transportation"),
            ("2024-02-01", 7.0, "Other"),
        ] {
            store
                .create(&NewExpense::new(date, amount, category, "", "").unwrap())
                .unwrap();
        }
        store
    }

    fn params(start: &str, end: &str) -> ListExpensesParams {
        ListExpensesParams {
            start_date: start.to_string(),
            end_date: end.to_string(),
        }
    }

    #[test]
    fn test_list_january() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);

        let result = ListExpensesTool::execute(&params("2024-01-01", "2024-01-31"), &store);
        assert_eq!(result.is_error, Some(false));

        let structured = result.structured_content.clone().unwrap();
        let expenses = structured["expenses"].as_array().unwrap();
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0]["date"], "2024-01-10");
        assert_eq!(expenses[1]["category"], "Food & Dining");

        // The text content is the bare sequence of records.
        let text = match &result.content[0].raw {
            RawContent::Text(t) => &t.text,
            _ => panic!("Expected text content"),
        };
        let parsed: Vec<Expense> = serde_json::from_str(text).unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_list_no_matches_is_empty_not_error() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);

        let result = ListExpensesTool::execute(&params("2023-01-01", "2023-12-31"), &store);
        assert_eq!(result.is_error, Some(false));
        assert_eq!(
            result.structured_content.unwrap()["expenses"],
            serde_json::json!([])
        );
    }

    #[test]
    fn test_list_rejects_malformed_range() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);

        let result = ListExpensesTool::execute(&params("2024-1-1", "2024-01-31"), &store);
        assert_eq!(result.is_error, Some(true));
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["kind"], "validation_error");
        assert!(structured["message"].as_str().unwrap().contains("start_date"));
    }
}
