//! Summarize expenses by category tool definition.

use rmcp::{
    handler::server::tool::{ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

use super::common::ledger_route;
use crate::domains::ledger::{CategorySummary, DateRange, LedgerStore};
use crate::domains::tools::response::{error_result, sequence_result};

/// Parameters for the summarize tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SummarizeExpensesParams {
    /// First date to include (YYYY-MM-DD).
    pub start_date: String,

    /// Last date to include (YYYY-MM-DD).
    pub end_date: String,

    /// Restrict the summary to a single category. Empty means all.
    #[serde(default)]
    pub category: String,
}

/// Per-category totals, largest total first.
#[derive(Debug, Serialize, JsonSchema)]
struct SummarizeExpensesResult {
    summary: Vec<CategorySummary>,
}

/// Summarize tool - totals and counts per category over a date range.
pub struct SummarizeExpensesTool;

impl SummarizeExpensesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "summarize_expenses_by_category";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Summarize total expenses by category within an inclusive date range (YYYY-MM-DD), optionally for a single category. Groups are ordered by total amount, largest first.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(start = %params.start_date, end = %params.end_date, category = %params.category))]
    pub fn execute(params: &SummarizeExpensesParams, store: &LedgerStore) -> CallToolResult {
        info!("Summarize expenses tool called");

        let summary = DateRange::new(params.start_date.as_str(), params.end_date.as_str())
            .and_then(|range| store.summarize(&range, Some(params.category.as_str())));

        match summary {
            Ok(summary) => {
                info!("Summarized {} categor(ies)", summary.len());
                let payload = SummarizeExpensesResult { summary };
                sequence_result(&payload.summary, &payload)
            }
            Err(e) => error_result(&e.into()),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SummarizeExpensesParams>(),
            annotations: None,
            output_schema: Some(cached_schema_for_type::<SummarizeExpensesResult>()),
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
    use std::time::Duration;
    use tempfile::TempDir;

    fn seeded_store(dir: &TempDir) -> LedgerStore {
        let store =
            LedgerStore::open(dir.path().join("expenses.db"), Duration::from_secs(5)).unwrap();
        for (date, amount, category) in [
            ("2024-01-05", 12.5, "Food & Dining"),
            ("2024-01-10", 40.0, "Transportation"),
            ("2024-01-20", 7.5, "Food & Dining"),
        ] {
            store
                .create(&NewExpense::new(date, amount, category, "", "").unwrap())
                .unwrap();
        }
        store
    }

    fn params(category: &str) -> SummarizeExpensesParams {
        SummarizeExpensesParams {
            start_date: "2024-01-01".to_string(),
            end_date: "2024-01-31".to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_summarize_all_categories() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);

        let result = SummarizeExpensesTool::execute(&params(""), &store);
        assert_eq!(result.is_error, Some(false));

        let structured = result.structured_content.unwrap();
        let summary = structured["summary"].as_array().unwrap();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0]["category"], "Transportation");
        assert_eq!(summary[0]["total_amount"], 40.0);
        assert_eq!(summary[0]["count"], 1);
        assert_eq!(summary[1]["category"], "Food & Dining");
        assert_eq!(summary[1]["total_amount"], 20.0);
        assert_eq!(summary[1]["count"], 2);
    }

    #[test]
    fn test_summarize_single_category() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);

        let result = SummarizeExpensesTool::execute(&params("Food & Dining"), &store);
        let structured = result.structured_content.unwrap();
        let summary = structured["summary"].as_array().unwrap();
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0]["category"], "Food & Dining");
    }

    #[test]
    fn test_category_argument_is_optional() {
        let params: SummarizeExpensesParams =
            serde_json::from_str(r#"{"start_date": "2024-01-01", "end_date": "2024-01-31"}"#)
                .unwrap();
        assert_eq!(params.category, "");
    }
}
