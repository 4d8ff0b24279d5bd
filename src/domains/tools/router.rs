//! Tool Router - builds the rmcp ToolRouter used by the stdio transport.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::ledger::LedgerStore;

use super::definitions::{
    AddExpenseTool, DeleteExpenseTool, ListExpensesTool, SummarizeExpensesTool, UpdateExpenseTool,
};

/// Build the tool router with all registered tools sharing one store.
pub fn build_tool_router<S>(store: Arc<LedgerStore>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(AddExpenseTool::create_route(store.clone()))
        .with_route(ListExpensesTool::create_route(store.clone()))
        .with_route(SummarizeExpensesTool::create_route(store.clone()))
        .with_route(DeleteExpenseTool::create_route(store.clone()))
        .with_route(UpdateExpenseTool::create_route(store))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    struct TestServer {}

    fn test_store(dir: &TempDir) -> Arc<LedgerStore> {
        Arc::new(
            LedgerStore::open(dir.path().join("expenses.db"), Duration::from_secs(5)).unwrap(),
        )
    }

    #[test]
    fn test_build_router() {
        let dir = TempDir::new().unwrap();
        let router: ToolRouter<TestServer> = build_tool_router(test_store(&dir));
        let tools = router.list_all();
        assert_eq!(tools.len(), 5);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"add_expense"));
        assert!(names.contains(&"list_expenses"));
        assert!(names.contains(&"summarize_expenses_by_category"));
        assert!(names.contains(&"delete_expense"));
        assert!(names.contains(&"update_expense"));
    }

    #[test]
    fn test_registry_matches_router() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        let registry = ToolRegistry::new(store.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(store);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
