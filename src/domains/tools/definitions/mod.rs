//! Tool definitions module.
//!
//! One file per tool. Each tool exposes:
//! - a parameters struct (deserialized from the call arguments, with a
//!   JSON schema for clients)
//! - `execute()` - the tool logic against a [`LedgerStore`](crate::domains::ledger::LedgerStore)
//! - `to_tool()` - metadata
//! - `create_route()` - the rmcp route used by the stdio transport

mod common;

pub mod add;
pub mod delete;
pub mod list;
pub mod summarize;
pub mod update;

pub use add::{AddExpenseParams, AddExpenseTool};
pub use common::dispatch;
pub use delete::{DeleteExpenseParams, DeleteExpenseTool};
pub use list::{ListExpensesParams, ListExpensesTool};
pub use summarize::{SummarizeExpensesParams, SummarizeExpensesTool};
pub use update::{UpdateExpenseParams, UpdateExpenseTool};
