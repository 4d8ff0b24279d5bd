//! Ledger domain module.
//!
//! This module owns the persisted expense table. The [`LedgerStore`] opens a
//! fresh SQLite connection for every operation, so it can be shared freely
//! between concurrent tool calls; write-write conflicts are resolved by
//! SQLite itself (WAL journal plus a busy timeout).
//!
//! ## Architecture
//!
//! - `model.rs` - Expense records, summaries and argument validation
//! - `schema.rs` - Table definition applied at startup
//! - `store.rs` - CRUD and aggregate queries
//! - `error.rs` - Ledger error taxonomy and SQLite error mapping

mod error;
mod model;
mod schema;
mod store;

pub use error::{LedgerError, LedgerResult};
pub use model::{CategorySummary, DateRange, Expense, NewExpense, validate_date};
pub use store::LedgerStore;
