//! Domains module containing business logic organized by bounded contexts.
//!
//! `ledger` owns the SQLite store; `tools` and `resources` expose it to
//! MCP clients.

pub mod ledger;
pub mod resources;
pub mod tools;
