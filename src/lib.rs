//! Expense tracker MCP server.
//!
//! Records personal expenses in a local SQLite database and exposes them to
//! Model Context Protocol clients as tools (add, list, summarize, update,
//! delete) plus a read-only categories resource.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **ledger**: the SQLite-backed expense store
//!   - **tools**: MCP tools that operate on the ledger
//!   - **resources**: data resources that can be read by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::open(config.clone())?;
//!     TransportService::new(config.transport).run(server.clone()).await?;
//!     server.shutdown()?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
