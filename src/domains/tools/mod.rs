//! Tools domain module.
//!
//! Tools are the operations MCP clients call against the expense ledger.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - rmcp ToolRouter builder for the stdio transport
//! - `registry.rs` - Tool metadata and by-name dispatch for HTTP
//! - `response.rs` - The single mapping from ledger outcomes to tool results
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with params, `execute()`,
//!    `to_tool()` and `create_route()`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add the route in `router.rs`
//! 4. Register it in `registry.rs`

pub mod definitions;
mod error;
mod registry;
pub mod response;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
