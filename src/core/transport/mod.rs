//! Transport layer for the MCP server.
//!
//! Two ways to reach the same server, each behind a cargo feature:
//! `stdio` speaks MCP over stdin/stdout for a single local client, `http`
//! answers stateless JSON-RPC POSTs so several clients can share one
//! expense database.
//!
//! Both stop on Ctrl+C or SIGTERM so the caller can close the database.

mod config;
mod error;
mod service;
mod signal;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;
pub use signal::shutdown_signal;

#[cfg(feature = "http")]
pub use config::HttpConfig;
