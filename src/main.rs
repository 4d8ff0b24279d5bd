//! Expense tracker MCP server entry point.
//!
//! Loads configuration, initializes logging, opens the expense database and
//! serves it over the configured transport.

use anyhow::{Context, Result};
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

use expense_mcp_server::core::{Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    // A database that cannot be written is fatal before any client connects.
    let server = McpServer::open(config.clone()).with_context(|| {
        format!(
            "failed to open expense database at {}",
            config.ledger.db_path.display()
        )
    })?;

    info!("Server initialized");

    let outcome = TransportService::new(config.transport.clone())
        .run(server.clone())
        .await;

    info!("Server shutting down");
    if let Err(e) = server.shutdown() {
        error!("Failed to close expense database: {}", e);
    }

    outcome?;
    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout belongs to the stdio transport.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .init();
}
