//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Expense database configuration.
    pub ledger: LedgerConfig,

    /// Resources domain configuration.
    pub resources: ResourcesConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the expense database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Location of the SQLite file. Must be writable.
    pub db_path: PathBuf,

    /// How long a statement waits on a locked database before failing.
    pub busy_timeout_ms: u64,
}

impl LedgerConfig {
    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }
}

/// Configuration for the resources domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcesConfig {
    /// JSON file backing the categories resource. Read on every request.
    pub categories_path: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join("expenses.db"),
            busy_timeout_ms: 5_000,
        }
    }
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            categories_path: PathBuf::from("categories.json"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "expense-tracker".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            ledger: LedgerConfig::default(),
            resources: ResourcesConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Server-level settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_TRANSPORT`, ...); storage settings use the
    /// `EXPENSE_` prefix.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(db_path) = std::env::var("EXPENSE_DB_PATH") {
            config.ledger.db_path = PathBuf::from(db_path);
            info!("Database path set to {:?}", config.ledger.db_path);
        }

        if let Ok(timeout) = std::env::var("EXPENSE_BUSY_TIMEOUT_MS") {
            match timeout.parse() {
                Ok(ms) => config.ledger.busy_timeout_ms = ms,
                Err(_) => warn!(
                    "Ignoring invalid EXPENSE_BUSY_TIMEOUT_MS '{}', using {} ms",
                    timeout, config.ledger.busy_timeout_ms
                ),
            }
        }

        if let Ok(categories_path) = std::env::var("EXPENSE_CATEGORIES_PATH") {
            config.resources.categories_path = PathBuf::from(categories_path);
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config
    }
}
