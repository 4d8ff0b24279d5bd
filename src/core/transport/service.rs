//! Runs the server on whichever transport was configured.

use tracing::info;

use super::{TransportConfig, TransportResult};
use crate::core::McpServer;

#[cfg(feature = "stdio")]
use super::stdio::StdioTransport;

#[cfg(feature = "http")]
use super::http::HttpTransport;

/// Owns the transport choice until `run` consumes it.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Serve `server` until the client disconnects (stdio) or the listener
    /// fails (http).
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        info!("{} serving over {}", server.name(), self.config);

        match self.config {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => StdioTransport::run(server).await,
            #[cfg(feature = "http")]
            TransportConfig::Http(http) => HttpTransport::new(http).run(server).await,
        }
    }
}
