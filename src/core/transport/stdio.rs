//! STDIO transport implementation.
//!
//! The server reads JSON-RPC frames from stdin and writes responses to
//! stdout; logs go to stderr so they never corrupt the stream.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult, shutdown_signal};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve a single client over stdin/stdout until it disconnects or the
    /// process is signalled.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        let name = server.name().to_string();

        let running = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::Handshake(e.to_string()))?;

        info!("{} ready on stdin/stdout", name);

        let token = running.cancellation_token();
        tokio::spawn(async move {
            shutdown_signal().await;
            token.cancel();
        });

        let reason = running
            .waiting()
            .await
            .map_err(|e| TransportError::Session(e.to_string()))?;

        info!("STDIO session ended: {:?}", reason);
        Ok(())
    }
}
