//! Transport error types.

use thiserror::Error;

pub type TransportResult<T> = Result<T, TransportError>;

/// Failures that end a transport before or during serving.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The listening socket could not be opened.
    #[error("Cannot listen on {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The MCP handshake with the client failed.
    #[error("MCP session failed to start: {0}")]
    Handshake(String),

    /// A running MCP session stopped with an error.
    #[error("MCP session ended abnormally: {0}")]
    Session(String),

    /// The HTTP server stopped accepting connections.
    #[error("HTTP server stopped: {0}")]
    Server(#[from] std::io::Error),
}

impl TransportError {
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Bind {
            address: address.into(),
            source,
        }
    }
}
