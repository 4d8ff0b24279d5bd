//! Resource-specific error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while listing or reading resources.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No resource is registered under the URI.
    #[error("Unknown resource: {0}")]
    NotFound(String),

    /// The backing file exists but does not decode.
    #[error("{} is not a valid resource document: {source}", path.display())]
    InvalidContent {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The backing file could not be read.
    #[error("Failed to read resource file: {0}")]
    Io(#[from] std::io::Error),

    /// The resource body could not be rendered.
    #[error("Failed to encode resource: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ResourceError {
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }
}
