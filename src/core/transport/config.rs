//! Transport selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which transport the server listens on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// MCP over stdin/stdout.
    #[cfg(feature = "stdio")]
    Stdio,

    /// Stateless JSON-RPC over HTTP POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// Listener settings for the HTTP transport.
#[cfg(feature = "http")]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
    /// Route that accepts JSON-RPC POSTs.
    pub rpc_path: String,
    /// Allow any origin, method and header.
    pub enable_cors: bool,
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            rpc_path: "/mcp".to_string(),
            enable_cors: true,
        }
    }
}

#[cfg(feature = "http")]
impl HttpConfig {
    /// Read `MCP_HTTP_HOST`, `MCP_HTTP_PORT`, `MCP_HTTP_PATH` and
    /// `MCP_HTTP_CORS`, keeping defaults for unset or unparsable values.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("MCP_HTTP_HOST") {
            config.host = host;
        }
        if let Some(port) = std::env::var("MCP_HTTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
        {
            config.port = port;
        }
        if let Ok(path) = std::env::var("MCP_HTTP_PATH") {
            config.rpc_path = if path.starts_with('/') {
                path
            } else {
                format!("/{}", path)
            };
        }
        if let Ok(cors) = std::env::var("MCP_HTTP_CORS") {
            config.enable_cors = !matches!(cors.to_lowercase().as_str(), "false" | "0" | "no");
        }

        config
    }
}

impl Default for TransportConfig {
    #[allow(unreachable_code)]
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        {
            return Self::Stdio;
        }

        #[cfg(feature = "http")]
        {
            return Self::Http(HttpConfig::default());
        }

        #[cfg(not(any(feature = "stdio", feature = "http")))]
        {
            compile_error!("enable at least one transport feature: stdio or http");
        }
    }
}

impl TransportConfig {
    /// Choose the transport from `MCP_TRANSPORT`.
    ///
    /// `http` selects HTTP when compiled in; anything else falls back to the
    /// default transport.
    pub fn from_env() -> Self {
        let requested = std::env::var("MCP_TRANSPORT").unwrap_or_default();

        match requested.to_lowercase().as_str() {
            #[cfg(feature = "http")]
            "http" => Self::Http(HttpConfig::from_env()),
            "" => Self::default(),
            other => {
                let fallback = Self::default();
                tracing::warn!("Transport '{}' unavailable, using {}", other, fallback);
                fallback
            }
        }
    }
}

impl fmt::Display for TransportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => write!(f, "stdio"),
            #[cfg(feature = "http")]
            Self::Http(cfg) => write!(f, "http://{}:{}{}", cfg.host, cfg.port, cfg.rpc_path),
        }
    }
}
