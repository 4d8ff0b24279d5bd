//! Tool-specific error types.

use thiserror::Error;

use crate::domains::ledger::LedgerError;

/// Errors that can occur during tool operations.
///
/// Every variant except [`ToolError::NotFound`] is reported to the caller
/// as a structured error result rather than a protocol fault.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Arguments could not be decoded into the tool's parameters.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The ledger rejected or failed the operation.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Machine-readable kind reported in error results.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::InvalidArguments(_) => "validation_error",
            Self::Ledger(e) => e.kind(),
            Self::Internal(_) => "internal_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_delegates_to_ledger() {
        let err = ToolError::from(LedgerError::permission_denied("readonly"));
        assert_eq!(err.kind(), "permission_error");
        assert!(err.to_string().contains("read-only"));
    }

    #[test]
    fn test_invalid_arguments_is_validation() {
        let err = ToolError::invalid_arguments("missing field `date`");
        assert_eq!(err.kind(), "validation_error");
    }
}
