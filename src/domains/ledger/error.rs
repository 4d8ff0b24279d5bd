//! Ledger-specific error types.

use rusqlite::ErrorCode;
use thiserror::Error;

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Errors that can occur while validating or executing ledger operations.
///
/// A missing row is not an error: delete and update report a zero count.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A required argument is missing or malformed.
    #[error("Invalid arguments: {0}")]
    Validation(String),

    /// The database file or its directory is not writable.
    #[error("Database is in read-only mode. Check file permissions. ({0})")]
    PermissionDenied(String),

    /// Any other storage failure (lock timeout, corruption, I/O).
    #[error("Database error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Create a new validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new permission error.
    pub fn permission_denied(msg: impl Into<String>) -> Self {
        Self::PermissionDenied(msg.into())
    }

    /// Create a new storage error.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Machine-readable kind reported to clients.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::PermissionDenied(_) => "permission_error",
            Self::Storage(_) => "storage_error",
        }
    }
}

impl From<rusqlite::Error> for LedgerError {
    fn from(err: rusqlite::Error) -> Self {
        match err.sqlite_error_code() {
            Some(
                ErrorCode::ReadOnly
                | ErrorCode::PermissionDenied
                | ErrorCode::AuthorizationForStatementDenied,
            ) => Self::PermissionDenied(err.to_string()),
            _ => Self::Storage(err.to_string()),
        }
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied | std::io::ErrorKind::ReadOnlyFilesystem => {
                Self::PermissionDenied(err.to_string())
            }
            _ => Self::Storage(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::ffi;

    fn sqlite_failure(code: i32) -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(ffi::Error::new(code), None)
    }

    #[test]
    fn test_readonly_maps_to_permission() {
        let err = LedgerError::from(sqlite_failure(ffi::SQLITE_READONLY));
        assert!(matches!(err, LedgerError::PermissionDenied(_)));
        assert_eq!(err.kind(), "permission_error");
        assert!(err.to_string().contains("read-only"));
    }

    #[test]
    fn test_perm_maps_to_permission() {
        let err = LedgerError::from(sqlite_failure(ffi::SQLITE_PERM));
        assert_eq!(err.kind(), "permission_error");
    }

    #[test]
    fn test_busy_maps_to_storage() {
        let err = LedgerError::from(sqlite_failure(ffi::SQLITE_BUSY));
        assert!(matches!(err, LedgerError::Storage(_)));
        assert_eq!(err.kind(), "storage_error");
    }

    #[test]
    fn test_non_sqlite_error_maps_to_storage() {
        let err = LedgerError::from(rusqlite::Error::QueryReturnedNoRows);
        assert_eq!(err.kind(), "storage_error");
    }

    #[test]
    fn test_io_permission_denied() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        assert_eq!(LedgerError::from(io).kind(), "permission_error");

        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        assert_eq!(LedgerError::from(io).kind(), "storage_error");
    }

    #[test]
    fn test_validation_kind() {
        let err = LedgerError::validation("date must be YYYY-MM-DD");
        assert_eq!(err.kind(), "validation_error");
        assert_eq!(err.to_string(), "Invalid arguments: date must be YYYY-MM-DD");
    }
}
