//! # Storage Error Types
//!
//! Error types for key-value operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StorageError (this module) ← Adds context and categorization          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartStore ← logs and keeps the in-memory cart                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Key-value storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Opening the backing store failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created
    /// - File permissions issue
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Reading a key failed.
    #[error("Failed to read '{key}': {message}")]
    ReadFailed { key: String, message: String },

    /// Writing a key failed.
    ///
    /// ## When This Occurs
    /// - Disk full / quota exceeded
    /// - Database locked past the busy timeout
    #[error("Failed to write '{key}': {message}")]
    WriteFailed { key: String, message: String },

    /// The store is closed or otherwise unavailable.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Internal storage error.
    #[error("Internal storage error: {0}")]
    Internal(String),
}

impl StorageError {
    /// Creates a ReadFailed error for a key.
    pub fn read(key: impl Into<String>, message: impl Into<String>) -> Self {
        StorageError::ReadFailed {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Creates a WriteFailed error for a key.
    pub fn write(key: impl Into<String>, message: impl Into<String>) -> Self {
        StorageError::WriteFailed {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Convert pool-level sqlx errors to StorageError.
///
/// Per-key query failures are mapped at the call site with
/// [`StorageError::read`] / [`StorageError::write`] so the key is kept.
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => {
                StorageError::Unavailable("connection pool timed out".to_string())
            }
            sqlx::Error::PoolClosed => StorageError::Unavailable("pool is closed".to_string()),
            _ => StorageError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StorageError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StorageError::MigrationFailed(err.to_string())
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
