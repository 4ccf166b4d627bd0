//! # CLI Error Type
//!
//! Unified error type for cart commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command Function ── Result<T, CliError>                                │
//! │         │                                                               │
//! │         ├── CartError::MissingProvider ──► PROVIDER_MISSING             │
//! │         ├── CartError::CorruptSnapshot ──► CORRUPT_CART                 │
//! │         ├── CartError::LoadFailed      ──► LOAD_FAILED                  │
//! │         ├── StorageError::*            ──► STORAGE_ERROR                │
//! │         ├── CoreError::Validation      ──► VALIDATION_ERROR             │
//! │         └── ConfigError::*             ──► CONFIG_ERROR                 │
//! │                                                                         │
//! │  Printed to stderr as JSON; process exits non-zero:                     │
//! │  { "code": "VALIDATION_ERROR", "message": "Validation error: ..." }     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use market_cart::CartError;
use market_core::CoreError;
use market_storage::StorageError;
use serde::Serialize;

use crate::config::ConfigError;

/// Error returned from cart commands.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CliError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// Persisted cart could not be decoded
    CorruptCart,

    /// Key-value store failed
    StorageError,

    /// Persisted cart could not be loaded
    LoadFailed,

    /// Cart accessed outside a provider
    ProviderMissing,

    /// Configuration could not be loaded
    ConfigError,

    /// Anything else
    Internal,
}

impl CliError {
    /// Creates a new CLI error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::Internal, message)
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => CliError::validation(format!("Validation error: {}", e)),
            CoreError::MalformedSnapshot(_) | CoreError::InvalidSnapshot(_) => {
                CliError::new(ErrorCode::CorruptCart, err.to_string())
            }
            CoreError::Serialization(e) => {
                tracing::error!("Cart serialization failed: {}", e);
                CliError::internal("Cart could not be serialized")
            }
        }
    }
}

impl From<StorageError> for CliError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Internal(e) => {
                // Raw driver text stays in the log
                tracing::error!("Internal storage error: {}", e);
                CliError::new(ErrorCode::StorageError, "Storage operation failed")
            }
            other => CliError::new(ErrorCode::StorageError, other.to_string()),
        }
    }
}

impl From<CartError> for CliError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::MissingProvider => {
                CliError::new(ErrorCode::ProviderMissing, err.to_string())
            }
            CartError::CorruptSnapshot(e) => CliError::new(
                ErrorCode::CorruptCart,
                format!("Persisted cart is corrupt: {}", e),
            ),
            CartError::LoadFailed(_) => CliError::new(ErrorCode::LoadFailed, err.to_string()),
            CartError::Storage(e) => e.into(),
            CartError::Core(e) => e.into(),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::internal(format!("Failed to encode output: {}", err))
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for CliError {}
