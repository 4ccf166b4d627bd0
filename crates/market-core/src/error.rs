//! # Error Types
//!
//! Domain-specific error types for market-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  market-core errors (this file)                                        │
//! │  ├── CoreError        - Snapshot and cart rule failures                │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  market-storage errors (separate crate)                                │
//! │  └── StorageError     - Key-value read/write failures                  │
//! │                                                                         │
//! │  market-cart errors (separate crate)                                   │
//! │  └── CartError        - Provider scope, load policy                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CartError → CliError              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core cart logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The persisted snapshot could not be decoded.
    ///
    /// ## When This Occurs
    /// - Stored value is not JSON
    /// - JSON shape does not match a list of line items
    #[error("Cart snapshot is malformed: {0}")]
    MalformedSnapshot(String),

    /// A decoded snapshot breaks a cart invariant.
    ///
    /// ## When This Occurs
    /// - Two entries share one id
    /// - An entry carries quantity 0
    #[error("Cart snapshot violates invariant: {0}")]
    InvalidSnapshot(String),

    /// Cart could not be encoded for storage.
    #[error("Cart could not be serialized: {0}")]
    Serialization(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before a descriptor is allowed into the cart.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is not a finite, non-negative number.
    #[error("{field} must be a finite, non-negative number")]
    InvalidNumber { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
