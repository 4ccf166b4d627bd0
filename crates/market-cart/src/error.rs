//! # Cart Error Types
//!
//! ## Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Kind                      Variant              Handling               │
//! │  ────                      ───────              ────────               │
//! │  No enclosing provider     MissingProvider      fail fast at access    │
//! │  Stored blob unreadable    CorruptSnapshot      per CorruptionPolicy   │
//! │  Load failed (waiters)     LoadFailed           returned, retryable    │
//! │  Storage read/write fails  Storage              logged; cart kept      │
//! │  Bad product descriptor    Core                 returned to caller     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use market_core::CoreError;
use market_storage::StorageError;
use thiserror::Error;

/// Errors surfaced by the cart store and its provider.
#[derive(Debug, Error)]
pub enum CartError {
    /// The cart was requested outside any `CartProvider` scope.
    ///
    /// A programming error: the caller forgot to mount the provider.
    #[error("use_cart must be used within a CartProvider")]
    MissingProvider,

    /// The persisted snapshot could not be decoded.
    #[error("Persisted cart is corrupt: {0}")]
    CorruptSnapshot(#[source] CoreError),

    /// The cart could not be loaded; reported to `wait_loaded()` callers.
    #[error("Cart failed to load: {0}")]
    LoadFailed(String),

    /// The key-value store failed.
    #[error("Cart storage failed: {0}")]
    Storage(#[from] StorageError),

    /// A cart rule rejected the input.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for cart operations.
pub type CartResult<T> = Result<T, CartError>;
