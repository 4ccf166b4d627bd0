//! # Key-Value Store Trait
//!
//! The persistence contract the cart is written against.
//!
//! The store holds raw strings. Serialization is the caller's
//! responsibility, which keeps backends free of any encoding dependency.

use async_trait::async_trait;

use crate::error::StorageResult;

/// Asynchronous string key-value storage.
///
/// ## Contract
/// - `set_item` replaces the whole value under a key
/// - `get_item` returns `None` for a key never written (or removed)
/// - Implementations are shared across tasks, hence `Send + Sync`
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    async fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    async fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removes `key`. Removing a missing key is not an error.
    async fn remove_item(&self, key: &str) -> StorageResult<()>;
}
