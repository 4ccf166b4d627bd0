//! # In-Memory Store
//!
//! A [`KeyValueStore`] kept in a `HashMap`. Used by tests and by hosts that
//! want an ephemeral cart.
//!
//! ## Failure Injection
//! Reads and writes can be switched to fail so the cart's storage-error
//! paths can be exercised without a broken disk.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{StorageError, StorageResult};
use crate::kv::KeyValueStore;

/// Shared in-memory key-value store.
///
/// Cloning yields another handle to the same map, which is how tests
/// simulate a process restart: build a second cart over a clone.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    entries: RwLock<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `get_item` fail (or stop failing).
    pub fn set_fail_reads(&self, fail: bool) {
        self.inner.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes every subsequent `set_item` / `remove_item` fail (or stop failing).
    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful `set_item` calls so far.
    pub fn write_count(&self) -> usize {
        self.inner.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        if self.inner.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::read(key, "injected read failure"));
        }

        let entries = self.inner.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.inner.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::write(key, "injected write failure"));
        }

        debug!(key = %key, bytes = value.len(), "memory store write");
        self.inner
            .entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        self.inner.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> StorageResult<()> {
        if self.inner.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::write(key, "injected write failure"));
        }

        self.inner.entries.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_then_get() {
        let store = MemoryStore::new();

        store.set_item("k", "v1").await.unwrap();
        store.set_item("k", "v2").await.unwrap();

        assert_eq!(store.get_item("k").await.unwrap().as_deref(), Some("v2"));
        assert_eq!(store.write_count(), 2);
    }

    #[tokio::test]
    async fn test_missing_key_is_none() {
        let store = MemoryStore::new();
        assert!(store.get_item("absent").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_remove_item() {
        let store = MemoryStore::new();
        store.set_item("k", "v").await.unwrap();

        store.remove_item("k").await.unwrap();
        store.remove_item("k").await.unwrap();

        assert!(store.get_item("k").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set_item("k", "v").await.unwrap();

        assert_eq!(other.get_item("k").await.unwrap().as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn test_injected_failures() {
        let store = MemoryStore::new();
        store.set_fail_writes(true);
        assert!(matches!(
            store.set_item("k", "v").await,
            Err(StorageError::WriteFailed { .. })
        ));
        assert_eq!(store.write_count(), 0);

        store.set_fail_writes(false);
        store.set_fail_reads(true);
        store.set_item("k", "v").await.unwrap();
        assert!(matches!(
            store.get_item("k").await,
            Err(StorageError::ReadFailed { .. })
        ));
    }
}
