//! # Cart Provider
//!
//! Scoped access to a [`CartStore`] for code that should not have to thread
//! a handle through every call.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CartProvider::mount(store, async {                                    │
//! │      ...                                                                │
//! │      let cart = use_cart()?;   ◄── same store, any depth               │
//! │      cart.add_to_cart(p).await?;                                        │
//! │  })                                                                     │
//! │                                                                         │
//! │  use_cart() outside any scope ──► Err(CartError::MissingProvider)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The scope is task-local: it covers the future passed in (and everything
//! it awaits) but not tasks spawned from it. Hand those a cloned store.

use std::future::Future;

use tracing::error;

use crate::error::{CartError, CartResult};
use crate::store::CartStore;

tokio::task_local! {
    static CURRENT_CART: CartStore;
}

/// Installs a [`CartStore`] for the duration of a future or closure.
pub struct CartProvider;

impl CartProvider {
    /// Runs `fut` with `store` available through [`use_cart`].
    pub async fn scope<F>(store: CartStore, fut: F) -> F::Output
    where
        F: Future,
    {
        CURRENT_CART.scope(store, fut).await
    }

    /// Runs `f` with `store` available through [`use_cart`].
    pub fn sync_scope<F, R>(store: CartStore, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        CURRENT_CART.sync_scope(store, f)
    }

    /// Starts loading the persisted cart in the background, then runs `fut`
    /// inside the provider scope.
    ///
    /// `fut` starts straight away and may see the empty cart before the load
    /// lands; await [`CartStore::wait_loaded`] where that matters. A failed
    /// load is reported there as [`CartError::LoadFailed`], and mutations
    /// issued before the load read the stored cart themselves.
    pub async fn mount<F>(store: CartStore, fut: F) -> F::Output
    where
        F: Future,
    {
        let loader = store.clone();
        tokio::spawn(async move {
            if let Err(e) = loader.initialize().await {
                error!(error = %e, "Cart failed to load");
            }
        });

        Self::scope(store, fut).await
    }
}

/// Returns the store installed by the enclosing [`CartProvider`].
///
/// ## Errors
/// [`CartError::MissingProvider`] when called outside any provider scope.
pub fn use_cart() -> CartResult<CartStore> {
    CURRENT_CART
        .try_with(|store| store.clone())
        .map_err(|_| CartError::MissingProvider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use std::time::Duration;

    use market_core::{ProductDescriptor, CART_STORAGE_KEY};
    use market_storage::{KeyValueStore, MemoryStore};

    use crate::store::{CartOptions, CorruptionPolicy};

    fn product(id: &str) -> ProductDescriptor {
        ProductDescriptor::new(id, "Mug", "https://img.example/mug.png", 12.0)
    }

    #[test]
    fn test_use_cart_without_provider_fails() {
        assert!(matches!(use_cart(), Err(CartError::MissingProvider)));
    }

    #[tokio::test]
    async fn test_use_cart_without_provider_fails_in_async_code() {
        let result = async { use_cart() }.await;
        assert!(matches!(result, Err(CartError::MissingProvider)));
    }

    #[tokio::test]
    async fn test_scope_exposes_same_store() {
        let store = CartStore::new(Arc::new(MemoryStore::new()));

        CartProvider::scope(store.clone(), async {
            let cart = use_cart().unwrap();
            cart.add_to_cart(product("p1")).await.unwrap();
        })
        .await;

        assert_eq!(store.item_count(), 1);
        assert!(use_cart().is_err());
    }

    #[test]
    fn test_sync_scope() {
        let store = CartStore::new(Arc::new(MemoryStore::new()));

        let loaded = CartProvider::sync_scope(store, || use_cart().map(|c| c.is_loaded()));

        assert!(!loaded.unwrap());
    }

    #[tokio::test]
    async fn test_mount_loads_in_background() {
        let memory = MemoryStore::new();
        memory
            .set_item(
                CART_STORAGE_KEY,
                r#"[{"id":"p1","title":"Mug","image_url":"u","price":12,"quantity":3}]"#,
            )
            .await
            .unwrap();
        let store = CartStore::new(Arc::new(memory));

        let quantity = CartProvider::mount(store, async {
            let cart = use_cart().unwrap();
            cart.wait_loaded().await.unwrap();
            cart.products()[0].quantity
        })
        .await;

        assert_eq!(quantity, 3);
    }

    #[tokio::test]
    async fn test_mount_reports_failed_load_to_waiters() {
        let memory = MemoryStore::new();
        memory.set_item(CART_STORAGE_KEY, "{").await.unwrap();
        let store = CartStore::with_options(
            Arc::new(memory),
            CartOptions::default().on_corrupt(CorruptionPolicy::Fail),
        );

        let waited = tokio::time::timeout(
            Duration::from_secs(2),
            CartProvider::mount(store, async { use_cart()?.wait_loaded().await }),
        )
        .await
        .expect("wait_loaded must return once the load fails");

        assert!(matches!(waited, Err(CartError::LoadFailed(_))));
    }

    #[tokio::test]
    async fn test_mount_add_before_load_keeps_stored_cart() {
        let memory = MemoryStore::new();
        memory
            .set_item(
                CART_STORAGE_KEY,
                r#"[{"id":"old","title":"Mug","image_url":"u","price":12,"quantity":3}]"#,
            )
            .await
            .unwrap();
        let store = CartStore::new(Arc::new(memory.clone()));

        let items = CartProvider::mount(store, async {
            let cart = use_cart().unwrap();
            cart.add_to_cart(product("p1")).await.unwrap();
            cart.wait_loaded().await.unwrap();
            cart.products()
        })
        .await;

        let ids: Vec<_> = items.iter().map(|i| (i.id.as_str(), i.quantity)).collect();
        assert_eq!(ids, vec![("old", 3), ("p1", 1)]);
        let stored = memory.get_item(CART_STORAGE_KEY).await.unwrap().unwrap();
        assert!(stored.contains("\"old\""));
    }
}
