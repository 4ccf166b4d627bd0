//! # Cart Store
//!
//! The write-through state container behind the storefront's cart.
//!
//! ## Mutation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  Caller Action            CartStore               Side Effects          │
//! │  ─────────────            ─────────               ────────────          │
//! │                                                                         │
//! │  App start ──────────────► initialize() ────────► get_item(key)         │
//! │                                                                         │
//! │  Tap "add" ──────────────► add_to_cart() ───────► set_item(key, [...])  │
//! │                                                   notify subscribers    │
//! │  Tap "+" ────────────────► increment(id) ───────► set_item + notify     │
//! │                                                                         │
//! │  Tap "-" ────────────────► decrement(id) ───────► set_item + notify     │
//! │                                                                         │
//! │  Render ─────────────────► products() ──────────► (read only)           │
//! │                                                                         │
//! │  NOTE: A mutation holds the cart lock until its write has landed, so   │
//! │        the stored snapshot always matches the latest in-memory cart.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Policy
//! Storage failures never undo an in-memory change: they are logged and the
//! next successful write brings the snapshot back in line. A corrupt snapshot
//! at startup is handled by [`CorruptionPolicy`].
//!
//! ## Loading
//! A mutation that arrives before `initialize()` has read the snapshot reads
//! it first, under the same lock, so an early write never replaces the stored
//! cart. Reads (`products()`) may still see the empty cart until then.

use std::sync::Arc;

use market_core::{Cart, CartChange, LineItem, ProductDescriptor, CART_STORAGE_KEY};
use market_storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use tokio::sync::{watch, Mutex, MutexGuard};
use tracing::{debug, error, info, warn};

use crate::error::{CartError, CartResult};

// =============================================================================
// Options
// =============================================================================

/// What `initialize()` does when the stored snapshot cannot be decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorruptionPolicy {
    /// Log a warning, delete the bad value and start with an empty cart.
    #[default]
    Reset,

    /// Return [`CartError::CorruptSnapshot`] and leave the stored value alone.
    Fail,
}

impl std::str::FromStr for CorruptionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reset" => Ok(CorruptionPolicy::Reset),
            "fail" => Ok(CorruptionPolicy::Fail),
            _ => Err(format!("unknown corruption policy: {}", s)),
        }
    }
}

/// Cart store settings.
#[derive(Debug, Clone)]
pub struct CartOptions {
    /// Key the snapshot is stored under.
    pub storage_key: String,

    /// Handling of an unreadable snapshot at startup.
    pub on_corrupt: CorruptionPolicy,
}

impl Default for CartOptions {
    fn default() -> Self {
        CartOptions {
            storage_key: CART_STORAGE_KEY.to_string(),
            on_corrupt: CorruptionPolicy::Reset,
        }
    }
}

impl CartOptions {
    /// Sets the storage key.
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Sets the corruption policy.
    pub fn on_corrupt(mut self, policy: CorruptionPolicy) -> Self {
        self.on_corrupt = policy;
        self
    }
}

// =============================================================================
// Load State
// =============================================================================

/// Progress of the initial load, as seen by [`CartStore::wait_loaded`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// `initialize()` has not finished yet.
    Loading,

    /// The persisted cart (or an empty one) is in memory.
    Loaded,

    /// The last load attempt failed; the message says why.
    ///
    /// A later `initialize()` or mutation retries the load.
    Failed(String),
}

// =============================================================================
// Store
// =============================================================================

/// Shared handle to the cart.
///
/// Cloning is cheap and every clone sees the same cart, so components get
/// the cart by being handed a clone rather than through a global.
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<Inner>,
}

struct Inner {
    storage: Arc<dyn KeyValueStore>,
    options: CartOptions,
    slot: Mutex<Slot>,
    products_tx: watch::Sender<Vec<LineItem>>,
    load_tx: watch::Sender<LoadState>,
}

/// The cart plus whether the stored snapshot has been read into it.
///
/// Mutations never persist while `synced` is false.
struct Slot {
    cart: Cart,
    synced: bool,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("storage_key", &self.inner.options.storage_key)
            .field("load_state", &self.load_state())
            .field("items", &self.inner.products_tx.borrow().len())
            .finish()
    }
}

impl CartStore {
    /// Creates an empty, not yet loaded cart over `storage`.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self::with_options(storage, CartOptions::default())
    }

    /// Creates an empty, not yet loaded cart with explicit options.
    pub fn with_options(storage: Arc<dyn KeyValueStore>, options: CartOptions) -> Self {
        let (products_tx, _) = watch::channel(Vec::new());
        let (load_tx, _) = watch::channel(LoadState::Loading);

        CartStore {
            inner: Arc::new(Inner {
                storage,
                options,
                slot: Mutex::new(Slot {
                    cart: Cart::new(),
                    synced: false,
                }),
                products_tx,
                load_tx,
            }),
        }
    }

    /// Loads the persisted snapshot into memory.
    ///
    /// ## Behavior
    /// - Snapshot present and valid: replaces the in-memory cart
    /// - No snapshot: cart stays empty
    /// - Snapshot corrupt: handled per [`CorruptionPolicy`]
    /// - Read failure: logged, cart stays empty (`Reset`) or error (`Fail`)
    ///
    /// The outcome is published to [`wait_loaded`](Self::wait_loaded).
    /// Runs once; calls after a successful load return immediately.
    pub async fn initialize(&self) -> CartResult<()> {
        let mut slot = self.inner.slot.lock().await;
        if slot.synced {
            return Ok(());
        }
        self.load(&mut slot).await.map(|_| ())
    }

    /// Returns the current load state.
    pub fn load_state(&self) -> LoadState {
        self.inner.load_tx.borrow().clone()
    }

    /// Returns true once a load has completed.
    pub fn is_loaded(&self) -> bool {
        matches!(*self.inner.load_tx.borrow(), LoadState::Loaded)
    }

    /// Waits until the load has either completed or failed.
    ///
    /// ## Errors
    /// [`CartError::LoadFailed`] when the last load attempt failed.
    pub async fn wait_loaded(&self) -> CartResult<()> {
        let mut rx = self.inner.load_tx.subscribe();
        let state = rx
            .wait_for(|state| *state != LoadState::Loading)
            .await
            .map(|state| state.clone())
            .map_err(|_| CartError::LoadFailed("cart store was dropped".to_string()))?;

        match state {
            LoadState::Failed(reason) => Err(CartError::LoadFailed(reason)),
            LoadState::Loading | LoadState::Loaded => Ok(()),
        }
    }

    /// Returns the current line items in display order.
    pub fn products(&self) -> Vec<LineItem> {
        self.inner.products_tx.borrow().clone()
    }

    /// Returns a receiver that sees every new cart snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Vec<LineItem>> {
        self.inner.products_tx.subscribe()
    }

    /// Returns the number of distinct items.
    pub fn item_count(&self) -> usize {
        self.inner.products_tx.borrow().len()
    }

    /// Returns the total quantity over all items.
    pub fn total_quantity(&self) -> u64 {
        self.inner
            .products_tx
            .borrow()
            .iter()
            .map(|i| u64::from(i.quantity))
            .sum()
    }

    /// Adds one unit of a product, appending it if new.
    ///
    /// ## Errors
    /// - [`CartError::Core`] if the descriptor fails validation
    /// - A load error if the stored cart has not been read and still can't be
    ///
    /// The cart is left untouched in both cases. Storage write failures are
    /// logged, not returned.
    pub async fn add_to_cart(&self, product: ProductDescriptor) -> CartResult<Vec<LineItem>> {
        debug!(id = %product.id, "add_to_cart");
        let mut slot = self.lock_loaded().await?;
        let change = slot.cart.add(&product)?;
        Ok(self.commit(&slot, change).await)
    }

    /// Adds one to an item's quantity. An absent id changes nothing.
    pub async fn increment(&self, id: &str) -> CartResult<Vec<LineItem>> {
        debug!(id = %id, "increment");
        let mut slot = self.lock_loaded().await?;
        let change = slot.cart.increment(id);
        Ok(self.commit(&slot, change).await)
    }

    /// Takes one from an item's quantity, removing it at zero.
    /// An absent id changes nothing.
    pub async fn decrement(&self, id: &str) -> CartResult<Vec<LineItem>> {
        debug!(id = %id, "decrement");
        let mut slot = self.lock_loaded().await?;
        let change = slot.cart.decrement(id);
        Ok(self.commit(&slot, change).await)
    }

    /// Removes an item whatever its quantity.
    pub async fn remove(&self, id: &str) -> CartResult<Vec<LineItem>> {
        debug!(id = %id, "remove");
        let mut slot = self.lock_loaded().await?;
        let change = slot.cart.remove(id);
        Ok(self.commit(&slot, change).await)
    }

    /// Empties the cart.
    pub async fn clear(&self) -> CartResult<Vec<LineItem>> {
        debug!("clear");
        let mut slot = self.lock_loaded().await?;
        let change = slot.cart.clear();
        Ok(self.commit(&slot, change).await)
    }

    /// Locks the cart, reading the stored snapshot first if that has not
    /// happened yet.
    ///
    /// Under [`CorruptionPolicy::Reset`] a snapshot that still can't be read
    /// here is given up on, and the mutation's write replaces it.
    async fn lock_loaded(&self) -> CartResult<MutexGuard<'_, Slot>> {
        let mut slot = self.inner.slot.lock().await;
        if !slot.synced {
            debug!("cart not loaded yet, loading before mutation");
            if !self.load(&mut slot).await? {
                warn!("Persisted cart unreadable, next write replaces it");
            }
            slot.synced = true;
        }
        Ok(slot)
    }

    /// Reads the snapshot into `slot` and publishes the outcome.
    ///
    /// Returns false when a read failure was tolerated under `Reset`, in which
    /// case the stored value is still unknown.
    async fn load(&self, slot: &mut Slot) -> CartResult<bool> {
        match self.read_snapshot(&mut slot.cart).await {
            Ok(read) => {
                slot.synced = read;
                self.inner.load_tx.send_replace(LoadState::Loaded);
                self.publish(&slot.cart);
                Ok(read)
            }
            Err(e) => {
                self.inner
                    .load_tx
                    .send_replace(LoadState::Failed(e.to_string()));
                Err(e)
            }
        }
    }

    async fn read_snapshot(&self, cart: &mut Cart) -> CartResult<bool> {
        let key = &self.inner.options.storage_key;
        let policy = self.inner.options.on_corrupt;

        match self.inner.storage.get_item(key).await {
            Ok(Some(raw)) => match Cart::from_snapshot(&raw) {
                Ok(restored) => {
                    info!(items = restored.len(), "Restored persisted cart");
                    *cart = restored;
                }
                Err(e) if policy == CorruptionPolicy::Fail => {
                    error!(error = %e, "Persisted cart is corrupt");
                    return Err(CartError::CorruptSnapshot(e));
                }
                Err(e) => {
                    warn!(error = %e, "Persisted cart is corrupt, starting empty");
                    if let Err(e) = self.inner.storage.remove_item(key).await {
                        warn!(error = %e, "Could not discard corrupt cart snapshot");
                    }
                    *cart = Cart::new();
                }
            },
            Ok(None) => debug!(key = %key, "No persisted cart"),
            Err(e) if policy == CorruptionPolicy::Fail => return Err(e.into()),
            Err(e) => {
                warn!(error = %e, "Could not read persisted cart, starting empty");
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Persists and publishes a changed cart; returns the current items.
    async fn commit(&self, slot: &Slot, change: CartChange) -> Vec<LineItem> {
        if !change.is_changed() {
            debug!("cart unchanged, skipping write");
            return slot.cart.items().to_vec();
        }

        self.persist(&slot.cart).await;
        self.publish(&slot.cart);
        slot.cart.items().to_vec()
    }

    async fn persist(&self, cart: &Cart) {
        let key = &self.inner.options.storage_key;

        let snapshot = match cart.to_snapshot() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                error!(error = %e, "Could not encode cart");
                return;
            }
        };

        if let Err(e) = self.inner.storage.set_item(key, &snapshot).await {
            warn!(error = %e, "Could not persist cart, in-memory state kept");
        }
    }

    fn publish(&self, cart: &Cart) {
        self.inner.products_tx.send_replace(cart.items().to_vec());
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use market_storage::MemoryStore;

    fn product(id: &str, price: f64) -> ProductDescriptor {
        ProductDescriptor::new(
            id,
            format!("Product {}", id),
            format!("https://img.example/{}.png", id),
            price,
        )
    }

    fn store_over(memory: &MemoryStore) -> CartStore {
        CartStore::new(Arc::new(memory.clone()))
    }

    async fn stored_cart(memory: &MemoryStore) -> Option<Cart> {
        memory
            .get_item(CART_STORAGE_KEY)
            .await
            .unwrap()
            .map(|raw| Cart::from_snapshot(&raw).unwrap())
    }

    #[tokio::test]
    async fn test_starts_empty_and_unloaded() {
        let store = store_over(&MemoryStore::new());

        assert!(store.products().is_empty());
        assert!(!store.is_loaded());
        assert_eq!(store.load_state(), LoadState::Loading);
    }

    #[tokio::test]
    async fn test_initialize_without_snapshot() {
        let memory = MemoryStore::new();
        let store = store_over(&memory);

        store.initialize().await.unwrap();

        assert!(store.is_loaded());
        assert!(store.products().is_empty());
        assert_eq!(memory.write_count(), 0);
    }

    #[tokio::test]
    async fn test_scenario_add_increment_decrement() {
        let memory = MemoryStore::new();
        let store = store_over(&memory);
        store.initialize().await.unwrap();

        let items = store.add_to_cart(product("p1", 10.0)).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 1);

        let items = store.increment("p1").await.unwrap();
        assert_eq!(items[0].quantity, 2);

        let items = store.decrement("p1").await.unwrap();
        assert_eq!(items[0].quantity, 1);

        let items = store.decrement("p1").await.unwrap();
        assert!(items.is_empty());
        assert!(stored_cart(&memory).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_repeated_adds_accumulate() {
        let store = store_over(&MemoryStore::new());

        for _ in 0..4 {
            store.add_to_cart(product("p1", 10.0)).await.unwrap();
        }

        let items = store.products();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 4);
        assert_eq!(store.total_quantity(), 4);
    }

    #[tokio::test]
    async fn test_every_change_is_written_through() {
        let memory = MemoryStore::new();
        let store = store_over(&memory);

        store.add_to_cart(product("p1", 10.0)).await.unwrap();
        store.add_to_cart(product("p2", 3.0)).await.unwrap();
        store.increment("p2").await.unwrap();

        let stored = stored_cart(&memory).await.unwrap();
        assert_eq!(stored.items(), store.products().as_slice());
        assert_eq!(memory.write_count(), 3);
    }

    #[tokio::test]
    async fn test_absent_id_skips_write() {
        let memory = MemoryStore::new();
        let store = store_over(&memory);
        store.add_to_cart(product("p1", 10.0)).await.unwrap();
        let before = store.products();

        assert_eq!(store.increment("ghost").await.unwrap(), before);
        assert_eq!(store.decrement("ghost").await.unwrap(), before);
        assert_eq!(memory.write_count(), 1);
    }

    #[tokio::test]
    async fn test_restart_restores_cart() {
        let memory = MemoryStore::new();
        let first = store_over(&memory);
        first.add_to_cart(product("p1", 10.0)).await.unwrap();
        first.add_to_cart(product("p2", 19.9)).await.unwrap();
        first.increment("p1").await.unwrap();

        let second = store_over(&memory);
        second.initialize().await.unwrap();

        assert_eq!(second.products(), first.products());
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_resets_by_default() {
        let memory = MemoryStore::new();
        memory.set_item(CART_STORAGE_KEY, "not json").await.unwrap();
        let store = store_over(&memory);

        store.initialize().await.unwrap();

        assert!(store.is_loaded());
        assert!(store.products().is_empty());
        assert!(memory.get_item(CART_STORAGE_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_fails_when_configured() {
        let memory = MemoryStore::new();
        memory.set_item(CART_STORAGE_KEY, "{").await.unwrap();
        let store = CartStore::with_options(
            Arc::new(memory.clone()),
            CartOptions::default().on_corrupt(CorruptionPolicy::Fail),
        );

        let result = store.initialize().await;

        assert!(matches!(result, Err(CartError::CorruptSnapshot(_))));
        assert!(!store.is_loaded());
        assert_eq!(
            memory.get_item(CART_STORAGE_KEY).await.unwrap().as_deref(),
            Some("{")
        );
    }

    #[tokio::test]
    async fn test_read_failure_starts_empty() {
        let memory = MemoryStore::new();
        memory.set_fail_reads(true);
        let store = store_over(&memory);

        store.initialize().await.unwrap();

        assert!(store.is_loaded());
        assert!(store.products().is_empty());
    }

    #[tokio::test]
    async fn test_write_failure_keeps_memory_state() {
        let memory = MemoryStore::new();
        let store = store_over(&memory);
        memory.set_fail_writes(true);

        let items = store.add_to_cart(product("p1", 10.0)).await.unwrap();
        assert_eq!(items.len(), 1);
        assert!(stored_cart(&memory).await.is_none());

        // Next successful write re-syncs the snapshot.
        memory.set_fail_writes(false);
        store.increment("p1").await.unwrap();
        assert_eq!(
            stored_cart(&memory).await.unwrap().get("p1").unwrap().quantity,
            2
        );
    }

    #[tokio::test]
    async fn test_invalid_descriptor_is_rejected() {
        let memory = MemoryStore::new();
        let store = store_over(&memory);

        let result = store.add_to_cart(product("", 1.0)).await;

        assert!(matches!(result, Err(CartError::Core(_))));
        assert_eq!(memory.write_count(), 0);
    }

    #[tokio::test]
    async fn test_initialize_runs_once() {
        let memory = MemoryStore::new();
        let store = store_over(&memory);
        store.initialize().await.unwrap();
        store.add_to_cart(product("p1", 10.0)).await.unwrap();

        // A stale value must not replace the live cart on a second call.
        memory.set_item(CART_STORAGE_KEY, "[]").await.unwrap();
        store.initialize().await.unwrap();

        assert_eq!(store.item_count(), 1);
    }

    #[tokio::test]
    async fn test_subscribers_see_changes() {
        let store = store_over(&MemoryStore::new());
        let mut rx = store.subscribe();

        store.add_to_cart(product("p1", 10.0)).await.unwrap();

        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_mutations_are_serialized() {
        let memory = MemoryStore::new();
        let store = store_over(&memory);

        let mut tasks = Vec::new();
        for _ in 0..20 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                store.add_to_cart(product("p1", 10.0)).await.unwrap();
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(store.products()[0].quantity, 20);
        assert_eq!(
            stored_cart(&memory).await.unwrap().get("p1").unwrap().quantity,
            20
        );
    }

    #[tokio::test]
    async fn test_custom_storage_key() {
        let memory = MemoryStore::new();
        let store = CartStore::with_options(
            Arc::new(memory.clone()),
            CartOptions::default().storage_key("@Test:cart"),
        );

        store.add_to_cart(product("p1", 1.0)).await.unwrap();

        assert!(memory.get_item("@Test:cart").await.unwrap().is_some());
        assert!(memory.get_item(CART_STORAGE_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_mutation_before_initialize_loads_stored_cart() {
        let memory = MemoryStore::new();
        let earlier = store_over(&memory);
        earlier.add_to_cart(product("old", 5.0)).await.unwrap();
        earlier.increment("old").await.unwrap();

        let store = store_over(&memory);
        let items = store.add_to_cart(product("p1", 10.0)).await.unwrap();

        assert!(store.is_loaded());
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "old");
        assert_eq!(items[0].quantity, 2);
        let stored = stored_cart(&memory).await.unwrap();
        assert_eq!(stored.get("old").unwrap().quantity, 2);
        assert_eq!(stored.get("p1").unwrap().quantity, 1);
    }

    #[tokio::test]
    async fn test_mutation_under_fail_policy_keeps_corrupt_value() {
        let memory = MemoryStore::new();
        memory.set_item(CART_STORAGE_KEY, "{").await.unwrap();
        let store = CartStore::with_options(
            Arc::new(memory.clone()),
            CartOptions::default().on_corrupt(CorruptionPolicy::Fail),
        );

        let result = store.add_to_cart(product("p1", 10.0)).await;

        assert!(matches!(result, Err(CartError::CorruptSnapshot(_))));
        assert!(store.products().is_empty());
        assert_eq!(memory.write_count(), 1);
        assert_eq!(
            memory.get_item(CART_STORAGE_KEY).await.unwrap().as_deref(),
            Some("{")
        );
    }

    #[tokio::test]
    async fn test_wait_loaded_reports_failed_load() {
        let memory = MemoryStore::new();
        memory.set_fail_reads(true);
        let store = CartStore::with_options(
            Arc::new(memory.clone()),
            CartOptions::default().on_corrupt(CorruptionPolicy::Fail),
        );

        assert!(store.initialize().await.is_err());

        assert!(matches!(store.load_state(), LoadState::Failed(_)));
        assert!(matches!(
            store.wait_loaded().await,
            Err(CartError::LoadFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_failed_load_can_be_retried() {
        let memory = MemoryStore::new();
        memory.set_fail_reads(true);
        let store = CartStore::with_options(
            Arc::new(memory.clone()),
            CartOptions::default().on_corrupt(CorruptionPolicy::Fail),
        );
        assert!(store.initialize().await.is_err());

        memory.set_fail_reads(false);
        store.initialize().await.unwrap();

        assert_eq!(store.load_state(), LoadState::Loaded);
        assert!(store.wait_loaded().await.is_ok());
    }

    #[tokio::test]
    async fn test_read_failure_is_retried_before_first_write() {
        let memory = MemoryStore::new();
        store_over(&memory)
            .add_to_cart(product("old", 5.0))
            .await
            .unwrap();
        memory.set_fail_reads(true);
        let store = store_over(&memory);
        store.initialize().await.unwrap();
        assert!(store.products().is_empty());

        memory.set_fail_reads(false);
        let items = store.add_to_cart(product("p1", 10.0)).await.unwrap();

        assert_eq!(items.len(), 2);
        assert!(stored_cart(&memory).await.unwrap().get("old").is_some());
    }

    #[tokio::test]
    async fn test_unreadable_cart_is_replaced_under_reset() {
        let memory = MemoryStore::new();
        memory.set_fail_reads(true);
        let store = store_over(&memory);
        store.initialize().await.unwrap();

        let items = store.add_to_cart(product("p1", 10.0)).await.unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(memory.write_count(), 1);
    }

    #[test]
    fn test_corruption_policy_from_str() {
        assert_eq!(
            "reset".parse::<CorruptionPolicy>().unwrap(),
            CorruptionPolicy::Reset
        );
        assert_eq!(
            "FAIL".parse::<CorruptionPolicy>().unwrap(),
            CorruptionPolicy::Fail
        );
        assert!("ignore".parse::<CorruptionPolicy>().is_err());
    }
}
