//! # Cart Rules
//!
//! The ordered, id-unique collection of line items and the rules that
//! mutate it.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operation        Item present                 Item absent              │
//! │  ─────────        ────────────                 ───────────              │
//! │  add(product)     quantity += 1                push {quantity: 1}       │
//! │  increment(id)    quantity += 1                unchanged                │
//! │  decrement(id)    qty > 1: quantity -= 1       unchanged                │
//! │                   qty = 1: remove item                                  │
//! │  remove(id)       remove item                  unchanged                │
//! │  clear()          empty cart                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Format
//! A cart serializes as a bare JSON array of line items, the same blob the
//! mobile client keeps under [`CART_STORAGE_KEY`](crate::CART_STORAGE_KEY).

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::types::{LineItem, ProductDescriptor};
use crate::validation::validate_descriptor;

/// What a mutation did to the cart.
///
/// Callers use this to decide whether a persistence write is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    /// A new line item was appended with quantity 1.
    Added,
    /// An existing item's quantity went up to the contained value.
    Incremented(u32),
    /// An existing item's quantity went down to the contained value.
    Decremented(u32),
    /// An item left the cart.
    Removed,
    /// Every item left the cart.
    Cleared,
    /// The id was not in the cart; nothing happened.
    Unchanged,
}

impl CartChange {
    /// Returns true if the cart contents differ from before the call.
    pub fn is_changed(&self) -> bool {
        !matches!(self, CartChange::Unchanged)
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `id` (adding the same product increases quantity)
/// - Every present item has `quantity >= 1`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Builds a cart from existing items, checking the invariants.
    pub fn from_items(items: Vec<LineItem>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.quantity == 0 {
                return Err(CoreError::InvalidSnapshot(format!(
                    "item {} has quantity 0",
                    item.id
                )));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(CoreError::InvalidSnapshot(format!(
                    "duplicate item id {}",
                    item.id
                )));
            }
        }

        Ok(Cart { items })
    }

    /// Decodes a persisted snapshot.
    ///
    /// ## Errors
    /// - [`CoreError::MalformedSnapshot`] if the text is not a JSON list of items
    /// - [`CoreError::InvalidSnapshot`] if the list breaks a cart invariant
    pub fn from_snapshot(snapshot: &str) -> CoreResult<Self> {
        let items: Vec<LineItem> = serde_json::from_str(snapshot)
            .map_err(|e| CoreError::MalformedSnapshot(e.to_string()))?;
        Cart::from_items(items)
    }

    /// Encodes the cart as the snapshot string written to storage.
    pub fn to_snapshot(&self) -> CoreResult<String> {
        serde_json::to_string(&self.items).map_err(|e| CoreError::Serialization(e.to_string()))
    }

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - If the product is already in the cart: increases quantity by 1
    /// - Otherwise: appends a new item with quantity 1
    ///
    /// The stored title, image and price are left as first added.
    pub fn add(&mut self, product: &ProductDescriptor) -> CoreResult<CartChange> {
        validate_descriptor(product)?;

        if let Some(item) = self.items.iter_mut().find(|i| i.id == product.id) {
            item.quantity = item.quantity.saturating_add(1);
            return Ok(CartChange::Incremented(item.quantity));
        }

        self.items.push(LineItem::from_descriptor(product));
        Ok(CartChange::Added)
    }

    /// Increases the quantity of an item by one.
    pub fn increment(&mut self, id: &str) -> CartChange {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(1);
                CartChange::Incremented(item.quantity)
            }
            None => CartChange::Unchanged,
        }
    }

    /// Decreases the quantity of an item by one, removing it at zero.
    pub fn decrement(&mut self, id: &str) -> CartChange {
        let Some(index) = self.position(id) else {
            return CartChange::Unchanged;
        };

        if self.items[index].quantity <= 1 {
            self.items.remove(index);
            return CartChange::Removed;
        }

        let item = &mut self.items[index];
        item.quantity -= 1;
        CartChange::Decremented(item.quantity)
    }

    /// Removes an item regardless of its quantity.
    pub fn remove(&mut self, id: &str) -> CartChange {
        match self.position(id) {
            Some(index) => {
                self.items.remove(index);
                CartChange::Removed
            }
            None => CartChange::Unchanged,
        }
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) -> CartChange {
        if self.items.is_empty() {
            return CartChange::Unchanged;
        }
        self.items.clear();
        CartChange::Cleared
    }

    /// Returns the items in display order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Looks up an item by id.
    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Returns the number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
