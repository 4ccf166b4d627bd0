//! # Cart Commands
//!
//! Cart manipulation from the command line.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐  add_to_cart   ┌──────────┐  decrement (qty 1)            │
//! │  │  Empty   │───────────────►│ In Cart  │──────────────────┐            │
//! │  │  Cart    │                │          │◄─┐               │            │
//! │  └──────────┘                └──────────┘  │ increment     │            │
//! │       ▲                           │  │     │ add_to_cart   ▼            │
//! │       │        clear_cart         │  └─────┘         item dropped       │
//! │       └───────────────────────────┘                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `get_cart` loads the persisted cart if nothing has yet; the mutations
//! load it themselves before their first write.

use market_cart::use_cart;
use market_core::{LineItem, ProductDescriptor};
use serde::Serialize;
use tracing::debug;

use crate::error::CliError;

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<LineItem>,
    pub totals: CartTotals,
}

/// Aggregate counts over the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Distinct products
    pub item_count: usize,

    /// Sum of quantities
    pub total_quantity: u64,
}

impl From<Vec<LineItem>> for CartResponse {
    fn from(items: Vec<LineItem>) -> Self {
        let totals = CartTotals {
            item_count: items.len(),
            total_quantity: items.iter().map(|i| u64::from(i.quantity)).sum(),
        };
        CartResponse { items, totals }
    }
}

/// Gets the current cart contents.
pub async fn get_cart() -> Result<CartResponse, CliError> {
    debug!("get_cart command");
    let cart = use_cart()?;
    cart.initialize().await?;
    Ok(cart.products().into())
}

/// Adds one unit of a product to the cart.
///
/// ## Behavior
/// - Product already in cart: quantity goes up by one
/// - Product not in cart: appended with quantity 1
/// - Title, image and price of an existing line are left as first added
pub async fn add_to_cart(product: ProductDescriptor) -> Result<CartResponse, CliError> {
    debug!(id = %product.id, "add_to_cart command");
    let cart = use_cart()?;
    Ok(cart.add_to_cart(product).await?.into())
}

/// Adds one to an item's quantity.
pub async fn increment(id: String) -> Result<CartResponse, CliError> {
    debug!(id = %id, "increment command");
    let cart = use_cart()?;
    Ok(cart.increment(&id).await?.into())
}

/// Takes one from an item's quantity; the item leaves the cart at zero.
pub async fn decrement(id: String) -> Result<CartResponse, CliError> {
    debug!(id = %id, "decrement command");
    let cart = use_cart()?;
    Ok(cart.decrement(&id).await?.into())
}

/// Removes an item from the cart.
pub async fn remove_from_cart(id: String) -> Result<CartResponse, CliError> {
    debug!(id = %id, "remove_from_cart command");
    let cart = use_cart()?;
    Ok(cart.remove(&id).await?.into())
}

/// Clears the cart.
pub async fn clear_cart() -> Result<CartResponse, CliError> {
    debug!("clear_cart command");
    let cart = use_cart()?;
    Ok(cart.clear().await?.into())
}
