//! # Domain Types
//!
//! The two shapes a product takes on its way into the cart.
//!
//! ```text
//! ┌──────────────────────┐   add_to_cart   ┌──────────────────────┐
//! │  ProductDescriptor   │ ──────────────► │      LineItem        │
//! │  ──────────────────  │                 │  ──────────────────  │
//! │  id                  │                 │  id                  │
//! │  title               │                 │  title               │
//! │  image_url           │                 │  image_url           │
//! │  price               │                 │  price               │
//! └──────────────────────┘                 │  quantity (≥ 1)      │
//!                                          └──────────────────────┘
//! ```
//!
//! ## Wire Format
//! Field names are kept snake_case (`image_url`) so snapshots written by the
//! mobile client load unchanged.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Product Descriptor
// =============================================================================

/// A catalog product as handed to the cart, before it has a quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductDescriptor {
    /// Catalog identifier, the join key between cart and catalog.
    pub id: String,

    /// Display name.
    pub title: String,

    /// Display image reference.
    pub image_url: String,

    /// Unit price as shown in the catalog.
    pub price: f64,
}

impl ProductDescriptor {
    /// Creates a descriptor from its parts.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        image_url: impl Into<String>,
        price: f64,
    ) -> Self {
        ProductDescriptor {
            id: id.into(),
            title: title.into(),
            image_url: image_url.into(),
            price,
        }
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One product in the cart with its quantity.
///
/// ## Invariant
/// `quantity >= 1` while the item is in a cart. [`Cart`](crate::Cart) removes
/// an item instead of letting it reach zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub price: f64,
    pub quantity: u32,
}

impl LineItem {
    /// Creates a line item holding a single unit of the product.
    pub fn from_descriptor(product: &ProductDescriptor) -> Self {
        LineItem {
            id: product.id.clone(),
            title: product.title.clone(),
            image_url: product.image_url.clone(),
            price: product.price,
            quantity: 1,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
