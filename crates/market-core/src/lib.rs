//! # market-core: Pure Cart Rules for GoMarketplace
//!
//! This crate holds the cart data model and the rules that mutate it, as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     GoMarketplace Cart Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Storefront UI (mobile client)                   │   │
//! │  │     Dashboard ──► Product list ──► Cart screen                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CartStore                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            market-cart (CartStore, CartProvider)                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ market-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │   cart    │  │ validation│                  │   │
//! │  │   │ LineItem  │  │   Cart    │  │  checks   │                  │   │
//! │  │   │Descriptor │  │  rules    │  │           │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              market-storage (key-value persistence)             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Line items and product descriptors
//! - [`cart`] - The ordered, id-unique cart and its mutation rules
//! - [`error`] - Domain error types
//! - [`validation`] - Descriptor validation
//!
//! ## Example Usage
//!
//! ```rust
//! use market_core::{Cart, ProductDescriptor};
//!
//! let mut cart = Cart::new();
//! let shoe = ProductDescriptor::new("p1", "Running shoe", "https://img/p1.png", 10.0);
//!
//! cart.add(&shoe).unwrap();
//! cart.add(&shoe).unwrap();
//!
//! assert_eq!(cart.len(), 1);
//! assert_eq!(cart.get("p1").unwrap().quantity, 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartChange};
pub use error::{CoreError, CoreResult, ValidationError};
pub use types::{LineItem, ProductDescriptor};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Storage key under which the whole cart snapshot is persisted.
///
/// Shared with the mobile client, so existing carts survive the move.
pub const CART_STORAGE_KEY: &str = "@GoMarketplace:cart";

/// Maximum length of a product id accepted into the cart.
pub const MAX_ID_LENGTH: usize = 128;
