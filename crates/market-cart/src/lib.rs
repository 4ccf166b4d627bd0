//! # market-cart: Cart State Container
//!
//! Holds the storefront cart in memory, mirrors every change to a
//! [`KeyValueStore`](market_storage::KeyValueStore) and exposes the cart to
//! the rest of the application.
//!
//! ## Module Organization
//! ```text
//! market_cart/
//! ├── store.rs     ◄─── CartStore: load, add, increment, decrement, subscribe
//! ├── provider.rs  ◄─── CartProvider scope + use_cart()
//! └── error.rs     ◄─── CartError
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! use std::sync::Arc;
//! use market_cart::{use_cart, CartProvider, CartStore};
//! use market_storage::MemoryStore;
//!
//! let store = CartStore::new(Arc::new(MemoryStore::new()));
//! CartProvider::mount(store, async {
//!     let cart = use_cart()?;
//!     cart.wait_loaded().await?;
//!     cart.add_to_cart(product).await?;
//!     Ok::<_, market_cart::CartError>(())
//! })
//! .await?;
//! ```

pub mod error;
pub mod provider;
pub mod store;

pub use error::{CartError, CartResult};
pub use provider::{use_cart, CartProvider};
pub use store::{CartOptions, CartStore, CorruptionPolicy, LoadState};
