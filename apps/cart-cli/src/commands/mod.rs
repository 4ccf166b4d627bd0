//! # Cart Commands Module
//!
//! Every subcommand the CLI exposes.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── cart.rs     ◄─── list, add, increment, decrement, remove, clear
//! └── config.rs   ◄─── Effective configuration
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  gomarket-cart add --id p1 --title Mug --image-url ... --price 12      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  CartProvider::scope(store, async {                                     │
//! │      commands::cart::add_to_cart(product).await   ◄── use_cart() inside │
//! │  })                                                                     │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  stdout: { "items": [...], "totals": {...} }                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands take no store argument; they reach the cart through
//! [`market_cart::use_cart`] and fail with `PROVIDER_MISSING` when run
//! outside a provider.

pub mod cart;
pub mod config;
