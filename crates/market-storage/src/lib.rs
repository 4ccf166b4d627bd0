//! # market-storage: Key-Value Persistence for GoMarketplace
//!
//! This crate provides the durable key-value store the cart mirrors itself
//! into. A single key holds a whole serialized value; there are no partial
//! updates, no indexing, no TTL.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      GoMarketplace Data Flow                            │
//! │                                                                         │
//! │  CartStore::add_to_cart                                                │
//! │       │  set_item("@GoMarketplace:cart", "[...]")                      │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 market-storage (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ KeyValueStore │    │  MemoryStore  │    │ SqliteStore  │  │   │
//! │  │   │   (trait)     │◄───│  (tests,      │    │ (pool +      │  │   │
//! │  │   │               │◄───│   ephemeral)  │    │  migrations) │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   key_value_store(key, value, updated_at)                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`kv`] - The `KeyValueStore` trait
//! - [`memory`] - In-memory backend
//! - [`sqlite`] - SQLite backend and its configuration
//! - [`migrations`] - Embedded schema migrations
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use market_storage::{KeyValueStore, SqliteStore, StorageConfig};
//!
//! let store = SqliteStore::connect(StorageConfig::new("cart.db")).await?;
//! store.set_item("greeting", "hello").await?;
//! assert_eq!(store.get_item("greeting").await?.as_deref(), Some("hello"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod kv;
pub mod memory;
pub mod migrations;
pub mod sqlite;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StorageError, StorageResult};
pub use kv::KeyValueStore;
pub use memory::MemoryStore;
pub use sqlite::{SqliteStore, StorageConfig};
