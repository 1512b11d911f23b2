//! Persistent key-value store for the storefront.
//!
//! The storefront keeps its catalog and cart in a process-external key-value
//! store (browser local storage in the original app). This crate models that
//! store as an injected [`KeyValueStore`] and layers a typed JSON [`Cache`] on
//! top of it.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use storefront_cache::{Cache, MemoryStore};
//!
//! let cache = Cache::new(Arc::new(MemoryStore::new()));
//!
//! // Store a value
//! cache.set("cart", &lines)?;
//!
//! // Missing or corrupt values read back as the default
//! let lines: Vec<CartLine> = cache.get_or_default("cart");
//! ```

mod error;
mod kv;
mod store;

pub use error::CacheError;
pub use kv::Cache;
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KeyValueStore, MemoryStore};
}
