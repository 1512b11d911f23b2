//! Client-side catalog and cart state for the storefront.
//!
//! - **Catalog**: products synthesized from a placeholder post source, cached
//!   in the persistent store
//! - **Search**: case-insensitive filtering and 1-based pagination over the
//!   in-memory catalog
//! - **Cart**: find-or-increment cart lines persisted as JSON
//! - **Detail**: product lookup against the cached catalog
//! - **Screens**: headless models of the list, detail and cart screens
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use storefront_cache::MemoryStore;
//! use storefront_commerce::prelude::*;
//!
//! let shop = Storefront::from_config(StorefrontConfig::default(), Arc::new(MemoryStore::new()));
//!
//! let mut list = shop.list_screen();
//! list.mount().await;
//! list.view_mut().set_search("elect");
//! for product in list.view().page_view().items {
//!     println!("{} ${}", product.display_title(), product.price);
//! }
//!
//! let first = list.view().page_view().items[0].id;
//! list.add_to_cart(first)?;
//! ```

pub mod config;
pub mod error;
pub mod ids;

pub mod cart;
pub mod catalog;
pub mod detail;
pub mod screens;
pub mod search;

mod storefront;

pub use config::{StoreKeys, StorefrontConfig, SynthesisMode};
pub use error::CommerceError;
pub use ids::ProductId;
pub use storefront::Storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{StoreKeys, StorefrontConfig, SynthesisMode};
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::storefront::Storefront;

    // Catalog
    pub use crate::catalog::{
        CatalogCache, CatalogLoader, Category, HttpItemSource, ItemSource, Liveness,
        LoadOutcome, Product, SourcePost, Synthesizer, PRICE_MAX, PRICE_MIN,
    };

    // Search
    pub use crate::search::{CatalogView, Layout, PageView, Pagination};

    // Cart
    pub use crate::cart::{CartLine, CartStore, CartSummary};

    // Detail
    pub use crate::detail::{resolve_product, ProductLookup};

    // Screens
    pub use crate::screens::{CartScreen, OrderSummary, ProductDetailScreen, ProductListScreen};
}
