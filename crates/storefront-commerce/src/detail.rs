//! Product detail resolution.
//!
//! The detail screen never triggers a load. It reads whatever catalog the
//! list screen last cached, so a deep link opened before any list load finds
//! nothing. The two kinds of miss are kept apart, but both are placeholder
//! states and never errors.

use crate::catalog::{CatalogCache, Product};
use crate::ids::ProductId;

/// Outcome of looking up a product by its route id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductLookup {
    /// The product is in the cached catalog.
    Found(Product),
    /// No usable catalog is cached yet.
    CatalogNotLoaded,
    /// The catalog is cached but has no product with this id, or the id is
    /// not a valid product id.
    NotFound,
}

impl ProductLookup {
    /// The product, if found.
    pub fn product(&self) -> Option<&Product> {
        match self {
            ProductLookup::Found(product) => Some(product),
            _ => None,
        }
    }
}

/// Resolve the `id` route parameter against the cached catalog.
pub fn resolve_product(catalog: &CatalogCache, raw_id: &str) -> ProductLookup {
    let Some(products) = catalog.load() else {
        tracing::debug!(raw_id, "catalog not cached yet");
        return ProductLookup::CatalogNotLoaded;
    };

    let Ok(id) = raw_id.parse::<ProductId>() else {
        tracing::debug!(raw_id, "route id is not a product id");
        return ProductLookup::NotFound;
    };

    products
        .into_iter()
        .find(|p| p.id == id)
        .map(ProductLookup::Found)
        .unwrap_or(ProductLookup::NotFound)
}
