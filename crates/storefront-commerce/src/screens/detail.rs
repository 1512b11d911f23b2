//! Product detail screen.

use std::sync::Arc;

use crate::cart::{CartLine, CartStore};
use crate::catalog::{CatalogCache, Product};
use crate::detail::{resolve_product, ProductLookup};
use crate::error::CommerceError;

/// A single product, resolved from the cached catalog.
pub struct ProductDetailScreen {
    catalog: CatalogCache,
    cart: Arc<CartStore>,
    lookup: ProductLookup,
}

impl ProductDetailScreen {
    /// Create a screen with nothing resolved.
    pub fn new(catalog: CatalogCache, cart: Arc<CartStore>) -> Self {
        Self {
            catalog,
            cart,
            lookup: ProductLookup::CatalogNotLoaded,
        }
    }

    /// Resolve the route id. Re-run whenever the id changes.
    pub fn open(&mut self, raw_id: &str) -> &ProductLookup {
        self.lookup = resolve_product(&self.catalog, raw_id);
        &self.lookup
    }

    /// The resolved product, if any.
    pub fn product(&self) -> Option<&Product> {
        self.lookup.product()
    }

    /// "Add to Cart" on the shown product. `None` while nothing is resolved.
    pub fn add_to_cart(&self) -> Result<Option<CartLine>, CommerceError> {
        self.product()
            .map(|product| self.cart.add_to_cart(product))
            .transpose()
    }
}
