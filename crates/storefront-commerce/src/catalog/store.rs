//! Catalog cache in the persistent store.

use storefront_cache::Cache;

use crate::catalog::Product;
use crate::error::CommerceError;

/// The product list held under the catalog key.
#[derive(Clone)]
pub struct CatalogCache {
    cache: Cache,
    key: String,
}

impl CatalogCache {
    /// Bind to `key` in `cache`.
    pub fn new(cache: Cache, key: impl Into<String>) -> Self {
        Self {
            cache,
            key: key.into(),
        }
    }

    /// Store key in use.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Replace the cached catalog wholesale.
    pub fn save(&self, products: &[Product]) -> Result<(), CommerceError> {
        self.cache.set(&self.key, products)?;
        Ok(())
    }

    /// Read the cached catalog.
    ///
    /// `None` when nothing usable is stored: the key is missing, the value
    /// does not parse, or the store cannot be read.
    pub fn load(&self) -> Option<Vec<Product>> {
        match self.cache.get::<Vec<Product>>(&self.key) {
            Ok(products) => products,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "ignoring unreadable catalog");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::ids::ProductId;
    use std::sync::Arc;
    use storefront_cache::{KeyValueStore, MemoryStore};

    fn catalog() -> CatalogCache {
        CatalogCache::new(Cache::new(Arc::new(MemoryStore::new())), "products")
    }

    fn product(id: u64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("p{}", id),
            price: 20,
            category: Category::Home,
            image: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn test_empty_store_is_none() {
        assert!(catalog().load().is_none());
    }

    #[test]
    fn test_save_replaces_wholesale() {
        let catalog = catalog();
        catalog.save(&[product(1), product(2)]).unwrap();
        catalog.save(&[product(3)]).unwrap();
        assert_eq!(catalog.load().unwrap(), vec![product(3)]);
    }

    #[test]
    fn test_corrupt_value_is_none() {
        let store = Arc::new(MemoryStore::new());
        store.set("products", "[{").unwrap();
        let catalog = CatalogCache::new(Cache::new(store), "products");
        assert!(catalog.load().is_none());
    }
}
