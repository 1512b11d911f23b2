//! Cart persistence.

use std::sync::Mutex;

use storefront_cache::Cache;

use crate::cart::{add_line, CartLine, CartSummary};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;

/// The cart held under the cart key.
///
/// Every mutation is one read-modify-write of the whole line list. Reads are
/// lenient: a missing or unparseable value is an empty cart. Writers in this
/// process are serialized; writers in other processes are not.
pub struct CartStore {
    cache: Cache,
    key: String,
    write_lock: Mutex<()>,
}

impl CartStore {
    /// Bind to `key` in `cache`.
    pub fn new(cache: Cache, key: impl Into<String>) -> Self {
        Self {
            cache,
            key: key.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Current cart lines.
    pub fn lines(&self) -> Vec<CartLine> {
        self.cache.get_or_default(&self.key)
    }

    /// Totals for the current cart.
    pub fn summary(&self) -> CartSummary {
        CartSummary::of(&self.lines())
    }

    /// Add one unit of `product`. Returns the updated line.
    pub fn add_to_cart(&self, product: &Product) -> Result<CartLine, CommerceError> {
        let line = self.modify(|lines| {
            let index = add_line(lines, product);
            lines[index].clone()
        })?;
        tracing::debug!(id = %line.id(), quantity = line.quantity, "added to cart");
        Ok(line)
    }

    /// Drop the line for `id`. Returns whether a line was removed.
    pub fn remove(&self, id: ProductId) -> Result<bool, CommerceError> {
        self.modify(|lines| {
            let before = lines.len();
            lines.retain(|line| line.id() != id);
            lines.len() < before
        })
    }

    /// Empty the cart, returning the lines it held.
    pub fn clear(&self) -> Result<Vec<CartLine>, CommerceError> {
        self.modify(std::mem::take)
    }

    fn modify<T, F>(&self, f: F) -> Result<T, CommerceError>
    where
        F: FnOnce(&mut Vec<CartLine>) -> T,
    {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| CommerceError::CacheError("cart lock poisoned".to_string()))?;
        let mut lines = self.lines();
        let result = f(&mut lines);
        self.cache.set(&self.key, &lines)?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use std::sync::Arc;
    use storefront_cache::{KeyValueStore, MemoryStore};

    fn store() -> CartStore {
        CartStore::new(Cache::new(Arc::new(MemoryStore::new())), "cart")
    }

    fn product(id: u64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("p{}", id),
            price: 40,
            category: Category::Home,
            image: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn test_empty_cart() {
        let store = store();
        assert!(store.lines().is_empty());
        assert_eq!(store.summary(), CartSummary::default());
    }

    #[test]
    fn test_add_twice_same_id() {
        let store = store();
        store.add_to_cart(&product(1)).unwrap();
        let line = store.add_to_cart(&product(1)).unwrap();
        assert_eq!(line.quantity, 2);

        let lines = store.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 2);
    }

    #[test]
    fn test_add_distinct_ids() {
        let store = store();
        store.add_to_cart(&product(1)).unwrap();
        store.add_to_cart(&product(2)).unwrap();
        let lines = store.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.quantity == 1));
    }

    #[test]
    fn test_corrupt_cart_treated_as_empty() {
        let raw = Arc::new(MemoryStore::new());
        raw.set("cart", "definitely not json").unwrap();
        let store = CartStore::new(Cache::new(raw), "cart");
        assert!(store.lines().is_empty());

        let line = store.add_to_cart(&product(3)).unwrap();
        assert_eq!(line.quantity, 1);
        assert_eq!(store.lines().len(), 1);
    }

    #[test]
    fn test_remove_and_clear() {
        let store = store();
        store.add_to_cart(&product(1)).unwrap();
        store.add_to_cart(&product(2)).unwrap();

        assert!(store.remove(ProductId::new(1)).unwrap());
        assert!(!store.remove(ProductId::new(1)).unwrap());
        assert_eq!(store.lines().len(), 1);

        let cleared = store.clear().unwrap();
        assert_eq!(cleared.len(), 1);
        assert!(store.lines().is_empty());
    }

    #[test]
    fn test_concurrent_adds_are_not_lost() {
        let store = Arc::new(store());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        store.add_to_cart(&product(1)).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.lines()[0].quantity, 200);
    }
}
