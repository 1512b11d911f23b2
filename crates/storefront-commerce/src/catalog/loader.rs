//! Catalog loading.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::catalog::{CatalogCache, ItemSource, Product, Synthesizer};
use crate::error::CommerceError;

/// Liveness token for a mounted screen.
///
/// Clones share state. Once revoked, results of in-flight loads are discarded
/// rather than applied to the screen.
#[derive(Debug, Clone)]
pub struct Liveness {
    alive: Arc<AtomicBool>,
}

impl Liveness {
    /// A live token.
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Mark the owner as gone.
    pub fn revoke(&self) {
        self.alive.store(false, Ordering::Release);
    }

    /// Whether results may still be applied.
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a guarded catalog load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Fresh catalog, ready to apply.
    Loaded(Vec<Product>),
    /// The load failed; the error was already logged.
    Failed,
    /// The owner unmounted while the fetch was in flight.
    Superseded,
}

/// Fetches source records, synthesizes products, and caches the catalog.
pub struct CatalogLoader {
    source: Arc<dyn ItemSource>,
    synthesizer: Synthesizer,
    catalog: CatalogCache,
    limit: usize,
}

impl CatalogLoader {
    /// Create a loader keeping at most `limit` source records.
    pub fn new(
        source: Arc<dyn ItemSource>,
        synthesizer: Synthesizer,
        catalog: CatalogCache,
        limit: usize,
    ) -> Self {
        Self {
            source,
            synthesizer,
            catalog,
            limit,
        }
    }

    /// Fetch and synthesize a fresh catalog, overwriting the cached one.
    ///
    /// Nothing is written when the fetch fails.
    pub async fn load_catalog(&self) -> Result<Vec<Product>, CommerceError> {
        let posts = self.source.fetch_posts().await?;
        let fetched = posts.len();

        let products: Vec<Product> = posts
            .iter()
            .take(self.limit)
            .map(|post| self.synthesizer.synthesize(post))
            .collect();

        self.catalog.save(&products)?;
        tracing::info!(
            fetched,
            kept = products.len(),
            key = self.catalog.key(),
            "catalog loaded"
        );
        Ok(products)
    }

    /// Load on behalf of a screen, swallowing errors.
    ///
    /// Failures are logged and reported as [`LoadOutcome::Failed`]. A result
    /// arriving after `liveness` was revoked is reported as
    /// [`LoadOutcome::Superseded`] and must not be applied.
    pub async fn load_checked(&self, liveness: &Liveness) -> LoadOutcome {
        let result = self.load_catalog().await;

        if !liveness.is_alive() {
            tracing::debug!("discarding catalog load for unmounted screen");
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(products) => LoadOutcome::Loaded(products),
            Err(e) => {
                tracing::error!(error = %e, "error fetching products");
                LoadOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, SourcePost};
    use crate::config::SynthesisMode;
    use crate::ids::ProductId;
    use async_trait::async_trait;
    use storefront_cache::{Cache, MemoryStore};
    use storefront_data::FetchError;

    struct FixedSource {
        count: u64,
        revoke: Option<Liveness>,
    }

    #[async_trait]
    impl ItemSource for FixedSource {
        async fn fetch_posts(&self) -> Result<Vec<SourcePost>, FetchError> {
            if let Some(liveness) = &self.revoke {
                liveness.revoke();
            }
            Ok((1..=self.count)
                .map(|id| SourcePost {
                    id: ProductId::new(id),
                    title: format!("post {}", id),
                    body: format!("body {}", id),
                })
                .collect())
        }
    }

    struct BrokenSource;

    #[async_trait]
    impl ItemSource for BrokenSource {
        async fn fetch_posts(&self) -> Result<Vec<SourcePost>, FetchError> {
            Err(FetchError::RequestError("connection refused".to_string()))
        }
    }

    fn loader(source: impl ItemSource + 'static) -> CatalogLoader {
        let cache = Cache::new(Arc::new(MemoryStore::new()));
        CatalogLoader::new(
            Arc::new(source),
            Synthesizer::new("picsum.photos", SynthesisMode::Random),
            CatalogCache::new(cache, "products"),
            24,
        )
    }

    #[tokio::test]
    async fn test_keeps_first_24_records() {
        let loader = loader(FixedSource {
            count: 100,
            revoke: None,
        });
        let products = loader.load_catalog().await.unwrap();

        assert_eq!(products.len(), 24);
        assert_eq!(products[0].id, ProductId::new(1));
        assert_eq!(products[23].id, ProductId::new(24));
        for product in &products {
            assert!((20..=519).contains(&product.price));
            assert!(Category::ALL.contains(&product.category));
        }
        assert_eq!(loader.catalog.load().unwrap(), products);
    }

    #[tokio::test]
    async fn test_short_source_kept_whole() {
        let loader = loader(FixedSource {
            count: 5,
            revoke: None,
        });
        assert_eq!(loader.load_catalog().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_failure_leaves_store_untouched() {
        let loader = loader(BrokenSource);
        assert!(matches!(
            loader.load_catalog().await,
            Err(CommerceError::FetchError(_))
        ));
        assert!(loader.catalog.load().is_none());
        assert_eq!(
            loader.load_checked(&Liveness::new()).await,
            LoadOutcome::Failed
        );
    }

    #[tokio::test]
    async fn test_revoked_mid_fetch_is_superseded() {
        let liveness = Liveness::new();
        let loader = loader(FixedSource {
            count: 3,
            revoke: Some(liveness.clone()),
        });
        assert_eq!(loader.load_checked(&liveness).await, LoadOutcome::Superseded);
        assert!(!liveness.is_alive());
    }

    #[tokio::test]
    async fn test_live_load_is_loaded() {
        let loader = loader(FixedSource {
            count: 2,
            revoke: None,
        });
        match loader.load_checked(&Liveness::new()).await {
            LoadOutcome::Loaded(products) => assert_eq!(products.len(), 2),
            other => panic!("expected Loaded, got {:?}", other),
        }
    }
}
