//! Wiring of stores, loader and screens.

use std::sync::Arc;
use std::time::Duration;

use storefront_cache::{Cache, KeyValueStore};
use storefront_data::FetchClient;

use crate::cart::CartStore;
use crate::catalog::{CatalogCache, CatalogLoader, HttpItemSource, ItemSource, Synthesizer};
use crate::config::StorefrontConfig;
use crate::screens::{CartScreen, ProductDetailScreen, ProductListScreen};

/// Shared storefront services.
///
/// Holds one cart store and one loader; every screen built from it shares
/// them.
#[derive(Clone)]
pub struct Storefront {
    config: StorefrontConfig,
    catalog: CatalogCache,
    loader: Arc<CatalogLoader>,
    cart: Arc<CartStore>,
}

impl Storefront {
    /// Build with an explicit post source.
    pub fn new(
        config: StorefrontConfig,
        store: Arc<dyn KeyValueStore>,
        source: Arc<dyn ItemSource>,
    ) -> Self {
        let cache = Cache::new(store);
        let catalog = CatalogCache::new(cache.clone(), config.keys.products.clone());
        let loader = CatalogLoader::new(
            source,
            Synthesizer::new(config.image_host.clone(), config.synthesis),
            catalog.clone(),
            config.catalog_limit,
        );
        let cart = CartStore::new(cache, config.keys.cart.clone());
        Self {
            config,
            catalog,
            loader: Arc::new(loader),
            cart: Arc::new(cart),
        }
    }

    /// Build with the HTTP post source named in `config`.
    pub fn from_config(config: StorefrontConfig, store: Arc<dyn KeyValueStore>) -> Self {
        let mut client = FetchClient::new().with_base_url(config.source_url.clone());
        if let Some(secs) = config.fetch_timeout_secs {
            client = client.with_timeout(Duration::from_secs(secs));
        }
        let source = HttpItemSource::new(client, config.posts_path.clone());
        Self::new(config, store, Arc::new(source))
    }

    pub fn loader(&self) -> &Arc<CatalogLoader> {
        &self.loader
    }

    pub fn cart(&self) -> &Arc<CartStore> {
        &self.cart
    }

    pub fn catalog(&self) -> &CatalogCache {
        &self.catalog
    }

    /// A fresh, unmounted list screen.
    pub fn list_screen(&self) -> ProductListScreen {
        ProductListScreen::new(
            Arc::clone(&self.loader),
            Arc::clone(&self.cart),
            self.config.page_size,
        )
    }

    /// A detail screen with nothing opened.
    pub fn detail_screen(&self) -> ProductDetailScreen {
        ProductDetailScreen::new(self.catalog.clone(), Arc::clone(&self.cart))
    }

    pub fn cart_screen(&self) -> CartScreen {
        CartScreen::new(Arc::clone(&self.cart))
    }
}
