//! Storefront configuration.

use serde::{Deserialize, Serialize};

/// How synthesized product fields (price, category) are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynthesisMode {
    /// Fresh randomness on every load.
    #[default]
    Random,
    /// Generator seeded from the product id, so reloads reproduce the same catalog.
    StableById,
}

/// Keys used in the persistent store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreKeys {
    /// Serialized product list.
    #[serde(default = "default_products_key")]
    pub products: String,
    /// Serialized cart line list.
    #[serde(default = "default_cart_key")]
    pub cart: String,
}

fn default_products_key() -> String {
    "products".to_string()
}

fn default_cart_key() -> String {
    "cart".to_string()
}

impl Default for StoreKeys {
    fn default() -> Self {
        Self {
            products: default_products_key(),
            cart: default_cart_key(),
        }
    }
}

/// Top-level storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Base URL of the placeholder post source.
    #[serde(default = "default_source_url")]
    pub source_url: String,

    /// Path of the post listing on the source.
    #[serde(default = "default_posts_path")]
    pub posts_path: String,

    /// Number of source records turned into products.
    #[serde(default = "default_catalog_limit")]
    pub catalog_limit: usize,

    /// Products per page in the list view.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Host of the placeholder image service.
    #[serde(default = "default_image_host")]
    pub image_host: String,

    /// Synthesis randomness mode.
    #[serde(default)]
    pub synthesis: SynthesisMode,

    /// Optional timeout for the catalog fetch, in seconds. Unbounded when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetch_timeout_secs: Option<u64>,

    /// Persistent store keys.
    #[serde(default)]
    pub keys: StoreKeys,
}

fn default_source_url() -> String {
    "https://jsonplaceholder.typicode.com".to_string()
}

fn default_posts_path() -> String {
    "/posts".to_string()
}

fn default_catalog_limit() -> usize {
    24
}

fn default_page_size() -> usize {
    6
}

fn default_image_host() -> String {
    "picsum.photos".to_string()
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            source_url: default_source_url(),
            posts_path: default_posts_path(),
            catalog_limit: default_catalog_limit(),
            page_size: default_page_size(),
            image_host: default_image_host(),
            synthesis: SynthesisMode::default(),
            fetch_timeout_secs: None,
            keys: StoreKeys::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.catalog_limit, 24);
        assert_eq!(config.page_size, 6);
        assert_eq!(config.keys.products, "products");
        assert_eq!(config.keys.cart, "cart");
        assert_eq!(config.synthesis, SynthesisMode::Random);
        assert!(config.fetch_timeout_secs.is_none());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: StorefrontConfig =
            serde_json::from_str(r#"{"page_size": 10, "synthesis": "stable_by_id"}"#).unwrap();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.synthesis, SynthesisMode::StableById);
        assert_eq!(config.catalog_limit, 24);
        assert_eq!(config.image_host, "picsum.photos");
    }
}
