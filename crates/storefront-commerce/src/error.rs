//! Commerce error types.

use thiserror::Error;

use crate::ids::ProductId;

/// Errors that can occur in storefront operations.
///
/// Only the loader and write paths produce these. Reads of the persistent
/// store degrade to empty collections instead.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not present in the current catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Outbound catalog fetch failed.
    #[error("Fetch error: {0}")]
    FetchError(String),

    /// Persistent store error.
    #[error("Cache error: {0}")]
    CacheError(String),
}

impl From<storefront_data::FetchError> for CommerceError {
    fn from(e: storefront_data::FetchError) -> Self {
        CommerceError::FetchError(e.to_string())
    }
}

impl From<storefront_cache::CacheError> for CommerceError {
    fn from(e: storefront_cache::CacheError) -> Self {
        CommerceError::CacheError(e.to_string())
    }
}
