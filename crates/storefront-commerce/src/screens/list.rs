//! Product list screen.

use std::sync::Arc;

use crate::cart::{CartLine, CartStore};
use crate::catalog::{CatalogLoader, Liveness};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::search::CatalogView;

/// The product list: search box, layout toggle, paged results.
pub struct ProductListScreen {
    view: CatalogView,
    loader: Arc<CatalogLoader>,
    cart: Arc<CartStore>,
    liveness: Liveness,
}

impl ProductListScreen {
    /// Create an unmounted screen.
    pub fn new(loader: Arc<CatalogLoader>, cart: Arc<CartStore>, page_size: usize) -> Self {
        Self {
            view: CatalogView::new(page_size),
            loader,
            cart,
            liveness: Liveness::new(),
        }
    }

    /// Run the catalog load. Returns whether the result was applied.
    pub async fn mount(&mut self) -> bool {
        let outcome = self.loader.load_checked(&self.liveness).await;
        self.view.apply_load(outcome)
    }

    /// Stop applying load results.
    pub fn unmount(&self) {
        self.liveness.revoke();
    }

    /// View state.
    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    /// Mutable view state, for search, paging and layout input.
    pub fn view_mut(&mut self) -> &mut CatalogView {
        &mut self.view
    }

    /// "Add to Cart" on a listed product.
    pub fn add_to_cart(&self, id: ProductId) -> Result<CartLine, CommerceError> {
        let product = self
            .view
            .find(id)
            .ok_or(CommerceError::ProductNotFound(id))?;
        self.cart.add_to_cart(product)
    }
}
