//! Cart and checkout screen.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::cart::{CartLine, CartStore, CartSummary};
use crate::error::CommerceError;
use crate::ids::ProductId;

/// What was checked out. No payment is taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub lines: Vec<CartLine>,
    pub summary: CartSummary,
}

/// Cart contents with remove and checkout.
pub struct CartScreen {
    cart: Arc<CartStore>,
}

impl CartScreen {
    pub fn new(cart: Arc<CartStore>) -> Self {
        Self { cart }
    }

    pub fn lines(&self) -> Vec<CartLine> {
        self.cart.lines()
    }

    pub fn summary(&self) -> CartSummary {
        self.cart.summary()
    }

    pub fn remove(&self, id: ProductId) -> Result<bool, CommerceError> {
        self.cart.remove(id)
    }

    /// Place the order: snapshot the cart and empty it.
    ///
    /// An empty cart is rejected before anything is written.
    pub fn checkout(&self) -> Result<OrderSummary, CommerceError> {
        if self.cart.lines().is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        let lines = self.cart.clear()?;
        // Another handle may have checked out in between.
        if lines.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        let summary = CartSummary::of(&lines);
        tracing::info!(lines = summary.lines, total = summary.total, "order placed");
        Ok(OrderSummary { lines, summary })
    }
}
