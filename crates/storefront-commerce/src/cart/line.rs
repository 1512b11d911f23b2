//! Cart lines.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::ids::ProductId;

/// A product in the cart with its quantity.
///
/// Serialized flat: the product fields plus `quantity`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    /// The product as it was when first added.
    #[serde(flatten)]
    pub product: Product,
    /// Quantity, at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// A new line with quantity 1.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Product id, the line's uniqueness key.
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Price times quantity.
    pub fn line_total(&self) -> u64 {
        u64::from(self.product.price) * u64::from(self.quantity)
    }
}

/// Add one unit of `product` to `lines`.
///
/// Increments the existing line for the product's id, or appends a new line
/// with quantity 1. Returns the index of the affected line.
pub fn add_line(lines: &mut Vec<CartLine>, product: &Product) -> usize {
    match lines.iter().position(|line| line.id() == product.id) {
        Some(index) => {
            let line = &mut lines[index];
            line.quantity = line.quantity.saturating_add(1);
            index
        }
        None => {
            lines.push(CartLine::new(product.clone()));
            lines.len() - 1
        }
    }
}

/// Totals over a set of cart lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSummary {
    /// Number of distinct products.
    pub lines: usize,
    /// Sum of quantities.
    pub items: u64,
    /// Sum of line totals, in whole dollars.
    pub total: u64,
}

impl CartSummary {
    /// Summarize `lines`.
    pub fn of(lines: &[CartLine]) -> Self {
        Self {
            lines: lines.len(),
            items: lines.iter().map(|l| u64::from(l.quantity)).sum(),
            total: lines.iter().map(CartLine::line_total).sum(),
        }
    }
}
