//! Headless screen models.
//!
//! Each screen owns its view state and borrows the shared stores. Rendering
//! is left to the front end.

mod cart;
mod detail;
mod list;

pub use cart::{CartScreen, OrderSummary};
pub use detail::ProductDetailScreen;
pub use list::ProductListScreen;
