//! Shopping cart module.
//!
//! Contains the cart line type, the pure add operation, and the cart store
//! shared by every screen that can add to the cart.

mod line;
mod store;

pub use line::{add_line, CartLine, CartSummary};
pub use store::CartStore;
