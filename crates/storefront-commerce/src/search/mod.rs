//! Search module.
//!
//! Filtering and pagination over the in-memory catalog, plus the list view
//! state that drives them.

mod query;
mod results;
mod view;

pub use query::{filter, matches};
pub use results::{paginate, PageView, Pagination};
pub use view::{CatalogView, Layout};
