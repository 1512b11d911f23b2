//! Product catalog module.
//!
//! Contains the product shape, the synthesis rules that turn upstream posts
//! into products, the catalog cache in the persistent store, and the loader.

mod category;
mod loader;
mod product;
mod source;
mod store;
mod synthesis;

pub use category::Category;
pub use loader::{CatalogLoader, Liveness, LoadOutcome};
pub use product::{truncate_display, Product, DESCRIPTION_DISPLAY_CHARS, TITLE_DISPLAY_CHARS};
pub use source::{HttpItemSource, ItemSource, SourcePost};
pub use store::CatalogCache;
pub use synthesis::{image_url, Synthesizer, PRICE_MAX, PRICE_MIN};
