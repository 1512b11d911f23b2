//! Search term matching.

use crate::catalog::Product;

/// Whether `product` matches a search term.
///
/// An empty term matches everything. Otherwise the term must appear,
/// case-insensitively, in the title or in the category label.
pub fn matches(product: &Product, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    product.title.to_lowercase().contains(&needle)
        || product.category.label().to_lowercase().contains(&needle)
}

/// Products matching `term`, in catalog order.
pub fn filter<'a>(catalog: &'a [Product], term: &'a str) -> impl Iterator<Item = &'a Product> + 'a {
    catalog.iter().filter(move |p| matches(p, term))
}
