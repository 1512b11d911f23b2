//! List view state.

use serde::{Deserialize, Serialize};

use crate::catalog::{LoadOutcome, Product};
use crate::ids::ProductId;
use crate::search::{filter, paginate, PageView, Pagination};

/// Arrangement of the product list. Has no effect on filtering or paging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Grid,
    List,
}

impl Layout {
    /// The other layout.
    pub fn toggled(self) -> Self {
        match self {
            Layout::Grid => Layout::List,
            Layout::List => Layout::Grid,
        }
    }
}

/// Per-screen catalog state.
///
/// Holds the catalog exactly once; the filtered set, the visible page and the
/// page count are always derived from it.
#[derive(Debug, Clone)]
pub struct CatalogView {
    catalog: Vec<Product>,
    search: String,
    page: usize,
    page_size: usize,
    layout: Layout,
    loading: bool,
}

impl CatalogView {
    /// Empty view, still loading.
    pub fn new(page_size: usize) -> Self {
        Self {
            catalog: Vec::new(),
            search: String::new(),
            page: 1,
            page_size: page_size.max(1),
            layout: Layout::default(),
            loading: true,
        }
    }

    /// Whether the initial load is still pending.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The full catalog.
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    /// Current search term.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Current page (1-indexed).
    pub fn page(&self) -> usize {
        self.page
    }

    /// Current layout.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Replace the catalog. Resets to page 1.
    pub fn set_catalog(&mut self, products: Vec<Product>) {
        self.catalog = products;
        self.page = 1;
    }

    /// Apply the result of a guarded load.
    ///
    /// Returns `false` for a superseded load, which leaves the view untouched.
    pub fn apply_load(&mut self, outcome: LoadOutcome) -> bool {
        match outcome {
            LoadOutcome::Loaded(products) => self.set_catalog(products),
            LoadOutcome::Failed => self.set_catalog(Vec::new()),
            LoadOutcome::Superseded => return false,
        }
        self.loading = false;
        true
    }

    /// Change the search term. Resets to page 1.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    /// Go to a page, clamped into range. Returns the page actually selected.
    pub fn set_page(&mut self, page: usize) -> usize {
        self.page = self.pagination().clamp_page(page);
        self.page
    }

    /// Flip between grid and list.
    pub fn toggle_layout(&mut self) -> Layout {
        self.layout = self.layout.toggled();
        self.layout
    }

    /// Products matching the current search, in catalog order.
    pub fn filtered(&self) -> impl Iterator<Item = &Product> + '_ {
        filter(&self.catalog, &self.search)
    }

    /// Number of products matching the current search.
    pub fn filtered_count(&self) -> usize {
        self.filtered().count()
    }

    /// Pagination for the current search and page.
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.page_size, self.filtered_count())
    }

    /// The visible page.
    pub fn page_view(&self) -> PageView<'_> {
        paginate(&self.catalog, &self.search, self.page, self.page_size)
    }

    /// Find a product in the loaded catalog.
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.catalog.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn catalog(n: u64) -> Vec<Product> {
        (1..=n)
            .map(|id| Product {
                id: ProductId::new(id),
                title: format!("item {}", id),
                price: 30,
                category: if id <= 4 {
                    Category::Electronics
                } else {
                    Category::Books
                },
                image: String::new(),
                description: String::new(),
            })
            .collect()
    }

    fn loaded(n: u64) -> CatalogView {
        let mut view = CatalogView::new(6);
        assert!(view.apply_load(LoadOutcome::Loaded(catalog(n))));
        view
    }

    #[test]
    fn test_new_view_is_loading() {
        let view = CatalogView::new(6);
        assert!(view.is_loading());
        assert_eq!(view.page(), 1);
        assert!(view.page_view().no_results());
    }

    #[test]
    fn test_search_resets_page() {
        for start in 1..=4 {
            let mut view = loaded(24);
            view.set_page(start);
            view.set_search("elect");
            assert_eq!(view.page(), 1);
            view.set_page(start);
            view.set_search("");
            assert_eq!(view.page(), 1);
        }
    }

    #[test]
    fn test_catalog_change_resets_page() {
        let mut view = loaded(24);
        assert_eq!(view.set_page(4), 4);
        view.set_catalog(catalog(3));
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn test_set_page_clamps() {
        let mut view = loaded(13);
        assert_eq!(view.set_page(0), 1);
        assert_eq!(view.set_page(10), 3);
    }

    #[test]
    fn test_filtered_is_derived() {
        let mut view = loaded(24);
        view.set_search("ELECT");
        assert_eq!(view.filtered_count(), 4);
        view.set_catalog(catalog(2));
        assert_eq!(view.filtered_count(), 2);
        assert_eq!(view.catalog().len(), 2);
    }

    #[test]
    fn test_layout_does_not_affect_paging() {
        let mut view = loaded(20);
        view.set_page(2);
        let before = view.page_view().pagination;
        assert_eq!(view.toggle_layout(), Layout::List);
        assert_eq!(view.page_view().pagination, before);
        assert_eq!(view.toggle_layout(), Layout::Grid);
    }

    #[test]
    fn test_failed_load_is_empty_and_not_loading() {
        let mut view = CatalogView::new(6);
        assert!(view.apply_load(LoadOutcome::Failed));
        assert!(!view.is_loading());
        assert!(view.page_view().no_results());
    }

    #[test]
    fn test_superseded_load_is_ignored() {
        let mut view = CatalogView::new(6);
        assert!(!view.apply_load(LoadOutcome::Superseded));
        assert!(view.is_loading());
    }

    #[test]
    fn test_find() {
        let view = loaded(5);
        assert_eq!(view.find(ProductId::new(5)).unwrap().title, "item 5");
        assert!(view.find(ProductId::new(6)).is_none());
    }
}
