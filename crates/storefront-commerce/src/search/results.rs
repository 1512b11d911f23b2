//! Pagination over filtered results.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::search::filter;

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of matching items.
    pub total: usize,
    /// Total number of pages; zero when nothing matches.
    pub total_pages: usize,
}

impl Pagination {
    /// Create pagination info. A zero `per_page` is treated as one.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let per_page = per_page.max(1);
        Self {
            page: page.max(1),
            per_page,
            total,
            total_pages: total.div_ceil(per_page),
        }
    }

    /// Index of the first item on the page.
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.per_page
    }

    /// Whether there's a next page.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether there's a previous page.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// First item number on the page (1-indexed), 0 when empty.
    pub fn start_item(&self) -> usize {
        if self.offset() >= self.total {
            0
        } else {
            self.offset() + 1
        }
    }

    /// Last item number on the page.
    pub fn end_item(&self) -> usize {
        (self.page * self.per_page).min(self.total)
    }

    /// Clamp a requested page into `1..=total_pages` (page 1 when empty).
    pub fn clamp_page(&self, page: usize) -> usize {
        page.clamp(1, self.total_pages.max(1))
    }
}

/// One page of filtered products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a> {
    /// Products on this page.
    pub items: Vec<&'a Product>,
    /// Pagination info.
    pub pagination: Pagination,
}

impl PageView<'_> {
    /// Nothing matched; show "No products found" instead of a pager.
    pub fn no_results(&self) -> bool {
        self.pagination.total == 0
    }

    /// Whether a pager is worth showing.
    pub fn show_pager(&self) -> bool {
        self.pagination.total_pages > 1
    }

    /// "Showing a-b of n products", or `None` when the page is empty.
    pub fn range_label(&self) -> Option<String> {
        let p = &self.pagination;
        if p.start_item() == 0 {
            return None;
        }
        Some(format!(
            "Showing {}-{} of {} products",
            p.start_item(),
            p.end_item(),
            p.total
        ))
    }
}

/// Filter `catalog` by `term` and cut out page `page` of size `per_page`.
pub fn paginate<'a>(
    catalog: &'a [Product],
    term: &'a str,
    page: usize,
    per_page: usize,
) -> PageView<'a> {
    let filtered: Vec<&Product> = filter(catalog, term).collect();
    let pagination = Pagination::new(page, per_page, filtered.len());
    let items = filtered
        .into_iter()
        .skip(pagination.offset())
        .take(pagination.per_page)
        .collect();
    PageView { items, pagination }
}
