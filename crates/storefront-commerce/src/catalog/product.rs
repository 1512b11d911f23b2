//! Product type and display helpers.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::catalog::Category;
use crate::ids::ProductId;

/// Titles longer than this are shortened in listings.
pub const TITLE_DISPLAY_CHARS: usize = 50;

/// Descriptions longer than this are shortened in listings.
pub const DESCRIPTION_DISPLAY_CHARS: usize = 100;

/// A catalog entry.
///
/// Immutable once synthesized; a reload replaces the whole catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Source-assigned identifier.
    pub id: ProductId,
    /// Title, copied from the source record.
    pub title: String,
    /// Synthesized whole-dollar price.
    pub price: u32,
    /// Synthesized category.
    pub category: Category,
    /// Placeholder image URL derived from the id.
    pub image: String,
    /// Description, copied from the source body text.
    pub description: String,
}

impl Product {
    /// Title as shown in listings.
    pub fn display_title(&self) -> Cow<'_, str> {
        truncate_display(&self.title, TITLE_DISPLAY_CHARS)
    }

    /// Description as shown in listings.
    pub fn display_description(&self) -> Cow<'_, str> {
        truncate_display(&self.description, DESCRIPTION_DISPLAY_CHARS)
    }

    /// Formatted price, e.g. `$42`.
    pub fn display_price(&self) -> String {
        format!("${}", self.price)
    }
}

/// Cut `text` to `max_chars` characters followed by `...` when it is longer.
pub fn truncate_display(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}
