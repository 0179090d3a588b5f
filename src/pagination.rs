//! Pagination utilities for GitLab API responses.
//!
//! GitLab uses offset pagination driven by `page` and `per_page` query
//! parameters. The end of a collection is detected heuristically: a page
//! holding fewer than `per_page` items is the last one.

use serde::{Deserialize, Serialize};

/// Page size requested for every list call.
pub const PER_PAGE: u32 = 20;

/// A page of results from the GitLab API.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-indexed).
    pub page: u32,
    /// Number of items requested per page.
    pub per_page: u32,
    /// Whether another page should be requested.
    pub has_more: bool,
}

impl<T> Page<T> {
    /// Create a new page from items and pagination info.
    ///
    /// A full page means more items may follow. When the collection size is
    /// an exact multiple of `per_page` this costs one extra request that
    /// comes back empty.
    #[must_use]
    pub fn new(items: Vec<T>, page: u32, per_page: u32) -> Self {
        let has_more = per_page > 0 && items.len() == per_page as usize;
        Self {
            items,
            page,
            per_page,
            has_more,
        }
    }

    /// Returns true if this page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Query parameters for paginated requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Number of items per page.
    pub per_page: u32,
    /// Page number (1-indexed).
    pub page: u32,
}

impl PaginationParams {
    /// Create pagination params for a specific page.
    #[must_use]
    pub fn for_page(page: u32, per_page: u32) -> Self {
        Self { per_page, page }
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self::for_page(1, PER_PAGE)
    }
}
