//! Windowed view over a counted, ordered result set

use serde::Serialize;

use super::pagination::Pagination;

/// One page of a result set plus the size of the whole set
///
/// # Example
///
/// ```rust
/// use acton_query::repository::{Pagination, Paginator};
///
/// let pagination = Pagination::new(3, 3).unwrap();
/// let paginator = Paginator::paginate(1..=7, pagination);
///
/// assert_eq!(paginator.total_items(), 7);
/// assert_eq!(paginator.total_pages(), 3);
/// assert_eq!(paginator.items(), &[7]);
/// assert!(!paginator.has_next_page());
/// assert!(paginator.has_previous_page());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paginator<T> {
    /// Current page number (1-indexed)
    page: u64,
    /// Maximum number of items on a page
    items_per_page: u64,
    /// Number of items across all pages
    total_items: u64,
    /// Number of pages
    total_pages: u64,
    /// Items of the current page
    items: Vec<T>,
}

impl<T> Paginator<T> {
    /// Cut the window described by `pagination` out of an ordered sequence
    ///
    /// The sequence is consumed to count it; only the items on the page are
    /// kept.
    pub fn paginate(items: impl IntoIterator<Item = T>, pagination: Pagination) -> Self {
        let offset = pagination.offset();
        let limit = pagination.items_per_page();
        let mut total_items = 0_u64;
        let mut page_items = Vec::new();

        for item in items {
            if total_items >= offset && total_items - offset < limit {
                page_items.push(item);
            }
            total_items += 1;
        }

        Self::from_parts(pagination, total_items, page_items)
    }

    /// Build a paginator from an already-cut page and a known total
    #[must_use]
    pub fn from_parts(pagination: Pagination, total_items: u64, items: Vec<T>) -> Self {
        Self {
            page: pagination.page(),
            items_per_page: pagination.items_per_page(),
            total_items,
            total_pages: calculate_total_pages(total_items, pagination.items_per_page()),
            items,
        }
    }

    /// Current page number (1-indexed)
    #[must_use]
    pub const fn page(&self) -> u64 {
        self.page
    }

    /// Maximum number of items on a page
    #[must_use]
    pub const fn items_per_page(&self) -> u64 {
        self.items_per_page
    }

    /// Number of items across all pages
    #[must_use]
    pub const fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Number of pages, 0 for an empty result set
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.total_pages
    }

    /// Number of items skipped before this page
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.items_per_page)
    }

    /// Whether a later page exists
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether an earlier page exists
    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.page > 1
    }

    /// Items of the current page
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the paginator, returning the page items
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Iterate over the page items
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Number of items on the current page
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the current page holds no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Transform the page items, keeping the counts
    pub fn map<U, F>(self, f: F) -> Paginator<U>
    where
        F: FnMut(T) -> U,
    {
        Paginator {
            page: self.page,
            items_per_page: self.items_per_page,
            total_items: self.total_items,
            total_pages: self.total_pages,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

impl<T> IntoIterator for Paginator<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Paginator<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Calculate total pages, rounding up
const fn calculate_total_pages(total_items: u64, items_per_page: u64) -> u64 {
    if items_per_page == 0 {
        return 0;
    }
    total_items.div_ceil(items_per_page)
}
