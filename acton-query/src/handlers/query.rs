//! Query objects consumed by handlers
//!
//! A [`Query`] is the only contract between this crate and the dispatch
//! layer that routes queries to handlers.
//!
//! # Example
//!
//! ```rust
//! use acton_query::criteria::CriteriaBuilder;
//! use acton_query::handlers::Query;
//! use acton_query::repository::{OrderDirection, SortKey};
//!
//! let query: Query = Query::new()
//!     .with_criteria(CriteriaBuilder::eq("status", "active"))
//!     .with_pagination(2, 50)
//!     .with_sort("created_at", OrderDirection::Descending);
//!
//! assert_eq!(query.pagination(), Some((2, 50)));
//! assert_eq!(query.sorting, vec![SortKey::desc("created_at")]);
//! ```

use serde::{Deserialize, Serialize};

use crate::criteria::{Criteria, Scalar};
use crate::repository::{OrderDirection, SortKey};

/// Maximum allowed items per page when limits are enabled
pub const MAX_ITEMS_PER_PAGE: u64 = 100;

/// Upper bounds applied to incoming queries
///
/// # Example
///
/// ```rust
/// use acton_query::handlers::QueryLimits;
///
/// let limits = QueryLimits::new(50);
/// assert_eq!(limits.clamp_items_per_page(500), 50);
/// assert_eq!(limits.clamp_items_per_page(10), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryLimits {
    /// Largest page size a query may request
    pub max_items_per_page: u64,
}

impl QueryLimits {
    /// Create limits with the given page-size ceiling
    #[must_use]
    pub const fn new(max_items_per_page: u64) -> Self {
        Self { max_items_per_page }
    }

    /// Clamp a requested page size to the ceiling
    ///
    /// Zero is passed through so the repository can reject it.
    #[must_use]
    pub const fn clamp_items_per_page(&self, items_per_page: u64) -> u64 {
        if items_per_page > self.max_items_per_page {
            self.max_items_per_page
        } else {
            items_per_page
        }
    }
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self::new(MAX_ITEMS_PER_PAGE)
    }
}

/// Criteria, pagination, sorting and an optional identifier for one query
///
/// Pagination is applied only when both `page` and `items_per_page` are
/// present. Sort keys are applied in order, most significant first.
///
/// # Example
///
/// ```rust
/// use acton_query::handlers::Query;
///
/// let query: Query = serde_json::from_str(r#"{
///     "criteria": {"age": {"operator": "gte", "value": 25}},
///     "page": 1,
///     "items_per_page": 10,
///     "sorting": [{"field": "age", "direction": "desc"}]
/// }"#).unwrap();
///
/// assert_eq!(query.pagination(), Some((1, 10)));
/// assert!(query.has_sorting());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "Id: Serialize",
    deserialize = "Id: Deserialize<'de>"
))]
pub struct Query<Id = Scalar> {
    /// Predicates, one per field
    #[serde(default)]
    pub criteria: Criteria,

    /// Page number (1-indexed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,

    /// Number of items per page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_per_page: Option<u64>,

    /// Sort keys, most significant first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sorting: Vec<SortKey>,

    /// Identifier for single-entity queries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
}

impl<Id> Default for Query<Id> {
    fn default() -> Self {
        Self {
            criteria: Criteria::new(),
            page: None,
            items_per_page: None,
            sorting: Vec::new(),
            id: None,
        }
    }
}

impl<Id> Query<Id> {
    /// Create an empty query
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a single-entity query for an identifier
    ///
    /// ```rust
    /// use acton_query::handlers::Query;
    ///
    /// let query = Query::by_id(42_i64);
    /// assert_eq!(query.id, Some(42));
    /// ```
    #[must_use]
    pub fn by_id(id: Id) -> Self {
        Self::new().with_id(id)
    }

    /// Replace the criteria
    #[must_use]
    pub fn with_criteria(mut self, criteria: Criteria) -> Self {
        self.criteria = criteria;
        self
    }

    /// Set the page number
    #[must_use]
    pub fn with_page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size
    #[must_use]
    pub fn with_items_per_page(mut self, items_per_page: u64) -> Self {
        self.items_per_page = Some(items_per_page);
        self
    }

    /// Set both page number and page size
    #[must_use]
    pub fn with_pagination(self, page: u64, items_per_page: u64) -> Self {
        self.with_page(page).with_items_per_page(items_per_page)
    }

    /// Append a sort key
    #[must_use]
    pub fn with_sort(mut self, field: impl Into<String>, direction: OrderDirection) -> Self {
        self.sorting.push(SortKey::new(field, direction));
        self
    }

    /// Set the identifier
    #[must_use]
    pub fn with_id(mut self, id: Id) -> Self {
        self.id = Some(id);
        self
    }

    /// Page number and page size, when both are present
    #[must_use]
    pub const fn pagination(&self) -> Option<(u64, u64)> {
        match (self.page, self.items_per_page) {
            (Some(page), Some(items_per_page)) => Some((page, items_per_page)),
            _ => None,
        }
    }

    /// Check if sorting is requested
    #[must_use]
    pub fn has_sorting(&self) -> bool {
        !self.sorting.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::CriteriaBuilder;

    #[test]
    fn test_query_default() {
        let query: Query = Query::default();
        assert!(query.criteria.is_empty());
        assert_eq!(query.pagination(), None);
        assert!(!query.has_sorting());
        assert!(query.id.is_none());
    }

    #[test]
    fn test_pagination_requires_both_values() {
        let only_page: Query = Query::new().with_page(2);
        assert_eq!(only_page.pagination(), None);

        let only_size: Query = Query::new().with_items_per_page(10);
        assert_eq!(only_size.pagination(), None);

        let both: Query = Query::new().with_page(2).with_items_per_page(10);
        assert_eq!(both.pagination(), Some((2, 10)));
    }

    #[test]
    fn test_sorting_keeps_order() {
        let query: Query = Query::new()
            .with_sort("team", OrderDirection::Ascending)
            .with_sort("score", OrderDirection::Descending);
        assert_eq!(
            query.sorting,
            vec![SortKey::asc("team"), SortKey::desc("score")]
        );
    }

    #[test]
    fn test_query_chained_builder() {
        let query = Query::by_id(Scalar::from(7_i64))
            .with_criteria(CriteriaBuilder::eq("status", "active"))
            .with_pagination(1, 20);
        assert_eq!(query.id, Some(Scalar::from(7_i64)));
        assert_eq!(query.criteria.len(), 1);
        assert_eq!(query.pagination(), Some((1, 20)));
    }

    #[test]
    fn test_query_serde() {
        let query: Query = Query::new()
            .with_criteria(CriteriaBuilder::gte("age", 25_i64))
            .with_pagination(1, 10);

        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["page"], 1);
        assert!(json.get("sorting").is_none());
        assert!(json.get("id").is_none());

        let back: Query = serde_json::from_value(json).unwrap();
        assert_eq!(back, query);
    }

    #[test]
    fn test_query_deserialize_minimal() {
        let query: Query<String> = serde_json::from_str(r#"{"id": "usr_1"}"#).unwrap();
        assert_eq!(query.id.as_deref(), Some("usr_1"));
        assert!(query.criteria.is_empty());
    }

    #[test]
    fn test_limits_clamp() {
        let limits = QueryLimits::default();
        assert_eq!(limits.max_items_per_page, MAX_ITEMS_PER_PAGE);
        assert_eq!(limits.clamp_items_per_page(1000), MAX_ITEMS_PER_PAGE);
        assert_eq!(limits.clamp_items_per_page(0), 0);
    }
}
