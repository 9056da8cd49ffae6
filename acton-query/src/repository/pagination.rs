//! Pagination and ordering parameters for repository views
//!
//! # Example
//!
//! ```rust
//! use acton_query::repository::{OrderDirection, Pagination, SortKey};
//!
//! let pagination = Pagination::new(3, 20).unwrap();
//! assert_eq!(pagination.offset(), 40);
//!
//! let sort = SortKey::new("created_at", "desc".parse::<OrderDirection>().unwrap());
//! assert_eq!(sort.to_string(), "created_at desc");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{RepositoryError, RepositoryOperation};
use super::traits::RepositoryResult;

/// Direction for ordering results
///
/// # Example
///
/// ```rust
/// use acton_query::repository::OrderDirection;
///
/// let asc = OrderDirection::Ascending;
/// let desc = OrderDirection::Descending;
///
/// assert_eq!(format!("{}", asc), "asc");
/// assert_eq!(format!("{}", desc), "desc");
/// assert!("sideways".parse::<OrderDirection>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OrderDirection {
    /// Sort in ascending order (A-Z, 0-9)
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    /// Sort in descending order (Z-A, 9-0)
    #[serde(rename = "desc")]
    Descending,
}

impl OrderDirection {
    /// The opposite direction
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "asc"),
            Self::Descending => write!(f, "desc"),
        }
    }
}

impl FromStr for OrderDirection {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            other => Err(RepositoryError::invalid_argument(
                RepositoryOperation::OrderBy,
                format!("order direction must be 'asc' or 'desc', got '{other}'"),
            )),
        }
    }
}

/// A page window over a result set (1-indexed)
///
/// Both values are validated to be positive on construction.
///
/// # Example
///
/// ```rust
/// use acton_query::repository::Pagination;
///
/// let first = Pagination::first_page(25).unwrap();
/// assert_eq!(first.page(), 1);
/// assert_eq!(first.offset(), 0);
///
/// assert!(Pagination::new(0, 25).is_err());
/// assert!(Pagination::new(1, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pagination {
    page: u64,
    items_per_page: u64,
}

impl Pagination {
    /// Create pagination for a page number and page size
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error when either value is zero.
    pub fn new(page: u64, items_per_page: u64) -> RepositoryResult<Self> {
        if page == 0 {
            return Err(RepositoryError::invalid_argument(
                RepositoryOperation::Paginate,
                "page must be a positive integer",
            ));
        }
        if items_per_page == 0 {
            return Err(RepositoryError::invalid_argument(
                RepositoryOperation::Paginate,
                "items per page must be a positive integer",
            ));
        }
        Ok(Self {
            page,
            items_per_page,
        })
    }

    /// Pagination for the first page with the given size
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error when `items_per_page` is zero.
    pub fn first_page(items_per_page: u64) -> RepositoryResult<Self> {
        Self::new(1, items_per_page)
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

    /// Number of items skipped before this page
    #[must_use]
    pub const fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.items_per_page)
    }
}

impl fmt::Display for Pagination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page {} ({} per page)", self.page, self.items_per_page)
    }
}

/// One field of a multi-key ordering
///
/// Serialized as `{"field": "...", "direction": "asc"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortKey {
    /// Entity attribute to order by
    pub field: String,
    /// Ordering direction
    #[serde(default)]
    pub direction: OrderDirection,
}

impl SortKey {
    /// Create a sort key
    pub fn new(field: impl Into<String>, direction: OrderDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Ascending sort on a field
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, OrderDirection::Ascending)
    }

    /// Descending sort on a field
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, OrderDirection::Descending)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.direction)
    }
}
