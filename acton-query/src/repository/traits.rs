//! Repository trait definitions
//!
//! # Overview
//!
//! - [`Entity`]: named attribute access plus a unique identifier
//! - [`Repository`]: the immutable query-building surface over a collection
//!
//! Every query-building method takes `&self` and returns a new view. The view
//! it was called on is never changed, so a base repository can be shared and
//! refined independently by concurrent callers.
//!
//! # Example
//!
//! ```rust
//! use acton_query::criteria::CriteriaBuilder;
//! use acton_query::repository::{InMemoryRepository, OrderDirection, Repository};
//! use serde_json::json;
//!
//! let users = InMemoryRepository::from_json(
//!     "users",
//!     json!([{"id": 1, "age": 30}, {"id": 2, "age": 20}, {"id": 3, "age": 40}]),
//! )
//! .unwrap();
//!
//! let adults = users
//!     .filter(&CriteriaBuilder::gte("age", 25_i64))?
//!     .order_by("age", OrderDirection::Descending)?;
//!
//! assert_eq!(adults.count(), 2);
//! assert_eq!(users.count(), 3);
//! # Ok::<(), acton_query::repository::RepositoryError>(())
//! ```

use std::fmt;

use super::error::RepositoryError;
use super::pagination::{OrderDirection, Pagination};
use super::paginator::Paginator;
use crate::criteria::{Criteria, Scalar};

/// Result type for repository operations
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// An item stored in a repository
///
/// Filtering and ordering read attributes by name through [`Entity::field`].
///
/// # Example
///
/// ```rust
/// use acton_query::criteria::Scalar;
/// use acton_query::repository::Entity;
///
/// #[derive(Clone)]
/// struct Article {
///     id: i64,
///     title: String,
///     views: i64,
/// }
///
/// impl Entity for Article {
///     type Id = i64;
///
///     fn id(&self) -> &i64 {
///         &self.id
///     }
///
///     fn field(&self, name: &str) -> Option<Scalar> {
///         match name {
///             "id" => Some(self.id.into()),
///             "title" => Some(self.title.as_str().into()),
///             "views" => Some(self.views.into()),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Entity: Clone + Send + Sync {
    /// Unique identifier type
    type Id: Clone + PartialEq + fmt::Display + Send + Sync;

    /// The entity's unique identifier
    fn id(&self) -> &Self::Id;

    /// Read an attribute by name
    ///
    /// `None` means the entity has no such attribute, which is different from
    /// an attribute holding [`Scalar::Null`].
    fn field(&self, name: &str) -> Option<Scalar>;
}

/// Immutable, composable query view over a collection of entities
///
/// Query-building methods (`filter`, `order_by`, `with_pagination`,
/// `without_pagination`) return a new view and leave `self` untouched.
/// Terminal reads (`find_by_id`, `count`, `paginator`, `iter`) never change
/// state either.
pub trait Repository: Send + Sync + Sized {
    /// Entity type held by the repository
    type Entity: Entity;

    /// Logical name of the backing store, used for error context
    fn name(&self) -> &str;

    /// Narrow the view to entities matching every criterion
    ///
    /// # Errors
    ///
    /// Returns a `TypeMismatch` error when a criterion compares values that
    /// cannot be ordered or matched against each other.
    fn filter(&self, criteria: &Criteria) -> RepositoryResult<Self>;

    /// Add a sort key, refining any existing ordering
    ///
    /// Ties on this key keep the order established by earlier keys. Ordering
    /// again by a field that is already a key replaces its direction.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error for an empty field name and a
    /// `TypeMismatch` error when the field's values are not mutually
    /// orderable.
    fn order_by(&self, field: &str, direction: OrderDirection) -> RepositoryResult<Self>;

    /// Restrict iteration to one page of the working set
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error when either value is zero.
    fn with_pagination(&self, page: u64, items_per_page: u64) -> RepositoryResult<Self>;

    /// Remove any active page window
    #[must_use]
    fn without_pagination(&self) -> Self;

    /// Active page window, if any
    fn pagination(&self) -> Option<Pagination>;

    /// Look up an entity by identifier, ignoring filter, order and pagination
    ///
    /// # Errors
    ///
    /// Implementations backed by fallible storage report lookup failures
    /// here. A miss is `Ok(None)`.
    fn find_by_id(
        &self,
        id: &<Self::Entity as Entity>::Id,
    ) -> RepositoryResult<Option<Self::Entity>>;

    /// Size of the filtered working set
    ///
    /// With pagination active this is the paginator's total, never the size of
    /// the current page.
    fn count(&self) -> usize;

    /// The current page over the filtered and ordered working set
    ///
    /// `None` when no pagination is active.
    fn paginator(&self) -> Option<Paginator<&Self::Entity>>;

    /// Iterate the view in order
    ///
    /// Yields the current page when pagination is active and the whole
    /// working set otherwise. Every call starts a fresh sequence.
    fn iter(&self) -> impl Iterator<Item = &Self::Entity> + '_;

    /// Returns `true` when a page window is active
    fn is_paginated(&self) -> bool {
        self.pagination().is_some()
    }

    /// Clone the entities yielded by [`Repository::iter`]
    fn to_vec(&self) -> Vec<Self::Entity> {
        self.iter().cloned().collect()
    }
}
