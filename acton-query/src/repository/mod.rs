//! Repository contract and the reference in-memory engine
//!
//! A repository is an immutable, queryable view over a collection of
//! entities. Filtering, ordering and pagination each return a new view, so a
//! single base repository can be refined independently per query.
//!
//! # Features
//!
//! - **Contract**: [`Repository`] and [`Entity`] describe any backing store
//! - **Reference engine**: [`InMemoryRepository`] over a shared collection
//! - **Dynamic entities**: [`Record`] for schemaless data and fixtures
//! - **Pagination**: [`Pagination`] windows and [`Paginator`] pages
//! - **Errors**: [`RepositoryError`] with operation and entity context
//!
//! # Example
//!
//! ```rust
//! use acton_query::criteria::{CriteriaBuilder, Scalar};
//! use acton_query::repository::{Entity, InMemoryRepository, OrderDirection, Repository};
//! use serde_json::json;
//!
//! let repo = InMemoryRepository::from_json(
//!     "people",
//!     json!([{"id": 1, "age": 30}, {"id": 2, "age": 20}, {"id": 3, "age": 40}]),
//! )
//! .unwrap();
//!
//! let view = repo
//!     .filter(&CriteriaBuilder::gte("age", 25_i64))?
//!     .order_by("age", OrderDirection::Ascending)?;
//!
//! let ids: Vec<&Scalar> = view.iter().map(Entity::id).collect();
//! assert_eq!(ids, vec![&Scalar::from(1_i64), &Scalar::from(3_i64)]);
//!
//! let missing = repo.find_by_id(&Scalar::from(99_i64))?;
//! assert!(missing.is_none());
//! # Ok::<(), acton_query::repository::RepositoryError>(())
//! ```

mod error;
mod memory;
mod pagination;
mod paginator;
mod record;
mod traits;

// Re-export all public types
pub use error::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
pub use memory::InMemoryRepository;
pub use pagination::{OrderDirection, Pagination, SortKey};
pub use paginator::Paginator;
pub use record::{Record, ID_FIELD};
pub use traits::{Entity, Repository, RepositoryResult};
