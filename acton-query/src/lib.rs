//! # acton-query
//!
//! Storage-agnostic query building for domain repositories: typed criteria,
//! an immutable repository view contract, a reference in-memory engine and
//! the handlers a query bus dispatches to.
//!
//! ## Features
//!
//! - **Criteria**: closed set of typed predicates built with [`criteria::CriteriaBuilder`]
//! - **Normalization**: empty-value stripping and default criteria before execution
//! - **Repository views**: `filter`, `order_by`, `with_pagination` return new views, never mutate
//! - **In-memory engine**: [`repository::InMemoryRepository`] over a shared collection
//! - **Handlers**: collection and single-entity query handlers with a replaceable miss hook
//! - **Ambient stack**: Figment configuration, JSON tracing, UUIDv7 identifiers, event buffers
//!
//! ## Example
//!
//! ```rust
//! use acton_query::prelude::*;
//! use serde_json::json;
//!
//! fn main() -> Result<()> {
//!     let config = Config::default();
//!
//!     let people = InMemoryRepository::from_json(
//!         "people",
//!         json!([{"id": 1, "age": 30}, {"id": 2, "age": 20}, {"id": 3, "age": 40}]),
//!     )?;
//!
//!     let handler = CollectionQueryHandler::new(people.clone())
//!         .with_limits(config.pagination.limits());
//!
//!     let query = Query::new()
//!         .with_criteria(CriteriaBuilder::gte("age", 25_i64))
//!         .with_sort("age", OrderDirection::Ascending)
//!         .with_pagination(1, 10);
//!
//!     let view = handler.handle(&query)?;
//!     let ids: Vec<&Scalar> = view.iter().map(Entity::id).collect();
//!     assert_eq!(ids, vec![&Scalar::from(1_i64), &Scalar::from(3_i64)]);
//!
//!     let single = SingleQueryHandler::new(people);
//!     let error = single.handle(&Query::by_id(Scalar::from(99_i64))).unwrap_err();
//!     assert!(error.is_not_found());
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod criteria;
pub mod error;
pub mod events;
pub mod handlers;
pub mod ids;
pub mod repository;

#[cfg(feature = "observability")]
pub mod observability;

pub use error::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{Config, PaginationConfig, ServiceConfig};
    pub use crate::criteria::{
        Criteria, CriteriaBuilder, CriteriaNormalizer, Criterion, CriterionValue,
        DefaultNormalizer, DefaultsNormalizer, Operator, Scalar,
    };
    pub use crate::error::{Error, Result};
    pub use crate::events::EventRecorder;
    pub use crate::handlers::{
        CollectionQueryHandler, EntityNotFound, MissingEntity, Query, QueryHandler, QueryLimits,
        SingleQueryHandler,
    };
    pub use crate::ids::{EntityId, EntityIdError};
    pub use crate::repository::{
        Entity, InMemoryRepository, OrderDirection, Pagination, Paginator, Record, Repository,
        RepositoryError, RepositoryErrorKind, RepositoryOperation, RepositoryResult, SortKey,
    };

    #[cfg(feature = "observability")]
    pub use crate::observability::init_tracing;
}
