//! Query handlers composing criteria and repositories
//!
//! Handlers are what a query bus dispatches to. They own a base repository
//! and build a per-query view from a [`Query`]; the base is never modified.
//!
//! # Features
//!
//! - **Contract**: [`QueryHandler`] executed by the dispatch layer
//! - **Collections**: [`CollectionQueryHandler`] applies criteria, pagination and sorting
//! - **Single entities**: [`SingleQueryHandler`] looks up by id with a replaceable miss hook
//! - **Limits**: [`QueryLimits`] clamps requested page sizes
//!
//! # Example
//!
//! ```rust
//! use acton_query::criteria::{CriteriaBuilder, Scalar};
//! use acton_query::handlers::{CollectionQueryHandler, Query, QueryHandler, SingleQueryHandler};
//! use acton_query::repository::{InMemoryRepository, OrderDirection, Repository};
//! use serde_json::json;
//!
//! let repo = InMemoryRepository::from_json(
//!     "people",
//!     json!([{"id": 1, "age": 30}, {"id": 2, "age": 20}, {"id": 3, "age": 40}]),
//! )
//! .unwrap();
//!
//! let list = CollectionQueryHandler::new(repo.clone());
//! let view = list.handle(
//!     &Query::new()
//!         .with_criteria(CriteriaBuilder::gte("age", 25_i64))
//!         .with_sort("age", OrderDirection::Ascending),
//! )?;
//! assert_eq!(view.count(), 2);
//!
//! let single = SingleQueryHandler::new(repo);
//! assert!(single.handle(&Query::by_id(Scalar::from(99_i64))).is_err());
//! # Ok::<(), acton_query::repository::RepositoryError>(())
//! ```

mod collection;
mod query;
mod single;
mod traits;

pub use collection::CollectionQueryHandler;
pub use query::{Query, QueryLimits, MAX_ITEMS_PER_PAGE};
pub use single::SingleQueryHandler;
pub use traits::{EntityNotFound, MissingEntity, QueryHandler};
