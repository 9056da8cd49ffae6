//! Handler contracts
//!
//! - [`QueryHandler`]: what a dispatch layer calls to execute a [`Query`]
//! - [`MissingEntity`]: how a single-entity handler reports a lookup miss
//!
//! # Example
//!
//! Replacing the miss hook to produce an application error type:
//!
//! ```rust
//! use acton_query::criteria::Scalar;
//! use acton_query::handlers::{MissingEntity, Query, QueryHandler, SingleQueryHandler};
//! use acton_query::repository::{InMemoryRepository, Record, RepositoryError};
//!
//! #[derive(Debug)]
//! enum AppError {
//!     NoSuchUser(String),
//!     Repository(RepositoryError),
//! }
//!
//! impl From<RepositoryError> for AppError {
//!     fn from(error: RepositoryError) -> Self {
//!         Self::Repository(error)
//!     }
//! }
//!
//! struct NoSuchUser;
//!
//! impl MissingEntity<Scalar> for NoSuchUser {
//!     type Error = AppError;
//!
//!     fn missing(&self, _repository: &str, id: &Scalar) -> AppError {
//!         AppError::NoSuchUser(id.to_string())
//!     }
//! }
//!
//! let users = InMemoryRepository::new("users", vec![Record::new(1_i64)]);
//! let handler = SingleQueryHandler::new(users).with_missing_hook(NoSuchUser);
//!
//! let result = handler.handle(&Query::by_id(Scalar::from(9_i64)));
//! assert!(matches!(result, Err(AppError::NoSuchUser(id)) if id == "9"));
//! ```

use std::fmt;

use super::query::Query;
use crate::repository::RepositoryError;

/// Executes one kind of query
pub trait QueryHandler: Send + Sync {
    /// Identifier type carried by queries
    type Id;
    /// Successful result
    type Output;
    /// Failure type
    type Error;

    /// Execute the query
    ///
    /// # Errors
    ///
    /// Returns the handler's error type when the query cannot be satisfied.
    fn handle(&self, query: &Query<Self::Id>) -> Result<Self::Output, Self::Error>;
}

/// Builds the error reported when a single-entity lookup misses
///
/// The trigger condition is fixed by the handler; implementations only choose
/// the error value.
pub trait MissingEntity<Id>: Send + Sync {
    /// Error type produced by the handler
    type Error: From<RepositoryError>;

    /// Build the error for a miss on `id` in the named repository
    fn missing(&self, repository: &str, id: &Id) -> Self::Error;
}

/// Default miss hook producing a `NotFound` [`RepositoryError`]
///
/// # Example
///
/// ```rust
/// use acton_query::handlers::{EntityNotFound, MissingEntity};
///
/// let error = EntityNotFound.missing("users", &99_i64);
/// assert!(error.is_not_found());
/// assert_eq!(error.entity_id.as_deref(), Some("99"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityNotFound;

impl<Id: fmt::Display> MissingEntity<Id> for EntityNotFound {
    type Error = RepositoryError;

    fn missing(&self, repository: &str, id: &Id) -> RepositoryError {
        RepositoryError::not_found(repository, id.to_string())
    }
}
