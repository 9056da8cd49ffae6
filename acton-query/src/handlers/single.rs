//! Single-entity query handler

use super::query::Query;
use super::traits::{EntityNotFound, MissingEntity, QueryHandler};
use crate::repository::{Entity, Repository, RepositoryError, RepositoryOperation};

/// Looks up one entity by the identifier carried in a query
///
/// A miss is reported through the [`MissingEntity`] hook, [`EntityNotFound`]
/// by default.
///
/// # Example
///
/// ```rust
/// use acton_query::criteria::Scalar;
/// use acton_query::handlers::{Query, QueryHandler, SingleQueryHandler};
/// use acton_query::repository::{Entity, InMemoryRepository};
/// use serde_json::json;
///
/// let repo = InMemoryRepository::from_json("people", json!([{"id": 1}, {"id": 2}])).unwrap();
/// let handler = SingleQueryHandler::new(repo);
///
/// let found = handler.handle(&Query::by_id(Scalar::from(2_i64)))?;
/// assert_eq!(found.id(), &Scalar::from(2_i64));
///
/// let error = handler.handle(&Query::by_id(Scalar::from(99_i64))).unwrap_err();
/// assert!(error.is_not_found());
/// # Ok::<(), acton_query::repository::RepositoryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SingleQueryHandler<R, M = EntityNotFound> {
    repository: R,
    missing: M,
}

impl<R> SingleQueryHandler<R> {
    /// Create a handler reporting misses as `NotFound` repository errors
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            missing: EntityNotFound,
        }
    }
}

impl<R, M> SingleQueryHandler<R, M> {
    /// Replace the miss hook
    pub fn with_missing_hook<H>(self, missing: H) -> SingleQueryHandler<R, H> {
        SingleQueryHandler {
            repository: self.repository,
            missing,
        }
    }

    /// The repository queried by this handler
    pub fn repository(&self) -> &R {
        &self.repository
    }
}

impl<R, M> SingleQueryHandler<R, M>
where
    R: Repository,
    M: MissingEntity<<R::Entity as Entity>::Id>,
{
    /// Find an entity or report a miss through the hook
    ///
    /// # Errors
    ///
    /// Returns the hook's error when no entity has the identifier, or a
    /// converted repository error when the lookup itself fails.
    pub fn find(&self, id: &<R::Entity as Entity>::Id) -> Result<R::Entity, M::Error> {
        match self.repository.find_by_id(id)? {
            Some(entity) => Ok(entity),
            None => {
                tracing::debug!(
                    repository = %self.repository.name(),
                    id = %id,
                    "Single query missed"
                );
                Err(self.missing.missing(self.repository.name(), id))
            }
        }
    }
}

impl<R, M> QueryHandler for SingleQueryHandler<R, M>
where
    R: Repository,
    M: MissingEntity<<R::Entity as Entity>::Id>,
{
    type Id = <R::Entity as Entity>::Id;
    type Output = R::Entity;
    type Error = M::Error;

    fn handle(&self, query: &Query<Self::Id>) -> Result<R::Entity, M::Error> {
        let id = query.id.as_ref().ok_or_else(|| {
            RepositoryError::invalid_argument(
                RepositoryOperation::Query,
                "single-entity query requires an id",
            )
        })?;
        self.find(id)
    }
}
