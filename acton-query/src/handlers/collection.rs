//! Collection query handler
//!
//! Turns a [`Query`] into a repository view: normalized criteria first, then
//! the page window, then each sort key in order. The view is returned
//! unexecuted so callers decide whether to iterate, count or paginate.

use super::query::{Query, QueryLimits};
use super::traits::QueryHandler;
use crate::criteria::{CriteriaNormalizer, DefaultNormalizer};
use crate::repository::{Entity, Repository, RepositoryError, RepositoryResult};

/// Builds filtered, paginated and ordered views of a repository
///
/// # Example
///
/// ```rust
/// use acton_query::criteria::CriteriaBuilder;
/// use acton_query::handlers::{CollectionQueryHandler, Query, QueryHandler};
/// use acton_query::repository::{InMemoryRepository, OrderDirection, Repository};
/// use serde_json::json;
///
/// let repo = InMemoryRepository::from_json(
///     "people",
///     json!([{"id": 1, "age": 30}, {"id": 2, "age": 20}, {"id": 3, "age": 40}]),
/// )
/// .unwrap();
/// let handler = CollectionQueryHandler::new(repo);
///
/// let query = Query::new()
///     .with_criteria(CriteriaBuilder::gte("age", 25_i64))
///     .with_sort("age", OrderDirection::Descending);
///
/// let view = handler.handle(&query)?;
/// assert_eq!(view.count(), 2);
/// # Ok::<(), acton_query::repository::RepositoryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CollectionQueryHandler<R, N = DefaultNormalizer> {
    repository: R,
    normalizer: N,
    limits: Option<QueryLimits>,
}

impl<R> CollectionQueryHandler<R> {
    /// Create a handler with the default normalizer and no limits
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            normalizer: DefaultNormalizer,
            limits: None,
        }
    }
}

impl<R, N> CollectionQueryHandler<R, N> {
    /// Replace the normalizer
    pub fn with_normalizer<M>(self, normalizer: M) -> CollectionQueryHandler<R, M> {
        CollectionQueryHandler {
            repository: self.repository,
            normalizer,
            limits: self.limits,
        }
    }

    /// Clamp requested page sizes to the given limits
    #[must_use]
    pub fn with_limits(mut self, limits: QueryLimits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// The base repository
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// The normalizer applied to query criteria
    pub fn normalizer(&self) -> &N {
        &self.normalizer
    }
}

impl<R, N> CollectionQueryHandler<R, N>
where
    R: Repository + Clone,
    N: CriteriaNormalizer,
{
    /// Build the view described by a query
    ///
    /// Filtering is skipped when the normalized criteria are empty, and
    /// pagination when the query lacks either page value.
    ///
    /// # Errors
    ///
    /// Propagates the first failing repository step.
    pub fn build<Id>(&self, query: &Query<Id>) -> RepositoryResult<R> {
        let criteria = self.normalizer.normalize(query.criteria.clone());

        let mut view = if criteria.is_empty() {
            self.repository.clone()
        } else {
            self.repository.filter(&criteria)?
        };

        if let Some((page, items_per_page)) = query.pagination() {
            let items_per_page = self
                .limits
                .map_or(items_per_page, |limits| limits.clamp_items_per_page(items_per_page));
            view = view.with_pagination(page, items_per_page)?;
        }

        for key in &query.sorting {
            view = view.order_by(&key.field, key.direction)?;
        }

        tracing::debug!(
            repository = %self.repository.name(),
            criteria = criteria.len(),
            sort_keys = query.sorting.len(),
            paginated = view.is_paginated(),
            count = view.count(),
            "Built collection query view"
        );
        Ok(view)
    }
}

impl<R, N> QueryHandler for CollectionQueryHandler<R, N>
where
    R: Repository + Clone,
    N: CriteriaNormalizer,
{
    type Id = <R::Entity as Entity>::Id;
    type Output = R;
    type Error = RepositoryError;

    fn handle(&self, query: &Query<Self::Id>) -> Result<R, RepositoryError> {
        self.build(query)
    }
}
