//! Reference in-memory repository
//!
//! [`InMemoryRepository`] runs filters, ordering and pagination over a
//! process-resident collection. The collection is shared between every view
//! derived from the same repository; a view only owns the list of positions
//! that make up its working set, its sort keys and its page window.
//!
//! # Matching rules
//!
//! - A missing attribute fails every predicate except `neq` and `notIn`,
//!   which hold.
//! - `eq`, `neq`, `in` and `notIn` use structural equality, so
//!   `Integer(1)` and `Float(1.0)` are different values. A null attribute is
//!   an ordinary value for these operators.
//! - `lt`, `lte`, `gt` and `gte` need mutually orderable values (integers and
//!   floats order together). A null attribute never satisfies them; a null
//!   bound or an incomparable pair is a `TypeMismatch`.
//! - `like` and `notLike` are case-sensitive and only apply to strings. A
//!   pattern without `%` matches by substring containment. With `%`, the
//!   pattern is anchored at both ends and each `%` matches any run of
//!   characters, including none. `_` is a literal character. A null attribute
//!   fails both operators; any other non-string is a `TypeMismatch`.
//!
//! # Ordering
//!
//! Sort keys accumulate, most significant first. Missing and null values sort
//! before every present value when ascending and after them when descending.
//!
//! # Example
//!
//! ```rust
//! use acton_query::criteria::{CriteriaBuilder, Scalar};
//! use acton_query::repository::{InMemoryRepository, OrderDirection, Record, Repository};
//!
//! let people = InMemoryRepository::new(
//!     "people",
//!     vec![
//!         Record::new(1_i64).with("name", "Grace").with("age", 85_i64),
//!         Record::new(2_i64).with("name", "Alan").with("age", 41_i64),
//!         Record::new(3_i64).with("name", "Ada").with("age", 36_i64),
//!     ],
//! );
//!
//! let page = people
//!     .filter(&CriteriaBuilder::like("name", "A%"))?
//!     .order_by("age", OrderDirection::Ascending)?
//!     .with_pagination(1, 1)?;
//!
//! let names: Vec<_> = page.iter().filter_map(|r| r.attributes().get("name").cloned()).collect();
//! assert_eq!(names, vec![Scalar::from("Ada")]);
//! assert_eq!(page.count(), 2);
//! # Ok::<(), acton_query::repository::RepositoryError>(())
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use super::error::{RepositoryError, RepositoryOperation};
use super::pagination::{OrderDirection, Pagination, SortKey};
use super::paginator::Paginator;
use super::record::Record;
use super::traits::{Entity, Repository, RepositoryResult};
use crate::criteria::{Criteria, Criterion, Scalar};

/// Repository view over a shared in-memory collection
pub struct InMemoryRepository<E> {
    name: Arc<str>,
    store: Arc<[E]>,
    working: Vec<usize>,
    sort_keys: Vec<SortKey>,
    pagination: Option<Pagination>,
}

impl<E> InMemoryRepository<E> {
    /// Create an unfiltered, unordered, unpaginated view over a collection
    pub fn new(name: impl Into<String>, entities: impl IntoIterator<Item = E>) -> Self {
        let store: Arc<[E]> = entities.into_iter().collect();
        Self::from_shared(name, store)
    }

    /// Create a view over a collection that is already shared
    pub fn from_shared(name: impl Into<String>, store: Arc<[E]>) -> Self {
        Self {
            name: Arc::from(name.into()),
            working: (0..store.len()).collect(),
            store,
            sort_keys: Vec::new(),
            pagination: None,
        }
    }

    /// Every entity of the backing collection, in insertion order
    #[must_use]
    pub fn entities(&self) -> &[E] {
        &self.store
    }

    /// Sort keys applied to this view, most significant first
    #[must_use]
    pub fn sort_keys(&self) -> &[SortKey] {
        &self.sort_keys
    }

    fn derive(&self, working: Vec<usize>) -> Self {
        Self {
            name: Arc::clone(&self.name),
            store: Arc::clone(&self.store),
            working,
            sort_keys: self.sort_keys.clone(),
            pagination: self.pagination,
        }
    }

    fn working_entities(&self) -> impl Iterator<Item = &E> + '_ {
        self.working.iter().map(move |&index| &self.store[index])
    }
}

impl InMemoryRepository<Record> {
    /// Build a record repository from a JSON array of objects
    ///
    /// # Errors
    ///
    /// Fails when the value is not an array of flat objects that each carry a
    /// non-null `id`.
    ///
    /// ```rust
    /// use acton_query::repository::{InMemoryRepository, Repository};
    /// use serde_json::json;
    ///
    /// let repo = InMemoryRepository::from_json("users", json!([{"id": 1}, {"id": 2}])).unwrap();
    /// assert_eq!(repo.count(), 2);
    /// ```
    pub fn from_json(
        name: impl Into<String>,
        value: serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        let records: Vec<Record> = serde_json::from_value(value)?;
        Ok(Self::new(name, records))
    }
}

impl<E> Clone for InMemoryRepository<E> {
    fn clone(&self) -> Self {
        self.derive(self.working.clone())
    }
}

impl<E> fmt::Debug for InMemoryRepository<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryRepository")
            .field("name", &self.name)
            .field("stored", &self.store.len())
            .field("working", &self.working.len())
            .field("sort_keys", &self.sort_keys)
            .field("pagination", &self.pagination)
            .finish()
    }
}

impl<E: Entity> Repository for InMemoryRepository<E> {
    type Entity = E;

    fn name(&self) -> &str {
        &self.name
    }

    fn filter(&self, criteria: &Criteria) -> RepositoryResult<Self> {
        validate_criteria(criteria)?;

        let mut working = Vec::with_capacity(self.working.len());
        for &index in &self.working {
            let entity = &self.store[index];
            if matches_all(entity, criteria)
                .map_err(|e| e.with_entity(&*self.name, entity.id().to_string()))?
            {
                working.push(index);
            }
        }

        tracing::debug!(
            repository = %self.name,
            criteria = criteria.len(),
            before = self.working.len(),
            after = working.len(),
            "Filtered repository view"
        );
        Ok(self.derive(working))
    }

    fn order_by(&self, field: &str, direction: OrderDirection) -> RepositoryResult<Self> {
        if field.trim().is_empty() {
            return Err(RepositoryError::invalid_argument(
                RepositoryOperation::OrderBy,
                "sort field must not be empty",
            ));
        }

        let mut sort_keys = self.sort_keys.clone();
        match sort_keys.iter_mut().find(|key| key.field == field) {
            Some(key) => key.direction = direction,
            None => sort_keys.push(SortKey::new(field, direction)),
        }

        let working = sort_working_set(&self.store, &self.working, &sort_keys)?;

        tracing::debug!(
            repository = %self.name,
            field = %field,
            direction = %direction,
            keys = sort_keys.len(),
            "Ordered repository view"
        );
        let mut view = self.derive(working);
        view.sort_keys = sort_keys;
        Ok(view)
    }

    fn with_pagination(&self, page: u64, items_per_page: u64) -> RepositoryResult<Self> {
        let pagination = Pagination::new(page, items_per_page)?;
        tracing::debug!(
            repository = %self.name,
            page,
            items_per_page,
            "Paginated repository view"
        );
        let mut view = self.clone();
        view.pagination = Some(pagination);
        Ok(view)
    }

    fn without_pagination(&self) -> Self {
        let mut view = self.clone();
        view.pagination = None;
        view
    }

    fn pagination(&self) -> Option<Pagination> {
        self.pagination
    }

    fn find_by_id(&self, id: &E::Id) -> RepositoryResult<Option<E>> {
        let found = self.store.iter().find(|entity| entity.id() == id).cloned();
        tracing::debug!(
            repository = %self.name,
            id = %id,
            found = found.is_some(),
            "Looked up entity by id"
        );
        Ok(found)
    }

    fn count(&self) -> usize {
        self.working.len()
    }

    fn paginator(&self) -> Option<Paginator<&E>> {
        self.pagination
            .map(|pagination| Paginator::paginate(self.working_entities(), pagination))
    }

    fn iter(&self) -> impl Iterator<Item = &E> + '_ {
        let (skip, take) = match self.pagination {
            Some(pagination) => (
                usize::try_from(pagination.offset()).unwrap_or(usize::MAX),
                usize::try_from(pagination.items_per_page()).unwrap_or(usize::MAX),
            ),
            None => (0, usize::MAX),
        };
        self.working_entities().skip(skip).take(take)
    }
}

fn validate_criteria(criteria: &Criteria) -> RepositoryResult<()> {
    for (field, criterion) in criteria {
        if let Criterion::Lt(bound)
        | Criterion::Lte(bound)
        | Criterion::Gt(bound)
        | Criterion::Gte(bound) = criterion
        {
            if bound.is_null() {
                return Err(RepositoryError::type_mismatch(
                    RepositoryOperation::Filter,
                    format!("cannot apply '{}' to '{field}' with a null bound", criterion.operator()),
                ));
            }
        }
    }
    Ok(())
}

fn matches_all<E: Entity>(entity: &E, criteria: &Criteria) -> RepositoryResult<bool> {
    for (field, criterion) in criteria {
        if !evaluate(entity.field(field).as_ref(), criterion, field)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Evaluate one criterion against an attribute value (`None` = missing)
fn evaluate(value: Option<&Scalar>, criterion: &Criterion, field: &str) -> RepositoryResult<bool> {
    let Some(value) = value else {
        return Ok(matches!(criterion, Criterion::Neq(_) | Criterion::NotIn(_)));
    };

    let satisfied = match criterion {
        Criterion::Eq(expected) => value == expected,
        Criterion::Neq(expected) => value != expected,
        Criterion::In(values) => values.contains(value),
        Criterion::NotIn(values) => !values.contains(value),
        Criterion::Lt(bound) => compare(value, bound, field)?.is_some_and(Ordering::is_lt),
        Criterion::Lte(bound) => compare(value, bound, field)?.is_some_and(Ordering::is_le),
        Criterion::Gt(bound) => compare(value, bound, field)?.is_some_and(Ordering::is_gt),
        Criterion::Gte(bound) => compare(value, bound, field)?.is_some_and(Ordering::is_ge),
        Criterion::Like(pattern) => like(value, pattern, field)?.unwrap_or(false),
        Criterion::NotLike(pattern) => like(value, pattern, field)?.is_some_and(|hit| !hit),
    };
    Ok(satisfied)
}

/// `None` when the attribute is null
fn compare(value: &Scalar, bound: &Scalar, field: &str) -> RepositoryResult<Option<Ordering>> {
    if value.is_null() {
        return Ok(None);
    }
    value.compare(bound).map(Some).ok_or_else(|| {
        tracing::trace!(field = %field, value = %value, bound = %bound, "Incomparable values");
        RepositoryError::type_mismatch(
            RepositoryOperation::Filter,
            format!(
                "cannot compare {} value of '{field}' with {}",
                value.type_name(),
                bound.type_name()
            ),
        )
    })
}

/// `None` when the attribute is null
fn like(value: &Scalar, pattern: &str, field: &str) -> RepositoryResult<Option<bool>> {
    match value {
        Scalar::Null => Ok(None),
        Scalar::String(text) => Ok(Some(like_matches(text, pattern))),
        other => {
            tracing::trace!(field = %field, value = %other, "Pattern applied to non-string");
            Err(RepositoryError::type_mismatch(
                RepositoryOperation::Filter,
                format!("cannot match {} value of '{field}' against a pattern", other.type_name()),
            ))
        }
    }
}

/// Case-sensitive pattern match where `%` stands for any run of characters
pub(crate) fn like_matches(text: &str, pattern: &str) -> bool {
    if !pattern.contains('%') {
        return text.contains(pattern);
    }

    let segments: Vec<&str> = pattern.split('%').collect();
    let (first, rest) = match segments.split_first() {
        Some(split) => split,
        None => return true,
    };
    let (last, middle) = match rest.split_last() {
        Some(split) => split,
        None => return text == *first,
    };

    let Some(mut remaining) = text.strip_prefix(first) else {
        return false;
    };
    for segment in middle.iter().filter(|s| !s.is_empty()) {
        match remaining.find(segment) {
            Some(position) => remaining = &remaining[position + segment.len()..],
            None => return false,
        }
    }
    remaining.ends_with(last)
}

/// Stable sort of the working set by every key, most significant first
fn sort_working_set<E: Entity>(
    store: &[E],
    working: &[usize],
    sort_keys: &[SortKey],
) -> RepositoryResult<Vec<usize>> {
    let mut rows: Vec<(usize, Vec<Option<Scalar>>)> = working
        .iter()
        .map(|&index| {
            let entity = &store[index];
            let values = sort_keys
                .iter()
                .map(|key| entity.field(&key.field).filter(|v| !v.is_null()))
                .collect();
            (index, values)
        })
        .collect();

    for (position, key) in sort_keys.iter().enumerate() {
        ensure_orderable(rows.iter().filter_map(|(_, values)| values[position].as_ref()), key)?;
    }

    rows.sort_by(|(_, left), (_, right)| {
        sort_keys
            .iter()
            .zip(left.iter().zip(right.iter()))
            .map(|(key, (a, b))| {
                let ordering = compare_sort_values(a.as_ref(), b.as_ref());
                match key.direction {
                    OrderDirection::Ascending => ordering,
                    OrderDirection::Descending => ordering.reverse(),
                }
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    });

    Ok(rows.into_iter().map(|(index, _)| index).collect())
}

/// Every present value of a key must order against every other
fn ensure_orderable<'a>(
    mut values: impl Iterator<Item = &'a Scalar>,
    key: &SortKey,
) -> RepositoryResult<()> {
    let Some(first) = values.next() else {
        return Ok(());
    };
    if first.compare(first).is_none() {
        return Err(unorderable(key, first, first));
    }
    for value in values {
        if first.compare(value).is_none() {
            return Err(unorderable(key, first, value));
        }
    }
    Ok(())
}

fn unorderable(key: &SortKey, a: &Scalar, b: &Scalar) -> RepositoryError {
    RepositoryError::type_mismatch(
        RepositoryOperation::OrderBy,
        format!(
            "cannot order '{}': {} and {} values are not comparable",
            key.field,
            a.type_name(),
            b.type_name()
        ),
    )
}

fn compare_sort_values(a: Option<&Scalar>, b: Option<&Scalar>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.compare(b).unwrap_or(Ordering::Equal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::CriteriaBuilder;
    use crate::repository::RepositoryErrorKind;
    use serde_json::json;

    fn ages() -> InMemoryRepository<Record> {
        InMemoryRepository::from_json(
            "people",
            json!([
                {"id": 1, "age": 30},
                {"id": 2, "age": 20},
                {"id": 3, "age": 40}
            ]),
        )
        .unwrap()
    }

    fn people() -> InMemoryRepository<Record> {
        InMemoryRepository::from_json(
            "people",
            json!([
                {"id": 1, "name": "Ada", "team": "core", "score": 7, "email": "ada@example.com"},
                {"id": 2, "name": "Alan", "team": "web", "score": 9, "email": null},
                {"id": 3, "name": "Grace", "team": "core", "score": 9},
                {"id": 4, "name": "Linus", "team": "web", "score": 5, "email": "linus@example.org"},
                {"id": 5, "name": "Barbara", "team": "core", "score": 7.5}
            ]),
        )
        .unwrap()
    }

    fn ids<R: Repository<Entity = Record>>(repo: &R) -> Vec<i64> {
        repo.iter()
            .map(|record| match record.id() {
                Scalar::Integer(id) => *id,
                other => panic!("unexpected id {other}"),
            })
            .collect()
    }

    #[test]
    fn test_filter_gte_then_order_asc() {
        let view = ages().filter(&CriteriaBuilder::gte("age", 25_i64)).unwrap();
        assert_eq!(ids(&view), vec![1, 3]);

        let ordered = view.order_by("age", OrderDirection::Ascending).unwrap();
        assert_eq!(ids(&ordered), vec![1, 3]);
    }

    #[test]
    fn test_views_are_independent() {
        let base = ages();
        let filtered = base.filter(&CriteriaBuilder::lt("age", 35_i64)).unwrap();
        let ordered = base.order_by("age", OrderDirection::Descending).unwrap();
        let paged = ordered.with_pagination(1, 1).unwrap();

        assert_eq!(ids(&base), vec![1, 2, 3]);
        assert_eq!(ids(&filtered), vec![1, 2]);
        assert_eq!(ids(&ordered), vec![3, 1, 2]);
        assert_eq!(ids(&paged), vec![3]);
        assert!(ordered.pagination().is_none());
    }

    #[test]
    fn test_filter_is_conjunctive() {
        let criteria = CriteriaBuilder::eq("team", "core").merge(CriteriaBuilder::gt("score", 7_i64));
        let view = people().filter(&criteria).unwrap();
        assert_eq!(ids(&view), vec![3, 5]);
    }

    #[test]
    fn test_filter_empty_criteria_keeps_everything() {
        let view = people().filter(&Criteria::new()).unwrap();
        assert_eq!(view.count(), 5);
    }

    #[test]
    fn test_eq_is_variant_strict() {
        let repo = InMemoryRepository::new(
            "numbers",
            vec![Record::new(1_i64).with("n", 1_i64), Record::new(2_i64).with("n", 1.0)],
        );
        assert_eq!(ids(&repo.filter(&CriteriaBuilder::eq("n", 1_i64)).unwrap()), vec![1]);
        assert_eq!(ids(&repo.filter(&CriteriaBuilder::gte("n", 1_i64)).unwrap()), vec![1, 2]);
    }

    #[test]
    fn test_missing_attribute_semantics() {
        let repo = people();
        assert_eq!(ids(&repo.filter(&CriteriaBuilder::eq("nickname", "x")).unwrap()), Vec::<i64>::new());
        assert_eq!(repo.filter(&CriteriaBuilder::neq("nickname", "x")).unwrap().count(), 5);
        assert_eq!(repo.filter(&CriteriaBuilder::not_in("nickname", ["x"])).unwrap().count(), 5);
        assert_eq!(repo.filter(&CriteriaBuilder::is_in("nickname", ["x"])).unwrap().count(), 0);
        assert_eq!(repo.filter(&CriteriaBuilder::not_like("nickname", "x")).unwrap().count(), 0);
        assert_eq!(repo.filter(&CriteriaBuilder::gt("nickname", 1_i64)).unwrap().count(), 0);
    }

    #[test]
    fn test_null_attribute_semantics() {
        let repo = people();
        assert_eq!(ids(&repo.filter(&CriteriaBuilder::eq("email", Scalar::Null)).unwrap()), vec![2]);
        assert_eq!(ids(&repo.filter(&CriteriaBuilder::neq("email", Scalar::Null)).unwrap()), vec![1, 3, 4, 5]);
        assert_eq!(ids(&repo.filter(&CriteriaBuilder::like("email", "example")).unwrap()), vec![1, 4]);
        assert_eq!(repo.filter(&CriteriaBuilder::not_like("email", "zzz")).unwrap().count(), 2);
    }

    #[test]
    fn test_membership() {
        let repo = people();
        let view = repo.filter(&CriteriaBuilder::is_in("name", ["Ada", "Linus"])).unwrap();
        assert_eq!(ids(&view), vec![1, 4]);
        let view = repo.filter(&CriteriaBuilder::not_in("name", ["Ada", "Linus"])).unwrap();
        assert_eq!(ids(&view), vec![2, 3, 5]);
        let view = repo.filter(&CriteriaBuilder::is_in("name", Vec::<Scalar>::new())).unwrap();
        assert_eq!(view.count(), 0);
    }

    #[test]
    fn test_ordering_type_mismatch() {
        let error = people().filter(&CriteriaBuilder::gt("name", 3_i64)).unwrap_err();
        assert_eq!(error.kind, RepositoryErrorKind::TypeMismatch);
        assert_eq!(error.operation, RepositoryOperation::Filter);
        assert_eq!(error.entity_type.as_deref(), Some("people"));
        assert_eq!(error.entity_id.as_deref(), Some("1"));
    }

    #[test]
    fn test_null_bound_is_type_mismatch() {
        let error = InMemoryRepository::<Record>::new("empty", Vec::new())
            .filter(&CriteriaBuilder::lt("age", Scalar::Null))
            .unwrap_err();
        assert_eq!(error.kind, RepositoryErrorKind::TypeMismatch);
    }

    #[test]
    fn test_like_on_non_string_is_type_mismatch() {
        let error = people().filter(&CriteriaBuilder::like("score", "9")).unwrap_err();
        assert_eq!(error.kind, RepositoryErrorKind::TypeMismatch);
    }

    #[test]
    fn test_like_matches() {
        assert!(like_matches("ada@example.com", "example"));
        assert!(!like_matches("ada@example.com", "Example"));
        assert!(like_matches("ada@example.com", "%.com"));
        assert!(!like_matches("ada@example.com", "%.org"));
        assert!(like_matches("ada@example.com", "ada%"));
        assert!(!like_matches("ada@example.com", "example%"));
        assert!(like_matches("ada@example.com", "a%@%e%m"));
        assert!(like_matches("ada@example.com", "%"));
        assert!(like_matches("", "%"));
        assert!(like_matches("abc", "abc%"));
        assert!(!like_matches("a", "a%a"));
        assert!(like_matches("aa", "a%a"));
        assert!(like_matches("a_c", "a_c"));
        assert!(!like_matches("abc", "a_c"));
        assert!(like_matches("anything", ""));
    }

    #[test]
    fn test_order_by_is_stable_and_multi_key() {
        let view = people()
            .order_by("team", OrderDirection::Ascending)
            .unwrap()
            .order_by("score", OrderDirection::Descending)
            .unwrap();
        assert_eq!(ids(&view), vec![3, 5, 1, 2, 4]);
        assert_eq!(view.sort_keys().len(), 2);
    }

    #[test]
    fn test_order_by_ties_keep_previous_order() {
        let view = people().order_by("team", OrderDirection::Descending).unwrap();
        assert_eq!(ids(&view), vec![2, 4, 1, 3, 5]);
    }

    #[test]
    fn test_order_by_same_field_replaces_direction() {
        let asc = ages().order_by("age", OrderDirection::Ascending).unwrap();
        let desc = asc.order_by("age", OrderDirection::Descending).unwrap();
        let mut reversed = ids(&asc);
        reversed.reverse();
        assert_eq!(ids(&desc), reversed);
        assert_eq!(desc.sort_keys(), &[SortKey::desc("age")]);
    }

    #[test]
    fn test_order_by_missing_and_null_first_when_ascending() {
        let view = people().order_by("email", OrderDirection::Ascending).unwrap();
        assert_eq!(ids(&view), vec![2, 3, 5, 1, 4]);
        let view = people().order_by("email", OrderDirection::Descending).unwrap();
        assert_eq!(ids(&view), vec![4, 1, 2, 3, 5]);
    }

    #[test]
    fn test_order_by_rejects_empty_field() {
        let error = people().order_by("  ", OrderDirection::Ascending).unwrap_err();
        assert_eq!(error.kind, RepositoryErrorKind::InvalidArgument);
        assert_eq!(error.operation, RepositoryOperation::OrderBy);
    }

    #[test]
    fn test_order_by_incomparable_values() {
        let repo = InMemoryRepository::new(
            "mixed",
            vec![Record::new(1_i64).with("v", "a"), Record::new(2_i64).with("v", 1_i64)],
        );
        let error = repo.order_by("v", OrderDirection::Ascending).unwrap_err();
        assert_eq!(error.kind, RepositoryErrorKind::TypeMismatch);
        assert_eq!(error.operation, RepositoryOperation::OrderBy);
    }

    #[test]
    fn test_filter_preserves_order() {
        let view = people()
            .order_by("name", OrderDirection::Descending)
            .unwrap()
            .filter(&CriteriaBuilder::eq("team", "core"))
            .unwrap();
        assert_eq!(ids(&view), vec![3, 5, 1]);
    }

    #[test]
    fn test_pagination_windows() {
        let repo = InMemoryRepository::new("seven", (1..=7_i64).map(Record::new));
        let first = repo.with_pagination(1, 3).unwrap();
        assert_eq!(ids(&first), vec![1, 2, 3]);
        assert_eq!(ids(&repo.with_pagination(2, 3).unwrap()), vec![4, 5, 6]);

        let third = repo.with_pagination(3, 3).unwrap();
        assert_eq!(ids(&third), vec![7]);
        assert_eq!(third.count(), 7);

        let paginator = third.paginator().unwrap();
        assert_eq!(paginator.total_pages(), 3);
        assert_eq!(paginator.len(), 1);
        assert_eq!(paginator.total_items(), 7);
    }

    #[test]
    fn test_pagination_round_trip() {
        let repo = people().filter(&CriteriaBuilder::eq("team", "core")).unwrap();
        let restored = repo.with_pagination(2, 2).unwrap().without_pagination();
        assert_eq!(restored.count(), repo.count());
        assert_eq!(ids(&restored), ids(&repo));
        assert!(restored.paginator().is_none());
        assert!(!restored.is_paginated());
    }

    #[test]
    fn test_pagination_rejects_zero() {
        let error = people().with_pagination(0, 10).unwrap_err();
        assert_eq!(error.kind, RepositoryErrorKind::InvalidArgument);
        assert!(people().with_pagination(1, 0).is_err());
    }

    #[test]
    fn test_paginator_uses_filtered_sorted_set() {
        let view = people()
            .filter(&CriteriaBuilder::eq("team", "core"))
            .unwrap()
            .order_by("name", OrderDirection::Ascending)
            .unwrap()
            .with_pagination(1, 2)
            .unwrap();
        let paginator = view.paginator().unwrap();
        assert_eq!(paginator.total_items(), 3);
        let names: Vec<_> = paginator.iter().map(|r| r.field("name").unwrap()).collect();
        assert_eq!(names, vec![Scalar::from("Ada"), Scalar::from("Barbara")]);
    }

    #[test]
    fn test_find_by_id_ignores_view_state() {
        let view = ages()
            .filter(&CriteriaBuilder::gte("age", 25_i64))
            .unwrap()
            .with_pagination(1, 1)
            .unwrap();
        let found = view.find_by_id(&Scalar::from(2_i64)).unwrap().unwrap();
        assert_eq!(found.field("age"), Some(Scalar::from(20_i64)));
        assert!(view.find_by_id(&Scalar::from(99_i64)).unwrap().is_none());
    }

    #[test]
    fn test_iteration_is_restartable() {
        let view = ages().order_by("age", OrderDirection::Ascending).unwrap();
        assert_eq!(ids(&view), ids(&view));
        assert_eq!(view.to_vec().len(), 3);
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        assert!(InMemoryRepository::from_json("bad", json!({"id": 1})).is_err());
    }

    #[test]
    fn test_debug_output() {
        let debug = format!("{:?}", ages());
        assert!(debug.contains("people"));
        assert!(debug.contains("working: 3"));
    }
}
