//! Criteria maps keyed by field name

use std::collections::btree_map::{self, BTreeMap};

use serde::{Deserialize, Serialize};

use super::criterion::Criterion;

/// The full set of predicates for one query, keyed by field
///
/// One criterion per field: inserting a second criterion for the same field
/// replaces the first. All criteria must hold for an entity to match.
///
/// # Example
///
/// ```rust
/// use acton_query::criteria::{Criteria, Criterion, Scalar};
///
/// let criteria = Criteria::new()
///     .with("status", Criterion::Eq(Scalar::from("active")))
///     .with("age", Criterion::Gte(Scalar::from(18_i64)));
///
/// assert_eq!(criteria.len(), 2);
/// assert!(criteria.contains_field("age"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Criteria(BTreeMap<String, Criterion>);

impl Criteria {
    /// Create an empty criteria map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a map holding a single criterion
    pub fn single(field: impl Into<String>, criterion: Criterion) -> Self {
        Self::new().with(field, criterion)
    }

    /// Add a criterion, replacing any existing one for the field
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, criterion: Criterion) -> Self {
        self.0.insert(field.into(), criterion);
        self
    }

    /// Insert a criterion, returning the one it replaced
    pub fn insert(&mut self, field: impl Into<String>, criterion: Criterion) -> Option<Criterion> {
        self.0.insert(field.into(), criterion)
    }

    /// Remove the criterion for a field
    pub fn remove(&mut self, field: &str) -> Option<Criterion> {
        self.0.remove(field)
    }

    /// The criterion for a field, if any
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Criterion> {
        self.0.get(field)
    }

    /// Returns `true` if the field has a criterion
    #[must_use]
    pub fn contains_field(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Number of criteria
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when there are no criteria
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(field, criterion)` pairs in field order
    pub fn iter(&self) -> btree_map::Iter<'_, String, Criterion> {
        self.0.iter()
    }

    /// Keep only the criteria for which the predicate returns `true`
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &Criterion) -> bool) {
        self.0.retain(|field, criterion| keep(field, criterion));
    }

    /// Right-biased merge: criteria in `overrides` win on field collisions
    ///
    /// ```rust
    /// use acton_query::criteria::CriteriaBuilder;
    ///
    /// let merged = CriteriaBuilder::eq("status", "draft")
    ///     .merge(CriteriaBuilder::eq("status", "published"))
    ///     .merge(CriteriaBuilder::gt("views", 10_i64));
    ///
    /// assert_eq!(merged.len(), 2);
    /// assert_eq!(merged, CriteriaBuilder::eq("status", "published").merge(CriteriaBuilder::gt("views", 10_i64)));
    /// ```
    #[must_use]
    pub fn merge(mut self, overrides: Self) -> Self {
        self.0.extend(overrides.0);
        self
    }
}

impl IntoIterator for Criteria {
    type Item = (String, Criterion);
    type IntoIter = btree_map::IntoIter<String, Criterion>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Criteria {
    type Item = (&'a String, &'a Criterion);
    type IntoIter = btree_map::Iter<'a, String, Criterion>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Criterion)> for Criteria {
    fn from_iter<I: IntoIterator<Item = (K, Criterion)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, c)| (k.into(), c)).collect())
    }
}

impl<K: Into<String>> Extend<(K, Criterion)> for Criteria {
    fn extend<I: IntoIterator<Item = (K, Criterion)>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(|(k, c)| (k.into(), c)));
    }
}
