//! Criteria clean-up before they reach a repository
//!
//! [`CriteriaNormalizer`] is a capability: the provided `normalize` drops
//! empty comparison values, and implementors may override it to add
//! domain-specific behaviour. [`DefaultsNormalizer`] is a ready-made variant
//! that layers default criteria under the caller's.
//!
//! # Example
//!
//! ```rust
//! use acton_query::criteria::{CriteriaBuilder, CriteriaNormalizer, DefaultNormalizer};
//!
//! let criteria = CriteriaBuilder::eq("a", "").merge(CriteriaBuilder::eq("b", "x"));
//! let normalized = DefaultNormalizer.normalize(criteria);
//!
//! assert!(!normalized.contains_field("a"));
//! assert!(normalized.contains_field("b"));
//! ```

use super::map::Criteria;

/// Drop every criterion whose comparison value is null or an empty string
#[must_use]
pub fn drop_empty_values(mut criteria: Criteria) -> Criteria {
    criteria.retain(|_, criterion| !criterion.has_empty_value());
    criteria
}

/// Right-biased merge of two criteria maps
///
/// Entries of `overrides` replace entries of `criteria` for the same field.
#[must_use]
pub fn merge_criteria(criteria: Criteria, overrides: Criteria) -> Criteria {
    criteria.merge(overrides)
}

/// Cleans and/or augments a criteria map before execution
///
/// Implementations must be idempotent: normalizing twice yields the same map
/// as normalizing once.
pub trait CriteriaNormalizer: Send + Sync {
    /// Normalize a criteria map
    ///
    /// The provided implementation drops empty values.
    fn normalize(&self, criteria: Criteria) -> Criteria {
        drop_empty_values(criteria)
    }
}

/// Normalizer with only the provided behaviour
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNormalizer;

impl CriteriaNormalizer for DefaultNormalizer {}

/// Normalizer that applies default criteria beneath the caller's criteria
///
/// Caller criteria win on field collisions. Empty values are dropped from
/// both sides before merging, so a blank caller filter never lifts a default.
///
/// ```rust
/// use acton_query::criteria::{CriteriaBuilder, CriteriaNormalizer, DefaultsNormalizer};
///
/// let normalizer = DefaultsNormalizer::new(CriteriaBuilder::eq("status", "published"));
///
/// let normalized = normalizer.normalize(CriteriaBuilder::gt("views", 10_i64));
/// assert_eq!(normalized.len(), 2);
///
/// let blank = normalizer.normalize(CriteriaBuilder::eq("status", ""));
/// assert_eq!(blank, CriteriaBuilder::eq("status", "published"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultsNormalizer {
    defaults: Criteria,
}

impl DefaultsNormalizer {
    /// Create a normalizer with the given default criteria
    #[must_use]
    pub fn new(defaults: Criteria) -> Self {
        Self { defaults }
    }

    /// The default criteria
    #[must_use]
    pub fn defaults(&self) -> &Criteria {
        &self.defaults
    }
}

impl CriteriaNormalizer for DefaultsNormalizer {
    fn normalize(&self, criteria: Criteria) -> Criteria {
        merge_criteria(
            drop_empty_values(self.defaults.clone()),
            drop_empty_values(criteria),
        )
    }
}

impl<N: CriteriaNormalizer + ?Sized> CriteriaNormalizer for &N {
    fn normalize(&self, criteria: Criteria) -> Criteria {
        (**self).normalize(criteria)
    }
}

impl<N: CriteriaNormalizer + ?Sized> CriteriaNormalizer for Box<N> {
    fn normalize(&self, criteria: Criteria) -> Criteria {
        (**self).normalize(criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{CriteriaBuilder, Criterion, Scalar};

    #[test]
    fn test_drops_null_and_empty_string() {
        let criteria = CriteriaBuilder::eq("a", "")
            .merge(CriteriaBuilder::eq("b", "x"))
            .merge(CriteriaBuilder::gte("c", Scalar::Null))
            .merge(CriteriaBuilder::like("d", ""));

        let normalized = DefaultNormalizer.normalize(criteria);
        assert_eq!(normalized, CriteriaBuilder::eq("b", "x"));
    }

    #[test]
    fn test_keeps_lists_and_falsy_scalars() {
        let criteria = CriteriaBuilder::is_in("tags", Vec::<Scalar>::new())
            .merge(CriteriaBuilder::eq("count", 0_i64))
            .merge(CriteriaBuilder::eq("flag", false));

        let normalized = DefaultNormalizer.normalize(criteria.clone());
        assert_eq!(normalized, criteria);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let criteria = CriteriaBuilder::eq("a", "")
            .merge(CriteriaBuilder::eq("b", "x"))
            .merge(CriteriaBuilder::not_in("c", [1_i64]));
        let once = DefaultNormalizer.normalize(criteria);
        let twice = DefaultNormalizer.normalize(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_merge_criteria_overrides_win() {
        let merged = merge_criteria(
            CriteriaBuilder::eq("status", "draft"),
            CriteriaBuilder::eq("status", "live"),
        );
        assert_eq!(merged.get("status"), Some(&Criterion::Eq(Scalar::from("live"))));
    }

    #[test]
    fn test_defaults_normalizer_applies_defaults() {
        let normalizer = DefaultsNormalizer::new(CriteriaBuilder::eq("deleted", false));
        let normalized = normalizer.normalize(CriteriaBuilder::eq("name", "alice"));
        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized.get("deleted"), Some(&Criterion::Eq(Scalar::from(false))));
    }

    #[test]
    fn test_defaults_normalizer_caller_wins() {
        let normalizer = DefaultsNormalizer::new(CriteriaBuilder::eq("deleted", false));
        let normalized = normalizer.normalize(CriteriaBuilder::eq("deleted", true));
        assert_eq!(normalized, CriteriaBuilder::eq("deleted", true));
    }

    #[test]
    fn test_defaults_normalizer_is_idempotent() {
        let normalizer = DefaultsNormalizer::new(
            CriteriaBuilder::eq("deleted", false).merge(CriteriaBuilder::eq("owner", "")),
        );
        let once = normalizer.normalize(CriteriaBuilder::eq("name", "a"));
        let twice = normalizer.normalize(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_defaults_normalizer_keeps_default_for_blank_caller_value() {
        let normalizer = DefaultsNormalizer::new(CriteriaBuilder::neq("team", "archive"));

        let once = normalizer.normalize(CriteriaBuilder::eq("team", ""));
        assert_eq!(once, CriteriaBuilder::neq("team", "archive"));

        let twice = normalizer.normalize(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_defaults_normalizer_drops_empty_defaults() {
        let normalizer = DefaultsNormalizer::new(
            CriteriaBuilder::eq("owner", "").merge(CriteriaBuilder::gte("rank", Scalar::Null)),
        );
        assert!(normalizer.normalize(Criteria::new()).is_empty());
    }

    #[test]
    fn test_boxed_normalizer_delegates() {
        let boxed: Box<dyn CriteriaNormalizer> = Box::new(DefaultNormalizer);
        assert!(boxed.normalize(CriteriaBuilder::eq("a", "")).is_empty());
    }
}
