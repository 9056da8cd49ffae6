//! Fluent construction of criteria maps
//!
//! Every function returns a single-entry [`Criteria`]. Combining several is
//! left to the caller through [`Criteria::merge`] or a normalizer.
//!
//! # Example
//!
//! ```rust
//! use acton_query::criteria::CriteriaBuilder;
//!
//! let criteria = CriteriaBuilder::gte("age", 18_i64)
//!     .merge(CriteriaBuilder::is_in("status", ["active", "pending"]))
//!     .merge(CriteriaBuilder::like("email", "%@example.com"));
//!
//! assert_eq!(criteria.len(), 3);
//! ```

use super::criterion::Criterion;
use super::map::Criteria;
use super::value::Scalar;

/// Factory for single-field criteria maps
#[derive(Debug, Clone, Copy, Default)]
pub struct CriteriaBuilder;

impl CriteriaBuilder {
    /// `field == value`
    pub fn eq(field: impl Into<String>, value: impl Into<Scalar>) -> Criteria {
        Criteria::single(field, Criterion::Eq(value.into()))
    }

    /// `field != value`
    pub fn neq(field: impl Into<String>, value: impl Into<Scalar>) -> Criteria {
        Criteria::single(field, Criterion::Neq(value.into()))
    }

    /// `field < value`
    pub fn lt(field: impl Into<String>, value: impl Into<Scalar>) -> Criteria {
        Criteria::single(field, Criterion::Lt(value.into()))
    }

    /// `field <= value`
    pub fn lte(field: impl Into<String>, value: impl Into<Scalar>) -> Criteria {
        Criteria::single(field, Criterion::Lte(value.into()))
    }

    /// `field > value`
    pub fn gt(field: impl Into<String>, value: impl Into<Scalar>) -> Criteria {
        Criteria::single(field, Criterion::Gt(value.into()))
    }

    /// `field >= value`
    pub fn gte(field: impl Into<String>, value: impl Into<Scalar>) -> Criteria {
        Criteria::single(field, Criterion::Gte(value.into()))
    }

    /// `field` equals one of `values`
    pub fn is_in<V: Into<Scalar>>(
        field: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Criteria {
        Criteria::single(field, Criterion::In(values.into_iter().map(Into::into).collect()))
    }

    /// `field` equals none of `values`
    pub fn not_in<V: Into<Scalar>>(
        field: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Criteria {
        Criteria::single(
            field,
            Criterion::NotIn(values.into_iter().map(Into::into).collect()),
        )
    }

    /// `field` matches `pattern`
    pub fn like(field: impl Into<String>, pattern: impl Into<String>) -> Criteria {
        Criteria::single(field, Criterion::Like(pattern.into()))
    }

    /// `field` does not match `pattern`
    pub fn not_like(field: impl Into<String>, pattern: impl Into<String>) -> Criteria {
        Criteria::single(field, Criterion::NotLike(pattern.into()))
    }
}
