//! Criteria model: typed predicates keyed by field
//!
//! - [`Scalar`]: comparable values
//! - [`Criterion`]: one operator with its statically typed payload
//! - [`Criteria`]: the predicates of one query, one per field
//! - [`CriteriaBuilder`]: single-entry factories
//! - [`CriteriaNormalizer`]: clean-up and defaults before execution
//!
//! # Example
//!
//! ```rust
//! use acton_query::criteria::{Criteria, CriteriaBuilder, CriteriaNormalizer, DefaultNormalizer};
//!
//! let criteria = CriteriaBuilder::eq("status", "active")
//!     .merge(CriteriaBuilder::like("name", ""))
//!     .merge(CriteriaBuilder::gte("age", 18_i64));
//!
//! let criteria: Criteria = DefaultNormalizer.normalize(criteria);
//! assert_eq!(criteria.len(), 2);
//! ```

mod builder;
mod criterion;
mod map;
mod normalizer;
mod value;

pub use builder::CriteriaBuilder;
pub use criterion::{Criterion, CriterionValue, Operator};
pub use map::Criteria;
pub use normalizer::{
    drop_empty_values, merge_criteria, CriteriaNormalizer, DefaultNormalizer, DefaultsNormalizer,
};
pub use value::Scalar;
