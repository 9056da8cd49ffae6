//! Single-field predicates
//!
//! A [`Criterion`] pairs a comparison [`Operator`] with a payload whose shape
//! is fixed by the operator: a scalar for comparisons, a list for membership
//! and a pattern string for `like`.
//!
//! # Example
//!
//! ```rust
//! use acton_query::criteria::{Criterion, CriterionValue, Operator, Scalar};
//!
//! let gte = Criterion::new(Operator::Gte, CriterionValue::from(Scalar::from(18_i64))).unwrap();
//! assert_eq!(gte.operator(), Operator::Gte);
//!
//! // A list is only accepted by `in` / `notIn`
//! let invalid = Criterion::new(Operator::Eq, CriterionValue::List(vec![Scalar::from(1_i64)]));
//! assert!(invalid.is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::value::Scalar;
use crate::repository::{RepositoryError, RepositoryOperation};

/// Comparison operators supported by criteria
///
/// # Example
///
/// ```rust
/// use acton_query::criteria::Operator;
///
/// assert_eq!(format!("{}", Operator::NotIn), "notIn");
/// assert_eq!("like".parse::<Operator>().unwrap(), Operator::Like);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operator {
    /// Equal to
    Eq,
    /// Not equal to
    Neq,
    /// Less than
    Lt,
    /// Less than or equal to
    Lte,
    /// Greater than
    Gt,
    /// Greater than or equal to
    Gte,
    /// Value is in a list
    In,
    /// Value is not in a list
    NotIn,
    /// Pattern matching
    Like,
    /// Negated pattern matching
    NotLike,
}

impl Operator {
    /// Wire name of the operator
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Neq => "neq",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::In => "in",
            Self::NotIn => "notIn",
            Self::Like => "like",
            Self::NotLike => "notLike",
        }
    }

    /// Returns `true` for `lt`, `lte`, `gt` and `gte`
    #[must_use]
    pub const fn is_ordering(&self) -> bool {
        matches!(self, Self::Lt | Self::Lte | Self::Gt | Self::Gte)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(Self::Eq),
            "neq" => Ok(Self::Neq),
            "lt" => Ok(Self::Lt),
            "lte" => Ok(Self::Lte),
            "gt" => Ok(Self::Gt),
            "gte" => Ok(Self::Gte),
            "in" => Ok(Self::In),
            "notIn" => Ok(Self::NotIn),
            "like" => Ok(Self::Like),
            "notLike" => Ok(Self::NotLike),
            other => Err(RepositoryError::invalid_argument(
                RepositoryOperation::Filter,
                format!("unknown operator '{other}'"),
            )),
        }
    }
}

/// Untyped payload accepted by [`Criterion::new`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CriterionValue {
    /// A list of values (`in` / `notIn`)
    List(Vec<Scalar>),
    /// A single value
    Scalar(Scalar),
}

impl Default for CriterionValue {
    fn default() -> Self {
        Self::Scalar(Scalar::Null)
    }
}

impl From<Scalar> for CriterionValue {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<Scalar>> for CriterionValue {
    fn from(values: Vec<Scalar>) -> Self {
        Self::List(values)
    }
}

/// A single predicate applied to one field
///
/// Serialized as `{"operator": "...", "value": ...}`. A bare scalar is
/// accepted on input as shorthand for `eq`.
///
/// ```rust
/// use acton_query::criteria::{Criterion, Scalar};
///
/// let full: Criterion = serde_json::from_str(r#"{"operator": "gte", "value": 25}"#).unwrap();
/// assert_eq!(full, Criterion::Gte(Scalar::from(25_i64)));
///
/// let bare: Criterion = serde_json::from_str(r#""active""#).unwrap();
/// assert_eq!(bare, Criterion::Eq(Scalar::from("active")));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCriterion", into = "RawCriterion")]
pub enum Criterion {
    /// Field equals the value
    Eq(Scalar),
    /// Field differs from the value
    Neq(Scalar),
    /// Field is less than the value
    Lt(Scalar),
    /// Field is less than or equal to the value
    Lte(Scalar),
    /// Field is greater than the value
    Gt(Scalar),
    /// Field is greater than or equal to the value
    Gte(Scalar),
    /// Field equals one of the values
    In(Vec<Scalar>),
    /// Field equals none of the values
    NotIn(Vec<Scalar>),
    /// Field matches the pattern
    Like(String),
    /// Field does not match the pattern
    NotLike(String),
}

impl Criterion {
    /// Build a criterion from an operator and an untyped payload
    ///
    /// Rejects payloads whose shape does not fit the operator.
    pub fn new(operator: Operator, value: CriterionValue) -> Result<Self, RepositoryError> {
        let mismatch = |expected: &str| {
            RepositoryError::invalid_argument(
                RepositoryOperation::Filter,
                format!("operator '{operator}' requires {expected}"),
            )
        };

        match (operator, value) {
            (Operator::In, CriterionValue::List(values)) => Ok(Self::In(values)),
            (Operator::NotIn, CriterionValue::List(values)) => Ok(Self::NotIn(values)),
            (Operator::In | Operator::NotIn, CriterionValue::Scalar(_)) => Err(mismatch("a list")),
            (Operator::Like, CriterionValue::Scalar(Scalar::String(pattern))) => {
                Ok(Self::Like(pattern))
            }
            (Operator::NotLike, CriterionValue::Scalar(Scalar::String(pattern))) => {
                Ok(Self::NotLike(pattern))
            }
            // A null pattern survives construction so normalization can drop it.
            (Operator::Like, CriterionValue::Scalar(Scalar::Null)) => Ok(Self::Like(String::new())),
            (Operator::NotLike, CriterionValue::Scalar(Scalar::Null)) => {
                Ok(Self::NotLike(String::new()))
            }
            (Operator::Like | Operator::NotLike, _) => Err(mismatch("a string pattern")),
            (_, CriterionValue::List(_)) => Err(mismatch("a single value")),
            (Operator::Eq, CriterionValue::Scalar(v)) => Ok(Self::Eq(v)),
            (Operator::Neq, CriterionValue::Scalar(v)) => Ok(Self::Neq(v)),
            (Operator::Lt, CriterionValue::Scalar(v)) => Ok(Self::Lt(v)),
            (Operator::Lte, CriterionValue::Scalar(v)) => Ok(Self::Lte(v)),
            (Operator::Gt, CriterionValue::Scalar(v)) => Ok(Self::Gt(v)),
            (Operator::Gte, CriterionValue::Scalar(v)) => Ok(Self::Gte(v)),
        }
    }

    /// The operator of this criterion
    #[must_use]
    pub const fn operator(&self) -> Operator {
        match self {
            Self::Eq(_) => Operator::Eq,
            Self::Neq(_) => Operator::Neq,
            Self::Lt(_) => Operator::Lt,
            Self::Lte(_) => Operator::Lte,
            Self::Gt(_) => Operator::Gt,
            Self::Gte(_) => Operator::Gte,
            Self::In(_) => Operator::In,
            Self::NotIn(_) => Operator::NotIn,
            Self::Like(_) => Operator::Like,
            Self::NotLike(_) => Operator::NotLike,
        }
    }

    /// The payload as an untyped value
    #[must_use]
    pub fn value(&self) -> CriterionValue {
        match self {
            Self::Eq(v) | Self::Neq(v) | Self::Lt(v) | Self::Lte(v) | Self::Gt(v) | Self::Gte(v) => {
                CriterionValue::Scalar(v.clone())
            }
            Self::In(values) | Self::NotIn(values) => CriterionValue::List(values.clone()),
            Self::Like(pattern) | Self::NotLike(pattern) => {
                CriterionValue::Scalar(Scalar::String(pattern.clone()))
            }
        }
    }

    /// Returns `true` when the comparison value is null or an empty string
    ///
    /// Lists never count as empty.
    #[must_use]
    pub fn has_empty_value(&self) -> bool {
        match self {
            Self::Eq(v) | Self::Neq(v) | Self::Lt(v) | Self::Lte(v) | Self::Gt(v) | Self::Gte(v) => {
                v.is_empty()
            }
            Self::In(_) | Self::NotIn(_) => false,
            Self::Like(pattern) | Self::NotLike(pattern) => pattern.is_empty(),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            CriterionValue::Scalar(v) => write!(f, "{} {v}", self.operator()),
            CriterionValue::List(values) => {
                let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
                write!(f, "{} [{}]", self.operator(), rendered.join(", "))
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawCriterion {
    Full {
        operator: Operator,
        #[serde(default)]
        value: CriterionValue,
    },
    Bare(Scalar),
}

impl TryFrom<RawCriterion> for Criterion {
    type Error = RepositoryError;

    fn try_from(raw: RawCriterion) -> Result<Self, Self::Error> {
        match raw {
            RawCriterion::Full { operator, value } => Self::new(operator, value),
            RawCriterion::Bare(value) => Ok(Self::Eq(value)),
        }
    }
}

impl From<Criterion> for RawCriterion {
    fn from(criterion: Criterion) -> Self {
        Self::Full {
            operator: criterion.operator(),
            value: criterion.value(),
        }
    }
}
