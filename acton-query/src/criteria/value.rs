//! Scalar values compared by criteria and read from entities
//!
//! # Example
//!
//! ```rust
//! use acton_query::criteria::Scalar;
//!
//! let string_val: Scalar = "active".into();
//! let int_val: Scalar = 42_i64.into();
//! let bool_val: Scalar = true.into();
//! let missing: Scalar = Option::<i64>::None.into();
//!
//! assert!(missing.is_null());
//! assert_eq!(int_val.type_name(), "integer");
//! ```

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single comparable value
///
/// Serializes to the natural JSON value. Deserialization never produces
/// [`Scalar::DateTime`]: RFC 3339 strings stay strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Explicit null
    #[default]
    Null,
    /// Boolean value
    Boolean(bool),
    /// 64-bit integer value
    Integer(i64),
    /// 64-bit floating point value
    Float(f64),
    /// String value
    String(String),
    /// UTC timestamp
    DateTime(DateTime<Utc>),
}

impl Scalar {
    /// Returns `true` for [`Scalar::Null`]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for null and for the empty string
    ///
    /// ```rust
    /// use acton_query::criteria::Scalar;
    ///
    /// assert!(Scalar::Null.is_empty());
    /// assert!(Scalar::from("").is_empty());
    /// assert!(!Scalar::from(0_i64).is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Borrow the string payload, if any
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Short name of the variant, used in error messages
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::DateTime(_) => "datetime",
        }
    }

    /// Total-order comparison between two orderable values
    ///
    /// Integers and floats compare numerically with each other. Every other
    /// pairing of different variants, null included, is not orderable and
    /// yields `None`.
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use acton_query::criteria::Scalar;
    ///
    /// assert_eq!(Scalar::from(2_i64).compare(&Scalar::from(2.5)), Some(Ordering::Less));
    /// assert_eq!(Scalar::from("b").compare(&Scalar::from("a")), Some(Ordering::Greater));
    /// assert_eq!(Scalar::from(true).compare(&Scalar::from(1_i64)), None);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Some(a.cmp(b)),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b),
            (Self::Integer(a), Self::Float(b)) => (*a as f64).partial_cmp(b),
            (Self::Float(a), Self::Integer(b)) => a.partial_cmp(&(*b as f64)),
            (Self::String(a), Self::String(b)) => Some(a.cmp(b)),
            (Self::Boolean(a), Self::Boolean(b)) => Some(a.cmp(b)),
            (Self::DateTime(a), Self::DateTime(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<u32> for Scalar {
    fn from(n: u32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<DateTime<Utc>> for Scalar {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::DateTime(dt)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_scalar_from_primitives() {
        assert_eq!(Scalar::from("a"), Scalar::String("a".to_string()));
        assert_eq!(Scalar::from(String::from("a")), Scalar::String("a".to_string()));
        assert_eq!(Scalar::from(42_i32), Scalar::Integer(42));
        assert_eq!(Scalar::from(42_u32), Scalar::Integer(42));
        assert_eq!(Scalar::from(1.5_f64), Scalar::Float(1.5));
        assert_eq!(Scalar::from(false), Scalar::Boolean(false));
        assert_eq!(Scalar::from(Some(3_i64)), Scalar::Integer(3));
        assert_eq!(Scalar::from(Option::<&str>::None), Scalar::Null);
    }

    #[test]
    fn test_is_empty() {
        assert!(Scalar::Null.is_empty());
        assert!(Scalar::from("").is_empty());
        assert!(!Scalar::from(" ").is_empty());
        assert!(!Scalar::from(false).is_empty());
    }

    #[test]
    fn test_compare_numeric_cross_variant() {
        assert_eq!(
            Scalar::from(3_i64).compare(&Scalar::from(3.0)),
            Some(Ordering::Equal)
        );
        assert_eq!(
            Scalar::from(3.5).compare(&Scalar::from(3_i64)),
            Some(Ordering::Greater)
        );
    }

    #[test]
    fn test_compare_datetimes() {
        let earlier = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(
            Scalar::from(earlier).compare(&Scalar::from(later)),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn test_compare_not_orderable() {
        assert_eq!(Scalar::Null.compare(&Scalar::Null), None);
        assert_eq!(Scalar::from("1").compare(&Scalar::from(1_i64)), None);
        assert_eq!(Scalar::from(f64::NAN).compare(&Scalar::from(1.0)), None);
    }

    #[test]
    fn test_equality_is_variant_strict() {
        assert_ne!(Scalar::from(1_i64), Scalar::from(1.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Scalar::Null.to_string(), "null");
        assert_eq!(Scalar::from(7_i64).to_string(), "7");
        assert_eq!(Scalar::from("x").to_string(), "x");
    }

    #[test]
    fn test_scalar_serde() {
        let values: Vec<Scalar> = serde_json::from_str(r#"[null, true, 3, 2.5, "s"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                Scalar::Null,
                Scalar::Boolean(true),
                Scalar::Integer(3),
                Scalar::Float(2.5),
                Scalar::String("s".to_string()),
            ]
        );
        assert_eq!(serde_json::to_string(&Scalar::Integer(3)).unwrap(), "3");
    }

    #[test]
    fn test_datetime_reads_back_as_string() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let json = serde_json::to_string(&Scalar::from(at)).unwrap();

        let back: Scalar = serde_json::from_str(&json).unwrap();
        let Scalar::String(text) = &back else {
            panic!("Expected a string, got {back:?}");
        };
        assert_eq!(DateTime::parse_from_rfc3339(text).unwrap(), at);
        assert_eq!(back.compare(&Scalar::from(at)), None);
    }
}
