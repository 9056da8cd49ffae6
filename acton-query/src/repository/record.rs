//! Schemaless entity backed by an attribute map

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::{RepositoryError, RepositoryOperation};
use super::traits::{Entity, RepositoryResult};
use crate::criteria::Scalar;

/// Attribute holding a record's identifier
pub const ID_FIELD: &str = "id";

/// An entity whose attributes are only known at runtime
///
/// Serialized as a flat JSON object. The `id` attribute is required and must
/// not be null. Datetime attributes are written as RFC 3339 strings and read
/// back as [`Scalar::String`], so compare them as strings after a round trip.
///
/// # Example
///
/// ```rust
/// use acton_query::criteria::Scalar;
/// use acton_query::repository::{Entity, Record};
///
/// let record = Record::new(1_i64).with("name", "Ada").with("age", 36_i64);
///
/// assert_eq!(record.id(), &Scalar::from(1_i64));
/// assert_eq!(record.field("name"), Some(Scalar::from("Ada")));
/// assert_eq!(record.field("email"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, Scalar>",
    into = "BTreeMap<String, Scalar>"
)]
pub struct Record {
    id: Scalar,
    attributes: BTreeMap<String, Scalar>,
}

impl Record {
    /// Create a record with only an identifier
    pub fn new(id: impl Into<Scalar>) -> Self {
        Self {
            id: id.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Build a record from an attribute map containing an `id`
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error when `id` is missing or null.
    pub fn from_attributes(mut attributes: BTreeMap<String, Scalar>) -> RepositoryResult<Self> {
        match attributes.remove(ID_FIELD) {
            Some(id) if !id.is_null() => Ok(Self { id, attributes }),
            _ => Err(RepositoryError::invalid_argument(
                RepositoryOperation::Query,
                "record requires a non-null 'id' attribute",
            )),
        }
    }

    /// Set an attribute, returning the updated record
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.set(field, value);
        self
    }

    /// Set an attribute
    ///
    /// Setting `id` to a non-null value replaces the identifier. A null `id`
    /// is ignored.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Scalar>) {
        let field = field.into();
        let value = value.into();
        if field == ID_FIELD {
            if !value.is_null() {
                self.id = value;
            }
        } else {
            self.attributes.insert(field, value);
        }
    }

    /// Remove an attribute, making it missing rather than null
    pub fn remove(&mut self, field: &str) -> Option<Scalar> {
        self.attributes.remove(field)
    }

    /// Attributes other than `id`
    #[must_use]
    pub fn attributes(&self) -> &BTreeMap<String, Scalar> {
        &self.attributes
    }
}

impl Entity for Record {
    type Id = Scalar;

    fn id(&self) -> &Scalar {
        &self.id
    }

    fn field(&self, name: &str) -> Option<Scalar> {
        if name == ID_FIELD {
            Some(self.id.clone())
        } else {
            self.attributes.get(name).cloned()
        }
    }
}

impl TryFrom<BTreeMap<String, Scalar>> for Record {
    type Error = RepositoryError;

    fn try_from(attributes: BTreeMap<String, Scalar>) -> Result<Self, Self::Error> {
        Self::from_attributes(attributes)
    }
}

impl From<Record> for BTreeMap<String, Scalar> {
    fn from(record: Record) -> Self {
        let mut attributes = record.attributes;
        attributes.insert(ID_FIELD.to_string(), record.id);
        attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_is_readable_as_field() {
        let record = Record::new("usr_1");
        assert_eq!(record.field("id"), Some(Scalar::from("usr_1")));
    }

    #[test]
    fn test_set_id_replaces_identifier() {
        let record = Record::new(1_i64).with("id", 2_i64).with("id", Scalar::Null);
        assert_eq!(record.id(), &Scalar::from(2_i64));
        assert!(record.attributes().is_empty());
    }

    #[test]
    fn test_missing_differs_from_null() {
        let mut record = Record::new(1_i64).with("email", Scalar::Null);
        assert_eq!(record.field("email"), Some(Scalar::Null));
        assert_eq!(record.remove("email"), Some(Scalar::Null));
        assert_eq!(record.field("email"), None);
    }

    #[test]
    fn test_deserialize_requires_id() {
        let record: Record = serde_json::from_value(json!({"id": 7, "age": 30})).unwrap();
        assert_eq!(record.id(), &Scalar::from(7_i64));
        assert_eq!(record.field("age"), Some(Scalar::from(30_i64)));

        assert!(serde_json::from_value::<Record>(json!({"age": 30})).is_err());
        assert!(serde_json::from_value::<Record>(json!({"id": null})).is_err());
    }

    #[test]
    fn test_deserialize_rejects_nested_values() {
        assert!(serde_json::from_value::<Record>(json!({"id": 1, "tags": ["a"]})).is_err());
    }

    #[test]
    fn test_serialize_flat_object() {
        let record = Record::new(1_i64).with("name", "Ada");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, json!({"id": 1, "name": "Ada"}));
    }

    #[test]
    fn test_datetime_attribute_round_trips_as_string() {
        use chrono::{TimeZone, Utc};

        let joined = Utc.with_ymd_and_hms(2023, 9, 4, 8, 0, 0).unwrap();
        let record = Record::new(1_i64).with("joined", joined);
        assert_eq!(record.field("joined"), Some(Scalar::DateTime(joined)));

        let back: Record = serde_json::from_value(serde_json::to_value(&record).unwrap()).unwrap();
        assert!(matches!(back.field("joined"), Some(Scalar::String(_))));
        assert_ne!(back, record);
    }
}
