//! Time-sortable entity identifiers
//!
//! [`EntityId`] wraps a UUIDv7, so identifiers created later sort after
//! earlier ones, which keeps insertion order recoverable from the id alone.
//!
//! ```rust
//! use acton_query::ids::EntityId;
//! use std::str::FromStr;
//!
//! let id = EntityId::new();
//! let parsed = EntityId::from_str(&id.to_string()).unwrap();
//! assert_eq!(id, parsed);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::criteria::Scalar;

/// A UUIDv7-backed entity identifier
///
/// Displayed and serialized in the hyphenated form,
/// e.g. `01890a5d-ac96-774b-bcce-b302099a8057`.
///
/// # Example
///
/// ```rust
/// use acton_query::ids::EntityId;
///
/// let id = EntityId::new();
/// assert_eq!(id.as_uuid().get_version_num(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityId(Uuid);

impl EntityId {
    /// Creates a new identifier from the current time
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Returns the underlying UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Converts the identifier into its UUID
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for EntityId {
    type Err = EntityIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::parse_str(s)?;
        Self::try_from(uuid)
    }
}

impl TryFrom<Uuid> for EntityId {
    type Error = EntityIdError;

    fn try_from(uuid: Uuid) -> Result<Self, Self::Error> {
        match uuid.get_version_num() {
            7 => Ok(Self(uuid)),
            actual => Err(EntityIdError::InvalidVersion { actual }),
        }
    }
}

impl TryFrom<String> for EntityId {
    type Error = EntityIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.to_string()
    }
}

impl From<EntityId> for Scalar {
    fn from(id: EntityId) -> Self {
        Scalar::String(id.to_string())
    }
}

/// Error type for entity ID parsing.
#[derive(Debug, thiserror::Error)]
pub enum EntityIdError {
    /// The value is not a UUID.
    #[error("failed to parse entity ID: {0}")]
    Parse(#[from] uuid::Error),

    /// The UUID is not time-sortable.
    #[error("invalid UUID version: expected 7, got {actual}")]
    InvalidVersion {
        /// The version found.
        actual: usize,
    },
}
