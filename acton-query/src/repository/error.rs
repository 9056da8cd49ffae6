//! Repository error types
//!
//! Every failed query-building step or lookup produces a [`RepositoryError`]
//! naming the operation, the category of failure and, when one is involved,
//! the backing store and entity identifier.
//!
//! # Example
//!
//! ```rust
//! use acton_query::repository::{RepositoryError, RepositoryErrorKind};
//!
//! let error = RepositoryError::not_found("users", "usr_123");
//! assert!(matches!(error.kind, RepositoryErrorKind::NotFound));
//! assert!(error.entity_id.is_some());
//! ```

use std::fmt;

/// Operation being performed when the repository error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryOperation {
    /// Narrowing a view with criteria
    Filter,
    /// Appending a sort key to a view
    OrderBy,
    /// Setting or clearing a pagination window
    Paginate,
    /// Looking up a single entity by ID
    FindById,
    /// Building a view from a query
    Query,
}

impl fmt::Display for RepositoryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Filter => write!(f, "filter"),
            Self::OrderBy => write!(f, "order_by"),
            Self::Paginate => write!(f, "paginate"),
            Self::FindById => write!(f, "find_by_id"),
            Self::Query => write!(f, "query"),
        }
    }
}

/// Category of repository error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryErrorKind {
    /// Caller supplied an invalid pagination, sort or criterion argument
    InvalidArgument,
    /// A comparison was applied to values that cannot be compared
    TypeMismatch,
    /// Entity was not found
    NotFound,
}

impl fmt::Display for RepositoryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "invalid_argument"),
            Self::TypeMismatch => write!(f, "type_mismatch"),
            Self::NotFound => write!(f, "not_found"),
        }
    }
}

/// Structured repository error with operation context
///
/// # Example
///
/// ```rust
/// use acton_query::repository::RepositoryError;
///
/// let error = RepositoryError::not_found("users", "usr_abc123");
/// assert_eq!(
///     error.to_string(),
///     "Repository not_found error during find_by_id: Entity not found [users: usr_abc123]"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryError {
    /// The operation being performed when the error occurred
    pub operation: RepositoryOperation,
    /// The category of error
    pub kind: RepositoryErrorKind,
    /// Human-readable error message
    pub message: String,
    /// Logical name of the backing store or entity type involved
    pub entity_type: Option<String>,
    /// The ID of the entity involved
    pub entity_id: Option<String>,
}

impl RepositoryError {
    /// Create a new repository error
    ///
    /// # Example
    ///
    /// ```rust
    /// use acton_query::repository::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
    ///
    /// let error = RepositoryError::new(
    ///     RepositoryOperation::Filter,
    ///     RepositoryErrorKind::TypeMismatch,
    ///     "cannot compare string with integer",
    /// );
    /// ```
    pub fn new(
        operation: RepositoryOperation,
        kind: RepositoryErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
            entity_type: None,
            entity_id: None,
        }
    }

    /// Create a "not found" error with entity context
    ///
    /// # Example
    ///
    /// ```rust
    /// use acton_query::repository::RepositoryError;
    ///
    /// let error = RepositoryError::not_found("users", "usr_123");
    /// assert_eq!(error.entity_type, Some("users".to_string()));
    /// ```
    pub fn not_found(entity_type: impl Into<String>, entity_id: impl Into<String>) -> Self {
        Self {
            operation: RepositoryOperation::FindById,
            kind: RepositoryErrorKind::NotFound,
            message: "Entity not found".to_string(),
            entity_type: Some(entity_type.into()),
            entity_id: Some(entity_id.into()),
        }
    }

    /// Create an invalid argument error
    ///
    /// # Example
    ///
    /// ```rust
    /// use acton_query::repository::{RepositoryError, RepositoryOperation};
    ///
    /// let error = RepositoryError::invalid_argument(
    ///     RepositoryOperation::Paginate,
    ///     "page must be a positive integer",
    /// );
    /// ```
    pub fn invalid_argument(operation: RepositoryOperation, message: impl Into<String>) -> Self {
        Self::new(operation, RepositoryErrorKind::InvalidArgument, message)
    }

    /// Create a type mismatch error
    ///
    /// # Example
    ///
    /// ```rust
    /// use acton_query::repository::{RepositoryError, RepositoryOperation};
    ///
    /// let error = RepositoryError::type_mismatch(
    ///     RepositoryOperation::OrderBy,
    ///     "cannot order string against integer",
    /// );
    /// ```
    pub fn type_mismatch(operation: RepositoryOperation, message: impl Into<String>) -> Self {
        Self::new(operation, RepositoryErrorKind::TypeMismatch, message)
    }

    /// Add entity context to an existing error
    #[must_use]
    pub fn with_entity(
        mut self,
        entity_type: impl Into<String>,
        entity_id: impl Into<String>,
    ) -> Self {
        self.entity_type = Some(entity_type.into());
        self.entity_id = Some(entity_id.into());
        self
    }

    /// Set the operation that caused the error
    ///
    /// # Example
    ///
    /// ```rust
    /// use acton_query::repository::{RepositoryError, RepositoryOperation};
    ///
    /// let error = RepositoryError::invalid_argument(RepositoryOperation::Paginate, "page is 0")
    ///     .with_operation(RepositoryOperation::Query);
    /// assert_eq!(error.operation, RepositoryOperation::Query);
    /// ```
    #[must_use]
    pub fn with_operation(mut self, operation: RepositoryOperation) -> Self {
        self.operation = operation;
        self
    }

    /// Returns `true` for lookup misses
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind == RepositoryErrorKind::NotFound
    }
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Repository {} error during {}: {}",
            self.kind, self.operation, self.message
        )?;
        if let (Some(entity_type), Some(entity_id)) = (&self.entity_type, &self.entity_id) {
            write!(f, " [{entity_type}: {entity_id}]")?;
        }
        Ok(())
    }
}

impl std::error::Error for RepositoryError {}
