//! Error types for catalog-level resource operations

use thiserror::Error;

use crate::domain::ValidationError;

/// Errors raised while building or diffing catalog entries
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No resource type registered under this name
    #[error("Unknown resource type: {0}")]
    UnknownType(String),

    /// A resource type with this name is already registered
    #[error("Resource type already registered: {0}")]
    DuplicateType(&'static str),

    /// Declaration failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Catalog entry was built by a different implementation of the type
    #[error("Catalog entry does not hold a {0} descriptor")]
    TypeMismatch(&'static str),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for catalog-level resource operations
pub type ResourceResult<T> = Result<T, ResourceError>;

impl From<serde_json::Error> for ResourceError {
    fn from(err: serde_json::Error) -> Self {
        ResourceError::Serialization(err.to_string())
    }
}
