//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business rule failures surfaced to a front end.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: String },

    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Storage operation failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

/// Persistence substrate errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
