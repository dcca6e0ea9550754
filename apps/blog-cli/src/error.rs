//! Application-level error type and its mapping to exit codes.

use boostblog_core::{DomainError, RepoError};

/// Errors a command can end with.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Post not found: {0}")]
    NotFound(String),

    #[error("{}", .0.join("\n"))]
    Validation(Vec<String>),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Cancelled, nothing was saved")]
    Cancelled,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl AppError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::NotFound(_) => 2,
            AppError::Validation(_) => 3,
            AppError::Cancelled => 130,
            AppError::Storage(_) | AppError::Io(_) | AppError::Encoding(_) => 1,
        }
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { id, .. } => AppError::NotFound(id),
            DomainError::Validation(messages) => AppError::Validation(messages),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        tracing::error!(error = %err, "Post store failure");
        AppError::Storage(err.to_string())
    }
}

/// Result type alias for commands.
pub type AppResult<T> = Result<T, AppError>;
