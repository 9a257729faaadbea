//! Playground Error Types
//!
//! This module provides project-operation error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Playground-specific result type alias
pub type PlaygroundResult<T> = Result<T, PlaygroundError>;

/// Playground-specific error variants
#[derive(Debug, Error)]
pub enum PlaygroundError {
    /// Project not found
    #[error("Project not found")]
    ProjectNotFound,

    /// Authenticated, but not the owner of the project
    #[error("Not the owner of this project")]
    Forbidden,

    /// Underlying store failure (potentially transient)
    #[error("Store error: {0}")]
    Store(String),
}

impl PlaygroundError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlaygroundError::ProjectNotFound => ErrorKind::NotFound,
            PlaygroundError::Forbidden => ErrorKind::Forbidden,
            PlaygroundError::Store(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(PlaygroundError::ProjectNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(PlaygroundError::Forbidden.kind(), ErrorKind::Forbidden);
        assert_eq!(
            PlaygroundError::Store("down".into()).kind(),
            ErrorKind::InternalServerError
        );
    }

    #[test]
    fn test_to_app_error_status() {
        assert_eq!(PlaygroundError::Forbidden.to_app_error().status_code(), 403);
    }
}
