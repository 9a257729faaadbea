//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Session token validation errors
///
/// Validation order is structure, then signature, then expiry: a token
/// that fails integrity checks never reaches the expiry comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Token does not have the expected shape or claims
    #[error("Malformed session token")]
    Malformed,

    /// Token signature does not verify
    #[error("Session token signature is invalid")]
    InvalidSignature,

    /// Token expiry has elapsed
    #[error("Session token has expired")]
    Expired,
}

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Missing or malformed input
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Email already registered
    #[error("Email already exists")]
    DuplicateEmail,

    /// User not found
    #[error("User not found")]
    UserNotFound,

    /// Invalid credentials (wrong password)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Session token rejected
    #[error(transparent)]
    Token(#[from] TokenError),

    /// Password hashing failure (internal randomness/resource failure)
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    /// Underlying store failure (potentially transient)
    #[error("Store error: {0}")]
    Store(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::DuplicateEmail => ErrorKind::Conflict,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::InvalidCredentials | AuthError::Token(_) => ErrorKind::Unauthorized,
            AuthError::Hashing(_) => ErrorKind::InternalServerError,
            AuthError::Store(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Routine outcomes of normal operation (bad password, expired token,
    /// not found). These must not be reported as anomalies.
    pub fn is_routine(&self) -> bool {
        !matches!(self, AuthError::Hashing(_) | AuthError::Store(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            AuthError::Validation("empty".into()).kind(),
            ErrorKind::BadRequest
        );
        assert_eq!(AuthError::DuplicateEmail.kind(), ErrorKind::Conflict);
        assert_eq!(AuthError::UserNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(AuthError::InvalidCredentials.kind(), ErrorKind::Unauthorized);
        assert_eq!(
            AuthError::Token(TokenError::Expired).kind(),
            ErrorKind::Unauthorized
        );
        assert_eq!(
            AuthError::Hashing("rng".into()).kind(),
            ErrorKind::InternalServerError
        );
        assert_eq!(
            AuthError::Store("down".into()).kind(),
            ErrorKind::InternalServerError
        );
    }

    #[test]
    fn test_token_error_propagates_unchanged() {
        let err: AuthError = TokenError::InvalidSignature.into();
        assert!(matches!(err, AuthError::Token(TokenError::InvalidSignature)));
    }

    #[test]
    fn test_routine_classification() {
        assert!(AuthError::InvalidCredentials.is_routine());
        assert!(AuthError::Token(TokenError::Expired).is_routine());
        assert!(!AuthError::Hashing("rng".into()).is_routine());
        assert!(!AuthError::Store("down".into()).is_routine());
    }
}
