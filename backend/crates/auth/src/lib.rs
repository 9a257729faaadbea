//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Store implementations
//!
//! ## Features
//! - User signup/signin with email + password
//! - Stateless, signed session tokens (no server-side session store)
//! - Identity resolution as the single gate for protected operations
//! - Password change path
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, fresh salt per hash
//! - Tokens HMAC-SHA256 signed with a process-wide secret; any bit flip
//!   invalidates them
//! - Tokens expire after a fixed TTL and are never revoked server-side

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult, TokenError};
pub use infra::memory::InMemoryAuthRepository;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
}

pub mod store {
    pub use crate::infra::memory::InMemoryAuthRepository as AuthStore;
}
