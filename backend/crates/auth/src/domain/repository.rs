//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{credentials::Credentials, user::User};
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    ///
    /// The store enforces email uniqueness atomically; a conflicting
    /// create fails with `DuplicateEmail`.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by email (exact, case-sensitive match)
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Check if email exists
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// Update user
    async fn update(&self, user: &User) -> AuthResult<()>;
}

/// Credentials repository trait
#[trait_variant::make(CredentialsRepository: Send)]
pub trait LocalCredentialsRepository {
    /// Create credentials
    async fn create(&self, credentials: &Credentials) -> AuthResult<()>;

    /// Find credentials by user ID
    async fn find_by_user_id(&self, user_id: &UserId) -> AuthResult<Option<Credentials>>;

    /// Update credentials
    async fn update(&self, credentials: &Credentials) -> AuthResult<()>;
}
