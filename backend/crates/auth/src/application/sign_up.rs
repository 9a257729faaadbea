//! Sign Up Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::{credentials::Credentials, user::User};
use crate::domain::repository::{CredentialsRepository, UserRepository};
use crate::domain::value_object::{
    email::Email, full_name::FullName, user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// Sign up output
pub struct SignUpOutput {
    pub user: User,
}

/// Sign up use case
pub struct SignUpUseCase<U, C>
where
    U: UserRepository,
    C: CredentialsRepository,
{
    user_repo: Arc<U>,
    credentials_repo: Arc<C>,
    config: Arc<AuthConfig>,
}

impl<U, C> SignUpUseCase<U, C>
where
    U: UserRepository,
    C: CredentialsRepository,
{
    pub fn new(user_repo: Arc<U>, credentials_repo: Arc<C>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            credentials_repo,
            config,
        }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        // Every field is required
        if input.email.trim().is_empty()
            || input.password.trim().is_empty()
            || input.full_name.trim().is_empty()
        {
            return Err(AuthError::Validation("Missing required fields".to_string()));
        }

        let email = Email::new(input.email)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;
        let full_name = FullName::new(input.full_name)
            .map_err(|e| AuthError::Validation(e.to_string()))?;

        // Check email uniqueness
        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::DuplicateEmail);
        }

        // Validate and hash password
        let raw_password = RawPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())
            .map_err(|e| AuthError::Hashing(e.message().to_string()))?;

        // Create user and credentials
        let user = User::new(email, full_name);
        let credentials = Credentials::new(user.user_id, password_hash);

        // Persist; the store enforces email uniqueness atomically
        self.user_repo.create(&user).await?;
        self.credentials_repo.create(&credentials).await?;

        tracing::info!(
            user_id = %user.user_id,
            "User signed up"
        );

        Ok(SignUpOutput { user })
    }
}
