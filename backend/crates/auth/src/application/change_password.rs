//! Change Password Use Case
//!
//! Replaces a user's password hash after verifying the current password.
//! This is the only path that mutates stored credentials.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::CredentialsRepository;
use crate::domain::value_object::user_password::{RawPassword, UserPassword};
use crate::error::{AuthError, AuthResult};

/// Change password input
pub struct ChangePasswordInput {
    pub current_password: String,
    pub new_password: String,
}

/// Change password use case
pub struct ChangePasswordUseCase<C>
where
    C: CredentialsRepository,
{
    credentials_repo: Arc<C>,
    config: Arc<AuthConfig>,
}

impl<C> ChangePasswordUseCase<C>
where
    C: CredentialsRepository,
{
    pub fn new(credentials_repo: Arc<C>, config: Arc<AuthConfig>) -> Self {
        Self {
            credentials_repo,
            config,
        }
    }

    pub async fn execute(&self, identity: &User, input: ChangePasswordInput) -> AuthResult<()> {
        if input.current_password.trim().is_empty() || input.new_password.trim().is_empty() {
            return Err(AuthError::Validation("Missing required fields".to_string()));
        }

        let mut credentials = self
            .credentials_repo
            .find_by_user_id(&identity.user_id)
            .await?
            .ok_or_else(|| AuthError::Store("Credentials missing for user".to_string()))?;

        let current = RawPassword::new(input.current_password)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;

        if !credentials.password_hash.verify(&current, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let new_raw = RawPassword::new(input.new_password)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;
        let new_hash = UserPassword::from_raw(&new_raw, self.config.pepper())
            .map_err(|e| AuthError::Hashing(e.message().to_string()))?;

        credentials.update_password(new_hash);
        self.credentials_repo.update(&credentials).await?;

        tracing::info!(user_id = %identity.user_id, "Password changed");

        Ok(())
    }
}
