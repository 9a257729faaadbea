//! Sign In Use Case
//!
//! Authenticates a user and issues a session token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session_token::SessionTokenService;
use crate::domain::repository::{CredentialsRepository, UserRepository};
use crate::domain::value_object::{email::Email, user_id::UserId, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    /// Stateless signed session token
    pub token: String,
    /// Authenticated user id
    pub user_id: UserId,
}

/// Sign in use case
pub struct SignInUseCase<U, C>
where
    U: UserRepository,
    C: CredentialsRepository,
{
    user_repo: Arc<U>,
    credentials_repo: Arc<C>,
    config: Arc<AuthConfig>,
    tokens: SessionTokenService,
}

impl<U, C> SignInUseCase<U, C>
where
    U: UserRepository,
    C: CredentialsRepository,
{
    pub fn new(user_repo: Arc<U>, credentials_repo: Arc<C>, config: Arc<AuthConfig>) -> Self {
        let tokens = SessionTokenService::new(&config);
        Self {
            user_repo,
            credentials_repo,
            config,
            tokens,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        // Both fields are required
        if input.email.trim().is_empty() || input.password.trim().is_empty() {
            return Err(AuthError::Validation(
                "Missing email or password".to_string(),
            ));
        }

        let email = Email::new(input.email)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;

        // Unknown email is reported as such, not folded into InvalidCredentials
        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let credentials = self
            .credentials_repo
            .find_by_user_id(&user.user_id)
            .await?
            .ok_or_else(|| AuthError::Store("Credentials missing for user".to_string()))?;

        // Verify password
        let raw_password = RawPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;

        if !credentials.password_hash.verify(&raw_password, self.config.pepper()) {
            tracing::debug!(user_id = %user.user_id, "Password verification failed");
            return Err(AuthError::InvalidCredentials);
        }

        // Record last login
        let mut user = user;
        user.record_login();
        self.user_repo.update(&user).await?;

        // Issue a token with the fixed configured TTL
        let token = self.tokens.issue(&user.user_id, self.config.session_ttl);

        tracing::info!(
            user_id = %user.user_id,
            ttl_ms = self.config.session_ttl_ms(),
            "User signed in"
        );

        Ok(SignInOutput {
            token,
            user_id: user.user_id,
        })
    }
}
