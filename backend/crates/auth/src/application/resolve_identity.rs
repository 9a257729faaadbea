//! Resolve Identity Use Case
//!
//! Recovers the authenticated user record from a presented session token.
//! This is the single gate in front of every protected operation: nothing
//! touches the store on a user's behalf without passing through here.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session_token::SessionTokenService;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Resolve identity use case
pub struct ResolveIdentityUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: SessionTokenService,
}

impl<U> ResolveIdentityUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        let tokens = SessionTokenService::new(&config);
        Self { user_repo, tokens }
    }

    /// Resolve a session token to the user it was issued for
    ///
    /// Token failures propagate with their kind unchanged. A token whose
    /// user no longer exists (deleted between issuance and use) resolves
    /// to `UserNotFound`.
    pub async fn execute(&self, token: &str) -> AuthResult<User> {
        let user_id = self.tokens.validate(token)?;

        self.user_repo
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }
}
