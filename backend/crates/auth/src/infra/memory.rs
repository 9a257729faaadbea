//! In-Memory Repository Implementations
//!
//! Backing store double for tests and lightweight embedding. The real
//! deployment binds these traits to a persistent store; the core only
//! relies on the contract, including atomic enforcement of email
//! uniqueness at creation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::domain::entity::{credentials::Credentials, user::User};
use crate::domain::repository::{CredentialsRepository, UserRepository};
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct State {
    users: HashMap<Uuid, User>,
    credentials: HashMap<Uuid, Credentials>,
}

/// In-memory auth repository
#[derive(Clone, Default)]
pub struct InMemoryAuthRepository {
    state: Arc<RwLock<State>>,
}

impl InMemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AuthResult<std::sync::RwLockReadGuard<'_, State>> {
        self.state
            .read()
            .map_err(|_| AuthError::Store("auth store lock poisoned".to_string()))
    }

    fn write(&self) -> AuthResult<std::sync::RwLockWriteGuard<'_, State>> {
        self.state
            .write()
            .map_err(|_| AuthError::Store("auth store lock poisoned".to_string()))
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for InMemoryAuthRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut state = self.write()?;

        // Uniqueness is enforced under the same write lock as the insert
        if state.users.values().any(|u| u.email == user.email) {
            return Err(AuthError::DuplicateEmail);
        }

        state.users.insert(user.user_id.into_uuid(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.read()?.users.get(user_id.as_uuid()).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self
            .read()?
            .users
            .values()
            .find(|u| &u.email == email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(self.read()?.users.values().any(|u| &u.email == email))
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        let mut state = self.write()?;
        match state.users.get_mut(user.user_id.as_uuid()) {
            Some(existing) => {
                *existing = user.clone();
                Ok(())
            }
            None => Err(AuthError::UserNotFound),
        }
    }
}

// ============================================================================
// Credentials Repository Implementation
// ============================================================================

impl CredentialsRepository for InMemoryAuthRepository {
    async fn create(&self, credentials: &Credentials) -> AuthResult<()> {
        self.write()?
            .credentials
            .insert(credentials.user_id.into_uuid(), credentials.clone());
        Ok(())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> AuthResult<Option<Credentials>> {
        Ok(self.read()?.credentials.get(user_id.as_uuid()).cloned())
    }

    async fn update(&self, credentials: &Credentials) -> AuthResult<()> {
        let mut state = self.write()?;
        match state.credentials.get_mut(credentials.user_id.as_uuid()) {
            Some(existing) => {
                *existing = credentials.clone();
                Ok(())
            }
            None => Err(AuthError::Store("credentials not found".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::full_name::FullName;

    fn user(email: &str) -> User {
        User::new(Email::new(email).unwrap(), FullName::new("Test").unwrap())
    }

    // `create`/`update` exist on both repository traits, so calls in
    // these tests go through the trait explicitly.

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryAuthRepository::new();
        let user = user("a@x.com");

        UserRepository::create(&repo, &user).await.unwrap();

        let by_id = repo.find_by_id(&user.user_id).await.unwrap().unwrap();
        assert_eq!(by_id.email, user.email);

        let by_email = repo
            .find_by_email(&Email::new("a@x.com").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_email.user_id, user.user_id);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = InMemoryAuthRepository::new();
        UserRepository::create(&repo, &user("a@x.com")).await.unwrap();

        let result = UserRepository::create(&repo, &user("a@x.com")).await;
        assert!(matches!(result, Err(AuthError::DuplicateEmail)));
    }

    #[tokio::test]
    async fn test_email_lookup_is_case_sensitive() {
        let repo = InMemoryAuthRepository::new();
        UserRepository::create(&repo, &user("a@x.com")).await.unwrap();

        let found = repo
            .find_by_email(&Email::new("A@x.com").unwrap())
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let repo = InMemoryAuthRepository::new();
        let result = UserRepository::update(&repo, &user("a@x.com")).await;
        assert!(matches!(result, Err(AuthError::UserNotFound)));
    }
}
