//! User Entity
//!
//! Core user profile entity containing non-sensitive user data.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{email::Email, full_name::FullName, user_id::UserId};

/// User entity
///
/// Contains the user profile information.
/// Sensitive auth data is in the Credentials entity.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier (immutable)
    pub user_id: UserId,
    /// Email address (unique, stored case-sensitively)
    pub email: Email,
    /// Display name
    pub full_name: FullName,
    /// Last successful login time
    pub last_login_at: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(email: Email, full_name: FullName) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            email,
            full_name,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record successful login
    pub fn record_login(&mut self) {
        let now = Utc::now();
        self.last_login_at = Some(now);
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let user = User::new(
            Email::new("a@x.com").unwrap(),
            FullName::new("Alice").unwrap(),
        );
        assert_eq!(user.email.as_str(), "a@x.com");
        assert_eq!(user.full_name.as_str(), "Alice");
        assert!(user.last_login_at.is_none());
    }

    #[test]
    fn test_record_login() {
        let mut user = User::new(
            Email::new("a@x.com").unwrap(),
            FullName::new("Alice").unwrap(),
        );
        user.record_login();
        assert!(user.last_login_at.is_some());
    }
}
