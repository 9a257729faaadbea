//! Credentials Entity
//!
//! Authentication credentials for a user.
//! Separated from User entity to isolate sensitive data.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{user_id::UserId, user_password::UserPassword};

/// Credentials entity
///
/// The password hash is only ever replaced through the password-change
/// path; nothing else mutates it.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Reference to User
    pub user_id: UserId,
    /// Hashed password
    pub password_hash: UserPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Credentials {
    /// Create new credentials
    pub fn new(user_id: UserId, password_hash: UserPassword) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the password hash (password-change path)
    pub fn update_password(&mut self, new_password: UserPassword) {
        self.password_hash = new_password;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_password::RawPassword;

    #[test]
    fn test_update_password() {
        let old_raw = RawPassword::new("old password".into()).unwrap();
        let new_raw = RawPassword::new("new password".into()).unwrap();

        let mut credentials = Credentials::new(
            UserId::new(),
            UserPassword::from_raw(&old_raw, None).unwrap(),
        );
        assert!(credentials.password_hash.verify(&old_raw, None));

        credentials.update_password(UserPassword::from_raw(&new_raw, None).unwrap());
        assert!(!credentials.password_hash.verify(&old_raw, None));
        assert!(credentials.password_hash.verify(&new_raw, None));
    }
}
