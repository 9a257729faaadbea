//! Domain Entities
//!
//! Core business entities for the playground domain.

use auth::domain::value_object::user_id::UserId;
use chrono::{DateTime, Utc};
use kernel::id::ProjectId;

use crate::domain::value_objects::Language;

/// Project entity - a saved code snippet owned by a single user
///
/// `owner_id` is set exclusively at creation and never reassigned.
/// `version` is an opaque, caller-supplied tag; nothing here validates or
/// increments it.
#[derive(Debug, Clone)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub language: Language,
    pub code: String,
    pub version: String,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Create a new project
    pub fn new(
        name: String,
        language: Language,
        code: String,
        version: String,
        owner_id: UserId,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ProjectId::new(),
            name,
            language,
            code,
            version,
            owner_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether `user_id` owns this project
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.owner_id == *user_id
    }

    /// Replace the source code
    pub fn update_code(&mut self, code: String) {
        self.code = code;
        self.updated_at = Utc::now();
    }

    /// Rename the project
    pub fn rename(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ownership() {
        let owner = UserId::new();
        let other = UserId::new();
        let project = Project::new(
            "demo".to_string(),
            Language::new("python"),
            "code".to_string(),
            "1".to_string(),
            owner,
        );

        assert!(project.is_owned_by(&owner));
        assert!(!project.is_owned_by(&other));
    }

    #[test]
    fn test_mutations() {
        let mut project = Project::new(
            "demo".to_string(),
            Language::new("python"),
            "code".to_string(),
            "1".to_string(),
            UserId::new(),
        );

        project.update_code("new code".to_string());
        assert_eq!(project.code, "new code");

        project.rename("renamed".to_string());
        assert_eq!(project.name, "renamed");

        // Version is opaque and untouched by mutations
        assert_eq!(project.version, "1");
    }
}
