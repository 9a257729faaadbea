//! Domain Value Objects

use std::fmt;

/// Language tag attached to a project
///
/// Free-form by design: the tag is not validated against a closed set.
/// Only the starter-template lookup interprets it, case-insensitively;
/// the original casing is preserved for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Language(String);

impl Language {
    /// Create a language tag, preserving the caller's casing
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Get the tag as entered
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased form for case-insensitive matching
    pub fn canonical(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Language {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_preserved() {
        let lang = Language::new("Python");
        assert_eq!(lang.as_str(), "Python");
        assert_eq!(lang.canonical(), "python");
    }

    #[test]
    fn test_free_form() {
        // Unknown tags are values, not errors
        let lang = Language::new("cobol");
        assert_eq!(lang.as_str(), "cobol");
    }
}
