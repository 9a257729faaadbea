//! Full Name Value Object
//!
//! Display name shown alongside a user's projects. Free-form apart from
//! normalization and length bounds; not used for login or uniqueness.
//!
//! ## 不変条件
//! - 正規化（NFKC、trim）後に空でないこと
//! - 100文字以内
//! - 制御文字を含まないこと

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Maximum length for a full name (in characters)
pub const FULL_NAME_MAX_LENGTH: usize = 100;

/// Error returned when full name validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FullNameError {
    /// Name is empty after normalization
    Empty,

    /// Name is too long
    TooLong { length: usize, max: usize },

    /// Name contains a control character
    InvalidCharacter { char: char },
}

impl fmt::Display for FullNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Full name cannot be empty"),
            Self::TooLong { length, max } => {
                write!(f, "Full name is too long ({length} chars, maximum {max})")
            }
            Self::InvalidCharacter { char } => {
                write!(f, "Full name contains invalid character {char:?}")
            }
        }
    }
}

impl std::error::Error for FullNameError {}

/// Validated, normalized display name
#[derive(Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[display("{_0}")]
pub struct FullName(String);

impl FullName {
    /// Create a new FullName from raw input
    ///
    /// Applies NFKC normalization and trims surrounding whitespace.
    pub fn new(input: impl AsRef<str>) -> Result<Self, FullNameError> {
        let normalized: String = input.as_ref().nfkc().collect::<String>().trim().to_string();

        if normalized.is_empty() {
            return Err(FullNameError::Empty);
        }

        let length = normalized.chars().count();
        if length > FULL_NAME_MAX_LENGTH {
            return Err(FullNameError::TooLong {
                length,
                max: FULL_NAME_MAX_LENGTH,
            });
        }

        if let Some(ch) = normalized.chars().find(|c| c.is_control()) {
            return Err(FullNameError::InvalidCharacter { char: ch });
        }

        Ok(Self(normalized))
    }

    /// Get the name as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Create from stored value (assumes already validated)
    pub fn from_store(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl fmt::Debug for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FullName").field(&self.0).finish()
    }
}

impl AsRef<str> for FullName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for FullName {
    type Error = FullNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FullName> for String {
    fn from(name: FullName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert_eq!(FullName::new("Alice").unwrap().as_str(), "Alice");
        assert_eq!(FullName::new("Alice Smith").unwrap().as_str(), "Alice Smith");
        assert_eq!(FullName::new("山田 太郎").unwrap().as_str(), "山田 太郎");
    }

    #[test]
    fn test_trim() {
        assert_eq!(FullName::new("  Alice  ").unwrap().as_str(), "Alice");
    }

    #[test]
    fn test_empty_fails() {
        assert!(matches!(FullName::new(""), Err(FullNameError::Empty)));
        assert!(matches!(FullName::new("   "), Err(FullNameError::Empty)));
    }

    #[test]
    fn test_too_long() {
        let input = "a".repeat(FULL_NAME_MAX_LENGTH + 1);
        assert!(matches!(
            FullName::new(&input),
            Err(FullNameError::TooLong { .. })
        ));
    }

    #[test]
    fn test_control_character_fails() {
        assert!(matches!(
            FullName::new("Ali\u{0007}ce"),
            Err(FullNameError::InvalidCharacter { .. })
        ));
    }

    #[test]
    fn test_display() {
        let name = FullName::new("Alice").unwrap();
        assert_eq!(format!("{}", name), "Alice");
    }

    #[test]
    fn test_serde_roundtrip() {
        let name = FullName::new("Alice").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Alice\"");
        let back: FullName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
    }
}
