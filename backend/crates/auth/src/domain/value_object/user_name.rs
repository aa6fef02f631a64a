//! User Name Value Object
//!
//! Public login/display identifier for an account.
//!
//! Invariants:
//! - Non-empty after NFKC normalization and trimming
//! - At most 30 characters (counted in code points)
//! - No whitespace or control characters
//! - No `@`, so a login identifier containing `@` is always an email
//!
//! The original casing is preserved for display; a lowercase canonical
//! form is used for uniqueness checks and lookups.

use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Maximum length for a user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 30;

/// Error returned when user name validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserNameError {
    /// Empty after normalization
    Empty,

    /// Longer than [`USER_NAME_MAX_LENGTH`]
    TooLong { length: usize, max: usize },

    /// Contains whitespace or a control character
    InvalidCharacter { char: char },
}

impl fmt::Display for UserNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Username cannot be empty"),
            Self::TooLong { length, max } => {
                write!(f, "Username is too long ({length} chars, maximum {max})")
            }
            Self::InvalidCharacter { char } => {
                write!(f, "Username cannot contain '{}'", char.escape_default())
            }
        }
    }
}

impl std::error::Error for UserNameError {}

/// Validated, normalized user name
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName {
    /// Original user input (preserves case)
    original: String,
    /// Canonical form (lowercase) for uniqueness
    canonical: String,
}

impl UserName {
    /// Create a new UserName from raw input.
    ///
    /// Applies NFKC normalization and trimming, then validates.
    pub fn new(input: impl AsRef<str>) -> Result<Self, UserNameError> {
        let original: String = input.as_ref().nfkc().collect::<String>().trim().to_string();

        if original.is_empty() {
            return Err(UserNameError::Empty);
        }

        let length = original.chars().count();
        if length > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                length,
                max: USER_NAME_MAX_LENGTH,
            });
        }

        for ch in original.chars() {
            if ch.is_whitespace() || ch.is_control() || ch == '@' {
                return Err(UserNameError::InvalidCharacter { char: ch });
            }
        }

        let canonical = original.to_lowercase();

        Ok(Self {
            original,
            canonical,
        })
    }

    /// Create from database values (assumes already validated)
    pub fn from_db(original: impl Into<String>) -> Self {
        let original = original.into();
        let canonical = original.to_lowercase();
        Self {
            original,
            canonical,
        }
    }

    /// Original user name (preserves case)
    #[inline]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Canonical (lowercase) form for uniqueness checks
    #[inline]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserName")
            .field("original", &self.original)
            .field("canonical", &self.canonical)
            .finish()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl TryFrom<String> for UserName {
    type Error = UserNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.original
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_whitespace() {
        let name = UserName::new("  peter  ").unwrap();
        assert_eq!(name.original(), "peter");
    }

    #[test]
    fn test_case_preserved_in_original() {
        let name = UserName::new("Peter").unwrap();
        assert_eq!(name.original(), "Peter");
        assert_eq!(name.canonical(), "peter");
    }

    #[test]
    fn test_nfkc_normalization() {
        // Full-width characters become ASCII after NFKC
        let name = UserName::new("Ｐeter").unwrap();
        assert_eq!(name.canonical(), "peter");
    }

    #[test]
    fn test_empty_fails() {
        assert!(matches!(UserName::new(""), Err(UserNameError::Empty)));
        assert!(matches!(UserName::new("   "), Err(UserNameError::Empty)));
    }

    #[test]
    fn test_too_long() {
        let input = "a".repeat(USER_NAME_MAX_LENGTH + 1);
        assert!(matches!(
            UserName::new(&input),
            Err(UserNameError::TooLong { .. })
        ));
    }

    #[test]
    fn test_maximum_length_ok() {
        let input = "a".repeat(USER_NAME_MAX_LENGTH);
        assert!(UserName::new(&input).is_ok());
    }

    #[test]
    fn test_whitespace_in_middle_fails() {
        assert!(matches!(
            UserName::new("peter parker"),
            Err(UserNameError::InvalidCharacter { char: ' ' })
        ));
    }

    #[test]
    fn test_at_sign_fails() {
        // `@` is reserved for email identifiers at login
        assert!(matches!(
            UserName::new("pet@er"),
            Err(UserNameError::InvalidCharacter { char: '@' })
        ));
    }

    #[test]
    fn test_control_character_fails() {
        assert!(matches!(
            UserName::new("peter\u{0007}"),
            Err(UserNameError::InvalidCharacter { .. })
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let name = UserName::new("Peter").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Peter\"");

        let back: UserName = serde_json::from_str(&json).unwrap();
        assert_eq!(back.canonical(), "peter");
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<UserName, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
