//! Email Value Object
//!
//! Invariants:
//! - Trimmed and lowercased (email lookups are case-insensitive)
//! - Exactly one `@` with a non-empty local part
//! - Domain part contains at least one `.` and no whitespace
//! - At most 254 characters

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for an email address (RFC 5321 limit)
pub const EMAIL_MAX_LENGTH: usize = 254;

/// Error returned when email validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// Empty after trimming
    Empty,

    /// Longer than [`EMAIL_MAX_LENGTH`]
    TooLong { length: usize, max: usize },

    /// Not of the form `local@domain.tld`
    InvalidFormat,
}

impl fmt::Display for EmailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Email cannot be empty"),
            Self::TooLong { length, max } => {
                write!(f, "Email is too long ({length} chars, maximum {max})")
            }
            Self::InvalidFormat => write!(f, "Email address is not valid"),
        }
    }
}

impl std::error::Error for EmailError {}

/// Validated, lowercased email address
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Create a new Email from raw input.
    ///
    /// Trims, lowercases, and validates the basic `local@domain.tld`
    /// shape. Deliverability is not checked.
    pub fn new(input: impl AsRef<str>) -> Result<Self, EmailError> {
        let value = input.as_ref().trim().to_lowercase();

        if value.is_empty() {
            return Err(EmailError::Empty);
        }

        let length = value.chars().count();
        if length > EMAIL_MAX_LENGTH {
            return Err(EmailError::TooLong {
                length,
                max: EMAIL_MAX_LENGTH,
            });
        }

        let Some((local, domain)) = value.split_once('@') else {
            return Err(EmailError::InvalidFormat);
        };

        if local.is_empty()
            || domain.is_empty()
            || domain.contains('@')
            || !domain.contains('.')
            || domain.starts_with('.')
            || domain.ends_with('.')
            || value.chars().any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(EmailError::InvalidFormat);
        }

        Ok(Self(value))
    }

    /// Create from a database value (assumes already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Keep addresses out of debug logs
        match self.0.split_once('@') {
            Some((_, domain)) => write!(f, "Email(***@{domain})"),
            None => write!(f, "Email(***)"),
        }
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}
