//! Normalized email address value object
//!
//! Guest RSVPs are keyed by email; two spellings of the same address must
//! collapse to one registration. Normalization (trim + lowercase) happens
//! at construction so every stored or compared value is canonical.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

/// A validated, trimmed, lower-cased email address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parse and normalize an email address
    ///
    /// # Errors
    /// Returns [`EmailParseError`] if the input is empty after trimming or
    /// does not match a standard email shape.
    pub fn parse(input: &str) -> Result<Self, EmailParseError> {
        let normalized = input.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(EmailParseError::Empty);
        }
        if !normalized.validate_email() {
            return Err(EmailParseError::InvalidFormat);
        }
        Ok(Self(normalized))
    }

    /// Get the normalized address as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the value and return the normalized string
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Error when parsing an email address
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EmailParseError {
    #[error("email address is empty")]
    Empty,

    #[error("invalid email format")]
    InvalidFormat,
}
