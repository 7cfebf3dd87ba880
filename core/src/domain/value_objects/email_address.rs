//! Email address value object.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Email address value object.
///
/// Validation is intentionally minimal: the address must contain `@` and
/// be at least five characters long. Stricter checks belong to the API
/// boundary. The value is normalized to lower case on construction so
/// that equality and storage lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parse and normalize a raw email string.
    ///
    /// # Returns
    ///
    /// * `Ok(EmailAddress)` - Normalized (lower-cased) address
    /// * `Err(DomainError::InvalidEmailAddress)` - Basic sanity check failed
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if !raw.contains('@') || raw.len() < 5 {
            return Err(DomainError::InvalidEmailAddress);
        }
        Ok(Self(raw.to_lowercase()))
    }

    /// Return the normalized email string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_to_lowercase() {
        let email = EmailAddress::parse("Alice@Example.COM").unwrap();
        assert_eq!(email.as_str(), "alice@example.com");
    }

    #[test]
    fn test_parse_rejects_missing_at_sign() {
        assert!(matches!(
            EmailAddress::parse("alice.example.com"),
            Err(DomainError::InvalidEmailAddress)
        ));
    }

    #[test]
    fn test_parse_rejects_too_short() {
        assert!(matches!(
            EmailAddress::parse("a@b"),
            Err(DomainError::InvalidEmailAddress)
        ));
    }

    #[test]
    fn test_equality_is_case_insensitive() {
        let a = EmailAddress::parse("Bob@Example.com").unwrap();
        let b = EmailAddress::parse("bob@example.com").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_serde_round_trip() {
        let email = EmailAddress::parse("carol@example.com").unwrap();
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"carol@example.com\"");
        let back: EmailAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, email);
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        let result: Result<EmailAddress, _> = serde_json::from_str("\"nope\"");
        assert!(result.is_err());
    }
}
