//! Token claim types shared between the token provider port and its
//! consumers.

use serde::{Deserialize, Serialize};

/// Discriminator embedded in every issued token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// JWT claims carried by issued tokens
///
/// The `role` claim is present only on access tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// String-encoded user id
    pub sub: String,

    /// Token type discriminator
    #[serde(rename = "type")]
    pub token_type: TokenType,

    /// Issued-at timestamp (epoch seconds)
    pub iat: i64,

    /// Expiry timestamp (epoch seconds)
    pub exp: i64,

    /// Role claim, access tokens only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Claims {
    /// Returns true for access-typed claims
    pub fn is_access(&self) -> bool {
        self.token_type == TokenType::Access
    }

    /// Returns true for refresh-typed claims
    pub fn is_refresh(&self) -> bool {
        self.token_type == TokenType::Refresh
    }
}

/// Access + refresh token strings returned by a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl TokenPair {
    /// Create a new token pair
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}
