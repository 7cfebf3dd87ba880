//! JWT implementation of the token issuance port.

use chrono::Utc;
use gk_core::domain::entities::token::{Claims, TokenType};
use gk_core::domain::value_objects::UserRole;
use gk_core::errors::{DomainResult, TokenError};
use gk_core::ports::TokenProvider;
use gk_shared::config::JwtConfig;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use tracing::warn;

/// Token provider issuing HS256-signed JWTs.
///
/// Access tokens carry the subject's role claim; refresh tokens carry
/// only identity. Expiry is enforced on decode with zero leeway.
pub struct JwtTokenProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_ttl_minutes: i64,
    refresh_ttl_days: i64,
}

impl JwtTokenProvider {
    pub fn new(config: &JwtConfig) -> Self {
        if config.is_using_default_secret() {
            warn!("JWT provider initialized with the default secret");
        }
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            access_ttl_minutes: config.access_ttl_minutes,
            refresh_ttl_days: config.refresh_ttl_days,
        }
    }

    fn sign(&self, claims: &Claims) -> DomainResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|_| TokenError::TokenGenerationFailed.into())
    }
}

impl TokenProvider for JwtTokenProvider {
    fn issue_access(&self, subject: &str, role: UserRole) -> DomainResult<String> {
        let now = Utc::now().timestamp();
        self.sign(&Claims {
            sub: subject.to_string(),
            token_type: TokenType::Access,
            iat: now,
            exp: now + self.access_ttl_minutes * 60,
            role: Some(role.as_str().to_string()),
        })
    }

    fn issue_refresh(&self, subject: &str) -> DomainResult<String> {
        let now = Utc::now().timestamp();
        self.sign(&Claims {
            sub: subject.to_string(),
            token_type: TokenType::Refresh,
            iat: now,
            exp: now + self.refresh_ttl_days * 24 * 3600,
            role: None,
        })
    }

    fn decode(&self, token: &str) -> DomainResult<Claims> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::InvalidTokenFormat,
            }
        })?;
        Ok(data.claims)
    }
}
