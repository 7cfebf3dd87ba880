//! Main authentication service implementation

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::{NewUser, User, UserPatch};
use crate::domain::entities::verification::Verification;
use crate::domain::value_objects::{EmailAddress, UserRole, VerificationChannel};
use crate::errors::{DomainError, DomainResult};
use crate::ports::{PasswordHasher, TokenProvider};
use crate::repositories::{UserRepository, VerificationRepository};
use crate::uow::{TransactionScope, UnitOfWork};

use super::config::AuthServiceConfig;

/// Authentication and verification use-cases.
///
/// Each method runs inside one transaction scope: the scope commits on
/// the success path and rolls back when any error propagates out through
/// `?`, so a failed use-case never leaves partial writes behind.
pub struct AuthService<U, H, T>
where
    U: UnitOfWork,
    H: PasswordHasher,
    T: TokenProvider,
{
    /// Unit of work producing one transaction per invocation
    uow: Arc<U>,
    /// Password hashing port
    hasher: Arc<H>,
    /// Token issuance port
    tokens: Arc<T>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, H, T> AuthService<U, H, T>
where
    U: UnitOfWork,
    H: PasswordHasher,
    T: TokenProvider,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `uow` - Unit of work bounding each use-case in a transaction
    /// * `hasher` - Password hashing port
    /// * `tokens` - Token issuance port
    /// * `config` - Service configuration
    pub fn new(uow: Arc<U>, hasher: Arc<H>, tokens: Arc<T>, config: AuthServiceConfig) -> Self {
        Self {
            uow,
            hasher,
            tokens,
            config,
        }
    }

    /// Create a new unverified user and issue a verification code.
    ///
    /// The verification code is only persisted; delivering it to the
    /// user (email dispatch) is the caller's responsibility, read back
    /// via the verification repository.
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The created, unverified user
    /// * `Err(DomainError::EmailAlreadyTaken)` - Email already registered
    /// * `Err(DomainError::InvalidEmailAddress)` - Malformed email
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> DomainResult<User> {
        let email = EmailAddress::parse(email)?;
        let scope = self.uow.begin().await?;

        if scope.users().get_by_email(&email).await?.is_some() {
            return Err(DomainError::EmailAlreadyTaken);
        }

        // The raw password never goes past this call
        let password = self.hasher.hash(password)?;
        let user = scope
            .users()
            .add(NewUser {
                email,
                password,
                first_name,
                last_name,
                role: UserRole::User,
            })
            .await?;

        let code = Verification::generate_code();
        let verification = Verification::new(
            user.id,
            code,
            VerificationChannel::Email,
            self.config.verification_ttl_minutes,
            Utc::now(),
        );
        scope.verifications().add(verification).await?;
        scope.commit().await?;

        tracing::info!(user_id = user.id, "user signed up, verification pending");
        Ok(user)
    }

    /// Validate credentials and return an access/refresh token pair.
    ///
    /// An unknown email and a wrong password both fail with
    /// `InvalidCredentials`; the verification gate is checked only after
    /// the credentials, so this endpoint cannot be used to probe
    /// verification state without a valid credential.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<TokenPair> {
        let email = EmailAddress::parse(email)?;
        let scope = self.uow.begin().await?;

        let user = scope
            .users()
            .get_by_email(&email)
            .await?
            .ok_or(DomainError::InvalidCredentials)?;
        if !self.hasher.verify(password, &user.password) {
            tracing::warn!(user_id = user.id, "login rejected: bad credentials");
            return Err(DomainError::InvalidCredentials);
        }
        if !user.is_verified {
            return Err(DomainError::UserNotVerified);
        }

        let subject = user.id.to_string();
        let access = self.tokens.issue_access(&subject, user.role)?;
        let refresh = self.tokens.issue_refresh(&subject)?;
        scope.commit().await?;

        tracing::info!(user_id = user.id, "login succeeded");
        Ok(TokenPair::new(access, refresh))
    }

    /// Issue a new access token for the given token subject.
    ///
    /// The fresh token carries the user's current role, so role changes
    /// since the original login are reflected.
    pub async fn refresh(&self, subject: &str) -> DomainResult<String> {
        // A subject that does not parse cannot reference a live user
        let user_id: i64 = subject.parse().map_err(|_| DomainError::UserNotFound)?;
        let scope = self.uow.begin().await?;

        let user = scope
            .users()
            .get_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound)?;
        let access = self.tokens.issue_access(&user.id.to_string(), user.role)?;
        scope.commit().await?;
        Ok(access)
    }

    /// Confirm ownership of an email address by one-time code.
    ///
    /// A missing, mismatched, expired, or already-consumed code all
    /// collapse into `VerificationCodeInvalid`. On success the code is
    /// consumed and the user marked verified in the same transaction.
    pub async fn verify(&self, email: &str, code: &str) -> DomainResult<()> {
        let email = EmailAddress::parse(email)?;
        let scope = self.uow.begin().await?;

        let mut user = scope
            .users()
            .get_by_email(&email)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        let latest = scope.verifications().get_latest_for_user(user.id).await?;
        let now = Utc::now();
        let mut verification = match latest {
            Some(v) if v.code == code && !v.is_expired(now) && !v.is_consumed() => v,
            _ => {
                tracing::warn!(user_id = user.id, "verification rejected");
                return Err(DomainError::VerificationCodeInvalid);
            }
        };

        verification.consume(now);
        scope.verifications().mark_consumed(&verification).await?;

        user.verify();
        scope
            .users()
            .update(
                user.id,
                UserPatch {
                    is_verified: Some(user.is_verified),
                    ..Default::default()
                },
            )
            .await?;
        scope.commit().await?;

        tracing::info!(user_id = user.id, "user verified");
        Ok(())
    }
}
