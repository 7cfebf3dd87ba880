//! Verification entity: a one-time code bound to a user.

use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::VerificationChannel;

/// Length of a verification code in characters
pub const CODE_LENGTH: usize = 6;

/// Verification artifact issued at signup and consumed at most once.
///
/// A record is usable iff it has not been consumed and has not expired.
/// Consumption is irreversible: once `consumed_at` is set it is never
/// cleared. Records are never deleted by the core; the external cleanup
/// job removes stale unverified accounts together with their codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    /// Owning user id
    pub user_id: i64,

    /// Opaque verification code
    pub code: String,

    /// Delivery channel the code was issued for
    pub channel: VerificationChannel,

    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,

    /// When the code was consumed, if ever
    pub consumed_at: Option<DateTime<Utc>>,
}

impl Verification {
    /// Creates a new verification with the given TTL
    pub fn new(
        user_id: i64,
        code: String,
        channel: VerificationChannel,
        ttl_minutes: i64,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            code,
            channel,
            created_at: now,
            expires_at: now + Duration::minutes(ttl_minutes),
            consumed_at: None,
        }
    }

    /// Generates an opaque code: `CODE_LENGTH` hexadecimal characters
    /// drawn from a cryptographically secure source.
    pub fn generate_code() -> String {
        let mut bytes = [0u8; CODE_LENGTH / 2];
        rand::thread_rng().fill_bytes(&mut bytes);
        hex::encode(bytes)
    }

    /// Returns true if the code is expired at the given moment
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Returns true if the code has already been consumed
    pub fn is_consumed(&self) -> bool {
        self.consumed_at.is_some()
    }

    /// Marks this verification as consumed at the given time.
    /// A no-op if the code was already consumed.
    pub fn consume(&mut self, now: DateTime<Utc>) {
        if self.consumed_at.is_none() {
            self.consumed_at = Some(now);
        }
    }
}
