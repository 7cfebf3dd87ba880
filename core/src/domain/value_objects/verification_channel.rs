//! Verification channel value object.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Channel a verification code is delivered over.
///
/// Only `Email` is exercised by the current flows. `Sms` is a reserved
/// variant kept for forward compatibility of stored records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VerificationChannel {
    Email,
    Sms,
}

impl VerificationChannel {
    /// Stable string form used in storage
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationChannel::Email => "EMAIL",
            VerificationChannel::Sms => "SMS",
        }
    }

    /// Parse the stable string form back into a channel
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "EMAIL" => Some(VerificationChannel::Email),
            "SMS" => Some(VerificationChannel::Sms),
            _ => None,
        }
    }
}

impl fmt::Display for VerificationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_string_round_trip() {
        assert_eq!(
            VerificationChannel::parse(VerificationChannel::Email.as_str()),
            Some(VerificationChannel::Email)
        );
        assert_eq!(
            VerificationChannel::parse(VerificationChannel::Sms.as_str()),
            Some(VerificationChannel::Sms)
        );
        assert_eq!(VerificationChannel::parse("PIGEON"), None);
    }
}
