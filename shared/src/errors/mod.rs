//! Shared error response structure
//!
//! The API boundary converts domain errors into this payload. The core
//! crates only produce it; the HTTP layer decides the response status.

use serde::{Deserialize, Serialize};

/// Standard error payload surfaced to API clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable error code for client identification
    pub code: String,

    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse::new("user_not_found", "User not found.");
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"code":"user_not_found","message":"User not found."}"#);
    }
}
