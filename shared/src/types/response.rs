//! API response envelope
//!
//! Every endpoint answers with the same wrapper: a `success` flag, a
//! human-readable `message`, either a `data` payload or an `error` block
//! (never both), and a UTC timestamp. Clients switch on `error.code`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Generic response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,

    /// Human-readable outcome description
    pub message: String,

    /// Payload, present on success only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Error block, present on failure only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,

    /// When the response was produced
    pub timestamp: DateTime<Utc>,
}

/// Machine-readable error block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable error code (see `error_codes`)
    pub code: String,

    /// Structured details, an empty object when there is nothing to add
    #[serde(default = "default_details")]
    pub details: serde_json::Value,
}

impl<T> ApiResponse<T> {
    /// Build a success envelope with a payload
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            error: None,
            timestamp: Utc::now(),
        }
    }

    /// Build a failure envelope with an error code
    pub fn error(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            error: Some(ErrorBody {
                code: code.into(),
                details: default_details(),
            }),
            timestamp: Utc::now(),
        }
    }

    /// Build a failure envelope carrying structured details
    pub fn error_with_details(
        message: impl Into<String>,
        code: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            error: Some(ErrorBody {
                code: code.into(),
                details,
            }),
            timestamp: Utc::now(),
        }
    }
}

fn default_details() -> serde_json::Value {
    serde_json::json!({})
}
