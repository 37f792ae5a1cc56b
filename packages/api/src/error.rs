//! Error type for backend calls.

use serde_json::Value;
use thiserror::Error;

use crate::access::Denial;

/// Result type alias using the API crate's error type.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Failure of a single backend call.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, DNS...).
    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status. `message` is the payload's
    /// `message` field when the body was JSON and carried one.
    #[error("Request rejected ({status}): {}", message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, message: Option<String> },

    /// The response body was not the JSON we expected.
    #[error("Serialization error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The backend refused access to a profile.
    #[error("Access denied: {0:?}")]
    Denied(Denial),
}

impl ApiError {
    /// Build a rejection from a non-2xx status and whatever body came with it.
    pub fn rejected(status: u16, body: Option<&Value>) -> Self {
        ApiError::Rejected {
            status,
            message: body.and_then(message_of),
        }
    }

    /// Server-provided message, if the failure carried one.
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. } => message.as_deref(),
            ApiError::Denied(Denial::Other(message)) => message.as_deref(),
            _ => None,
        }
    }

    /// Classify this failure the way an eligibility refusal is classified, so a
    /// view-limit reported through an error status still opens the right popup.
    pub fn denial(&self) -> Denial {
        match self {
            ApiError::Denied(denial) => denial.clone(),
            other => Denial::from_error_message(other.message()),
        }
    }
}

/// `message` field of a JSON payload, if it is a non-empty string.
pub(crate) fn message_of(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}
