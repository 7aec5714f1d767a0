//! Errors returned by [`crate::ApiClient`].

use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// An authenticated endpoint was called without a stored token.
    #[error("you need to be logged in to do this")]
    Unauthenticated,

    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response without a JSON body.
    #[error("request failed: {status} {reason}")]
    Status { status: u16, reason: String },

    /// Non-2xx response carrying a structured JSON error body.
    #[error("request rejected: {0}")]
    Payload(Value),

    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A lookup the client performs before a write found nothing to act on.
    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    /// The HTTP status, for errors that came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Text shown to the user.
    ///
    /// Structured payloads are flattened: `{"detail": "..."}` and
    /// `{"error": "..."}` show their message, field errors show as
    /// `field: message` joined by `; `.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Payload(value) => flatten_payload(value),
            ApiError::Status { status, reason } if matches!(status, 403 | 404) => {
                format!("request failed: {status} {reason}. Please check the API path.")
            }
            other => other.to_string(),
        }
    }
}

fn flatten_payload(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(flatten_payload)
            .collect::<Vec<_>>()
            .join(" "),
        Value::Object(map) => {
            for key in ["detail", "error", "message"] {
                if let Some(inner) = map.get(key) {
                    return flatten_payload(inner);
                }
            }
            map.iter()
                .map(|(field, inner)| {
                    if field == "non_field_errors" {
                        flatten_payload(inner)
                    } else {
                        format!("{field}: {}", flatten_payload(inner))
                    }
                })
                .collect::<Vec<_>>()
                .join("; ")
        }
        other => other.to_string(),
    }
}
