use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while talking to the research backend.
///
/// Every failure resolves to a single human-readable message; callers show
/// it and let the user resubmit. Nothing here is retried automatically.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Research query cannot be empty")]
    EmptyQuery,

    /// Non-2xx response. Displays the backend's `detail` message verbatim
    /// when the body carried one, otherwise `HTTP {status}`.
    #[error("{message}")]
    Backend { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    MalformedResponse(String),
}

impl ClientError {
    /// Builds the error for a non-success response.
    ///
    /// The backend is expected to send `{"detail": "..."}` on failure; any
    /// body that doesn't parse falls back to the numeric status.
    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            detail: String,
        }

        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.detail)
            .unwrap_or_else(|_| format!("HTTP {}", status));

        ClientError::Backend { status, message }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_extracted_from_json_body() {
        let err = ClientError::from_response(500, r#"{"detail": "LLM timeout"}"#);
        assert_eq!(err.to_string(), "LLM timeout");
    }

    #[test]
    fn test_non_json_body_falls_back_to_status() {
        let err = ClientError::from_response(502, "Bad Gateway");
        assert_eq!(err.to_string(), "HTTP 502");
    }

    #[test]
    fn test_json_body_without_detail_falls_back_to_status() {
        let err = ClientError::from_response(500, r#"{"error": "nope"}"#);
        assert_eq!(err.to_string(), "HTTP 500");
    }
}
