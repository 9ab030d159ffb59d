//! Error types
//!
//! `ClientError` covers everything that can go wrong on the way to and back
//! from the API. `PageError` is what a page shows in its alert banner.

use huzzah_shared::ApiErrorBody;
use thiserror::Error;

use crate::forms::FormError;

/// Failure of a single API call
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be assembled (bad header, body encoding)
    #[error("failed to build request: {0}")]
    RequestBuild(String),
    /// Transport level failure: DNS, CORS, connection refused
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status
    #[error("request rejected with status {status}")]
    Status { status: u16, body: String },
    /// The request body could not be serialized
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
    /// The response body did not match the expected shape
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ClientError {
    /// HTTP status of a rejected request
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Structured error payload of a rejected request, when the server sent one.
    pub fn api_error(&self) -> Option<ApiErrorBody> {
        match self {
            ClientError::Status { body, .. } => serde_json::from_str(body).ok(),
            _ => None,
        }
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Failure of a page action, rendered verbatim to the user
#[derive(Debug, Error)]
pub enum PageError {
    /// Local gate: the action needs a session
    #[error("You must be logged in to {action}")]
    LoginRequired { action: &'static str },
    /// Local validation of the form failed
    #[error("{0}")]
    Invalid(#[from] FormError),
    /// The API call failed; the user gets a generic message
    #[error("{message}")]
    Request {
        message: &'static str,
        #[source]
        source: ClientError,
    },
}

impl PageError {
    pub fn request(message: &'static str, source: ClientError) -> Self {
        log::warn!("{message}: {source}");
        PageError::Request { message, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_decoded_from_rejection() {
        let err = ClientError::Status {
            status: 400,
            body: r#"{"message":"Validation failed","errors":[{"msg":"taken","param":"email"}]}"#
                .to_string(),
        };
        let body = err.api_error().unwrap();
        assert_eq!(body.message, "Validation failed");
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_plain_text_rejection_has_no_api_error() {
        let err = ClientError::Status {
            status: 401,
            body: "Unauthorized".to_string(),
        };
        assert!(err.api_error().is_none());
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_page_error_messages() {
        let gate = PageError::LoginRequired {
            action: "leave a review",
        };
        assert_eq!(gate.to_string(), "You must be logged in to leave a review");

        let failed = PageError::request(
            "Failed to submit review",
            ClientError::Network("offline".into()),
        );
        assert_eq!(failed.to_string(), "Failed to submit review");
    }
}
