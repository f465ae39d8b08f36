use thiserror::Error;

use crate::api_error::{ApiError, ApiErrorType};

/// Unified error type for the increase workspace.
///
/// Wraps API error envelopes, transport failures, timeouts, decode failures,
/// and client-side validation errors.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum IncreaseError {
    /// The API answered with a non-2xx status.
    #[error("api error: {0}")]
    Api(Box<ApiError>),

    /// The request never produced an HTTP response (DNS, TLS, connection reset).
    #[error("transport error: {message}")]
    Transport {
        /// Human-readable description from the underlying HTTP client.
        message: String,
    },

    /// A single attempt exceeded the configured timeout.
    #[error("request timed out: {method} {path}")]
    Timeout {
        /// HTTP method of the timed-out request.
        method: String,
        /// Request path of the timed-out request.
        path: String,
    },

    /// A 2xx response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// Invalid input argument, rejected before any request was sent.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The client could not be configured (missing API key, bad base URL).
    #[error("configuration error: {0}")]
    Config(String),

    /// The client-side quota for the current window is spent.
    #[error("quota exceeded: remaining={remaining} reset_in_ms={reset_in_ms}")]
    QuotaExceeded {
        /// Remaining units at the time of rejection.
        remaining: u64,
        /// Milliseconds until the quota window resets.
        reset_in_ms: u64,
    },
}

impl IncreaseError {
    /// Helper: build a `Transport` error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Helper: build a `Timeout` error.
    pub fn timeout(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Timeout {
            method: method.into(),
            path: path.into(),
        }
    }

    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build an `Api` error from a status and raw response body.
    #[must_use]
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        Self::Api(Box::new(ApiError::from_response(status, body)))
    }

    /// The API error envelope, if this is an API error.
    #[must_use]
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }

    /// HTTP status of the failed response, if there was one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.api_error().map(|e| e.status)
    }

    /// True for 404 responses and `object_not_found_error` envelopes.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.api_error()
            .is_some_and(|e| e.status == 404 || e.kind == ApiErrorType::ObjectNotFound)
    }

    /// Returns true if retrying the same request may succeed.
    ///
    /// Transport failures and timeouts are retryable. API errors are retryable
    /// when the server says so, or for 408, 409, 429 and 5xx statuses.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { .. } | Self::Timeout { .. } => true,
            Self::Api(e) => e
                .retryable
                .unwrap_or(matches!(e.status, 408 | 409 | 429) || e.status >= 500),
            _ => false,
        }
    }
}

impl From<ApiError> for IncreaseError {
    fn from(e: ApiError) -> Self {
        Self::Api(Box::new(e))
    }
}

impl From<serde_json::Error> for IncreaseError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

/// Result alias used across the workspace.
pub type Result<T, E = IncreaseError> = std::result::Result<T, E>;
