//! The error envelope returned by the API for non-2xx responses.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::Extras;

string_enum! {
    /// Machine-readable error category.
    pub enum ApiErrorType {
        /// The endpoint does not exist.
        ApiMethodNotFound => "api_method_not_found_error",
        /// A sandbox key was used against production or vice versa.
        EnvironmentMismatch => "environment_mismatch_error",
        /// The idempotency key was reused with a different request.
        IdempotencyKeyAlreadyUsed => "idempotency_key_already_used_error",
        /// The API key lacks permission for this operation.
        InsufficientPermissions => "insufficient_permissions_error",
        /// The server failed.
        InternalServer => "internal_server_error",
        /// The API key is missing or invalid.
        InvalidApiKey => "invalid_api_key_error",
        /// The object is not in a state that permits the operation.
        InvalidOperation => "invalid_operation_error",
        /// One or more parameters failed validation.
        InvalidParameters => "invalid_parameters_error",
        /// The request body could not be parsed.
        MalformedRequest => "malformed_request_error",
        /// The object does not exist.
        ObjectNotFound => "object_not_found_error",
        /// The feature is not enabled for this account.
        PrivateFeature => "private_feature_error",
        /// Too many requests.
        RateLimited => "rate_limited_error",
    }
}

/// Typed error envelope decoded from a non-2xx response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    /// HTTP status code of the response.
    #[serde(default)]
    pub status: u16,
    /// Error category.
    #[serde(rename = "type", default = "unknown_error_type")]
    pub kind: ApiErrorType,
    /// Short human-readable summary.
    #[serde(default)]
    pub title: String,
    /// Longer explanation, when provided.
    #[serde(default)]
    pub detail: Option<String>,
    /// Whether the server considers the request safe to retry.
    #[serde(default)]
    pub retryable: Option<bool>,
    /// Per-parameter validation failures.
    #[serde(default)]
    pub errors: Vec<serde_json::Value>,
    /// The object the error refers to, if any.
    #[serde(default)]
    pub resource_id: Option<String>,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

const fn unknown_error_type() -> ApiErrorType {
    ApiErrorType::Unknown
}

impl ApiError {
    /// Decode an error body, falling back to a synthetic envelope when the body
    /// is not a JSON error object. The HTTP `status` always wins over the body.
    #[must_use]
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<Self>(body) {
            Ok(mut e) => {
                e.status = status;
                e
            }
            Err(_) => {
                let text = String::from_utf8_lossy(body).trim().to_string();
                Self {
                    status,
                    kind: ApiErrorType::Unknown,
                    title: format!("HTTP {status}"),
                    detail: (!text.is_empty()).then_some(text),
                    retryable: None,
                    errors: Vec::new(),
                    resource_id: None,
                    extra: Extras::new(),
                }
            }
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.status, self.kind, self.title)?;
        if let Some(detail) = &self.detail {
            write!(f, " ({detail})")?;
        }
        Ok(())
    }
}
