//! Per-call request options layered over client configuration.

use core::fmt;
use std::time::Duration;

/// Overrides applied to one call or to every call of a service handle.
///
/// Unset members fall through to the next layer: call options override
/// service-handle options, which override client configuration.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Base URL override.
    pub base_url: Option<String>,
    /// API key override.
    pub api_key: Option<String>,
    /// Per-attempt timeout override.
    pub timeout: Option<Duration>,
    /// Retry count override.
    pub max_retries: Option<u32>,
    /// Extra headers; later entries replace earlier ones of the same name.
    pub headers: Vec<(String, String)>,
    /// Idempotency key for non-GET requests.
    pub idempotency_key: Option<String>,
}

impl RequestOptions {
    /// No overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Send this call to a different base URL.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Authenticate this call with a different API key.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Bound each attempt by `timeout`.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Retry at most `n` times after the first attempt.
    #[must_use]
    pub const fn max_retries(mut self, n: u32) -> Self {
        self.max_retries = Some(n);
        self
    }

    /// Add a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Use `key` as the `Idempotency-Key`.
    #[must_use]
    pub fn idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }

    /// Layer `over` on top of `self`; members set in `over` win.
    #[must_use]
    pub fn merge(&self, over: &Self) -> Self {
        let mut headers = self.headers.clone();
        headers.extend(over.headers.iter().cloned());
        Self {
            base_url: over.base_url.clone().or_else(|| self.base_url.clone()),
            api_key: over.api_key.clone().or_else(|| self.api_key.clone()),
            timeout: over.timeout.or(self.timeout),
            max_retries: over.max_retries.or(self.max_retries),
            headers,
            idempotency_key: over
                .idempotency_key
                .clone()
                .or_else(|| self.idempotency_key.clone()),
        }
    }
}

impl fmt::Debug for RequestOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestOptions")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .field("headers", &self.headers)
            .field("idempotency_key", &self.idempotency_key)
            .finish()
    }
}
