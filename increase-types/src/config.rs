//! Configuration types shared by the client, the executor, and middleware.

use core::fmt;
use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Hosted API environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Environment {
    /// Live money movement.
    #[default]
    Production,
    /// Simulated money movement; the only environment that accepts simulations.
    Sandbox,
}

impl Environment {
    /// Base URL of this environment.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Production => "https://api.increase.com",
            Self::Sandbox => "https://sandbox.increase.com",
        }
    }
}

/// Exponential backoff configuration for request retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackoffConfig {
    /// Delay before the first retry, in milliseconds.
    pub min_backoff_ms: u64,
    /// Upper bound on any single delay, in milliseconds.
    pub max_backoff_ms: u64,
    /// Exponential factor applied after each failed attempt (>= 1).
    pub factor: u32,
    /// Up to this percentage [0, 100] is subtracted from each delay at random.
    pub jitter_percent: u8,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            min_backoff_ms: 500,
            max_backoff_ms: 8_000,
            factor: 2,
            jitter_percent: 25,
        }
    }
}

/// Client-wide configuration.
///
/// The API key is never serialized and is redacted from `Debug` output.
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Hosted environment used when `base_url` is not set.
    pub environment: Environment,
    /// Explicit base URL; overrides `environment`.
    pub base_url: Option<String>,
    /// Bearer token sent in the `Authorization` header.
    #[serde(skip_serializing, default)]
    pub api_key: Option<String>,
    /// Timeout applied to each attempt.
    pub timeout: Duration,
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// Delay schedule between retries.
    pub backoff: BackoffConfig,
    /// Headers added to every request.
    pub default_headers: BTreeMap<String, String>,
}

impl ClientConfig {
    /// The base URL requests are sent to.
    #[must_use]
    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            base_url: None,
            api_key: None,
            timeout: Duration::from_secs(60),
            max_retries: 2,
            backoff: BackoffConfig::default(),
            default_headers: BTreeMap::new(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("environment", &self.environment)
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .field("backoff", &self.backoff)
            .field("default_headers", &self.default_headers)
            .finish()
    }
}

/// Configuration for a fixed-window request budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotaConfig {
    /// Maximum number of requests within a single window.
    pub limit: u64,
    /// Duration of the accounting window. Zero disables the budget.
    pub window: Duration,
}

impl Default for QuotaConfig {
    fn default() -> Self {
        Self {
            limit: 1000,
            window: Duration::from_secs(60),
        }
    }
}

/// Snapshot of a quota budget at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuotaState {
    /// Configured maximum requests per window.
    pub limit: u64,
    /// Remaining requests in the current window.
    pub remaining: u64,
    /// Time remaining until the current window resets.
    pub reset_in: Duration,
}
