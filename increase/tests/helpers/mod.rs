// Shared fixtures for service tests: `use crate::helpers::*;`
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use increase::{BackoffConfig, Client, ClientBuilder, Environment};
use increase_mock::{DynamicMock, DynamicMockController, MockTransport};

pub use increase_mock::seed;

pub const API_KEY: &str = "sandbox_test_key";

/// Backoff short enough that retry tests finish quickly under real time.
pub const FAST_BACKOFF: BackoffConfig = BackoffConfig {
    min_backoff_ms: 1,
    max_backoff_ms: 5,
    factor: 2,
    jitter_percent: 0,
};

/// Builder pointed at the sandbox with the test key and fast retries.
pub fn builder() -> ClientBuilder {
    Client::builder()
        .api_key(API_KEY)
        .environment(Environment::Sandbox)
        .backoff(FAST_BACKOFF)
}

/// Client backed by a freshly seeded in-memory sandbox.
pub fn mock_client() -> (Client, MockTransport) {
    let mock = MockTransport::new();
    let client = builder()
        .transport(Arc::new(mock.clone()))
        .build()
        .expect("client builds");
    (client, mock)
}

/// Client whose requests pass through a scriptable transport before reaching
/// a seeded sandbox.
pub fn dynamic_client(max_retries: u32, timeout: Duration) -> (Client, DynamicMockController) {
    let (transport, controller) = DynamicMock::new_with_controller(Arc::new(MockTransport::new()));
    let client = builder()
        .transport(transport)
        .max_retries(max_retries)
        .timeout(timeout)
        .build()
        .expect("client builds");
    (client, controller)
}

pub fn account_path(id: &str) -> String {
    format!("/accounts/{id}")
}
