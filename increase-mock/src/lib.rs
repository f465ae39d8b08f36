#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use increase_core::{HttpRequest, HttpResponse, Transport};
use increase_types::Result;
use tokio::sync::Mutex;

pub mod dynamic;
mod fixtures;
mod sandbox;
pub mod seed;

pub use dynamic::{DynamicMock, DynamicMockController, MockBehavior};

use crate::sandbox::Sandbox;

/// Path segment that makes the sandbox answer with a retryable 500.
pub const FAIL_ID: &str = "FAIL";
/// Path segment that makes the sandbox stall before answering.
pub const SLOW_ID: &str = "SLOW";
/// How long a request naming [`SLOW_ID`] stalls.
pub const SLOW_DELAY: Duration = Duration::from_millis(200);

/// In-memory Increase sandbox for CI-safe tests and demos.
///
/// Answers every endpoint the client knows with deterministic data. State is
/// shared between clones, so a test can hand one clone to a client and keep
/// another to inspect the recorded requests.
#[derive(Clone)]
pub struct MockTransport {
    state: Arc<Mutex<State>>,
}

struct State {
    sandbox: Sandbox,
    requests: Vec<HttpRequest>,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    /// Sandbox populated with the objects listed in [`seed`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_sandbox(Sandbox::seeded())
    }

    /// Sandbox with no objects at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::with_sandbox(Sandbox::empty())
    }

    fn with_sandbox(sandbox: Sandbox) -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                sandbox,
                requests: Vec::new(),
            })),
        }
    }

    /// Every request received so far, in arrival order.
    pub async fn requests(&self) -> Vec<HttpRequest> {
        self.state.lock().await.requests.clone()
    }

    /// Number of requests received so far.
    pub async fn request_count(&self) -> usize {
        self.state.lock().await.requests.len()
    }

    /// Forget recorded requests. Sandbox objects are kept.
    pub async fn clear_requests(&self) {
        self.state.lock().await.requests.clear();
    }
}

fn forced_failure(req: &HttpRequest) -> Option<HttpResponse> {
    req.path
        .segments()
        .iter()
        .any(|s| s == FAIL_ID)
        .then(|| {
            sandbox::envelope(
                500,
                "internal_server_error",
                "Something went wrong on our end.",
                Some(format!("forced failure: {} {}", req.method, req.path)),
                None,
            )
        })
}

#[async_trait]
impl Transport for MockTransport {
    fn name(&self) -> &'static str {
        "increase-mock"
    }

    async fn send(&self, req: &HttpRequest) -> Result<HttpResponse> {
        if req.path.segments().iter().any(|s| s == SLOW_ID) {
            tokio::time::sleep(SLOW_DELAY).await;
        }
        let mut state = self.state.lock().await;
        state.requests.push(req.clone());
        if let Some(resp) = forced_failure(req) {
            return Ok(resp);
        }
        Ok(state.sandbox.handle(req))
    }
}
