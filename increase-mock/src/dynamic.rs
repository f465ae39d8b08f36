//! Scriptable transport for fault-injection tests.
//!
//! [`DynamicMock`] answers from a per-route queue of [`MockBehavior`]s and
//! falls back to another transport (usually a [`MockTransport`](crate::MockTransport))
//! once the queue for a route is empty.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use increase_core::{HttpRequest, HttpResponse, Method, Transport};
use increase_types::{IncreaseError, Result};
use tokio::sync::Mutex;

/// Instruction for how one attempt on a route should behave.
#[derive(Clone, Debug)]
pub enum MockBehavior {
    /// Answer with this response.
    Respond(HttpResponse),
    /// Fail the attempt with this error, as if no response arrived.
    Fail(IncreaseError),
    /// Never answer (simulate a stalled connection).
    Hang,
}

impl MockBehavior {
    /// Answer with `status` and a JSON body.
    #[must_use]
    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        Self::Respond(HttpResponse::json(status, body))
    }

    /// Answer with an API error envelope.
    #[must_use]
    pub fn api_error(status: u16, kind: &str, title: &str) -> Self {
        Self::json(
            status,
            &serde_json::json!({ "status": status, "type": kind, "title": title }),
        )
    }
}

type RouteKey = (Method, String);

#[derive(Default)]
struct InternalState {
    rules: HashMap<RouteKey, VecDeque<MockBehavior>>,
    requests: Vec<HttpRequest>,
}

/// Controller for a [`DynamicMock`], used to script behaviors while tests run.
#[derive(Clone)]
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Queue `behavior` for the next attempt of `method` on `path` (e.g. `/accounts/account_1`).
    pub async fn push_behavior(&self, method: Method, path: &str, behavior: MockBehavior) {
        self.push_behaviors(method, path, [behavior]).await;
    }

    /// Queue several behaviors, consumed one per attempt in order.
    pub async fn push_behaviors(
        &self,
        method: Method,
        path: &str,
        behaviors: impl IntoIterator<Item = MockBehavior> + Send,
    ) {
        let mut state = self.state.lock().await;
        state
            .rules
            .entry((method, path.to_string()))
            .or_default()
            .extend(behaviors);
    }

    /// Attempts received so far, including those answered by the fallback.
    pub async fn requests(&self) -> Vec<HttpRequest> {
        self.state.lock().await.requests.clone()
    }

    /// Attempts received so far on `method` and `path`.
    pub async fn attempts(&self, method: Method, path: &str) -> usize {
        self.state
            .lock()
            .await
            .requests
            .iter()
            .filter(|r| r.method == method && r.path.to_string() == path)
            .count()
    }

    /// Drop every queued behavior; all routes go to the fallback.
    pub async fn clear_all_behaviors(&self) {
        self.state.lock().await.rules.clear();
    }
}

/// Transport answering from scripted behaviors, then from a fallback.
pub struct DynamicMock {
    state: Arc<Mutex<InternalState>>,
    fallback: Arc<dyn Transport>,
}

impl DynamicMock {
    /// Build the transport and its controller.
    #[must_use]
    pub fn new_with_controller(
        fallback: Arc<dyn Transport>,
    ) -> (Arc<dyn Transport>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let transport = Arc::new(Self {
            state: Arc::clone(&state),
            fallback,
        });
        (transport, DynamicMockController { state })
    }
}

#[async_trait]
impl Transport for DynamicMock {
    fn name(&self) -> &'static str {
        "increase-dynamic-mock"
    }

    async fn send(&self, req: &HttpRequest) -> Result<HttpResponse> {
        let behavior = {
            let mut state = self.state.lock().await;
            state.requests.push(req.clone());
            state
                .rules
                .get_mut(&(req.method, req.path.to_string()))
                .and_then(VecDeque::pop_front)
        };
        match behavior {
            Some(MockBehavior::Respond(resp)) => Ok(resp),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => std::future::pending().await,
            None => self.fallback.send(req).await,
        }
    }
}
