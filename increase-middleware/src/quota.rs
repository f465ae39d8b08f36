//! Quota-aware transport wrapper.
//!
//! Enforces a fixed-window request budget on the client side so that bursts are
//! rejected locally instead of being rate limited by the API.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use increase_core::{HttpRequest, HttpResponse, Middleware, Transport};
use increase_types::{IncreaseError, QuotaConfig, QuotaState, Result};

/// Wrapper that enforces quotas.
pub struct QuotaAwareTransport {
    inner: Arc<dyn Transport>,
    runtime: Arc<Mutex<QuotaRuntime>>,
}

struct QuotaRuntime {
    limit: u64,
    calls_made_in_window: u64,
    last_reset: Instant,
    window: Duration,
}

impl QuotaRuntime {
    fn new(config: &QuotaConfig) -> Self {
        Self {
            limit: config.limit,
            calls_made_in_window: 0,
            last_reset: Instant::now(),
            window: config.window,
        }
    }

    /// A zero-length window never closes, so it imposes no budget.
    const fn unlimited(&self) -> bool {
        self.window.is_zero()
    }

    fn roll(&mut self, now: Instant) {
        let elapsed = now.duration_since(self.last_reset);
        if self.unlimited() || elapsed < self.window {
            return;
        }
        self.calls_made_in_window = 0;
        // Keep windows aligned to regular boundaries across idle gaps.
        let windows_passed = elapsed.as_nanos() / self.window.as_nanos();
        let boundary_offset = Duration::from_nanos(
            (windows_passed * self.window.as_nanos())
                .try_into()
                .unwrap_or(u64::MAX),
        );
        self.last_reset += boundary_offset;
    }

    fn reset_in(&self, now: Instant) -> Duration {
        self.window
            .saturating_sub(now.duration_since(self.last_reset))
    }

    fn state(&mut self, now: Instant) -> QuotaState {
        self.roll(now);
        QuotaState {
            limit: self.limit,
            remaining: self.limit.saturating_sub(self.calls_made_in_window),
            reset_in: self.reset_in(now),
        }
    }

    fn consume(&mut self, now: Instant) -> Result<()> {
        if self.unlimited() {
            return Ok(());
        }
        self.roll(now);

        if self.calls_made_in_window < self.limit {
            self.calls_made_in_window += 1;
            return Ok(());
        }

        let reset_in_ms = self.reset_in(now).as_millis().try_into().unwrap_or(u64::MAX);
        let remaining = self.limit.saturating_sub(self.calls_made_in_window);
        #[cfg(feature = "tracing")]
        tracing::warn!(remaining, reset_in_ms, "client-side quota exceeded");
        Err(IncreaseError::QuotaExceeded {
            remaining,
            reset_in_ms,
        })
    }
}

fn lock(runtime: &Mutex<QuotaRuntime>) -> MutexGuard<'_, QuotaRuntime> {
    runtime.lock().unwrap_or_else(PoisonError::into_inner)
}

impl QuotaAwareTransport {
    /// Create a new quota-aware wrapper around an existing transport.
    ///
    /// A `config.window` of zero disables the budget.
    pub fn new(inner: Arc<dyn Transport>, config: &QuotaConfig) -> Self {
        Self {
            inner,
            runtime: Arc::new(Mutex::new(QuotaRuntime::new(config))),
        }
    }

    /// Access the inner transport.
    pub fn inner(&self) -> &Arc<dyn Transport> {
        &self.inner
    }

    /// Snapshot of the current window.
    pub fn state(&self) -> QuotaState {
        lock(&self.runtime).state(Instant::now())
    }

    /// Consume one unit of the budget.
    ///
    /// # Errors
    /// Returns `IncreaseError::QuotaExceeded` when the window budget is spent.
    pub fn should_allow_call(&self) -> Result<()> {
        lock(&self.runtime).consume(Instant::now())
    }
}

#[async_trait]
impl Transport for QuotaAwareTransport {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn send(&self, req: &HttpRequest) -> Result<HttpResponse> {
        self.should_allow_call()?;
        self.inner.send(req).await
    }
}

/// Middleware config for constructing a [`QuotaAwareTransport`].
///
/// The budget is shared with the transport it installs, so [`state`](Self::state)
/// keeps reporting after the middleware has been handed to a client builder.
pub struct QuotaMiddleware {
    config: QuotaConfig,
    runtime: Arc<Mutex<QuotaRuntime>>,
}

impl QuotaMiddleware {
    /// Middleware enforcing `config`.
    #[must_use]
    pub fn new(config: QuotaConfig) -> Self {
        let runtime = Arc::new(Mutex::new(QuotaRuntime::new(&config)));
        Self { config, runtime }
    }

    /// Budget applied by the wrapper.
    #[must_use]
    pub const fn config(&self) -> &QuotaConfig {
        &self.config
    }

    /// Handle that reads the live budget of the installed transport.
    #[must_use]
    pub fn handle(&self) -> QuotaHandle {
        QuotaHandle {
            runtime: Arc::clone(&self.runtime),
        }
    }

    /// Snapshot of the current window.
    pub fn state(&self) -> QuotaState {
        lock(&self.runtime).state(Instant::now())
    }
}

/// Read-only view of a quota budget shared with an installed transport.
#[derive(Clone)]
pub struct QuotaHandle {
    runtime: Arc<Mutex<QuotaRuntime>>,
}

impl QuotaHandle {
    /// Snapshot of the current window.
    pub fn state(&self) -> QuotaState {
        lock(&self.runtime).state(Instant::now())
    }
}

impl Middleware for QuotaMiddleware {
    fn apply(self: Box<Self>, inner: Arc<dyn Transport>) -> Arc<dyn Transport> {
        Arc::new(QuotaAwareTransport {
            inner,
            runtime: self.runtime,
        })
    }

    fn name(&self) -> &'static str {
        "QuotaAwareTransport"
    }

    fn config_json(&self) -> serde_json::Value {
        serde_json::json!({
            "limit": self.config.limit,
            "window_ms": u64::try_from(self.config.window.as_millis()).unwrap_or(u64::MAX),
        })
    }
}
