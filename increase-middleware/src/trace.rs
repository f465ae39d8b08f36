//! Per-attempt request tracing.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use async_trait::async_trait;
use increase_core::{HttpRequest, HttpResponse, Middleware, Transport};
use increase_types::Result;

/// Counters collected by a [`TracingTransport`].
#[derive(Debug, Default)]
pub struct TraceStats {
    attempts: AtomicU64,
    error_statuses: AtomicU64,
    failures: AtomicU64,
}

impl TraceStats {
    /// Attempts sent, including retries.
    pub fn attempts(&self) -> u64 {
        self.attempts.load(Ordering::Relaxed)
    }

    /// Attempts answered with a non-2xx status.
    pub fn error_statuses(&self) -> u64 {
        self.error_statuses.load(Ordering::Relaxed)
    }

    /// Attempts that produced no response.
    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }
}

/// Wrapper that logs every attempt (method, path, status, elapsed) and counts outcomes.
pub struct TracingTransport {
    inner: Arc<dyn Transport>,
    stats: Arc<TraceStats>,
}

impl TracingTransport {
    /// Wrap `inner`, recording into `stats`.
    pub fn new(inner: Arc<dyn Transport>, stats: Arc<TraceStats>) -> Self {
        Self { inner, stats }
    }
}

#[async_trait]
impl Transport for TracingTransport {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn send(&self, req: &HttpRequest) -> Result<HttpResponse> {
        let started = Instant::now();
        self.stats.attempts.fetch_add(1, Ordering::Relaxed);
        let result = self.inner.send(req).await;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        match &result {
            Ok(resp) => {
                if !resp.is_success() {
                    self.stats.error_statuses.fetch_add(1, Ordering::Relaxed);
                }
                #[cfg(feature = "tracing")]
                tracing::info!(
                    method = %req.method,
                    path = %req.path,
                    status = resp.status,
                    elapsed_ms,
                    request_id = resp.header("x-request-id").unwrap_or_default(),
                    "increase request"
                );
            }
            Err(_e) => {
                self.stats.failures.fetch_add(1, Ordering::Relaxed);
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    method = %req.method,
                    path = %req.path,
                    error = %_e,
                    elapsed_ms,
                    "increase request failed"
                );
            }
        }
        #[cfg(not(feature = "tracing"))]
        let _ = elapsed_ms;
        result
    }
}

/// Middleware constructing a [`TracingTransport`].
#[derive(Default)]
pub struct TraceMiddleware {
    stats: Arc<TraceStats>,
}

impl TraceMiddleware {
    /// Middleware with fresh counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared counters, readable after the middleware has been applied.
    #[must_use]
    pub fn stats(&self) -> Arc<TraceStats> {
        Arc::clone(&self.stats)
    }
}

impl Middleware for TraceMiddleware {
    fn apply(self: Box<Self>, inner: Arc<dyn Transport>) -> Arc<dyn Transport> {
        Arc::new(TracingTransport::new(inner, self.stats))
    }

    fn name(&self) -> &'static str {
        "TracingTransport"
    }

    fn config_json(&self) -> serde_json::Value {
        serde_json::json!({})
    }
}
