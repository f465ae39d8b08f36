//! The shared request executor: headers, retries, timeouts and decoding.

use std::sync::Arc;
use std::time::Duration;

use increase_types::{BackoffConfig, ClientConfig, IncreaseError, Result};
use rand::Rng;
use serde::de::DeserializeOwned;

use crate::middleware::{Middleware, MiddlewareDescriptor, apply_stack};
use crate::options::RequestOptions;
use crate::retry;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport};

/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!("increase-rust/", env!("CARGO_PKG_VERSION"));

/// Header carrying the idempotency key of non-GET requests.
pub const IDEMPOTENCY_HEADER: &str = "Idempotency-Key";

/// Settings for one logical request after all option layers are applied.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    /// Base URL.
    pub base_url: String,
    /// Bearer token.
    pub api_key: Option<String>,
    /// Per-attempt timeout.
    pub timeout: Duration,
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// Retry delay schedule.
    pub backoff: BackoffConfig,
    /// Headers in application order.
    pub headers: Vec<(String, String)>,
    /// Caller-provided idempotency key.
    pub idempotency_key: Option<String>,
}

impl ResolvedOptions {
    /// Layer `opts` over `cfg`.
    #[must_use]
    pub fn resolve(cfg: &ClientConfig, opts: &RequestOptions) -> Self {
        let mut headers: Vec<(String, String)> = cfg
            .default_headers
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        headers.extend(opts.headers.iter().cloned());
        Self {
            base_url: opts
                .base_url
                .clone()
                .unwrap_or_else(|| cfg.effective_base_url().to_string()),
            api_key: opts.api_key.clone().or_else(|| cfg.api_key.clone()),
            timeout: opts.timeout.unwrap_or(cfg.timeout),
            max_retries: opts.max_retries.unwrap_or(cfg.max_retries),
            backoff: cfg.backoff,
            headers,
            idempotency_key: opts.idempotency_key.clone(),
        }
    }
}

/// Generate an idempotency key for one logical request.
#[must_use]
pub fn generate_idempotency_key() -> String {
    let mut rng = rand::rng();
    format!(
        "increase-rs-retry-{:016x}{:016x}",
        rng.random::<u64>(),
        rng.random::<u64>()
    )
}

/// Executes requests against a transport with retries and timeouts.
///
/// Cheap to share behind an `Arc`; holds no per-request state.
pub struct Requester {
    transport: Arc<dyn Transport>,
    config: ClientConfig,
    middleware: Vec<MiddlewareDescriptor>,
}

impl Requester {
    /// Executor over `transport` with no middleware.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, config: ClientConfig) -> Self {
        Self::with_middleware(transport, Vec::new(), config)
    }

    /// Executor over `transport` wrapped in `stack`, first entry outermost.
    #[must_use]
    pub fn with_middleware(
        transport: Arc<dyn Transport>,
        stack: Vec<Box<dyn Middleware>>,
        config: ClientConfig,
    ) -> Self {
        let (transport, middleware) = apply_stack(transport, stack);
        Self {
            transport,
            config,
            middleware,
        }
    }

    /// Client-wide configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Applied middleware, outermost first.
    #[must_use]
    pub fn middleware(&self) -> &[MiddlewareDescriptor] {
        &self.middleware
    }

    /// Outermost transport, including middleware.
    #[must_use]
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Execute `req` and decode a 2xx body as `T`.
    ///
    /// # Errors
    /// Returns `Api` for non-2xx responses, `Decode` when the body does not
    /// match `T`, and `Transport` or `Timeout` when the last attempt failed.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        req: HttpRequest,
        opts: &RequestOptions,
    ) -> Result<T> {
        let method = req.method;
        let path = req.path.to_string();
        let resp = self.execute_raw(req, opts).await?;
        serde_json::from_slice(&resp.body)
            .map_err(|e| IncreaseError::Decode(format!("{method} {path}: {e}")))
    }

    /// Execute `req` and return the successful response unparsed.
    ///
    /// # Errors
    /// As [`Requester::execute`], minus decoding.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "increase::request",
            skip(self, req, opts),
            fields(method = %req.method, path = %req.path, transport = self.transport.name()),
        )
    )]
    pub async fn execute_raw(&self, mut req: HttpRequest, opts: &RequestOptions) -> Result<HttpResponse> {
        let resolved = ResolvedOptions::resolve(&self.config, opts);
        prepare(&mut req, &resolved);

        let mut attempt: u32 = 0;
        loop {
            let result = self.attempt(&req, resolved.timeout).await;
            let retryable = match &result {
                Ok(resp) => !resp.is_success() && retry::should_retry(resp),
                Err(e) => e.is_retryable(),
            };
            if !retryable || attempt >= resolved.max_retries {
                return result.and_then(into_success);
            }

            let delay = retry::next_delay(
                &resolved.backoff,
                attempt,
                result.as_ref().ok(),
                chrono::Utc::now(),
            );
            #[cfg(feature = "tracing")]
            match &result {
                Ok(resp) => tracing::warn!(
                    attempt,
                    status = resp.status,
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    "retrying after error status"
                ),
                Err(e) => tracing::warn!(
                    attempt,
                    error = %e,
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    "retrying after failed attempt"
                ),
            }
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }

    async fn attempt(&self, req: &HttpRequest, timeout: Duration) -> Result<HttpResponse> {
        (tokio::time::timeout(timeout, self.transport.send(req)).await).unwrap_or_else(|_| {
            Err(IncreaseError::timeout(
                req.method.as_str(),
                req.path.to_string(),
            ))
        })
    }
}

fn prepare(req: &mut HttpRequest, resolved: &ResolvedOptions) {
    req.base_url.clone_from(&resolved.base_url);
    req.set_header("Accept", "application/json");
    req.set_header("User-Agent", USER_AGENT);
    if let Some(key) = &resolved.api_key {
        req.set_header("Authorization", format!("Bearer {key}"));
    }
    if req.body.is_some() {
        req.set_header("Content-Type", "application/json");
    }
    if req.method != Method::Get {
        let key = resolved
            .idempotency_key
            .clone()
            .unwrap_or_else(generate_idempotency_key);
        req.set_header(IDEMPOTENCY_HEADER, key);
    }
    for (name, value) in &resolved.headers {
        req.set_header(name.clone(), value.clone());
    }
}

fn into_success(resp: HttpResponse) -> Result<HttpResponse> {
    if resp.is_success() {
        Ok(resp)
    } else {
        Err(IncreaseError::from_response(resp.status, &resp.body))
    }
}
