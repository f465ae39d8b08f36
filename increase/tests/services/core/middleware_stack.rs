use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use increase::{
    HttpRequest, HttpResponse, IncreaseError, Middleware, QuotaConfig, QuotaMiddleware,
    TraceMiddleware, Transport,
};
use increase_mock::{FAIL_ID, MockTransport};

use crate::helpers::*;

#[tokio::test]
async fn middleware_is_listed_outermost_first() {
    let client = builder()
        .transport(Arc::new(MockTransport::new()))
        .with_middleware(Box::new(TraceMiddleware::new()))
        .with_middleware(Box::new(QuotaMiddleware::new(QuotaConfig {
            limit: 10,
            window: Duration::from_secs(1),
        })))
        .build()
        .unwrap();

    let names: Vec<_> = client.middleware().iter().map(|m| m.name).collect();
    assert_eq!(names, vec!["TracingTransport", "QuotaAwareTransport"]);
    assert_eq!(client.middleware()[1].config["limit"], 10);
    assert_eq!(client.middleware()[1].config["window_ms"], 1_000);
}

#[tokio::test]
async fn trace_sees_every_retry_attempt() {
    let mock = MockTransport::new();
    let trace = TraceMiddleware::new();
    let stats = trace.stats();
    let client = builder()
        .transport(Arc::new(mock.clone()))
        .with_middleware(Box::new(trace))
        .max_retries(2)
        .build()
        .unwrap();

    let err = client.accounts().get(FAIL_ID).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(stats.attempts(), 3);
    assert_eq!(stats.error_statuses(), 3);
    assert_eq!(mock.request_count().await, 3);

    client
        .accounts()
        .get(seed::CHECKING_ACCOUNT_ID)
        .await
        .unwrap();
    assert_eq!(stats.attempts(), 4);
    assert_eq!(stats.error_statuses(), 3);
    assert_eq!(stats.failures(), 0);
}

#[tokio::test]
async fn quota_rejects_locally_once_spent() {
    let mock = MockTransport::new();
    let client = builder()
        .transport(Arc::new(mock.clone()))
        .with_middleware(Box::new(QuotaMiddleware::new(QuotaConfig {
            limit: 2,
            window: Duration::from_secs(60),
        })))
        .build()
        .unwrap();

    for _ in 0..2 {
        client
            .accounts()
            .get(seed::CHECKING_ACCOUNT_ID)
            .await
            .unwrap();
    }
    let err = client
        .accounts()
        .get(seed::CHECKING_ACCOUNT_ID)
        .await
        .unwrap_err();
    match err {
        IncreaseError::QuotaExceeded {
            remaining,
            reset_in_ms,
        } => {
            assert_eq!(remaining, 0);
            assert!(reset_in_ms <= 60_000);
        }
        other => panic!("expected QuotaExceeded, got {other:?}"),
    }
    assert!(!IncreaseError::QuotaExceeded { remaining: 0, reset_in_ms: 1 }.is_retryable());
    assert_eq!(mock.request_count().await, 2);
}

#[tokio::test]
async fn quota_state_is_readable_after_install() {
    let quota = QuotaMiddleware::new(QuotaConfig {
        limit: 5,
        window: Duration::from_secs(60),
    });
    let handle = quota.handle();
    let client = builder()
        .transport(Arc::new(MockTransport::new()))
        .with_middleware(Box::new(quota))
        .build()
        .unwrap();

    for _ in 0..2 {
        client
            .accounts()
            .get(seed::CHECKING_ACCOUNT_ID)
            .await
            .unwrap();
    }
    let state = handle.state();
    assert_eq!(state.limit, 5);
    assert_eq!(state.remaining, 3);
    assert!(state.reset_in <= Duration::from_secs(60));
}

/// Stamps a tenant header onto every attempt.
struct TenantStamp(&'static str);

struct TenantTransport {
    inner: Arc<dyn Transport>,
    tenant: &'static str,
}

#[async_trait]
impl Transport for TenantTransport {
    fn name(&self) -> &'static str {
        "TenantTransport"
    }

    async fn send(&self, req: &HttpRequest) -> increase::Result<HttpResponse> {
        let mut req = req.clone();
        req.set_header("x-tenant", self.tenant);
        self.inner.send(&req).await
    }
}

impl Middleware for TenantStamp {
    fn apply(self: Box<Self>, inner: Arc<dyn Transport>) -> Arc<dyn Transport> {
        Arc::new(TenantTransport {
            inner,
            tenant: self.0,
        })
    }

    fn name(&self) -> &'static str {
        "TenantTransport"
    }

    fn config_json(&self) -> serde_json::Value {
        serde_json::json!({ "tenant": self.0 })
    }
}

#[tokio::test]
async fn custom_middleware_sees_prepared_requests() {
    let mock = MockTransport::new();
    let client = builder()
        .transport(Arc::new(mock.clone()))
        .with_middleware(Box::new(TenantStamp("acme")))
        .build()
        .unwrap();

    client
        .accounts()
        .get(seed::CHECKING_ACCOUNT_ID)
        .await
        .unwrap();

    let sent = mock.requests().await;
    assert_eq!(sent[0].header("x-tenant"), Some("acme"));
    assert_eq!(sent[0].header("authorization"), Some("Bearer sandbox_test_key"));
    assert_eq!(client.middleware()[0].config["tenant"], "acme");
}
