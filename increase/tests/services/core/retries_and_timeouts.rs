use std::time::Duration;

use increase::types::account::AccountCreateParams;
use increase::{HttpResponse, IncreaseError, Method, RequestOptions};
use increase_mock::MockBehavior;

use crate::helpers::*;

fn unavailable() -> MockBehavior {
    MockBehavior::api_error(503, "internal_server_error", "Service unavailable")
}

#[tokio::test]
async fn server_errors_are_retried_until_success() {
    let (client, controller) = dynamic_client(2, Duration::from_secs(5));
    let path = account_path(seed::CHECKING_ACCOUNT_ID);
    controller
        .push_behaviors(Method::Get, &path, [unavailable(), unavailable()])
        .await;

    let account = client
        .accounts()
        .get(seed::CHECKING_ACCOUNT_ID)
        .await
        .unwrap();
    assert_eq!(account.id, seed::CHECKING_ACCOUNT_ID);
    assert_eq!(controller.attempts(Method::Get, &path).await, 3);
}

#[tokio::test]
async fn exhausted_retries_surface_the_last_response() {
    let (client, controller) = dynamic_client(1, Duration::from_secs(5));
    let path = account_path(seed::CHECKING_ACCOUNT_ID);
    controller
        .push_behaviors(Method::Get, &path, [unavailable(), unavailable(), unavailable()])
        .await;

    let err = client
        .accounts()
        .get(seed::CHECKING_ACCOUNT_ID)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert!(err.is_retryable());
    assert_eq!(controller.attempts(Method::Get, &path).await, 2);
}

#[tokio::test]
async fn zero_max_retries_sends_once() {
    let (client, controller) = dynamic_client(0, Duration::from_secs(5));
    let path = account_path(seed::CHECKING_ACCOUNT_ID);
    controller.push_behavior(Method::Get, &path, unavailable()).await;

    let err = client
        .accounts()
        .get(seed::CHECKING_ACCOUNT_ID)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert_eq!(controller.attempts(Method::Get, &path).await, 1);
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let (client, controller) = dynamic_client(3, Duration::from_secs(5));
    let path = account_path(seed::CHECKING_ACCOUNT_ID);
    controller
        .push_behavior(
            Method::Get,
            &path,
            MockBehavior::api_error(400, "invalid_parameters_error", "Bad request"),
        )
        .await;

    let err = client
        .accounts()
        .get(seed::CHECKING_ACCOUNT_ID)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert!(!err.is_retryable());
    assert_eq!(controller.attempts(Method::Get, &path).await, 1);
}

#[tokio::test]
async fn should_retry_header_overrides_status() {
    let (client, controller) = dynamic_client(2, Duration::from_secs(5));
    let path = account_path(seed::CHECKING_ACCOUNT_ID);
    let forced = HttpResponse::json(
        400,
        &serde_json::json!({ "status": 400, "type": "invalid_parameters_error", "title": "Try again" }),
    )
    .with_header("x-should-retry", "true");
    let refused = HttpResponse::json(
        503,
        &serde_json::json!({ "status": 503, "type": "internal_server_error", "title": "Down" }),
    )
    .with_header("x-should-retry", "false");
    controller
        .push_behaviors(
            Method::Get,
            &path,
            [MockBehavior::Respond(forced), MockBehavior::Respond(refused)],
        )
        .await;

    let err = client
        .accounts()
        .get(seed::CHECKING_ACCOUNT_ID)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert_eq!(controller.attempts(Method::Get, &path).await, 2);
}

#[tokio::test]
async fn transport_failures_are_retried() {
    let (client, controller) = dynamic_client(2, Duration::from_secs(5));
    let path = account_path(seed::CHECKING_ACCOUNT_ID);
    controller
        .push_behavior(
            Method::Get,
            &path,
            MockBehavior::Fail(IncreaseError::transport("connection reset")),
        )
        .await;

    client
        .accounts()
        .get(seed::CHECKING_ACCOUNT_ID)
        .await
        .unwrap();
    assert_eq!(controller.attempts(Method::Get, &path).await, 2);
}

#[tokio::test]
async fn retries_reuse_the_generated_idempotency_key() {
    let (client, controller) = dynamic_client(2, Duration::from_secs(5));
    controller
        .push_behavior(Method::Post, "/accounts", unavailable())
        .await;

    client
        .accounts()
        .create(&AccountCreateParams::new("Retried"))
        .await
        .unwrap();

    let sent = controller.requests().await;
    assert_eq!(sent.len(), 2);
    let first = sent[0].header("idempotency-key").unwrap();
    assert!(first.starts_with("increase-rs-retry-"));
    assert_eq!(sent[1].header("idempotency-key"), Some(first));
}

#[tokio::test(start_paused = true)]
async fn stalled_attempts_time_out_and_retry() {
    let (client, controller) = dynamic_client(1, Duration::from_secs(2));
    let path = account_path(seed::CHECKING_ACCOUNT_ID);
    controller
        .push_behaviors(Method::Get, &path, [MockBehavior::Hang, MockBehavior::Hang])
        .await;

    let started = tokio::time::Instant::now();
    let err = client
        .accounts()
        .get(seed::CHECKING_ACCOUNT_ID)
        .await
        .unwrap_err();
    assert!(matches!(err, IncreaseError::Timeout { ref path, .. } if path.ends_with(seed::CHECKING_ACCOUNT_ID)));
    assert_eq!(controller.attempts(Method::Get, &path).await, 2);
    assert!(started.elapsed() >= Duration::from_secs(4));
}

#[tokio::test(start_paused = true)]
async fn per_call_timeout_overrides_the_client_timeout() {
    let (client, controller) = dynamic_client(0, Duration::from_secs(60));
    let path = account_path(seed::CHECKING_ACCOUNT_ID);
    controller.push_behavior(Method::Get, &path, MockBehavior::Hang).await;

    let started = tokio::time::Instant::now();
    let err = client
        .accounts()
        .with_options(RequestOptions::new().timeout(Duration::from_millis(250)))
        .get(seed::CHECKING_ACCOUNT_ID)
        .await
        .unwrap_err();
    assert!(matches!(err, IncreaseError::Timeout { .. }));
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn retry_after_header_sets_the_delay() {
    let (client, controller) = dynamic_client(1, Duration::from_secs(5));
    let path = account_path(seed::CHECKING_ACCOUNT_ID);
    let throttled = HttpResponse::json(
        429,
        &serde_json::json!({ "status": 429, "type": "rate_limited_error", "title": "Slow down" }),
    )
    .with_header("retry-after", "3");
    controller
        .push_behavior(Method::Get, &path, MockBehavior::Respond(throttled))
        .await;

    let started = tokio::time::Instant::now();
    client
        .accounts()
        .get(seed::CHECKING_ACCOUNT_ID)
        .await
        .unwrap();
    assert!(started.elapsed() >= Duration::from_secs(3));
}

#[tokio::test]
async fn per_call_max_retries_overrides_the_client() {
    let (client, controller) = dynamic_client(3, Duration::from_secs(5));
    let path = account_path(seed::CHECKING_ACCOUNT_ID);
    controller
        .push_behaviors(Method::Get, &path, [unavailable(), unavailable()])
        .await;

    let err = client
        .accounts()
        .with_options(RequestOptions::new().max_retries(0))
        .get(seed::CHECKING_ACCOUNT_ID)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert_eq!(controller.attempts(Method::Get, &path).await, 1);
}
