use std::sync::Arc;
use std::time::Duration;

use increase::types::account::AccountCreateParams;
use increase::RequestOptions;
use increase_mock::MockTransport;

use crate::helpers::*;

#[tokio::test]
async fn standard_headers_are_applied() {
    let (client, mock) = mock_client();

    client
        .accounts()
        .get(seed::CHECKING_ACCOUNT_ID)
        .await
        .unwrap();
    client
        .accounts()
        .create(&AccountCreateParams::new("Reserve"))
        .await
        .unwrap();

    let sent = mock.requests().await;
    let get = &sent[0];
    assert_eq!(get.base_url, "https://sandbox.increase.com");
    assert_eq!(get.header("authorization"), Some("Bearer sandbox_test_key"));
    assert_eq!(get.header("accept"), Some("application/json"));
    assert!(get.header("user-agent").unwrap().starts_with("increase-rust/"));
    assert_eq!(get.header("idempotency-key"), None);
    assert_eq!(get.header("content-type"), None);

    let post = &sent[1];
    assert_eq!(post.header("content-type"), Some("application/json"));
    assert!(post.header("idempotency-key").is_some());
    assert_eq!(
        post.body,
        Some(serde_json::json!({ "name": "Reserve" }))
    );
}

#[tokio::test]
async fn generated_idempotency_keys_differ_per_call() {
    let (client, mock) = mock_client();

    for name in ["A", "B"] {
        client
            .accounts()
            .create(&AccountCreateParams::new(name))
            .await
            .unwrap();
    }
    let sent = mock.requests().await;
    let first = sent[0].header("idempotency-key").unwrap();
    let second = sent[1].header("idempotency-key").unwrap();
    assert_ne!(first, second);
}

#[tokio::test]
async fn later_layers_override_earlier_ones() {
    let mock = MockTransport::new();
    let client = builder()
        .transport(Arc::new(mock.clone()))
        .header("x-team", "treasury")
        .header("x-trace", "builder")
        .build()
        .unwrap();

    let accounts = client
        .accounts()
        .with_options(
            RequestOptions::new()
                .api_key("handle_key")
                .header("x-trace", "handle")
                .timeout(Duration::from_secs(5)),
        )
        .with_options(RequestOptions::new().header("x-call", "1"));
    assert_eq!(accounts.options().timeout, Some(Duration::from_secs(5)));
    accounts.get(seed::CHECKING_ACCOUNT_ID).await.unwrap();

    let sent = mock.requests().await;
    assert_eq!(sent[0].header("authorization"), Some("Bearer handle_key"));
    assert_eq!(sent[0].header("x-team"), Some("treasury"));
    assert_eq!(sent[0].header("x-trace"), Some("handle"));
    assert_eq!(sent[0].header("x-call"), Some("1"));
}

#[tokio::test]
async fn handle_options_do_not_leak_into_other_handles() {
    let (client, mock) = mock_client();

    client
        .accounts()
        .with_options(RequestOptions::new().base_url("https://elsewhere.example"))
        .get(seed::CHECKING_ACCOUNT_ID)
        .await
        .unwrap();
    client
        .accounts()
        .get(seed::CHECKING_ACCOUNT_ID)
        .await
        .unwrap();

    let sent = mock.requests().await;
    assert_eq!(sent[0].base_url, "https://elsewhere.example");
    assert_eq!(sent[1].base_url, "https://sandbox.increase.com");
}

#[tokio::test]
async fn simulations_inherit_the_parent_handle_options() {
    let (client, mock) = mock_client();

    client
        .simulations()
        .with_options(RequestOptions::new().header("x-sim", "yes"))
        .interest_payments()
        .create(&increase::types::simulation::InterestPaymentSimulateParams {
            account_id: seed::CHECKING_ACCOUNT_ID.into(),
            amount: 1,
            ..Default::default()
        })
        .await
        .unwrap();

    let sent = mock.requests().await;
    assert_eq!(sent[0].path.to_string(), "/simulations/interest_payments");
    assert_eq!(sent[0].header("x-sim"), Some("yes"));
}
