use std::time::Duration;

use futures::{StreamExt, TryStreamExt};
use increase::types::simulation::InterestPaymentSimulateParams;
use increase::types::transaction::TransactionListParams;
use increase::{HttpRequest, IncreaseError, Method, Page, RequestOptions, RequestPath, Resource};
use increase_mock::MockBehavior;

use crate::helpers::*;

async fn pay_interest(client: &increase::Client, times: usize) {
    for _ in 0..times {
        client
            .simulations()
            .interest_payments()
            .create(&InterestPaymentSimulateParams {
                account_id: seed::CHECKING_ACCOUNT_ID.into(),
                amount: 10,
                ..Default::default()
            })
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn follows_cursors_until_exhausted() {
    let (client, mock) = mock_client();
    pay_interest(&client, 5).await;
    mock.clear_requests().await;

    let all: Vec<_> = client
        .transactions()
        .list_auto_paging(TransactionListParams {
            limit: Some(2),
            ..Default::default()
        })
        .try_collect()
        .await
        .unwrap();
    assert_eq!(all.len(), 7);
    assert_eq!(all.last().map(|t| t.id.as_str()), Some(seed::FIRST_TRANSACTION_ID));

    let sent = mock.requests().await;
    assert_eq!(sent.len(), 4);
    let cursors: Vec<Option<&str>> = sent
        .iter()
        .map(|r| {
            r.query
                .iter()
                .find(|(k, _)| k == "cursor")
                .map(|(_, v)| v.as_str())
        })
        .collect();
    assert_eq!(cursors, vec![None, Some("2"), Some("4"), Some("6")]);
}

#[tokio::test]
async fn pages_are_fetched_lazily() {
    let (client, mock) = mock_client();
    pay_interest(&client, 3).await;
    mock.clear_requests().await;

    let first_two: Vec<_> = client
        .transactions()
        .list_auto_paging(TransactionListParams {
            limit: Some(2),
            ..Default::default()
        })
        .take(2)
        .try_collect()
        .await
        .unwrap();
    assert_eq!(first_two.len(), 2);
    assert_eq!(mock.request_count().await, 1);
}

#[tokio::test]
async fn stream_is_static_and_send() {
    let (client, _mock) = mock_client();
    let stream = client
        .accounts()
        .list_auto_paging(Default::default());
    drop(client);

    let accounts = tokio::spawn(async move { stream.try_collect::<Vec<_>>().await })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(accounts.len(), 2);
}

#[tokio::test]
async fn invalid_limit_yields_one_error() {
    let (client, mock) = mock_client();

    let results: Vec<_> = client
        .cards()
        .list_auto_paging(increase::types::card::CardListParams {
            limit: Some(500),
            ..Default::default()
        })
        .collect()
        .await;
    assert_eq!(results.len(), 1);
    assert!(matches!(results[0], Err(IncreaseError::InvalidArg(_))));
    assert_eq!(mock.request_count().await, 0);
}

#[tokio::test]
async fn error_page_is_yielded_then_ends_the_stream() {
    let (client, controller) = dynamic_client(0, Duration::from_secs(5));

    let first: Page<serde_json::Value> = client
        .execute(
            HttpRequest::new(Method::Get, RequestPath::collection(Resource::Transaction))
                .with_query(vec![("limit".into(), "1".into())]),
            &RequestOptions::new(),
        )
        .await
        .unwrap();
    assert!(first.has_next_page());

    controller
        .push_behaviors(
            Method::Get,
            "/transactions",
            [
                MockBehavior::json(200, &serde_json::to_value(&first).unwrap()),
                MockBehavior::api_error(400, "invalid_parameters_error", "bad cursor"),
            ],
        )
        .await;

    let results: Vec<_> = client
        .transactions()
        .list_auto_paging(TransactionListParams {
            limit: Some(1),
            ..Default::default()
        })
        .collect()
        .await;
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    let err = results[1].as_ref().unwrap_err();
    assert_eq!(err.status(), Some(400));
}
