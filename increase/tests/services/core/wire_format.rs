use chrono::{TimeZone, Utc};
use httpmock::prelude::*;
use increase::types::account::{AccountCreateParams, AccountListParams, AccountStatus};
use increase::{ApiErrorType, CreatedAtFilter, InFilter, RequestOptions};
use serde_json::json;

use crate::helpers::*;

async fn seeded_account_json() -> serde_json::Value {
    let (client, _mock) = mock_client();
    let account = client
        .accounts()
        .get(seed::CHECKING_ACCOUNT_ID)
        .await
        .unwrap();
    serde_json::to_value(account).unwrap()
}

#[tokio::test]
async fn list_encodes_filters_as_query_pairs() {
    let server = MockServer::start_async().await;
    let account = seeded_account_json().await;
    let listed = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/accounts")
                .query_param("status.in", "open,closed")
                .query_param("created_at.after", "2024-01-01T00:00:00Z")
                .query_param("limit", "2")
                .header("authorization", format!("Bearer {API_KEY}"))
                .header("accept", "application/json");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "data": [account], "next_cursor": "cursor_2" }));
        })
        .await;

    let client = builder().base_url(server.base_url()).build().unwrap();
    let params = AccountListParams {
        status: Some(InFilter::new([AccountStatus::Open, AccountStatus::Closed])),
        created_at: Some(CreatedAtFilter {
            after: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            ..Default::default()
        }),
        limit: Some(2),
        ..Default::default()
    };
    let page = client.accounts().list(&params).await.unwrap();

    listed.assert_async().await;
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.next_cursor.as_deref(), Some("cursor_2"));
    assert!(page.has_next_page());
}

#[tokio::test]
async fn create_sends_json_body_and_idempotency_key() {
    let server = MockServer::start_async().await;
    let account = seeded_account_json().await;
    let created = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/accounts")
                .header("content-type", "application/json")
                .header("idempotency-key", "open-reserve-1")
                .json_body(json!({ "name": "Reserve", "entity_id": seed::ENTITY_ID }));
            then.status(200).json_body(account);
        })
        .await;

    let client = builder().base_url(server.base_url()).build().unwrap();
    client
        .accounts()
        .with_options(RequestOptions::new().idempotency_key("open-reserve-1"))
        .create(&AccountCreateParams {
            entity_id: Some(seed::ENTITY_ID.into()),
            ..AccountCreateParams::new("Reserve")
        })
        .await
        .unwrap();

    created.assert_async().await;
}

#[tokio::test]
async fn unknown_members_land_in_extra() {
    let server = MockServer::start_async().await;
    let mut account = seeded_account_json().await;
    account["loyalty_tier"] = json!("gold");
    account["status"] = json!("frozen");
    server
        .mock_async(|when, then| {
            when.method(GET).path(format!("/accounts/{}", seed::CHECKING_ACCOUNT_ID));
            then.status(200).json_body(account);
        })
        .await;

    let client = builder().base_url(server.base_url()).build().unwrap();
    let fetched = client
        .accounts()
        .get(seed::CHECKING_ACCOUNT_ID)
        .await
        .unwrap();
    assert_eq!(fetched.extra.get("loyalty_tier"), Some(&json!("gold")));
    assert_eq!(fetched.status, AccountStatus::Unknown);
}

#[tokio::test]
async fn error_envelope_is_decoded() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/accounts/account_missing");
            then.status(404).json_body(json!({
                "status": 404,
                "type": "object_not_found_error",
                "title": "Could not find the specified object.",
                "detail": "No account with id account_missing.",
                "resource_id": "account_missing",
                "retryable": false,
            }));
        })
        .await;

    let client = builder().base_url(server.base_url()).build().unwrap();
    let err = client.accounts().get("account_missing").await.unwrap_err();
    assert!(err.is_not_found());
    let api = err.api_error().unwrap();
    assert_eq!(api.kind, ApiErrorType::ObjectNotFound);
    assert_eq!(api.resource_id.as_deref(), Some("account_missing"));
    assert_eq!(api.retryable, Some(false));
}

#[tokio::test]
async fn non_json_error_bodies_become_detail() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/accounts");
            then.status(400).body("upstream proxy rejected the request");
        })
        .await;

    let client = builder().base_url(server.base_url()).build().unwrap();
    let err = client
        .accounts()
        .list(&AccountListParams::default())
        .await
        .unwrap_err();
    let api = err.api_error().unwrap();
    assert_eq!(api.status, 400);
    assert_eq!(api.kind, ApiErrorType::Unknown);
    assert_eq!(api.detail.as_deref(), Some("upstream proxy rejected the request"));
}

#[tokio::test]
async fn base_url_path_prefix_is_kept() {
    let server = MockServer::start_async().await;
    let account = seeded_account_json().await;
    let prefixed = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(format!("/proxy/v1/accounts/{}", seed::CHECKING_ACCOUNT_ID));
            then.status(200).json_body(account);
        })
        .await;

    let client = builder()
        .base_url(server.url("/proxy/v1"))
        .build()
        .unwrap();
    client
        .accounts()
        .get(seed::CHECKING_ACCOUNT_ID)
        .await
        .unwrap();
    prefixed.assert_async().await;
}
