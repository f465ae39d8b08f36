use increase::types::account::{
    AccountCreateParams, AccountListParams, AccountStatus, AccountUpdateParams,
};
use increase::{InFilter, IncreaseError};

use crate::helpers::*;

#[tokio::test]
async fn create_then_get_round_trips_through_the_sandbox() {
    let (client, _mock) = mock_client();

    let created = client
        .accounts()
        .create(&AccountCreateParams {
            entity_id: Some(seed::ENTITY_ID.into()),
            ..AccountCreateParams::new("Operating")
        })
        .await
        .unwrap();
    assert_eq!(created.name, "Operating");
    assert_eq!(created.status, AccountStatus::Open);
    assert_eq!(created.entity_id.as_deref(), Some(seed::ENTITY_ID));

    let fetched = client.accounts().get(&created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn update_renames_the_account() {
    let (client, _mock) = mock_client();

    let updated = client
        .accounts()
        .update(
            seed::CHECKING_ACCOUNT_ID,
            &AccountUpdateParams {
                name: Some("Main checking".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.id, seed::CHECKING_ACCOUNT_ID);
    assert_eq!(updated.name, "Main checking");
}

#[tokio::test]
async fn list_filters_by_status() {
    let (client, _mock) = mock_client();

    let open = client
        .accounts()
        .list(&AccountListParams {
            status: Some(InFilter::new([AccountStatus::Open])),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(open.data.len(), 2);
    assert!(open.data.iter().all(|a| a.status == AccountStatus::Open));
    assert!(!open.has_next_page());

    let closed = client
        .accounts()
        .list(&AccountListParams {
            status: Some(InFilter::new([AccountStatus::Closed])),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(closed.data.is_empty());
}

#[tokio::test]
async fn missing_account_is_not_found() {
    let (client, _mock) = mock_client();

    let err = client.accounts().get("account_missing").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.status(), Some(404));
    let api = err.api_error().unwrap();
    assert_eq!(api.resource_id.as_deref(), Some("account_missing"));
}

#[tokio::test]
async fn empty_id_is_rejected_before_sending() {
    let (client, mock) = mock_client();

    let err = client.accounts().get("").await.unwrap_err();
    assert!(matches!(err, IncreaseError::InvalidArg(_)));
    assert_eq!(err.to_string(), "invalid argument: missing required account id");
    assert_eq!(mock.request_count().await, 0);
}

#[tokio::test]
async fn out_of_range_limit_is_rejected_before_sending() {
    let (client, mock) = mock_client();

    for limit in [0, 101] {
        let err = client
            .accounts()
            .list(&AccountListParams {
                limit: Some(limit),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, IncreaseError::InvalidArg(_)), "limit {limit}");
    }
    assert_eq!(mock.request_count().await, 0);
}
