use increase::types::card::{CardCreateParams, CardListParams, CardStatus, CardUpdateParams};
use increase::{ApiErrorType, Field};

use crate::helpers::*;

#[tokio::test]
async fn create_get_and_details() {
    let (client, _mock) = mock_client();

    let card = client
        .cards()
        .create(&CardCreateParams {
            account_id: seed::CHECKING_ACCOUNT_ID.into(),
            description: Some("Travel".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(card.account_id, seed::CHECKING_ACCOUNT_ID);
    assert_eq!(card.status, CardStatus::Active);
    assert_eq!(card.last4.len(), 4);

    let fetched = client.cards().get(&card.id).await.unwrap();
    assert_eq!(fetched.description.as_deref(), Some("Travel"));

    let details = client.cards().details(&card.id).await.unwrap();
    assert_eq!(details.card_id, card.id);
    assert!(details.primary_account_number.ends_with(&card.last4));
    assert_eq!(details.expiration_month, card.expiration_month);
    assert_eq!(details.expiration_year, card.expiration_year);
}

#[tokio::test]
async fn update_sets_and_clears_the_cardholder() {
    let (client, mock) = mock_client();

    let assigned = client
        .cards()
        .update(
            seed::CARD_ID,
            &CardUpdateParams {
                entity_id: Field::Value(seed::ENTITY_ID.into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(assigned.entity_id.as_deref(), Some(seed::ENTITY_ID));

    let cleared = client
        .cards()
        .update(
            seed::CARD_ID,
            &CardUpdateParams {
                entity_id: Field::Null,
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(cleared.entity_id, None);

    let sent = mock.requests().await;
    assert_eq!(
        sent[1].body,
        Some(serde_json::json!({ "entity_id": null }))
    );
}

#[tokio::test]
async fn canceled_cards_cannot_be_updated() {
    let (client, _mock) = mock_client();

    let canceled = client
        .cards()
        .update(
            seed::CARD_ID,
            &CardUpdateParams {
                status: Some(CardStatus::Canceled),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(canceled.status, CardStatus::Canceled);

    let err = client
        .cards()
        .update(
            seed::CARD_ID,
            &CardUpdateParams {
                description: Some("too late".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(
        err.api_error().map(|e| e.kind),
        Some(ApiErrorType::InvalidOperation)
    );
}

#[tokio::test]
async fn list_filters_by_account() {
    let (client, _mock) = mock_client();

    let on_checking = client
        .cards()
        .list(&CardListParams {
            account_id: Some(seed::CHECKING_ACCOUNT_ID.into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(on_checking.data.len(), 1);
    assert_eq!(on_checking.data[0].id, seed::CARD_ID);

    let on_savings = client
        .cards()
        .list(&CardListParams {
            account_id: Some(seed::SAVINGS_ACCOUNT_ID.into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(on_savings.data.is_empty());
}
