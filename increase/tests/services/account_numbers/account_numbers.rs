use increase::Field;
use increase::types::account_number::{
    AccountNumberCreateParams, AccountNumberListParams, AccountNumberStatus,
    AccountNumberUpdateParams, InboundAch, InboundAchDebitStatus,
};
use increase::InFilter;

use crate::helpers::*;

#[tokio::test]
async fn create_assigns_numbers_and_default_settings() {
    let (client, _mock) = mock_client();

    let number = client
        .account_numbers()
        .create(&AccountNumberCreateParams {
            account_id: seed::CHECKING_ACCOUNT_ID.into(),
            name: "Vendor refunds".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(number.account_id, seed::CHECKING_ACCOUNT_ID);
    assert_eq!(number.name, "Vendor refunds");
    assert_eq!(number.status, AccountNumberStatus::Active);
    assert!(!number.account_number.is_empty());
    assert_eq!(number.routing_number.len(), 9);
    assert_eq!(
        number.inbound_ach.as_ref().map(|a| a.debit_status),
        Some(InboundAchDebitStatus::Allowed)
    );

    let fetched = client.account_numbers().get(&number.id).await.unwrap();
    assert_eq!(fetched.id, number.id);
}

#[tokio::test]
async fn update_distinguishes_null_from_omitted() {
    let (client, mock) = mock_client();

    let blocked = client
        .account_numbers()
        .update(
            seed::ACCOUNT_NUMBER_ID,
            &AccountNumberUpdateParams {
                inbound_ach: Field::Value(InboundAch {
                    debit_status: InboundAchDebitStatus::Blocked,
                    extra: Default::default(),
                }),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(
        blocked.inbound_ach.map(|a| a.debit_status),
        Some(InboundAchDebitStatus::Blocked)
    );

    // Omitted members are left out of the body entirely.
    let renamed = client
        .account_numbers()
        .update(
            seed::ACCOUNT_NUMBER_ID,
            &AccountNumberUpdateParams {
                name: Some("Payroll".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.name, "Payroll");
    assert_eq!(
        renamed.inbound_ach.map(|a| a.debit_status),
        Some(InboundAchDebitStatus::Blocked)
    );
    let sent = mock.requests().await;
    assert_eq!(sent[1].body, Some(serde_json::json!({ "name": "Payroll" })));

    // Null resets to the default.
    let reset = client
        .account_numbers()
        .update(
            seed::ACCOUNT_NUMBER_ID,
            &AccountNumberUpdateParams {
                inbound_ach: Field::Null,
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(
        reset.inbound_ach.map(|a| a.debit_status),
        Some(InboundAchDebitStatus::Allowed)
    );
    let sent = mock.requests().await;
    assert_eq!(sent[2].body, Some(serde_json::json!({ "inbound_ach": null })));
}

#[tokio::test]
async fn list_filters_by_account_and_debit_status() {
    let (client, _mock) = mock_client();

    let page = client
        .account_numbers()
        .list(&AccountNumberListParams {
            account_id: Some(seed::CHECKING_ACCOUNT_ID.into()),
            ach_debit_status: Some(InFilter::new([InboundAchDebitStatus::Allowed])),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].id, seed::ACCOUNT_NUMBER_ID);

    let blocked = client
        .account_numbers()
        .list(&AccountNumberListParams {
            ach_debit_status: Some(InFilter::new([InboundAchDebitStatus::Blocked])),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(blocked.data.is_empty());
}
