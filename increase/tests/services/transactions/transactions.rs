use increase::types::declined_transaction::DeclinedTransactionListParams;
use increase::types::pending_transaction::{
    PendingTransactionListParams, PendingTransactionSourceCategory, PendingTransactionStatus,
};
use increase::types::simulation::CardAuthorizationSimulateParams;
use increase::types::transaction::{TransactionListParams, TransactionSourceCategory};
use increase::InFilter;

use crate::helpers::*;

#[tokio::test]
async fn get_decodes_a_seeded_transaction() {
    let (client, _mock) = mock_client();

    let tx = client
        .transactions()
        .get(seed::FIRST_TRANSACTION_ID)
        .await
        .unwrap();
    assert_eq!(tx.account_id, seed::CHECKING_ACCOUNT_ID);
    assert_eq!(tx.amount, 600_000);
    assert_eq!(tx.route_id.as_deref(), Some(seed::ACCOUNT_NUMBER_ID));
    assert_eq!(tx.source.category, TransactionSourceCategory::InboundAchTransfer);
    let inbound = tx.source.inbound_ach_transfer.as_ref().unwrap();
    assert_eq!(inbound.amount, 600_000);
}

#[tokio::test]
async fn list_pages_newest_first() {
    let (client, _mock) = mock_client();

    let first = client
        .transactions()
        .list(&TransactionListParams {
            limit: Some(1),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(first.data.len(), 1);
    assert_eq!(first.data[0].id, seed::SECOND_TRANSACTION_ID);
    assert!(first.has_next_page());

    let second = client
        .transactions()
        .list(&TransactionListParams {
            limit: Some(1),
            cursor: first.next_cursor.clone(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(second.data[0].id, seed::FIRST_TRANSACTION_ID);
    assert!(!second.has_next_page());
}

#[tokio::test]
async fn list_filters_by_category() {
    let (client, _mock) = mock_client();

    let interest = client
        .transactions()
        .list(&TransactionListParams {
            category: Some(InFilter::new([TransactionSourceCategory::InterestPayment])),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(interest.data.is_empty());

    let inbound = client
        .transactions()
        .list(&TransactionListParams {
            account_id: Some(seed::CHECKING_ACCOUNT_ID.into()),
            category: Some(InFilter::new([
                TransactionSourceCategory::InboundAchTransfer,
                TransactionSourceCategory::InterestPayment,
            ])),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(inbound.data.len(), 2);
}

#[tokio::test]
async fn pending_and_declined_lists_follow_simulations() {
    let (client, _mock) = mock_client();

    for amount in [1_000, seed::CHECKING_BALANCE * 2] {
        client
            .simulations()
            .card_authorizations()
            .create(&CardAuthorizationSimulateParams {
                amount,
                card_id: Some(seed::CARD_ID.into()),
                ..Default::default()
            })
            .await
            .unwrap();
    }

    let pending = client
        .pending_transactions()
        .list(&PendingTransactionListParams {
            account_id: Some(seed::CHECKING_ACCOUNT_ID.into()),
            status: Some(InFilter::new([PendingTransactionStatus::Pending])),
            category: Some(InFilter::new([
                PendingTransactionSourceCategory::CardAuthorization,
            ])),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(pending.data.len(), 1);
    assert_eq!(pending.data[0].amount, -1_000);
    assert_eq!(pending.data[0].route_id.as_deref(), Some(seed::CARD_ID));

    let declined = client
        .declined_transactions()
        .list(&DeclinedTransactionListParams {
            route_id: Some(seed::CARD_ID.into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(declined.data.len(), 1);
    assert_eq!(declined.data[0].amount, -(seed::CHECKING_BALANCE * 2));
}
