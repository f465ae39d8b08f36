use increase::types::account::AccountBalanceParams;
use increase::types::card_payment::{
    CardDeclineReason, CardPaymentElementCategory, CardPaymentListParams,
};
use increase::types::declined_transaction::DeclinedTransactionSourceCategory;
use increase::types::pending_transaction::PendingTransactionStatus;
use increase::types::simulation::{
    CardAuthorizationSimulateParams, CardRefundSimulateParams, CardSettlementSimulateParams,
};
use increase::types::transaction::TransactionSourceCategory;
use increase::{ApiErrorType, BalanceLookup, Client};

use crate::helpers::*;

fn authorization(amount: i64) -> CardAuthorizationSimulateParams {
    CardAuthorizationSimulateParams {
        amount,
        card_id: Some(seed::CARD_ID.into()),
        merchant_descriptor: Some("COFFEE SHOP".into()),
        ..Default::default()
    }
}

async fn checking_balance(client: &Client) -> BalanceLookup {
    client
        .accounts()
        .balance(seed::CHECKING_ACCOUNT_ID, &AccountBalanceParams::default())
        .await
        .unwrap()
}

#[tokio::test]
async fn authorize_settle_refund_moves_the_balance() {
    let (client, _mock) = mock_client();

    let sim = client
        .simulations()
        .card_authorizations()
        .create(&authorization(2_500))
        .await
        .unwrap();
    assert!(sim.is_approved());
    assert!(sim.declined_transaction.is_none());
    let pending = sim.pending_transaction.unwrap();
    assert_eq!(pending.amount, -2_500);
    assert_eq!(pending.status, PendingTransactionStatus::Pending);
    let auth = pending.source.card_authorization.clone().unwrap();
    assert_eq!(auth.merchant.descriptor, "COFFEE SHOP");

    let held = checking_balance(&client).await;
    assert_eq!(held.current_balance, seed::CHECKING_BALANCE);
    assert_eq!(held.available_balance, seed::CHECKING_BALANCE - 2_500);

    let settled = client
        .simulations()
        .card_settlements()
        .create(&CardSettlementSimulateParams {
            card_id: seed::CARD_ID.into(),
            pending_transaction_id: pending.id.clone(),
            amount: None,
        })
        .await
        .unwrap();
    assert_eq!(settled.amount, -2_500);
    assert_eq!(settled.source.category, TransactionSourceCategory::CardSettlement);

    let completed = client
        .pending_transactions()
        .get(&pending.id)
        .await
        .unwrap();
    assert_eq!(completed.status, PendingTransactionStatus::Complete);
    assert!(completed.completed_at.is_some());

    let after_settle = checking_balance(&client).await;
    assert_eq!(after_settle.current_balance, seed::CHECKING_BALANCE - 2_500);
    assert_eq!(after_settle.available_balance, seed::CHECKING_BALANCE - 2_500);

    let refund = client
        .simulations()
        .card_refunds()
        .create(&CardRefundSimulateParams {
            transaction_id: settled.id.clone(),
        })
        .await
        .unwrap();
    assert_eq!(refund.amount, 2_500);
    assert_eq!(refund.source.category, TransactionSourceCategory::CardRefund);
    assert_eq!(checking_balance(&client).await.current_balance, seed::CHECKING_BALANCE);

    let payment_id = auth.card_payment_id.unwrap();
    let payment = client.card_payments().get(&payment_id).await.unwrap();
    let categories: Vec<_> = payment.elements.iter().map(|e| e.category).collect();
    assert_eq!(
        categories,
        vec![
            CardPaymentElementCategory::CardAuthorization,
            CardPaymentElementCategory::CardSettlement,
            CardPaymentElementCategory::CardRefund,
        ]
    );
    assert_eq!(payment.state.authorized_amount, 2_500);
    assert_eq!(payment.state.settled_amount, 2_500);
}

#[tokio::test]
async fn authorization_over_the_available_balance_is_declined() {
    let (client, _mock) = mock_client();

    let sim = client
        .simulations()
        .card_authorizations()
        .create(&authorization(seed::CHECKING_BALANCE + 1))
        .await
        .unwrap();
    assert!(!sim.is_approved());
    let declined = sim.declined_transaction.unwrap();
    assert_eq!(declined.source.category, DeclinedTransactionSourceCategory::CardDecline);
    assert_eq!(
        declined.source.card_decline.as_ref().map(|d| d.reason),
        Some(CardDeclineReason::InsufficientFunds)
    );

    let fetched = client
        .declined_transactions()
        .get(&declined.id)
        .await
        .unwrap();
    assert_eq!(fetched.amount, -(seed::CHECKING_BALANCE + 1));

    let payments = client
        .card_payments()
        .list(&CardPaymentListParams {
            card_id: Some(seed::CARD_ID.into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(payments.data.len(), 1);
    assert_eq!(
        payments.data[0].elements[0].category,
        CardPaymentElementCategory::CardDecline
    );
}

#[tokio::test]
async fn settling_twice_is_an_invalid_operation() {
    let (client, _mock) = mock_client();

    let pending = client
        .simulations()
        .card_authorizations()
        .create(&authorization(100))
        .await
        .unwrap()
        .pending_transaction
        .unwrap();
    let params = CardSettlementSimulateParams {
        card_id: seed::CARD_ID.into(),
        pending_transaction_id: pending.id,
        amount: None,
    };
    client
        .simulations()
        .card_settlements()
        .create(&params)
        .await
        .unwrap();

    let err = client
        .simulations()
        .card_settlements()
        .create(&params)
        .await
        .unwrap_err();
    assert_eq!(
        err.api_error().map(|e| e.kind),
        Some(ApiErrorType::InvalidOperation)
    );
}
