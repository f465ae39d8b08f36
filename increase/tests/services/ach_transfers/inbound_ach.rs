use increase::types::account_number::{
    AccountNumberUpdateParams, InboundAch, InboundAchDebitStatus,
};
use increase::types::ach_transfer::{InboundAchDirection, InboundAchTransferStatus};
use increase::types::declined_transaction::AchDeclineReason;
use increase::types::simulation::{
    InboundAchTransferSimulateParams, InterestPaymentSimulateParams,
};
use increase::types::transaction::TransactionSourceCategory;
use increase::Field;

use crate::helpers::*;

fn inbound(amount: i64) -> InboundAchTransferSimulateParams {
    InboundAchTransferSimulateParams {
        account_number_id: seed::ACCOUNT_NUMBER_ID.into(),
        amount,
        company_name: Some("ACME CORP".into()),
        ..Default::default()
    }
}

#[tokio::test]
async fn inbound_credit_is_accepted_and_posted() {
    let (client, _mock) = mock_client();

    let transfer = client
        .simulations()
        .inbound_ach_transfers()
        .create(&inbound(4_200))
        .await
        .unwrap();
    assert_eq!(transfer.status, InboundAchTransferStatus::Accepted);
    assert_eq!(transfer.direction, InboundAchDirection::Credit);
    assert_eq!(transfer.account_id, seed::CHECKING_ACCOUNT_ID);
    assert_eq!(transfer.originator_company_name, "ACME CORP");

    let tx = client
        .transactions()
        .get(transfer.transaction_id.as_deref().unwrap())
        .await
        .unwrap();
    assert_eq!(tx.amount, 4_200);
    assert_eq!(tx.source.category, TransactionSourceCategory::InboundAchTransfer);
}

#[tokio::test]
async fn inbound_debit_is_declined_when_debits_are_blocked() {
    let (client, _mock) = mock_client();

    client
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

    let transfer = client
        .simulations()
        .inbound_ach_transfers()
        .create(&inbound(-300))
        .await
        .unwrap();
    assert_eq!(transfer.status, InboundAchTransferStatus::Declined);
    assert_eq!(transfer.direction, InboundAchDirection::Debit);
    assert!(transfer.transaction_id.is_none());

    let declined = client
        .declined_transactions()
        .get(transfer.declined_transaction_id.as_deref().unwrap())
        .await
        .unwrap();
    assert_eq!(
        declined.source.ach_decline.as_ref().map(|d| d.reason),
        Some(AchDeclineReason::TransactionNotAllowed)
    );
}

#[tokio::test]
async fn interest_payment_credits_the_account() {
    let (client, _mock) = mock_client();

    let tx = client
        .simulations()
        .interest_payments()
        .create(&InterestPaymentSimulateParams {
            account_id: seed::SAVINGS_ACCOUNT_ID.into(),
            amount: 137,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(tx.account_id, seed::SAVINGS_ACCOUNT_ID);
    assert_eq!(tx.amount, 137);
    assert_eq!(tx.source.category, TransactionSourceCategory::InterestPayment);
    let interest = tx.source.interest_payment.as_ref().unwrap();
    assert_eq!(interest.amount, 137);
}
