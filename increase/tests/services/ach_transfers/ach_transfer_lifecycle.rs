use increase::types::account::AccountBalanceParams;
use increase::types::ach_transfer::{
    AchTransferCreateParams, AchTransferListParams, AchTransferStatus,
};
use increase::types::pending_transaction::PendingTransactionStatus;
use increase::types::simulation::AchTransferReturnSimulateParams;
use increase::types::transaction::TransactionSourceCategory;
use increase::{ApiErrorType, IncreaseError, InFilter};

use crate::helpers::*;

fn payroll(amount: i64, require_approval: bool) -> AchTransferCreateParams {
    AchTransferCreateParams {
        account_id: seed::CHECKING_ACCOUNT_ID.into(),
        amount,
        statement_descriptor: "PAYROLL".into(),
        account_number: Some("987654321".into()),
        routing_number: Some("101050001".into()),
        require_approval: Some(require_approval),
        ..Default::default()
    }
}

#[tokio::test]
async fn submit_then_return_restores_the_balance() {
    let (client, _mock) = mock_client();

    let transfer = client.ach_transfers().create(&payroll(10_000, false)).await.unwrap();
    assert_eq!(transfer.status, AchTransferStatus::PendingSubmission);
    let pending_id = transfer.pending_transaction_id.clone().unwrap();

    let balance = client
        .accounts()
        .balance(seed::CHECKING_ACCOUNT_ID, &AccountBalanceParams::default())
        .await
        .unwrap();
    assert_eq!(balance.available_balance, seed::CHECKING_BALANCE - 10_000);

    let submitted = client
        .simulations()
        .ach_transfers()
        .submit(&transfer.id)
        .await
        .unwrap();
    assert_eq!(submitted.status, AchTransferStatus::Submitted);
    assert!(submitted.submission.is_some());
    let tx = client
        .transactions()
        .get(submitted.transaction_id.as_deref().unwrap())
        .await
        .unwrap();
    assert_eq!(tx.amount, -10_000);
    assert_eq!(tx.source.category, TransactionSourceCategory::AchTransferIntention);

    let hold = client.pending_transactions().get(&pending_id).await.unwrap();
    assert_eq!(hold.status, PendingTransactionStatus::Complete);

    let returned = client
        .simulations()
        .ach_transfers()
        .return_transfer(&transfer.id, &AchTransferReturnSimulateParams::default())
        .await
        .unwrap();
    assert_eq!(returned.status, AchTransferStatus::Returned);
    assert!(returned.return_details.is_some());

    let balance = client
        .accounts()
        .balance(seed::CHECKING_ACCOUNT_ID, &AccountBalanceParams::default())
        .await
        .unwrap();
    assert_eq!(balance.current_balance, seed::CHECKING_BALANCE);
}

#[tokio::test]
async fn approval_gates_submission() {
    let (client, _mock) = mock_client();

    let transfer = client.ach_transfers().create(&payroll(500, true)).await.unwrap();
    assert_eq!(transfer.status, AchTransferStatus::PendingApproval);

    let approved = client.ach_transfers().approve(&transfer.id).await.unwrap();
    assert_eq!(approved.status, AchTransferStatus::PendingSubmission);
    assert!(approved.approval.is_some());

    let err = client.ach_transfers().approve(&transfer.id).await.unwrap_err();
    assert_eq!(
        err.api_error().map(|e| e.kind),
        Some(ApiErrorType::InvalidOperation)
    );
    let err = client.ach_transfers().cancel(&transfer.id).await.unwrap_err();
    assert_eq!(err.status(), Some(409));
}

#[tokio::test]
async fn cancel_releases_the_hold() {
    let (client, _mock) = mock_client();

    let transfer = client.ach_transfers().create(&payroll(700, true)).await.unwrap();
    let canceled = client.ach_transfers().cancel(&transfer.id).await.unwrap();
    assert_eq!(canceled.status, AchTransferStatus::Canceled);
    assert!(canceled.cancellation.is_some());

    let balance = client
        .accounts()
        .balance(seed::CHECKING_ACCOUNT_ID, &AccountBalanceParams::default())
        .await
        .unwrap();
    assert_eq!(balance.available_balance, seed::CHECKING_BALANCE);

    let listed = client
        .ach_transfers()
        .list(&AchTransferListParams {
            status: Some(InFilter::new([AchTransferStatus::Canceled])),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(listed.data.len(), 1);
    assert_eq!(listed.data[0].id, transfer.id);

    let fetched = client.ach_transfers().get(&transfer.id).await.unwrap();
    assert_eq!(fetched.status, AchTransferStatus::Canceled);
}

#[tokio::test]
async fn invalid_transfers_never_reach_the_server() {
    let (client, mock) = mock_client();

    let zero = payroll(0, false);
    let no_descriptor = AchTransferCreateParams {
        statement_descriptor: "  ".into(),
        ..payroll(100, false)
    };
    let no_destination = AchTransferCreateParams {
        account_number: None,
        ..payroll(100, false)
    };
    for params in [zero, no_descriptor, no_destination] {
        let err = client.ach_transfers().create(&params).await.unwrap_err();
        assert!(matches!(err, IncreaseError::InvalidArg(_)), "{err}");
    }
    assert_eq!(mock.request_count().await, 0);
}
