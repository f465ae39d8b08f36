use increase::types::account::AccountBalanceParams;
use increase::types::account_number::AccountNumberCreateParams;
use increase::types::ach_transfer::AchTransferCreateParams;
use increase::types::simulation::{
    AchTransferReturnSimulateParams, InboundAchTransferSimulateParams,
};
use increase::{IncreaseError, RequestOptions};
use increase_demos::common::{dollars, funded_account, get_client};

fn vendor_payment(account_id: &str, cents: i64) -> AchTransferCreateParams {
    AchTransferCreateParams {
        account_id: account_id.to_string(),
        amount: cents,
        statement_descriptor: "VENDOR PAYMENT".into(),
        account_number: Some("987654321".into()),
        routing_number: Some("101050001".into()),
        individual_name: Some("Acme Supplies".into()),
        ..Default::default()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = get_client()?;
    let account = funded_account(&client, "ACH demo", 50_000).await?;

    // 1. Outbound transfer held for approval, then approved and submitted.
    let held = client
        .ach_transfers()
        .with_options(RequestOptions::new().idempotency_key(format!("{}-vendor-1", account.id)))
        .create(&AchTransferCreateParams {
            require_approval: Some(true),
            ..vendor_payment(&account.id, 12_000)
        })
        .await?;
    println!("{} is {}", held.id, held.status);
    let approved = client.ach_transfers().approve(&held.id).await?;
    println!("{} is {}", approved.id, approved.status);
    let submitted = client.simulations().ach_transfers().submit(&held.id).await?;
    println!(
        "{} is {} (trace {:?})",
        submitted.id,
        submitted.status,
        submitted.submission.as_ref().map(|s| s.trace_number.as_str())
    );

    // 2. The receiving bank returns it.
    let returned = client
        .simulations()
        .ach_transfers()
        .return_transfer(&held.id, &AchTransferReturnSimulateParams::default())
        .await?;
    println!("{} is {}", returned.id, returned.status);

    // 3. A second transfer is canceled before approval.
    let second = client
        .ach_transfers()
        .create(&AchTransferCreateParams {
            require_approval: Some(true),
            ..vendor_payment(&account.id, 3_000)
        })
        .await?;
    let canceled = client.ach_transfers().cancel(&second.id).await?;
    println!("{} is {}", canceled.id, canceled.status);

    // 4. Invalid parameters never leave the process.
    match client.ach_transfers().create(&vendor_payment(&account.id, 0)).await {
        Err(IncreaseError::InvalidArg(msg)) => println!("rejected locally: {msg}"),
        other => println!("unexpected: {other:?}"),
    }

    // 5. Money arrives through an account number.
    let number = client
        .account_numbers()
        .create(&AccountNumberCreateParams {
            account_id: account.id.clone(),
            name: "Receivables".into(),
            ..Default::default()
        })
        .await?;
    let inbound = client
        .simulations()
        .inbound_ach_transfers()
        .create(&InboundAchTransferSimulateParams {
            account_number_id: number.id.clone(),
            amount: 7_500,
            company_name: Some("BIG CUSTOMER".into()),
            ..Default::default()
        })
        .await?;
    println!("inbound {} is {}", inbound.id, inbound.status);

    let balance = client
        .accounts()
        .balance(&account.id, &AccountBalanceParams::default())
        .await?;
    println!(
        "balance: current {} available {}",
        dollars(balance.current_balance),
        dollars(balance.available_balance)
    );
    Ok(())
}
