use increase::types::account::AccountBalanceParams;
use increase::types::card::CardCreateParams;
use increase::types::simulation::{
    CardAuthorizationSimulateParams, CardRefundSimulateParams, CardSettlementSimulateParams,
};
use increase_demos::common::{dollars, funded_account, get_client};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = get_client()?;

    // 1. An account with $100.00 and a card on it.
    let account = funded_account(&client, "Card demo", 10_000).await?;
    let card = client
        .cards()
        .create(&CardCreateParams {
            account_id: account.id.clone(),
            description: Some("Demo card".into()),
            ..Default::default()
        })
        .await?;
    println!("card {} on account {}", card.id, account.id);

    // 2. A $12.50 purchase is authorized and held.
    let auth = client
        .simulations()
        .card_authorizations()
        .create(&CardAuthorizationSimulateParams {
            amount: 1_250,
            card_id: Some(card.id.clone()),
            merchant_descriptor: Some("DEMO COFFEE".into()),
            ..Default::default()
        })
        .await?;
    let Some(hold) = auth.pending_transaction else {
        println!("authorization declined: {:?}", auth.declined_transaction);
        return Ok(());
    };
    println!("authorized {} (hold {})", dollars(hold.amount), hold.id);

    let balance = client
        .accounts()
        .balance(&account.id, &AccountBalanceParams::default())
        .await?;
    println!(
        "after hold: current {} available {}",
        dollars(balance.current_balance),
        dollars(balance.available_balance)
    );

    // 3. The merchant settles the purchase, then refunds it.
    let settled = client
        .simulations()
        .card_settlements()
        .create(&CardSettlementSimulateParams {
            card_id: card.id.clone(),
            pending_transaction_id: hold.id.clone(),
            amount: None,
        })
        .await?;
    println!("settled {} as {}", dollars(settled.amount), settled.id);

    let refund = client
        .simulations()
        .card_refunds()
        .create(&CardRefundSimulateParams {
            transaction_id: settled.id.clone(),
        })
        .await?;
    println!("refunded {} as {}", dollars(refund.amount), refund.id);

    // 4. A purchase larger than the balance is declined.
    let too_big = client
        .simulations()
        .card_authorizations()
        .create(&CardAuthorizationSimulateParams {
            amount: 1_000_000,
            card_id: Some(card.id.clone()),
            ..Default::default()
        })
        .await?;
    println!("large purchase approved: {}", too_big.is_approved());

    Ok(())
}
