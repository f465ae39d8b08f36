use increase::types::account::AccountBalanceParams;
use increase_demos::common::{dollars, get_client, open_accounts};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Build a client (in-memory sandbox unless INCREASE_API_KEY is set).
    let client = get_client()?;

    // 2. Fetch the first page of open accounts.
    let page = client.accounts().list(&open_accounts(10)).await?;
    println!("{} open account(s) on this page", page.data.len());

    // 3. Show each account with its balance.
    for account in &page.data {
        let balance = client
            .accounts()
            .balance(&account.id, &AccountBalanceParams::default())
            .await?;
        println!(
            "{:<32} {:<20} current {:>12} available {:>12}",
            account.id,
            account.name,
            dollars(balance.current_balance),
            dollars(balance.available_balance),
        );
    }

    if page.has_next_page() {
        println!("more accounts follow (cursor {:?})", page.next_cursor);
    }
    Ok(())
}
