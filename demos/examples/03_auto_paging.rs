use futures::{StreamExt, TryStreamExt};
use increase::types::transaction::TransactionListParams;
use increase_demos::common::{dollars, funded_account, get_client, pay_interest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = get_client()?;

    // Five interest payments give the account five settled transactions.
    let account = funded_account(&client, "Paging demo", 100).await?;
    for cents in [200, 300, 400, 500] {
        pay_interest(&client, &account.id, cents).await?;
    }

    // Two per page: the stream follows `next_cursor` as it is polled.
    let params = TransactionListParams {
        account_id: Some(account.id.clone()),
        limit: Some(2),
        ..Default::default()
    };
    let mut stream = client.transactions().list_auto_paging(params.clone());
    while let Some(tx) = stream.next().await {
        let tx = tx?;
        println!("{} {:>10} {}", tx.id, dollars(tx.amount), tx.description);
    }

    // Or collect straight into a Vec; the first failed page ends the stream.
    let all: Vec<_> = client
        .transactions()
        .list_auto_paging(params)
        .try_collect()
        .await?;
    let total: i64 = all.iter().map(|tx| tx.amount).sum();
    println!("{} transactions totalling {}", all.len(), dollars(total));

    Ok(())
}
