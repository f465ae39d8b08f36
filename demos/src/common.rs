use std::sync::Arc;

use increase::types::account::{AccountCreateParams, AccountListParams, AccountStatus};
use increase::types::simulation::InterestPaymentSimulateParams;
use increase::{
    API_KEY_ENV, Account, Client, ClientBuilder, Environment, InFilter, Result,
    Transaction,
};

/// Set to run every demo against the in-memory sandbox.
pub const USE_MOCK_ENV: &str = "INCREASE_DEMOS_USE_MOCK";

/// Return a builder for the demos.
///
/// Points at the in-memory sandbox when `INCREASE_DEMOS_USE_MOCK` is set or
/// no API key is configured; otherwise at the hosted sandbox.
#[must_use]
pub fn client_builder() -> ClientBuilder {
    let has_key = std::env::var(API_KEY_ENV).is_ok_and(|k| !k.trim().is_empty());
    if std::env::var(USE_MOCK_ENV).is_ok() || !has_key {
        println!("--- (Using in-memory sandbox) ---");
        return Client::builder()
            .api_key("demo_key")
            .environment(Environment::Sandbox)
            .transport(Arc::new(increase_mock::MockTransport::new()));
    }
    Client::builder()
        .environment(Environment::Sandbox)
        .with_env()
}

/// Return a client for the demos.
///
/// # Errors
/// Returns `Config` when the environment holds an invalid base URL.
pub fn get_client() -> Result<Client> {
    client_builder().build()
}

/// Open a fresh account and fund it with a simulated interest payment.
///
/// # Errors
/// Propagates API errors from account creation or the simulation.
pub async fn funded_account(client: &Client, name: &str, cents: i64) -> Result<Account> {
    let account = client
        .accounts()
        .create(&AccountCreateParams::new(name))
        .await?;
    pay_interest(client, &account.id, cents).await?;
    Ok(account)
}

/// Credit `cents` to `account_id` through a simulated interest payment.
///
/// # Errors
/// Propagates API errors from the simulation.
pub async fn pay_interest(client: &Client, account_id: &str, cents: i64) -> Result<Transaction> {
    client
        .simulations()
        .interest_payments()
        .create(&InterestPaymentSimulateParams {
            account_id: account_id.to_string(),
            amount: cents,
            ..Default::default()
        })
        .await
}

/// Parameters listing only open accounts.
#[must_use]
pub fn open_accounts(limit: u32) -> AccountListParams {
    AccountListParams {
        status: Some(InFilter::new([AccountStatus::Open])),
        limit: Some(limit),
        ..Default::default()
    }
}

/// Format cents as dollars, e.g. `-1234` as `-$12.34`.
#[must_use]
pub fn dollars(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}${}.{:02}", abs / 100, abs % 100)
}
