use std::time::Duration;

use increase::types::account::AccountBalanceParams;
use increase::{QuotaConfig, QuotaMiddleware, TraceMiddleware};
use increase_demos::common::{client_builder, open_accounts};
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,increase=trace,increase_core=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    // Log every attempt and cap the demo at 50 requests a minute.
    let trace = TraceMiddleware::new();
    let stats = trace.stats();
    let client = client_builder()
        .with_middleware(Box::new(trace))
        .with_middleware(Box::new(QuotaMiddleware::new(QuotaConfig {
            limit: 50,
            window: Duration::from_secs(60),
        })))
        .build()?;

    let page = client.accounts().list(&open_accounts(5)).await?;
    for account in &page.data {
        let _ = client
            .accounts()
            .balance(&account.id, &AccountBalanceParams::default())
            .await?;
    }

    println!(
        "attempts={} error_statuses={} failures={}",
        stats.attempts(),
        stats.error_statuses(),
        stats.failures()
    );
    Ok(())
}
