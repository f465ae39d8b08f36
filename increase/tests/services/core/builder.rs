use std::collections::HashMap;
use std::time::Duration;

use increase::{Client, Environment, IncreaseError, API_KEY_ENV, BASE_URL_ENV};

#[test]
fn build_requires_an_api_key() {
    let err = Client::builder().build().unwrap_err();
    assert!(matches!(err, IncreaseError::Config(_)));
    assert!(err.to_string().contains(API_KEY_ENV));

    let blank = Client::builder().api_key("   ").build().unwrap_err();
    assert!(matches!(blank, IncreaseError::Config(_)));
}

#[test]
fn build_rejects_non_http_base_urls() {
    for url in ["not a url", "ftp://example.com", "mailto:ops@example.com"] {
        let err = Client::builder()
            .api_key("key")
            .base_url(url)
            .build()
            .unwrap_err();
        assert!(matches!(err, IncreaseError::Config(_)), "{url}");
    }
}

#[test]
fn defaults_target_production() {
    let client = Client::builder().api_key("key").build().unwrap();
    let cfg = client.config();
    assert_eq!(cfg.environment, Environment::Production);
    assert_eq!(cfg.effective_base_url(), "https://api.increase.com");
    assert_eq!(cfg.timeout, Duration::from_secs(60));
    assert_eq!(cfg.max_retries, 2);
}

#[test]
fn base_url_overrides_environment() {
    let client = Client::builder()
        .api_key("key")
        .environment(Environment::Sandbox)
        .base_url("http://localhost:8080")
        .timeout(Duration::from_secs(3))
        .max_retries(0)
        .header("x-team", "payments")
        .build()
        .unwrap();
    let cfg = client.config();
    assert_eq!(cfg.effective_base_url(), "http://localhost:8080");
    assert_eq!(cfg.timeout, Duration::from_secs(3));
    assert_eq!(cfg.max_retries, 0);
    assert_eq!(cfg.default_headers.get("x-team").map(String::as_str), Some("payments"));
}

#[test]
fn env_lookup_supplies_key_and_base_url() {
    let vars: HashMap<&str, &str> = HashMap::from([
        (API_KEY_ENV, "env_key"),
        (BASE_URL_ENV, "https://sandbox.increase.com"),
    ]);
    let client = Client::builder()
        .with_env_lookup(|name| vars.get(name).map(|v| (*v).to_string()))
        .build()
        .unwrap();
    assert_eq!(client.config().api_key.as_deref(), Some("env_key"));
    assert_eq!(
        client.config().effective_base_url(),
        "https://sandbox.increase.com"
    );
}

#[test]
fn empty_env_values_are_ignored() {
    let client = Client::builder()
        .api_key("explicit")
        .with_env_lookup(|_| Some(String::new()))
        .build()
        .unwrap();
    assert_eq!(client.config().api_key.as_deref(), Some("explicit"));
    assert_eq!(client.config().base_url, None);
}

#[test]
fn debug_output_redacts_the_key() {
    let client = Client::builder().api_key("sk_live_secret").build().unwrap();
    let rendered = format!("{client:?}");
    assert!(!rendered.contains("sk_live_secret"));
    assert!(rendered.contains("<redacted>"));
}

#[test]
fn clones_share_configuration() {
    let client = Client::builder()
        .api_key("key")
        .max_retries(7)
        .build()
        .unwrap();
    let clone = client.clone();
    assert_eq!(clone.config().max_retries, 7);
}
