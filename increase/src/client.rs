use std::sync::Arc;
use std::time::Duration;

use increase_core::{
    HttpRequest, IncreaseError, Middleware, MiddlewareDescriptor, RequestOptions, Requester,
    ReqwestTransport, Result, Transport,
};
use increase_types::{BackoffConfig, ClientConfig, Environment};
use serde::de::DeserializeOwned;

use crate::services::{
    AccountNumbers, Accounts, AchTransfers, CardPayments, Cards, DeclinedTransactions, Entities,
    PendingTransactions, Simulations, Transactions,
};

/// Environment variable holding the API key read by [`Client::from_env`].
pub const API_KEY_ENV: &str = "INCREASE_API_KEY";
/// Environment variable holding an optional base URL override.
pub const BASE_URL_ENV: &str = "INCREASE_BASE_URL";

/// Handle to the Increase API.
///
/// Cloning is cheap: clones share the transport, the middleware stack and the
/// configuration.
#[derive(Clone)]
pub struct Client {
    requester: Arc<Requester>,
}

/// Builder for [`Client`].
pub struct ClientBuilder {
    cfg: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
    http_client: Option<reqwest::Client>,
    middleware: Vec<Box<dyn Middleware>>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    /// Builder with default configuration: production environment, 60 second
    /// timeout, two retries.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cfg: ClientConfig::default(),
            transport: None,
            http_client: None,
            middleware: Vec::new(),
        }
    }

    /// Bearer token used for every request.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.cfg.api_key = Some(key.into());
        self
    }

    /// Hosted environment. Ignored when [`ClientBuilder::base_url`] is set.
    #[must_use]
    pub const fn environment(mut self, environment: Environment) -> Self {
        self.cfg.environment = environment;
        self
    }

    /// Send requests to `url` instead of the environment's host.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.cfg.base_url = Some(url.into());
        self
    }

    /// Bound each attempt by `timeout`.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.cfg.timeout = timeout;
        self
    }

    /// Retry at most `n` times after the first attempt.
    #[must_use]
    pub const fn max_retries(mut self, n: u32) -> Self {
        self.cfg.max_retries = n;
        self
    }

    /// Delay schedule between retries.
    #[must_use]
    pub const fn backoff(mut self, backoff: BackoffConfig) -> Self {
        self.cfg.backoff = backoff;
        self
    }

    /// Send `name: value` with every request.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cfg.default_headers.insert(name.into(), value.into());
        self
    }

    /// Wrap the transport in `middleware`.
    ///
    /// The first registered middleware is the outermost wrapper.
    #[must_use]
    pub fn with_middleware(mut self, middleware: Box<dyn Middleware>) -> Self {
        self.middleware.push(middleware);
        self
    }

    /// Use a custom transport instead of reqwest.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use a preconfigured `reqwest::Client` (proxies, TLS roots, pools).
    ///
    /// Ignored when a custom transport is set.
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Apply `INCREASE_API_KEY` and `INCREASE_BASE_URL` from the process
    /// environment, when set.
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_env_lookup(|name| std::env::var(name).ok())
    }

    /// Apply environment settings resolved through `lookup`.
    #[must_use]
    pub fn with_env_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV).filter(|v| !v.trim().is_empty()) {
            self.cfg.api_key = Some(key);
        }
        if let Some(url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.cfg.base_url = Some(url);
        }
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// Returns `Config` when no API key is set or the base URL is not an
    /// absolute http(s) URL.
    pub fn build(self) -> Result<Client> {
        if self
            .cfg
            .api_key
            .as_deref()
            .is_none_or(|k| k.trim().is_empty())
        {
            return Err(IncreaseError::Config(format!(
                "no API key configured; call ClientBuilder::api_key or set {API_KEY_ENV}"
            )));
        }
        validate_base_url(self.cfg.effective_base_url())?;

        let transport: Arc<dyn Transport> = match (self.transport, self.http_client) {
            (Some(t), _) => t,
            (None, Some(http)) => Arc::new(ReqwestTransport::with_client(http)),
            (None, None) => Arc::new(ReqwestTransport::new()),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            base_url = self.cfg.effective_base_url(),
            transport = transport.name(),
            middleware = self.middleware.len(),
            "building increase client"
        );

        Ok(Client {
            requester: Arc::new(Requester::with_middleware(
                transport,
                self.middleware,
                self.cfg,
            )),
        })
    }
}

fn validate_base_url(raw: &str) -> Result<()> {
    let parsed = url::Url::parse(raw)
        .map_err(|e| IncreaseError::Config(format!("invalid base URL `{raw}`: {e}")))?;
    match parsed.scheme() {
        "http" | "https" if parsed.has_host() => Ok(()),
        _ => Err(IncreaseError::Config(format!(
            "base URL `{raw}` must be an absolute http(s) URL"
        ))),
    }
}

impl Client {
    /// Start building a client.
    ///
    /// ```rust,ignore
    /// use increase::{Client, Environment};
    ///
    /// let client = Client::builder()
    ///     .api_key("sandbox_key")
    ///     .environment(Environment::Sandbox)
    ///     .max_retries(3)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Client configured from `INCREASE_API_KEY` and `INCREASE_BASE_URL`.
    ///
    /// # Errors
    /// Returns `Config` when `INCREASE_API_KEY` is unset or the base URL is
    /// invalid.
    pub fn from_env() -> Result<Self> {
        ClientBuilder::new().with_env().build()
    }

    /// Client-wide configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        self.requester.config()
    }

    /// Applied middleware, outermost first.
    #[must_use]
    pub fn middleware(&self) -> &[MiddlewareDescriptor] {
        self.requester.middleware()
    }

    /// Execute an arbitrary request and decode the 2xx body as `T`.
    ///
    /// Applies the same headers, retries and error decoding as the typed
    /// services; use it for endpoints this crate does not model.
    ///
    /// # Errors
    /// Returns `Api` for non-2xx responses, `Decode` when the body does not
    /// match `T`, and `Transport` or `Timeout` once retries are spent.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        req: HttpRequest,
        opts: &RequestOptions,
    ) -> Result<T> {
        self.requester.execute(req, opts).await
    }

    /// Accounts.
    #[must_use]
    pub fn accounts(&self) -> Accounts<'_> {
        Accounts::new(self)
    }

    /// Account numbers.
    #[must_use]
    pub fn account_numbers(&self) -> AccountNumbers<'_> {
        AccountNumbers::new(self)
    }

    /// Cards.
    #[must_use]
    pub fn cards(&self) -> Cards<'_> {
        Cards::new(self)
    }

    /// Card payments.
    #[must_use]
    pub fn card_payments(&self) -> CardPayments<'_> {
        CardPayments::new(self)
    }

    /// Entities.
    #[must_use]
    pub fn entities(&self) -> Entities<'_> {
        Entities::new(self)
    }

    /// Settled transactions.
    #[must_use]
    pub fn transactions(&self) -> Transactions<'_> {
        Transactions::new(self)
    }

    /// Pending transactions.
    #[must_use]
    pub fn pending_transactions(&self) -> PendingTransactions<'_> {
        PendingTransactions::new(self)
    }

    /// Declined transactions.
    #[must_use]
    pub fn declined_transactions(&self) -> DeclinedTransactions<'_> {
        DeclinedTransactions::new(self)
    }

    /// ACH transfers.
    #[must_use]
    pub fn ach_transfers(&self) -> AchTransfers<'_> {
        AchTransfers::new(self)
    }

    /// Sandbox simulations.
    #[must_use]
    pub fn simulations(&self) -> Simulations<'_> {
        Simulations::new(self)
    }
}

impl core::fmt::Debug for Client {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Client")
            .field("config", self.config())
            .field("transport", &self.requester.transport().name())
            .finish_non_exhaustive()
    }
}
