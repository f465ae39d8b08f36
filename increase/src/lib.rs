//! Typed async client for the Increase banking API.
//!
//! Overview
//! - [`Client`] owns the configuration, the transport and the middleware stack;
//!   it is cheap to clone and safe to share across tasks.
//! - Each resource is reached through a service handle (`client.accounts()`,
//!   `client.cards()`, ...) whose methods marshal parameters, execute the
//!   request and decode a typed response.
//! - List endpoints return one [`Page`] at a time; `list_auto_paging` streams
//!   every item, following `next_cursor` lazily.
//! - Responses keep members this version does not model in `extra` maps, and
//!   enumerations decode unseen values as `Unknown`.
//!
//! Key behaviors
//! - Options layer from client configuration, through builder settings and
//!   service handles (`with_options`), down to the individual call. Later
//!   layers win; headers accumulate.
//! - Each attempt is bounded by the configured timeout. Transport failures,
//!   timeouts and 408/409/429/5xx responses are retried with exponential
//!   backoff, honoring `Retry-After` and `x-should-retry`.
//! - Non-GET requests carry an `Idempotency-Key`, generated once per call and
//!   reused across retries unless the caller supplies one.
//! - Non-2xx responses become [`IncreaseError::Api`] carrying the decoded
//!   error envelope.
//! - Dropping a returned future cancels the in-flight request.
//!
//! Examples
//! Building a sandbox client and opening an account:
//! ```rust,ignore
//! use increase::{Client, Environment};
//! use increase::types::account::AccountCreateParams;
//!
//! let client = Client::builder()
//!     .api_key(std::env::var("INCREASE_API_KEY")?)
//!     .environment(Environment::Sandbox)
//!     .build()?;
//!
//! let account = client
//!     .accounts()
//!     .create(&AccountCreateParams::new("Operating"))
//!     .await?;
//! ```
//!
//! Streaming every open card:
//! ```rust,ignore
//! use futures::TryStreamExt;
//! use increase::types::card::{CardListParams, CardStatus};
//! use increase::InFilter;
//!
//! let params = CardListParams {
//!     status: Some(InFilter::new([CardStatus::Active])),
//!     ..Default::default()
//! };
//! let cards: Vec<_> = client.cards().list_auto_paging(params).try_collect().await?;
//! ```
//!
//! Per-call options:
//! ```rust,ignore
//! use std::time::Duration;
//! use increase::RequestOptions;
//!
//! let transfer = client
//!     .ach_transfers()
//!     .with_options(
//!         RequestOptions::new()
//!             .idempotency_key("payroll-2024-06-01")
//!             .timeout(Duration::from_secs(10)),
//!     )
//!     .create(&params)
//!     .await?;
//! ```
//!
//! See `demos/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

mod client;
pub mod services;

pub use client::{API_KEY_ENV, BASE_URL_ENV, Client, ClientBuilder};
pub use services::{
    AccountNumbers, Accounts, AchTransfers, CardPayments, Cards, DeclinedTransactions, Entities,
    PendingTransactions, Simulations, Transactions,
};

pub use increase_middleware::{QuotaHandle, QuotaMiddleware, TraceMiddleware, TraceStats};

pub use increase_core::{
    HttpRequest, HttpResponse, Method, Middleware, MiddlewareDescriptor, RequestOptions,
    RequestPath, ReqwestTransport, Transport,
};

pub use increase_types as types;

// Re-export the types most calls touch
pub use increase_types::{
    Account,
    AccountNumber,
    AchTransfer,
    Address,
    AddressParams,
    ApiError,
    ApiErrorType,
    BackoffConfig,
    BalanceLookup,
    Card,
    CardAuthorizationSimulation,
    CardDetails,
    CardPayment,
    ClientConfig,
    CreatedAtFilter,
    Currency,
    DeclinedTransaction,
    Entity,
    Environment,
    Field,
    InFilter,
    InboundAchTransfer,
    IncreaseError,
    Page,
    PendingTransaction,
    QuotaConfig,
    QuotaState,
    Resource,
    Result,
    Transaction,
};
