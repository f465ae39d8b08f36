//! increase-core
//!
//! Runtime shared by every service of the Increase client.
//!
//! - `transport`: the `Transport` trait and the reqwest-backed implementation.
//! - `request`: the executor that layers options, sets headers, retries, and
//!   decodes responses.
//! - `retry`: retry classification and backoff delays.
//! - `middleware`: the `Middleware` trait that wraps transports.
//! - `pagination`: cursor-walking item streams.
//!
//! Async runtime (Tokio)
//! ---------------------
//! Per-attempt timeouts and retry delays use `tokio::time`, so requests must be
//! driven by a Tokio 1.x runtime. Dropping a request future cancels the
//! in-flight HTTP call.
#![warn(missing_docs)]

/// Middleware trait implemented by transport wrappers.
pub mod middleware;
/// Per-call option layering.
pub mod options;
/// Cursor pagination streams.
pub mod pagination;
/// Request executor.
pub mod request;
/// Retry policy.
pub mod retry;
/// HTTP transport abstraction.
pub mod transport;

pub use middleware::{Middleware, MiddlewareDescriptor};
pub use options::RequestOptions;
pub use pagination::{check_limit, paginate};
pub use request::Requester;
pub use transport::{HttpRequest, HttpResponse, Method, ReqwestTransport, RequestPath, Transport};

pub use increase_types as types;
pub use increase_types::{IncreaseError, Result};
