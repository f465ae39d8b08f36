#![doc = include_str!("../README.md")]
//! increase-middleware
//!
//! Transport wrappers for the Increase client.

mod quota;
mod trace;

pub use crate::quota::{QuotaAwareTransport, QuotaHandle, QuotaMiddleware};
pub use crate::trace::{TraceMiddleware, TraceStats, TracingTransport};
