//! Middleware trait for wrapping `Transport` implementations.

use std::sync::Arc;

use serde::Serialize;

use crate::transport::Transport;

/// Trait implemented by transport middleware layers.
///
/// A middleware consumes an inner `Transport` and returns a wrapped transport
/// that augments or restricts behavior (e.g., quotas, tracing). The wrapper sees
/// every attempt, including retries.
pub trait Middleware: Send + Sync {
    /// Apply this middleware to wrap an inner transport and return the wrapped transport.
    fn apply(self: Box<Self>, inner: Arc<dyn Transport>) -> Arc<dyn Transport>;

    /// Human-readable middleware name for introspection/logging.
    fn name(&self) -> &'static str;

    /// Opaque configuration snapshot for serialization/inspection.
    fn config_json(&self) -> serde_json::Value;
}

/// Introspection record of an applied middleware.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MiddlewareDescriptor {
    /// Middleware name.
    pub name: &'static str,
    /// Configuration snapshot.
    pub config: serde_json::Value,
}

/// Wrap `transport` in `stack`, first entry outermost.
///
/// Returns the wrapped transport and a descriptor per layer, outermost first.
#[must_use]
pub fn apply_stack(
    transport: Arc<dyn Transport>,
    stack: Vec<Box<dyn Middleware>>,
) -> (Arc<dyn Transport>, Vec<MiddlewareDescriptor>) {
    let descriptors = stack
        .iter()
        .map(|m| MiddlewareDescriptor {
            name: m.name(),
            config: m.config_json(),
        })
        .collect();
    let wrapped = stack
        .into_iter()
        .rev()
        .fold(transport, |inner, layer| layer.apply(inner));
    (wrapped, descriptors)
}
