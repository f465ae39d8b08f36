//! JSON builders for sandbox objects.
//!
//! Every builder emits the full wire shape, including explicit `null`s, so
//! responses decode the same way real API responses do.

pub mod accounts;
pub mod ach;
pub mod cards;
pub mod entities;
pub mod transactions;

use increase_types::AddressParams;
use serde_json::{Value, json};

/// Routing number assigned to sandbox account numbers.
pub const ROUTING_NUMBER: &str = "101050001";

/// Program assigned to accounts created without one.
pub const DEFAULT_PROGRAM_ID: &str = "program_i2v2os4mwza1oetokh9i";

pub(crate) fn address(p: &AddressParams) -> Value {
    json!({
        "line1": p.line1,
        "line2": p.line2,
        "city": p.city,
        "state": p.state,
        "zip": p.zip,
        "country": p.country.as_deref().unwrap_or("US"),
    })
}

pub(crate) fn sandbox_address() -> AddressParams {
    AddressParams {
        line1: "33 Liberty Street".into(),
        line2: None,
        city: "New York".into(),
        state: "NY".into(),
        zip: "10045".into(),
        country: None,
    }
}
