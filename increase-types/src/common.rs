//! Enumerations and small objects shared by several resources.

use serde::{Deserialize, Serialize};

use crate::Extras;

string_enum! {
    /// ISO 4217 currency of an amount.
    pub enum Currency {
        /// Canadian Dollar.
        Cad => "CAD",
        /// Swiss Franc.
        Chf => "CHF",
        /// Euro.
        Eur => "EUR",
        /// British Pound.
        Gbp => "GBP",
        /// Japanese Yen.
        Jpy => "JPY",
        /// US Dollar.
        Usd => "USD",
    }
}

string_enum! {
    /// Kind of route a transaction moved through.
    pub enum RouteType {
        /// An account number.
        AccountNumber => "account_number",
        /// A card.
        Card => "card",
        /// A lockbox.
        Lockbox => "lockbox",
    }
}

impl_query_value!(Currency, RouteType);

/// A postal address as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// First line.
    pub line1: Option<String>,
    /// Second line.
    pub line2: Option<String>,
    /// City.
    pub city: Option<String>,
    /// Two-letter state code.
    pub state: Option<String>,
    /// ZIP or postal code.
    #[serde(alias = "postal_code")]
    pub zip: Option<String>,
    /// Two-letter country code.
    pub country: Option<String>,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// A postal address sent in request bodies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressParams {
    /// First line.
    pub line1: String,
    /// Second line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    /// City.
    pub city: String,
    /// Two-letter state code.
    pub state: String,
    /// ZIP code.
    pub zip: String,
    /// Two-letter country code; defaults to `US` server-side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}
