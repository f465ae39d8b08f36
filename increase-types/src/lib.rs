//! Resource models, request parameters, error envelopes and configuration for
//! the Increase banking API.
//!
//! Response structs keep every member they do not model in an `extra` map, and
//! every enumeration has an `Unknown` variant, so new server fields and values
//! never break decoding.
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod account;
pub mod account_number;
pub mod ach_transfer;
mod api_error;
pub mod card;
pub mod card_payment;
pub mod common;
mod config;
pub mod declined_transaction;
pub mod entity;
mod error;
mod field;
mod pagination;
pub mod pending_transaction;
pub mod query;
mod resource;
pub mod simulation;
pub mod transaction;

pub use api_error::{ApiError, ApiErrorType};
pub use config::{BackoffConfig, ClientConfig, Environment, QuotaConfig, QuotaState};
pub use error::{IncreaseError, Result};
pub use field::Field;
pub use pagination::{CursorParams, MAX_PAGE_LIMIT, Page};
pub use query::{CreatedAtFilter, InFilter, QueryPair, ToQuery};
pub use resource::Resource;

pub use account::{Account, BalanceLookup};
pub use account_number::AccountNumber;
pub use ach_transfer::{AchTransfer, InboundAchTransfer};
pub use card::{Card, CardDetails};
pub use card_payment::CardPayment;
pub use common::{Address, AddressParams, Currency};
pub use declined_transaction::DeclinedTransaction;
pub use entity::Entity;
pub use pending_transaction::PendingTransaction;
pub use simulation::CardAuthorizationSimulation;
pub use transaction::Transaction;

/// JSON members a struct does not model, preserved verbatim.
pub type Extras = std::collections::BTreeMap<String, serde_json::Value>;
