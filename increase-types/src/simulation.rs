//! Sandbox simulation requests and results.
//!
//! Simulations only exist in the sandbox environment. They stand in for the
//! outside world: merchants authorizing cards, the Federal Reserve moving ACH
//! files, and interest accruing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ach_transfer::InboundAchDirection;
use crate::declined_transaction::DeclinedTransaction;
use crate::pending_transaction::PendingTransaction;
use crate::Extras;

string_enum! {
    /// Object discriminator for card authorization simulation results.
    pub enum CardAuthorizationSimulationType {
        /// Always `inbound_card_authorization_simulation_result`.
        InboundCardAuthorizationSimulationResult => "inbound_card_authorization_simulation_result",
    }
}

/// Body of `POST /simulations/card_authorizations`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardAuthorizationSimulateParams {
    /// Amount to authorize, in cents.
    pub amount: i64,
    /// Card to authorize; defaults to a card routed by the account number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_id: Option<String>,
    /// Event subscription to notify.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_subscription_id: Option<String>,
    /// Merchant acceptor identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_acceptor_id: Option<String>,
    /// Merchant category code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_category_code: Option<String>,
    /// Merchant city.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_city: Option<String>,
    /// Merchant country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_country: Option<String>,
    /// Merchant descriptor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_descriptor: Option<String>,
}

/// Result of a card authorization simulation.
///
/// Exactly one of the transactions is set: a pending transaction holding the
/// funds when approved, or a declined transaction when refused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardAuthorizationSimulation {
    /// Set when the authorization was declined.
    pub declined_transaction: Option<DeclinedTransaction>,
    /// Set when the authorization was approved.
    pub pending_transaction: Option<PendingTransaction>,
    /// Object discriminator.
    #[serde(rename = "type")]
    pub kind: CardAuthorizationSimulationType,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

impl CardAuthorizationSimulation {
    /// True when the authorization was approved.
    #[must_use]
    pub const fn is_approved(&self) -> bool {
        self.pending_transaction.is_some()
    }
}

/// Body of `POST /simulations/card_settlements`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSettlementSimulateParams {
    /// Card the authorization was made on.
    pub card_id: String,
    /// Pending transaction to settle.
    pub pending_transaction_id: String,
    /// Settle a different amount than was authorized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
}

/// Body of `POST /simulations/card_refunds`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRefundSimulateParams {
    /// Settlement transaction to refund.
    pub transaction_id: String,
}

/// Body of `POST /simulations/ach_transfers/{id}/return`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchTransferReturnSimulateParams {
    /// NACHA return reason; defaults to `no_account` server-side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Body of `POST /simulations/inbound_ach_transfers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundAchTransferSimulateParams {
    /// Receiving account number.
    pub account_number_id: String,
    /// Amount in cents; positive credits, negative debits.
    pub amount: i64,
    /// Originator company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Originator company description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_entry_description: Option<String>,
    /// Settle the transfer at this instant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_at: Option<DateTime<Utc>>,
}

impl InboundAchTransferSimulateParams {
    /// Direction implied by the sign of `amount`.
    #[must_use]
    pub const fn direction(&self) -> InboundAchDirection {
        if self.amount < 0 {
            InboundAchDirection::Debit
        } else {
            InboundAchDirection::Credit
        }
    }
}

/// Body of `POST /simulations/interest_payments`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestPaymentSimulateParams {
    /// Account to pay interest into.
    pub account_id: String,
    /// Interest amount in cents.
    pub amount: i64,
    /// End of the accrual period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_end: Option<DateTime<Utc>>,
    /// Start of the accrual period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_start: Option<DateTime<Utc>>,
}
