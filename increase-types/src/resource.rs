use core::fmt;
use serde::{Deserialize, Serialize};

/// API resource collections, used for request paths, errors, and telemetry.
///
/// Each variant maps one-to-one to a collection endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Resource {
    /// Deposit accounts.
    Account,
    /// Account and routing numbers attached to accounts.
    AccountNumber,
    /// Debit cards.
    Card,
    /// Card payment lifecycles.
    CardPayment,
    /// Legal entities owning accounts.
    Entity,
    /// Settled transactions.
    Transaction,
    /// Holds and in-flight transactions.
    PendingTransaction,
    /// Declined attempts to move money.
    DeclinedTransaction,
    /// Outbound ACH transfers.
    AchTransfer,
    /// Inbound ACH transfers.
    InboundAchTransfer,

    /// Sandbox: card authorizations.
    SimulatedCardAuthorization,
    /// Sandbox: card settlements.
    SimulatedCardSettlement,
    /// Sandbox: card refunds.
    SimulatedCardRefund,
    /// Sandbox: outbound ACH transfer lifecycle.
    SimulatedAchTransfer,
    /// Sandbox: inbound ACH transfers.
    SimulatedInboundAchTransfer,
    /// Sandbox: interest payments.
    SimulatedInterestPayment,
}

impl Resource {
    /// Stable snake-case label for logs and errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::AccountNumber => "account_number",
            Self::Card => "card",
            Self::CardPayment => "card_payment",
            Self::Entity => "entity",
            Self::Transaction => "transaction",
            Self::PendingTransaction => "pending_transaction",
            Self::DeclinedTransaction => "declined_transaction",
            Self::AchTransfer => "ach_transfer",
            Self::InboundAchTransfer => "inbound_ach_transfer",
            Self::SimulatedCardAuthorization => "simulated_card_authorization",
            Self::SimulatedCardSettlement => "simulated_card_settlement",
            Self::SimulatedCardRefund => "simulated_card_refund",
            Self::SimulatedAchTransfer => "simulated_ach_transfer",
            Self::SimulatedInboundAchTransfer => "simulated_inbound_ach_transfer",
            Self::SimulatedInterestPayment => "simulated_interest_payment",
        }
    }

    /// Path segments of the collection endpoint.
    #[must_use]
    pub const fn segments(self) -> &'static [&'static str] {
        match self {
            Self::Account => &["accounts"],
            Self::AccountNumber => &["account_numbers"],
            Self::Card => &["cards"],
            Self::CardPayment => &["card_payments"],
            Self::Entity => &["entities"],
            Self::Transaction => &["transactions"],
            Self::PendingTransaction => &["pending_transactions"],
            Self::DeclinedTransaction => &["declined_transactions"],
            Self::AchTransfer => &["ach_transfers"],
            Self::InboundAchTransfer => &["inbound_ach_transfers"],
            Self::SimulatedCardAuthorization => &["simulations", "card_authorizations"],
            Self::SimulatedCardSettlement => &["simulations", "card_settlements"],
            Self::SimulatedCardRefund => &["simulations", "card_refunds"],
            Self::SimulatedAchTransfer => &["simulations", "ach_transfers"],
            Self::SimulatedInboundAchTransfer => &["simulations", "inbound_ach_transfers"],
            Self::SimulatedInterestPayment => &["simulations", "interest_payments"],
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
