//! Settled transactions.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::card_payment::{CardRefund, CardSettlement};
use crate::common::{Currency, RouteType};
use crate::query::{CreatedAtFilter, InFilter, QueryWriter, ToQuery};
use crate::Extras;

string_enum! {
    /// Kind of event that produced a transaction.
    pub enum TransactionSourceCategory {
        /// Intrafi or account transfer in.
        AccountTransferIntention => "account_transfer_intention",
        /// An outbound ACH transfer was submitted.
        AchTransferIntention => "ach_transfer_intention",
        /// An outbound ACH transfer was rejected before submission.
        AchTransferRejection => "ach_transfer_rejection",
        /// An outbound ACH transfer was returned.
        AchTransferReturn => "ach_transfer_return",
        /// A card refund.
        CardRefund => "card_refund",
        /// A card settlement.
        CardSettlement => "card_settlement",
        /// A card revenue payment.
        CardRevenuePayment => "card_revenue_payment",
        /// Fee charged by Increase.
        FeePayment => "fee_payment",
        /// An inbound ACH transfer.
        InboundAchTransfer => "inbound_ach_transfer",
        /// Interest paid into the account.
        InterestPayment => "interest_payment",
        /// Internal bookkeeping.
        InternalSource => "internal_source",
        /// A category this version does not model.
        Other => "other",
    }
}

string_enum! {
    /// Object discriminator for transactions.
    pub enum TransactionType {
        /// Always `transaction`.
        Transaction => "transaction",
    }
}

impl_query_value!(TransactionSourceCategory);

/// An outbound ACH transfer was submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchTransferIntention {
    /// Destination account number.
    pub account_number: String,
    /// Transfer amount.
    pub amount: i64,
    /// Destination routing number.
    pub routing_number: String,
    /// Statement descriptor.
    pub statement_descriptor: String,
    /// The transfer.
    pub transfer_id: String,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// An outbound ACH transfer was rejected before it left.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchTransferRejection {
    /// The transfer.
    pub transfer_id: String,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// An outbound ACH transfer was returned by the receiving bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchTransferReturn {
    /// When the return was created.
    pub created_at: DateTime<Utc>,
    /// NACHA return reason code.
    pub return_reason_code: String,
    /// The transaction recording the return.
    pub transaction_id: String,
    /// The returned transfer.
    pub transfer_id: String,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// An inbound ACH transfer credited or debited the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundAchTransferSource {
    /// Transfer amount; negative for debits.
    pub amount: i64,
    /// Originator company name.
    pub originator_company_name: String,
    /// Originator company description.
    pub originator_company_entry_description: String,
    /// The inbound transfer.
    pub transfer_id: String,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// Interest paid into the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestPayment {
    /// Account that accrued the interest.
    pub accrued_on_account_id: String,
    /// Paid amount.
    pub amount: i64,
    /// Currency of `amount`.
    pub currency: Currency,
    /// End of the accrual period.
    pub period_end: DateTime<Utc>,
    /// Start of the accrual period.
    pub period_start: DateTime<Utc>,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// A fee charged by Increase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeePayment {
    /// Fee amount.
    pub amount: i64,
    /// Currency of `amount`.
    pub currency: Currency,
    /// Start of the billing period.
    pub fee_period_start: NaiveDate,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// What produced a transaction.
///
/// Exactly one member matching `category` is set. Categories this version does
/// not model remain available in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionSource {
    /// Which member is set.
    pub category: TransactionSourceCategory,
    /// Set for `ach_transfer_intention`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ach_transfer_intention: Option<AchTransferIntention>,
    /// Set for `ach_transfer_rejection`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ach_transfer_rejection: Option<AchTransferRejection>,
    /// Set for `ach_transfer_return`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ach_transfer_return: Option<AchTransferReturn>,
    /// Set for `card_refund`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_refund: Option<CardRefund>,
    /// Set for `card_settlement`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_settlement: Option<CardSettlement>,
    /// Set for `fee_payment`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_payment: Option<FeePayment>,
    /// Set for `inbound_ach_transfer`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inbound_ach_transfer: Option<InboundAchTransferSource>,
    /// Set for `interest_payment`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_payment: Option<InterestPayment>,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// Money that moved into or out of an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction identifier.
    pub id: String,
    /// Account the money moved in.
    pub account_id: String,
    /// Amount in the minor unit of `currency`; negative for debits.
    pub amount: i64,
    /// When the transaction happened.
    pub created_at: DateTime<Utc>,
    /// Currency of `amount`.
    pub currency: Currency,
    /// Statement description.
    pub description: String,
    /// Account number or card the money moved through.
    pub route_id: Option<String>,
    /// Kind of `route_id`.
    pub route_type: Option<RouteType>,
    /// What produced the transaction.
    pub source: TransactionSource,
    /// Object discriminator.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// Query of `GET /transactions`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionListParams {
    /// Filter to one account.
    pub account_id: Option<String>,
    /// Filter by source category.
    pub category: Option<InFilter<TransactionSourceCategory>>,
    /// Creation time range.
    pub created_at: Option<CreatedAtFilter>,
    /// Pagination cursor.
    pub cursor: Option<String>,
    /// Page size, 1 to 100.
    pub limit: Option<u32>,
    /// Filter to one route.
    pub route_id: Option<String>,
}

impl ToQuery for TransactionListParams {
    fn write_query(&self, w: &mut QueryWriter) {
        w.push_opt("account_id", self.account_id.as_ref())
            .nested("category", self.category.as_ref())
            .nested("created_at", self.created_at.as_ref())
            .push_opt("cursor", self.cursor.as_ref())
            .push_opt("limit", self.limit.as_ref())
            .push_opt("route_id", self.route_id.as_ref());
    }
}

impl_cursor_params!(TransactionListParams);
