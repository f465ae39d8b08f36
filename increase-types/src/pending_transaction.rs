//! Pending transactions: holds and in-flight money movement.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::card_payment::CardAuthorization;
use crate::common::{Currency, RouteType};
use crate::query::{CreatedAtFilter, InFilter, QueryWriter, ToQuery};
use crate::Extras;

string_enum! {
    /// Kind of event that produced a pending transaction.
    pub enum PendingTransactionSourceCategory {
        /// An outbound ACH transfer awaiting submission.
        AchTransferInstruction => "ach_transfer_instruction",
        /// A card authorization hold.
        CardAuthorization => "card_authorization",
        /// An inbound funds hold.
        InboundFundsHold => "inbound_funds_hold",
        /// A category this version does not model.
        Other => "other",
    }
}

string_enum! {
    /// Whether a pending transaction still holds funds.
    pub enum PendingTransactionStatus {
        /// Still holding funds.
        Pending => "pending",
        /// Released or converted into a transaction.
        Complete => "complete",
    }
}

string_enum! {
    /// Object discriminator for pending transactions.
    pub enum PendingTransactionType {
        /// Always `pending_transaction`.
        PendingTransaction => "pending_transaction",
    }
}

impl_query_value!(PendingTransactionSourceCategory, PendingTransactionStatus);

/// An outbound ACH transfer holding funds until submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchTransferInstruction {
    /// Held amount.
    pub amount: i64,
    /// The transfer.
    pub transfer_id: String,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// What produced a pending transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingTransactionSource {
    /// Which member is set.
    pub category: PendingTransactionSourceCategory,
    /// Set for `ach_transfer_instruction`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ach_transfer_instruction: Option<AchTransferInstruction>,
    /// Set for `card_authorization`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_authorization: Option<CardAuthorization>,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// Money that will move once the underlying event completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingTransaction {
    /// Pending transaction identifier.
    pub id: String,
    /// Account the funds are held in.
    pub account_id: String,
    /// Held amount; negative for debits.
    pub amount: i64,
    /// When the hold was released or converted.
    pub completed_at: Option<DateTime<Utc>>,
    /// When the hold was placed.
    pub created_at: DateTime<Utc>,
    /// Currency of `amount`.
    pub currency: Currency,
    /// Statement description.
    pub description: String,
    /// Account number or card the money moves through.
    pub route_id: Option<String>,
    /// Kind of `route_id`.
    pub route_type: Option<RouteType>,
    /// What produced the hold.
    pub source: PendingTransactionSource,
    /// Whether funds are still held.
    pub status: PendingTransactionStatus,
    /// Object discriminator.
    #[serde(rename = "type")]
    pub kind: PendingTransactionType,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// Query of `GET /pending_transactions`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingTransactionListParams {
    /// Filter to one account.
    pub account_id: Option<String>,
    /// Filter by source category.
    pub category: Option<InFilter<PendingTransactionSourceCategory>>,
    /// Creation time range.
    pub created_at: Option<CreatedAtFilter>,
    /// Pagination cursor.
    pub cursor: Option<String>,
    /// Page size, 1 to 100.
    pub limit: Option<u32>,
    /// Filter to one route.
    pub route_id: Option<String>,
    /// Filter by status.
    pub status: Option<InFilter<PendingTransactionStatus>>,
}

impl ToQuery for PendingTransactionListParams {
    fn write_query(&self, w: &mut QueryWriter) {
        w.push_opt("account_id", self.account_id.as_ref())
            .nested("category", self.category.as_ref())
            .nested("created_at", self.created_at.as_ref())
            .push_opt("cursor", self.cursor.as_ref())
            .push_opt("limit", self.limit.as_ref())
            .push_opt("route_id", self.route_id.as_ref())
            .nested("status", self.status.as_ref());
    }
}

impl_cursor_params!(PendingTransactionListParams);
