//! Declined transactions: attempts to move money that were refused.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::card_payment::CardDecline;
use crate::common::{Currency, RouteType};
use crate::query::{CreatedAtFilter, InFilter, QueryWriter, ToQuery};
use crate::Extras;

string_enum! {
    /// Kind of event that was declined.
    pub enum DeclinedTransactionSourceCategory {
        /// An inbound ACH transfer.
        AchDecline => "ach_decline",
        /// A card authorization.
        CardDecline => "card_decline",
        /// A deposited check.
        CheckDecline => "check_decline",
        /// A category this version does not model.
        Other => "other",
    }
}

string_enum! {
    /// Why an inbound ACH transfer was declined.
    pub enum AchDeclineReason {
        /// The account number was canceled.
        AchRouteCanceled => "ach_route_canceled",
        /// The account number was disabled.
        AchRouteDisabled => "ach_route_disabled",
        /// The debit would overdraw the account.
        InsufficientFunds => "insufficient_funds",
        /// Debits are blocked on the account number.
        BreachesLimit => "breaches_limit",
        /// The entity was not active.
        EntityNotActive => "entity_not_active",
        /// The account was closed.
        GroupLocked => "group_locked",
        /// The originator is not authorized.
        TransactionNotAllowed => "transaction_not_allowed",
        /// The receiving user asked for a return.
        UserInitiated => "user_initiated",
    }
}

string_enum! {
    /// Object discriminator for declined transactions.
    pub enum DeclinedTransactionType {
        /// Always `declined_transaction`.
        DeclinedTransaction => "declined_transaction",
    }
}

impl_query_value!(DeclinedTransactionSourceCategory);

/// A declined inbound ACH transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchDecline {
    /// Declined transfer identifier.
    pub id: String,
    /// Declined amount.
    pub amount: i64,
    /// Inbound transfer that was declined.
    pub inbound_ach_transfer_id: Option<String>,
    /// Originator company name.
    pub originator_company_name: String,
    /// Why the transfer was declined.
    pub reason: AchDeclineReason,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// A declined deposited check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckDecline {
    /// Declined amount.
    pub amount: i64,
    /// Auxiliary on-us field from the check's MICR line.
    pub auxiliary_on_us: Option<String>,
    /// Why the check was declined.
    pub reason: String,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// What was declined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclinedTransactionSource {
    /// Which member is set.
    pub category: DeclinedTransactionSourceCategory,
    /// Set for `ach_decline`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ach_decline: Option<AchDecline>,
    /// Set for `card_decline`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_decline: Option<CardDecline>,
    /// Set for `check_decline`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_decline: Option<CheckDecline>,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// A refused attempt to move money.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclinedTransaction {
    /// Declined transaction identifier.
    pub id: String,
    /// Account the attempt targeted.
    pub account_id: String,
    /// Attempted amount.
    pub amount: i64,
    /// When the attempt happened.
    pub created_at: DateTime<Utc>,
    /// Currency of `amount`.
    pub currency: Currency,
    /// Statement description.
    pub description: String,
    /// Account number or card the attempt targeted.
    pub route_id: Option<String>,
    /// Kind of `route_id`.
    pub route_type: Option<RouteType>,
    /// What was declined.
    pub source: DeclinedTransactionSource,
    /// Object discriminator.
    #[serde(rename = "type")]
    pub kind: DeclinedTransactionType,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// Query of `GET /declined_transactions`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclinedTransactionListParams {
    /// Filter to one account.
    pub account_id: Option<String>,
    /// Filter by source category.
    pub category: Option<InFilter<DeclinedTransactionSourceCategory>>,
    /// Creation time range.
    pub created_at: Option<CreatedAtFilter>,
    /// Pagination cursor.
    pub cursor: Option<String>,
    /// Page size, 1 to 100.
    pub limit: Option<u32>,
    /// Filter to one route.
    pub route_id: Option<String>,
}

impl ToQuery for DeclinedTransactionListParams {
    fn write_query(&self, w: &mut QueryWriter) {
        w.push_opt("account_id", self.account_id.as_ref())
            .nested("category", self.category.as_ref())
            .nested("created_at", self.created_at.as_ref())
            .push_opt("cursor", self.cursor.as_ref())
            .push_opt("limit", self.limit.as_ref())
            .push_opt("route_id", self.route_id.as_ref());
    }
}

impl_cursor_params!(DeclinedTransactionListParams);
