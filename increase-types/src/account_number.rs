//! Account numbers: routable identifiers attached to an account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::query::{CreatedAtFilter, InFilter, QueryWriter, ToQuery};
use crate::Extras;

string_enum! {
    /// Lifecycle status of an account number.
    pub enum AccountNumberStatus {
        /// Accepting transfers.
        Active => "active",
        /// Temporarily rejecting transfers.
        Disabled => "disabled",
        /// Permanently rejecting transfers.
        Canceled => "canceled",
    }
}

string_enum! {
    /// Whether inbound ACH debits are accepted.
    pub enum InboundAchDebitStatus {
        /// Debits are accepted.
        Allowed => "allowed",
        /// Debits are declined.
        Blocked => "blocked",
    }
}

string_enum! {
    /// Whether inbound checks are accepted.
    pub enum InboundChecksStatus {
        /// Any check is accepted.
        Allowed => "allowed",
        /// Only checks written via Increase check transfers are accepted.
        CheckTransfersOnly => "check_transfers_only",
    }
}

string_enum! {
    /// Object discriminator for account numbers.
    pub enum AccountNumberType {
        /// Always `account_number`.
        AccountNumber => "account_number",
    }
}

impl_query_value!(AccountNumberStatus, InboundAchDebitStatus);

/// Inbound ACH settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundAch {
    /// Debit acceptance.
    pub debit_status: InboundAchDebitStatus,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// Inbound check settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundChecks {
    /// Check acceptance.
    pub status: InboundChecksStatus,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// A routable account number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountNumber {
    /// Account number identifier.
    pub id: String,
    /// Account the number routes to.
    pub account_id: String,
    /// The account number itself.
    pub account_number: String,
    /// American Bankers' Association routing number.
    pub routing_number: String,
    /// When the number was created.
    pub created_at: DateTime<Utc>,
    /// Idempotency key used at creation.
    pub idempotency_key: Option<String>,
    /// Inbound ACH settings.
    pub inbound_ach: Option<InboundAch>,
    /// Inbound check settings.
    pub inbound_checks: Option<InboundChecks>,
    /// Display name.
    pub name: String,
    /// Lifecycle status.
    pub status: AccountNumberStatus,
    /// Object discriminator.
    #[serde(rename = "type")]
    pub kind: AccountNumberType,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// Body of `POST /account_numbers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountNumberCreateParams {
    /// Account the number routes to.
    pub account_id: String,
    /// Display name.
    pub name: String,
    /// Inbound ACH settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbound_ach: Option<InboundAch>,
    /// Inbound check settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbound_checks: Option<InboundChecks>,
}

/// Body of `PATCH /account_numbers/{account_number_id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountNumberUpdateParams {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AccountNumberStatus>,
    /// Inbound ACH settings; `Null` resets to the default.
    #[serde(default, skip_serializing_if = "Field::is_omitted")]
    pub inbound_ach: Field<InboundAch>,
    /// Inbound check settings; `Null` resets to the default.
    #[serde(default, skip_serializing_if = "Field::is_omitted")]
    pub inbound_checks: Field<InboundChecks>,
}

/// Query of `GET /account_numbers`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountNumberListParams {
    /// Filter to one account.
    pub account_id: Option<String>,
    /// Filter by inbound ACH debit status.
    pub ach_debit_status: Option<InFilter<InboundAchDebitStatus>>,
    /// Creation time range.
    pub created_at: Option<CreatedAtFilter>,
    /// Pagination cursor.
    pub cursor: Option<String>,
    /// Filter by idempotency key.
    pub idempotency_key: Option<String>,
    /// Page size, 1 to 100.
    pub limit: Option<u32>,
    /// Filter by status.
    pub status: Option<InFilter<AccountNumberStatus>>,
}

impl ToQuery for AccountNumberListParams {
    fn write_query(&self, w: &mut QueryWriter) {
        w.push_opt("account_id", self.account_id.as_ref())
            .nested("ach_debit_status", self.ach_debit_status.as_ref())
            .nested("created_at", self.created_at.as_ref())
            .push_opt("cursor", self.cursor.as_ref())
            .push_opt("idempotency_key", self.idempotency_key.as_ref())
            .push_opt("limit", self.limit.as_ref())
            .nested("status", self.status.as_ref());
    }
}

impl_cursor_params!(AccountNumberListParams);
