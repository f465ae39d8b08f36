//! Accounts and balance lookups.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::common::Currency;
use crate::query::{CreatedAtFilter, InFilter, QueryWriter, ToQuery};
use crate::Extras;

string_enum! {
    /// Partner bank holding the account's funds.
    pub enum AccountBank {
        /// Blue Ridge Bank, N.A.
        BlueRidgeBank => "blue_ridge_bank",
        /// Core Bank.
        CoreBank => "core_bank",
        /// First Internet Bank of Indiana.
        FirstInternetBank => "first_internet_bank",
        /// Grasshopper Bank.
        GrasshopperBank => "grasshopper_bank",
    }
}

string_enum! {
    /// Lifecycle status of an account.
    pub enum AccountStatus {
        /// Open; money can move.
        Open => "open",
        /// Closed; no further activity.
        Closed => "closed",
    }
}

string_enum! {
    /// Object discriminator for accounts.
    pub enum AccountType {
        /// Always `account`.
        Account => "account",
    }
}

string_enum! {
    /// Object discriminator for balance lookups.
    pub enum BalanceLookupType {
        /// Always `balance_lookup`.
        BalanceLookup => "balance_lookup",
    }
}

impl_query_value!(AccountStatus);

/// A deposit account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Account identifier.
    pub id: String,
    /// Partner bank.
    pub bank: AccountBank,
    /// When the account was closed.
    pub closed_at: Option<DateTime<Utc>>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// Currency of the account.
    pub currency: Currency,
    /// Owning entity.
    pub entity_id: Option<String>,
    /// Idempotency key used at creation.
    pub idempotency_key: Option<String>,
    /// Entity that is informationally associated with the account.
    pub informational_entity_id: Option<String>,
    /// Interest accrued but not yet paid, as a decimal string.
    pub interest_accrued: String,
    /// Date through which interest has accrued.
    pub interest_accrued_at: Option<NaiveDate>,
    /// Current annual interest rate, as a decimal string.
    pub interest_rate: String,
    /// Display name.
    pub name: String,
    /// Program the account belongs to.
    pub program_id: String,
    /// Lifecycle status.
    pub status: AccountStatus,
    /// Object discriminator.
    #[serde(rename = "type")]
    pub kind: AccountType,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// Current and available balance of an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceLookup {
    /// Account identifier.
    pub account_id: String,
    /// Balance minus pending holds, in the minor unit of the currency.
    pub available_balance: i64,
    /// Settled balance, in the minor unit of the currency.
    pub current_balance: i64,
    /// Object discriminator.
    #[serde(rename = "type")]
    pub kind: BalanceLookupType,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// Body of `POST /accounts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountCreateParams {
    /// Display name.
    pub name: String,
    /// Owning entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    /// Informational entity (for trusts and similar structures).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub informational_entity_id: Option<String>,
    /// Program to open the account in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_id: Option<String>,
}

impl AccountCreateParams {
    /// Minimal params: just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Body of `PATCH /accounts/{account_id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountUpdateParams {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Query of `GET /accounts`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountListParams {
    /// Creation time range.
    pub created_at: Option<CreatedAtFilter>,
    /// Pagination cursor.
    pub cursor: Option<String>,
    /// Filter to one owning entity.
    pub entity_id: Option<String>,
    /// Filter by idempotency key.
    pub idempotency_key: Option<String>,
    /// Filter to one informational entity.
    pub informational_entity_id: Option<String>,
    /// Page size, 1 to 100.
    pub limit: Option<u32>,
    /// Filter to one program.
    pub program_id: Option<String>,
    /// Filter by status.
    pub status: Option<InFilter<AccountStatus>>,
}

impl ToQuery for AccountListParams {
    fn write_query(&self, w: &mut QueryWriter) {
        w.nested("created_at", self.created_at.as_ref())
            .push_opt("cursor", self.cursor.as_ref())
            .push_opt("entity_id", self.entity_id.as_ref())
            .push_opt("idempotency_key", self.idempotency_key.as_ref())
            .push_opt(
                "informational_entity_id",
                self.informational_entity_id.as_ref(),
            )
            .push_opt("limit", self.limit.as_ref())
            .push_opt("program_id", self.program_id.as_ref())
            .nested("status", self.status.as_ref());
    }
}

/// Query of `GET /accounts/{account_id}/balance`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountBalanceParams {
    /// Look up the balance as of this instant instead of now.
    pub at_time: Option<DateTime<Utc>>,
}

impl ToQuery for AccountBalanceParams {
    fn write_query(&self, w: &mut QueryWriter) {
        w.push_opt("at_time", self.at_time.as_ref());
    }
}

impl_cursor_params!(AccountListParams);
