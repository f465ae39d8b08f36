//! Cards and their sensitive details.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{Address, AddressParams};
use crate::field::Field;
use crate::query::{CreatedAtFilter, InFilter, QueryWriter, ToQuery};
use crate::Extras;

string_enum! {
    /// Lifecycle status of a card.
    pub enum CardStatus {
        /// Authorizations are approved.
        Active => "active",
        /// Authorizations are declined until re-enabled.
        Disabled => "disabled",
        /// Permanently closed.
        Canceled => "canceled",
    }
}

string_enum! {
    /// Object discriminator for cards.
    pub enum CardType {
        /// Always `card`.
        Card => "card",
    }
}

string_enum! {
    /// Object discriminator for card details.
    pub enum CardDetailsType {
        /// Always `card_details`.
        CardDetails => "card_details",
    }
}

impl_query_value!(CardStatus);

/// Digital wallet (Apple Pay, Google Pay) provisioning settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitalWallet {
    /// Card profile used for provisioning.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digital_card_profile_id: Option<String>,
    /// Email for one-time passcodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number for one-time passcodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// A debit card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Card identifier.
    pub id: String,
    /// Account the card draws on.
    pub account_id: String,
    /// Billing address used for address verification.
    pub billing_address: Option<Address>,
    /// When the card was created.
    pub created_at: DateTime<Utc>,
    /// Free-form description.
    pub description: Option<String>,
    /// Digital wallet settings.
    pub digital_wallet: Option<DigitalWallet>,
    /// Cardholder entity, when it differs from the account owner.
    pub entity_id: Option<String>,
    /// Expiration month, 1 to 12.
    pub expiration_month: u32,
    /// Four-digit expiration year.
    pub expiration_year: u32,
    /// Idempotency key used at creation.
    pub idempotency_key: Option<String>,
    /// Last four digits of the card number.
    pub last4: String,
    /// Lifecycle status.
    pub status: CardStatus,
    /// Object discriminator.
    #[serde(rename = "type")]
    pub kind: CardType,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// Sensitive card details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardDetails {
    /// Card identifier.
    pub card_id: String,
    /// Expiration month.
    pub expiration_month: u32,
    /// Expiration year.
    pub expiration_year: u32,
    /// Full card number.
    pub primary_account_number: String,
    /// Card verification code (CVV2).
    pub verification_code: String,
    /// Object discriminator.
    #[serde(rename = "type")]
    pub kind: CardDetailsType,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// Body of `POST /cards`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCreateParams {
    /// Account the card draws on.
    pub account_id: String,
    /// Billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<AddressParams>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Digital wallet settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digital_wallet: Option<DigitalWallet>,
    /// Cardholder entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
}

/// Body of `PATCH /cards/{card_id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardUpdateParams {
    /// New billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<AddressParams>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New digital wallet settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digital_wallet: Option<DigitalWallet>,
    /// Cardholder entity; `Null` reverts to the account owner.
    #[serde(default, skip_serializing_if = "Field::is_omitted")]
    pub entity_id: Field<String>,
    /// New status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CardStatus>,
}

/// Query of `GET /cards`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardListParams {
    /// Filter to one account.
    pub account_id: Option<String>,
    /// Creation time range.
    pub created_at: Option<CreatedAtFilter>,
    /// Pagination cursor.
    pub cursor: Option<String>,
    /// Filter by idempotency key.
    pub idempotency_key: Option<String>,
    /// Page size, 1 to 100.
    pub limit: Option<u32>,
    /// Filter by status.
    pub status: Option<InFilter<CardStatus>>,
}

impl ToQuery for CardListParams {
    fn write_query(&self, w: &mut QueryWriter) {
        w.push_opt("account_id", self.account_id.as_ref())
            .nested("created_at", self.created_at.as_ref())
            .push_opt("cursor", self.cursor.as_ref())
            .push_opt("idempotency_key", self.idempotency_key.as_ref())
            .push_opt("limit", self.limit.as_ref())
            .nested("status", self.status.as_ref());
    }
}

impl_cursor_params!(CardListParams);
