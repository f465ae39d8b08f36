//! Card payments and the card events shared with transaction sources.
//!
//! A card payment groups every event of one purchase: the authorization,
//! increments, reversals, settlements and refunds. The same event objects
//! appear as the `source` of pending, settled, and declined transactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::Currency;
use crate::query::{CreatedAtFilter, QueryWriter, ToQuery};
use crate::Extras;

string_enum! {
    /// Card network an event arrived on.
    pub enum CardNetwork {
        /// Visa.
        Visa => "visa",
    }
}

string_enum! {
    /// Whether an authorization moves money out of or into the account.
    pub enum CardDirection {
        /// Money leaves the account.
        Settlement => "settlement",
        /// Money enters the account.
        Refund => "refund",
    }
}

string_enum! {
    /// Processing category of an authorization.
    pub enum CardProcessingCategory {
        /// A regular purchase.
        Purchase => "purchase",
        /// Funds are pushed to the card.
        AccountFunding => "account_funding",
        /// Automated fuel dispenser pre-authorization.
        AutomaticFuelDispenser => "automatic_fuel_dispenser",
        /// A refund authorization.
        Refund => "refund",
        /// Cash withdrawn at a merchant.
        CashDisbursement => "cash_disbursement",
        /// Card-to-card transfer credited to this card.
        OriginalCreditTransaction => "original_credit_transaction",
    }
}

string_enum! {
    /// Why a card authorization was declined.
    pub enum CardDeclineReason {
        /// The card was not active.
        CardNotActive => "card_not_active",
        /// The physical card was not active.
        PhysicalCardNotActive => "physical_card_not_active",
        /// The entity was not active.
        EntityNotActive => "entity_not_active",
        /// The account was closed.
        GroupLocked => "group_locked",
        /// The account did not hold enough money.
        InsufficientFunds => "insufficient_funds",
        /// The CVV2 did not match.
        Cvv2Mismatch => "cvv2_mismatch",
        /// The card verification failed.
        CardVerificationValue2Mismatch => "card_verification_value_2_mismatch",
        /// The transaction was not allowed.
        TransactionNotAllowed => "transaction_not_allowed",
        /// A card limit was breached.
        BreachesLimit => "breaches_limit",
        /// A webhook rejected the authorization.
        WebhookDeclined => "webhook_declined",
        /// A webhook did not answer in time.
        WebhookTimedOut => "webhook_timed_out",
        /// Declined by a risk rule.
        DeclinedByStandInProcessing => "declined_by_stand_in_processing",
        /// The merchant category is blocked.
        InvalidPhysicalCard => "invalid_physical_card",
        /// The one-time code was missing.
        MissingOriginalAuthorization => "missing_original_authorization",
        /// Suspected fraud.
        SuspectedFraud => "suspected_fraud",
    }
}

string_enum! {
    /// Why an authorization was reversed.
    pub enum CardReversalReason {
        /// Reversed by the merchant or acquirer.
        ReversedByCustomer => "reversed_by_customer",
        /// Reversed by the network.
        ReversedByNetworkOrAcquirer => "reversed_by_network_or_acquirer",
        /// Reversed by a point-of-sale terminal.
        ReversedByPointOfSale => "reversed_by_point_of_sale",
        /// Partially reversed.
        PartialReversal => "partial_reversal",
    }
}

string_enum! {
    /// Category of a card payment element.
    pub enum CardPaymentElementCategory {
        /// An authorization hold.
        CardAuthorization => "card_authorization",
        /// An authentication attempt.
        CardAuthentication => "card_authentication",
        /// A declined authorization.
        CardDecline => "card_decline",
        /// A full or partial reversal.
        CardReversal => "card_reversal",
        /// An increment of an authorization.
        CardIncrement => "card_increment",
        /// A settlement that moved money.
        CardSettlement => "card_settlement",
        /// A refund.
        CardRefund => "card_refund",
        /// An authorization expired without settling.
        CardAuthorizationExpiration => "card_authorization_expiration",
        /// The final fuel amount was confirmed.
        CardFuelConfirmation => "card_fuel_confirmation",
        /// A category this version does not model.
        Other => "other",
    }
}

string_enum! {
    /// Object discriminator for card payments.
    pub enum CardPaymentType {
        /// Always `card_payment`.
        CardPayment => "card_payment",
    }
}

/// Merchant identity attached to card events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Merchant {
    /// Merchant acceptor identifier.
    #[serde(rename = "merchant_acceptor_id")]
    pub acceptor_id: String,
    /// Merchant category code.
    #[serde(rename = "merchant_category_code")]
    pub category_code: Option<String>,
    /// Merchant city.
    #[serde(rename = "merchant_city")]
    pub city: Option<String>,
    /// Merchant country.
    #[serde(rename = "merchant_country")]
    pub country: Option<String>,
    /// Merchant descriptor, as printed on statements.
    #[serde(rename = "merchant_descriptor")]
    pub descriptor: String,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// An authorization hold placed by a merchant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardAuthorization {
    /// Event identifier.
    pub id: String,
    /// Amount held, in the minor unit of `currency`.
    pub amount: i64,
    /// Card that was used.
    pub card_id: String,
    /// Card payment this event belongs to.
    pub card_payment_id: Option<String>,
    /// Currency of `amount`.
    pub currency: Currency,
    /// Direction of the money movement.
    pub direction: CardDirection,
    /// When the hold expires if not settled.
    pub expires_at: Option<DateTime<Utc>>,
    /// Merchant details.
    #[serde(flatten)]
    pub merchant: Merchant,
    /// Network the authorization arrived on.
    pub network: Option<CardNetwork>,
    /// Pending transaction that holds the funds.
    pub pending_transaction_id: Option<String>,
    /// Processing category.
    pub processing_category: Option<CardProcessingCategory>,
    /// Amount the merchant asked for, in the minor unit of the presentment currency.
    pub presentment_amount: Option<i64>,
    /// Currency the cardholder was charged in.
    pub presentment_currency: Option<String>,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// A declined card authorization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardDecline {
    /// Event identifier.
    pub id: String,
    /// Declined amount.
    pub amount: i64,
    /// Card that was used.
    pub card_id: Option<String>,
    /// Card payment this event belongs to.
    pub card_payment_id: Option<String>,
    /// Currency of `amount`.
    pub currency: Currency,
    /// Declined transaction recorded for this event.
    pub declined_transaction_id: Option<String>,
    /// Merchant details.
    #[serde(flatten)]
    pub merchant: Merchant,
    /// Network the authorization arrived on.
    pub network: Option<CardNetwork>,
    /// Why the authorization was declined.
    pub reason: CardDeclineReason,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// A full or partial reversal of an authorization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardReversal {
    /// Event identifier.
    pub id: String,
    /// Authorization that was reversed.
    pub card_authorization_id: String,
    /// Currency of the amounts.
    pub currency: Currency,
    /// Amount the hold was reduced by.
    pub reversal_amount: i64,
    /// Why the authorization was reversed.
    pub reversal_reason: Option<CardReversalReason>,
    /// Remaining authorized amount after the reversal.
    pub updated_authorization_amount: i64,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// A settlement that moved money out of the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSettlement {
    /// Event identifier.
    pub id: String,
    /// Settled amount.
    pub amount: i64,
    /// Card that was used.
    pub card_id: String,
    /// Card authorization that was settled, if any.
    pub card_authorization: Option<String>,
    /// Card payment this event belongs to.
    pub card_payment_id: Option<String>,
    /// Currency of `amount`.
    pub currency: Currency,
    /// Merchant details.
    #[serde(flatten)]
    pub merchant: Merchant,
    /// Pending transaction that was completed, if any.
    pub pending_transaction_id: Option<String>,
    /// Transaction that recorded the settlement.
    pub transaction_id: String,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// A refund that moved money into the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRefund {
    /// Event identifier.
    pub id: String,
    /// Refunded amount.
    pub amount: i64,
    /// Card payment this event belongs to.
    pub card_payment_id: Option<String>,
    /// Currency of `amount`.
    pub currency: Currency,
    /// Merchant details.
    #[serde(flatten)]
    pub merchant: Merchant,
    /// Transaction that recorded the refund.
    pub transaction_id: String,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// One event in a card payment's lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardPaymentElement {
    /// Which of the event members is set.
    pub category: CardPaymentElementCategory,
    /// When the event happened.
    pub created_at: DateTime<Utc>,
    /// Set when `category` is `card_authorization`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_authorization: Option<CardAuthorization>,
    /// Set when `category` is `card_decline`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_decline: Option<CardDecline>,
    /// Set when `category` is `card_reversal`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_reversal: Option<CardReversal>,
    /// Set when `category` is `card_settlement`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_settlement: Option<CardSettlement>,
    /// Set when `category` is `card_refund`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_refund: Option<CardRefund>,
    /// Unrecognized members, including event kinds this version does not model.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// Running totals of a card payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPaymentState {
    /// Total authorized amount.
    pub authorized_amount: i64,
    /// Total amount confirmed by fuel confirmations.
    pub fuel_confirmed_amount: i64,
    /// Total amount of increments.
    pub incremented_amount: i64,
    /// Total amount reversed.
    pub reversed_amount: i64,
    /// Total amount settled.
    pub settled_amount: i64,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// All events of one card purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardPayment {
    /// Card payment identifier.
    pub id: String,
    /// Account the card draws on.
    pub account_id: String,
    /// Card that was used.
    pub card_id: String,
    /// When the first event happened.
    pub created_at: DateTime<Utc>,
    /// Events in the order they happened.
    #[serde(default)]
    pub elements: Vec<CardPaymentElement>,
    /// Running totals.
    pub state: CardPaymentState,
    /// Object discriminator.
    #[serde(rename = "type")]
    pub kind: CardPaymentType,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// Query of `GET /card_payments`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardPaymentListParams {
    /// Filter to one account.
    pub account_id: Option<String>,
    /// Filter to one card.
    pub card_id: Option<String>,
    /// Creation time range.
    pub created_at: Option<CreatedAtFilter>,
    /// Pagination cursor.
    pub cursor: Option<String>,
    /// Page size, 1 to 100.
    pub limit: Option<u32>,
}

impl ToQuery for CardPaymentListParams {
    fn write_query(&self, w: &mut QueryWriter) {
        w.push_opt("account_id", self.account_id.as_ref())
            .push_opt("card_id", self.card_id.as_ref())
            .nested("created_at", self.created_at.as_ref())
            .push_opt("cursor", self.cursor.as_ref())
            .push_opt("limit", self.limit.as_ref());
    }
}

impl_cursor_params!(CardPaymentListParams);
