use increase_types::card::CardCreateParams;
use increase_types::simulation::CardAuthorizationSimulateParams;
use serde_json::{Map, Value, json};

use super::address;

pub fn card(
    id: &str,
    created_at: &str,
    params: &CardCreateParams,
    last4: &str,
    expiration: (u32, u32),
    idempotency_key: Option<&str>,
) -> Value {
    json!({
        "id": id,
        "account_id": params.account_id,
        "billing_address": params.billing_address.as_ref().map(address),
        "created_at": created_at,
        "description": params.description,
        "digital_wallet": params.digital_wallet,
        "entity_id": params.entity_id,
        "expiration_month": expiration.0,
        "expiration_year": expiration.1,
        "idempotency_key": idempotency_key,
        "last4": last4,
        "status": "active",
        "type": "card",
    })
}

pub fn card_details(card: &Value) -> Value {
    let last4 = card["last4"].as_str().unwrap_or("0000");
    json!({
        "card_id": card["id"],
        "expiration_month": card["expiration_month"],
        "expiration_year": card["expiration_year"],
        "primary_account_number": format!("424242424242{last4}"),
        "verification_code": format!("{:03}", last4.parse::<u32>().unwrap_or(0) % 1000),
        "type": "card_details",
    })
}

/// Merchant members shared by every card event, keyed the way they appear on the wire.
pub fn merchant(p: &CardAuthorizationSimulateParams) -> Map<String, Value> {
    let mut m = Map::new();
    m.insert(
        "merchant_acceptor_id".into(),
        json!(p.merchant_acceptor_id.as_deref().unwrap_or("5665270011000168")),
    );
    m.insert(
        "merchant_category_code".into(),
        json!(p.merchant_category_code.as_deref().unwrap_or("5734")),
    );
    m.insert(
        "merchant_city".into(),
        json!(p.merchant_city.as_deref().unwrap_or("New York")),
    );
    m.insert(
        "merchant_country".into(),
        json!(p.merchant_country.as_deref().unwrap_or("US")),
    );
    m.insert(
        "merchant_descriptor".into(),
        json!(p.merchant_descriptor.as_deref().unwrap_or("AMAZON.COM")),
    );
    m
}

/// Copy the merchant members of an existing card event.
pub fn merchant_of(event: &Value) -> Map<String, Value> {
    event
        .as_object()
        .map(|o| {
            o.iter()
                .filter(|(k, _)| k.starts_with("merchant_"))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect()
        })
        .unwrap_or_default()
}

fn with_merchant(mut event: Value, merchant: &Map<String, Value>) -> Value {
    if let Some(obj) = event.as_object_mut() {
        obj.extend(merchant.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    event
}

pub struct AuthorizationIds<'a> {
    pub id: &'a str,
    pub card_id: &'a str,
    pub card_payment_id: &'a str,
    pub pending_transaction_id: &'a str,
}

pub fn card_authorization(
    ids: &AuthorizationIds<'_>,
    amount: i64,
    expires_at: &str,
    merchant: &Map<String, Value>,
) -> Value {
    with_merchant(
        json!({
            "id": ids.id,
            "amount": amount,
            "card_id": ids.card_id,
            "card_payment_id": ids.card_payment_id,
            "currency": "USD",
            "direction": "settlement",
            "expires_at": expires_at,
            "network": "visa",
            "pending_transaction_id": ids.pending_transaction_id,
            "processing_category": "purchase",
            "presentment_amount": amount,
            "presentment_currency": "USD",
        }),
        merchant,
    )
}

pub struct DeclineIds<'a> {
    pub id: &'a str,
    pub card_id: &'a str,
    pub card_payment_id: &'a str,
    pub declined_transaction_id: &'a str,
}

pub fn card_decline(
    ids: &DeclineIds<'_>,
    amount: i64,
    reason: &str,
    merchant: &Map<String, Value>,
) -> Value {
    with_merchant(
        json!({
            "id": ids.id,
            "amount": amount,
            "card_id": ids.card_id,
            "card_payment_id": ids.card_payment_id,
            "currency": "USD",
            "declined_transaction_id": ids.declined_transaction_id,
            "network": "visa",
            "reason": reason,
        }),
        merchant,
    )
}

/// Settlement of the authorization carried by `authorization`.
pub fn card_settlement(
    id: &str,
    authorization: &Value,
    amount: i64,
    pending_transaction_id: &str,
    transaction_id: &str,
) -> Value {
    with_merchant(
        json!({
            "id": id,
            "amount": amount,
            "card_id": authorization["card_id"],
            "card_authorization": authorization["id"],
            "card_payment_id": authorization["card_payment_id"],
            "currency": "USD",
            "pending_transaction_id": pending_transaction_id,
            "transaction_id": transaction_id,
        }),
        &merchant_of(authorization),
    )
}

/// Refund of the settlement carried by `settlement`.
pub fn card_refund(id: &str, settlement: &Value, transaction_id: &str) -> Value {
    with_merchant(
        json!({
            "id": id,
            "amount": settlement["amount"],
            "card_payment_id": settlement["card_payment_id"],
            "currency": "USD",
            "transaction_id": transaction_id,
        }),
        &merchant_of(settlement),
    )
}

pub fn card_payment(id: &str, account_id: &str, card_id: &str, created_at: &str) -> Value {
    json!({
        "id": id,
        "account_id": account_id,
        "card_id": card_id,
        "created_at": created_at,
        "elements": [],
        "state": {
            "authorized_amount": 0,
            "fuel_confirmed_amount": 0,
            "incremented_amount": 0,
            "reversed_amount": 0,
            "settled_amount": 0,
        },
        "type": "card_payment",
    })
}

/// A card payment element wrapping `event` under its category key.
pub fn card_payment_element(category: &str, created_at: &str, event: &Value) -> Value {
    let mut element = json!({
        "category": category,
        "created_at": created_at,
        "card_authorization": null,
        "card_decline": null,
        "card_reversal": null,
        "card_settlement": null,
        "card_refund": null,
    });
    element[category] = event.clone();
    element
}
