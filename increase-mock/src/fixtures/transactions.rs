use serde_json::{Value, json};

const TRANSACTION_SOURCES: &[&str] = &[
    "ach_transfer_intention",
    "ach_transfer_rejection",
    "ach_transfer_return",
    "card_refund",
    "card_settlement",
    "fee_payment",
    "inbound_ach_transfer",
    "interest_payment",
];

const PENDING_SOURCES: &[&str] = &["ach_transfer_instruction", "card_authorization"];

const DECLINED_SOURCES: &[&str] = &["ach_decline", "card_decline", "check_decline"];

/// Members shared by settled, pending, and declined transactions.
pub struct Posting<'a> {
    pub id: &'a str,
    pub account_id: &'a str,
    pub amount: i64,
    pub created_at: &'a str,
    pub description: &'a str,
    /// Route id and route type, when the money moved over a card or account number.
    pub route: Option<(&'a str, &'a str)>,
}

fn source(category: &str, detail: &Value, known: &[&str]) -> Value {
    let mut source = json!({ "category": category });
    for key in known {
        source[*key] = Value::Null;
    }
    source[category] = detail.clone();
    source
}

fn posting(p: &Posting<'_>, kind: &str, source: Value) -> Value {
    json!({
        "id": p.id,
        "account_id": p.account_id,
        "amount": p.amount,
        "created_at": p.created_at,
        "currency": "USD",
        "description": p.description,
        "route_id": p.route.map(|(id, _)| id),
        "route_type": p.route.map(|(_, t)| t),
        "source": source,
        "type": kind,
    })
}

pub fn transaction(p: &Posting<'_>, category: &str, detail: &Value) -> Value {
    posting(
        p,
        "transaction",
        source(category, detail, TRANSACTION_SOURCES),
    )
}

pub fn pending_transaction(p: &Posting<'_>, category: &str, detail: &Value) -> Value {
    let mut v = posting(
        p,
        "pending_transaction",
        source(category, detail, PENDING_SOURCES),
    );
    v["status"] = json!("pending");
    v["completed_at"] = Value::Null;
    v
}

pub fn declined_transaction(p: &Posting<'_>, category: &str, detail: &Value) -> Value {
    posting(
        p,
        "declined_transaction",
        source(category, detail, DECLINED_SOURCES),
    )
}
