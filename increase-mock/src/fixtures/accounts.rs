use increase_types::Extras;
use increase_types::account::AccountCreateParams;
use increase_types::account_number::{
    AccountNumberCreateParams, InboundAch, InboundAchDebitStatus, InboundChecks,
    InboundChecksStatus,
};
use serde_json::{Value, json};

use super::{DEFAULT_PROGRAM_ID, ROUTING_NUMBER};

pub fn account(
    id: &str,
    created_at: &str,
    params: &AccountCreateParams,
    idempotency_key: Option<&str>,
) -> Value {
    json!({
        "id": id,
        "bank": "first_internet_bank",
        "closed_at": null,
        "created_at": created_at,
        "currency": "USD",
        "entity_id": params.entity_id,
        "idempotency_key": idempotency_key,
        "informational_entity_id": params.informational_entity_id,
        "interest_accrued": "0.00",
        "interest_accrued_at": null,
        "interest_rate": "0.03",
        "name": params.name,
        "program_id": params.program_id.as_deref().unwrap_or(DEFAULT_PROGRAM_ID),
        "status": "open",
        "type": "account",
    })
}

pub fn balance_lookup(account_id: &str, current: i64, available: i64) -> Value {
    json!({
        "account_id": account_id,
        "available_balance": available,
        "current_balance": current,
        "type": "balance_lookup",
    })
}

pub fn default_inbound_ach() -> InboundAch {
    InboundAch {
        debit_status: InboundAchDebitStatus::Allowed,
        extra: Extras::new(),
    }
}

pub fn default_inbound_checks() -> InboundChecks {
    InboundChecks {
        status: InboundChecksStatus::CheckTransfersOnly,
        extra: Extras::new(),
    }
}

pub fn account_number(
    id: &str,
    created_at: &str,
    params: &AccountNumberCreateParams,
    number: &str,
    idempotency_key: Option<&str>,
) -> Value {
    json!({
        "id": id,
        "account_id": params.account_id,
        "account_number": number,
        "routing_number": ROUTING_NUMBER,
        "created_at": created_at,
        "idempotency_key": idempotency_key,
        "inbound_ach": params.inbound_ach.clone().unwrap_or_else(default_inbound_ach),
        "inbound_checks": params.inbound_checks.clone().unwrap_or_else(default_inbound_checks),
        "name": params.name,
        "status": "active",
        "type": "account_number",
    })
}
