use increase_types::ach_transfer::AchTransferCreateParams;
use increase_types::simulation::InboundAchTransferSimulateParams;
use serde_json::{Value, json};

/// Account and routing number used for transfers to external accounts.
pub const EXTERNAL_ACCOUNT_NUMBER: &str = "987654321";
/// Routing number used for transfers to external accounts.
pub const EXTERNAL_ROUTING_NUMBER: &str = "101050001";

pub struct TransferIds<'a> {
    pub id: &'a str,
    pub pending_transaction_id: &'a str,
}

pub fn ach_transfer(
    ids: &TransferIds<'_>,
    created_at: &str,
    params: &AchTransferCreateParams,
    status: &str,
    idempotency_key: Option<&str>,
) -> Value {
    json!({
        "id": ids.id,
        "account_id": params.account_id,
        "account_number": params.account_number.as_deref().unwrap_or(EXTERNAL_ACCOUNT_NUMBER),
        "amount": params.amount,
        "approval": null,
        "cancellation": null,
        "company_name": params.company_name,
        "created_at": created_at,
        "currency": "USD",
        "external_account_id": params.external_account_id,
        "funding": params.funding.as_ref().map_or("checking", |f| f.as_str()),
        "idempotency_key": idempotency_key,
        "individual_name": params.individual_name,
        "pending_transaction_id": ids.pending_transaction_id,
        "return": null,
        "routing_number": params.routing_number.as_deref().unwrap_or(EXTERNAL_ROUTING_NUMBER),
        "standard_entry_class_code": params
            .standard_entry_class_code
            .as_ref()
            .map_or("corporate_credit_or_debit", |c| c.as_str()),
        "statement_descriptor": params.statement_descriptor,
        "status": status,
        "submission": null,
        "transaction_id": null,
        "type": "ach_transfer",
    })
}

pub fn ach_transfer_instruction(transfer: &Value) -> Value {
    json!({
        "amount": transfer["amount"],
        "transfer_id": transfer["id"],
    })
}

pub fn ach_transfer_intention(transfer: &Value) -> Value {
    json!({
        "account_number": transfer["account_number"],
        "amount": transfer["amount"],
        "routing_number": transfer["routing_number"],
        "statement_descriptor": transfer["statement_descriptor"],
        "transfer_id": transfer["id"],
    })
}

pub fn ach_transfer_return(
    transfer_id: &str,
    transaction_id: &str,
    created_at: &str,
    reason: &str,
) -> Value {
    json!({
        "created_at": created_at,
        "return_reason_code": reason,
        "transaction_id": transaction_id,
        "transfer_id": transfer_id,
    })
}

pub struct InboundIds<'a> {
    pub id: &'a str,
    pub account_id: &'a str,
    pub trace_number: &'a str,
}

pub fn inbound_ach_transfer(
    ids: &InboundIds<'_>,
    created_at: &str,
    params: &InboundAchTransferSimulateParams,
) -> Value {
    json!({
        "id": ids.id,
        "account_id": ids.account_id,
        "account_number_id": params.account_number_id,
        "amount": params.amount.abs(),
        "created_at": created_at,
        "direction": params.direction(),
        "originator_company_name": originator_company_name(params),
        "originator_company_entry_description": params
            .company_entry_description
            .as_deref()
            .unwrap_or("PAYROLL"),
        "status": "pending",
        "trace_number": ids.trace_number,
        "transaction_id": null,
        "declined_transaction_id": null,
        "type": "inbound_ach_transfer",
    })
}

pub fn originator_company_name(params: &InboundAchTransferSimulateParams) -> &str {
    params.company_name.as_deref().unwrap_or("BIG BANK")
}

pub fn inbound_ach_transfer_source(inbound: &Value, signed_amount: i64) -> Value {
    json!({
        "amount": signed_amount,
        "originator_company_name": inbound["originator_company_name"],
        "originator_company_entry_description": inbound["originator_company_entry_description"],
        "transfer_id": inbound["id"],
    })
}

pub fn ach_decline(inbound: &Value, reason: &str) -> Value {
    json!({
        "id": inbound["id"],
        "amount": inbound["amount"],
        "inbound_ach_transfer_id": inbound["id"],
        "originator_company_name": inbound["originator_company_name"],
        "reason": reason,
    })
}
