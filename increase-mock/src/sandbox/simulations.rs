use chrono::Duration;
use increase_types::Resource;
use increase_types::simulation::{
    AchTransferReturnSimulateParams, CardAuthorizationSimulateParams,
    CardRefundSimulateParams, CardSettlementSimulateParams, InboundAchTransferSimulateParams,
    InterestPaymentSimulateParams,
};
use serde_json::{Value, json};

use super::{Reply, Sandbox, invalid_operation, invalid_parameters, stamp};
use crate::fixtures::ach::{self, InboundIds};
use crate::fixtures::cards::{self, AuthorizationIds, DeclineIds};
use crate::fixtures::transactions::{self, Posting};

const AUTHORIZATION_TTL_DAYS: i64 = 7;

fn push_element(payment: &mut Value, element: Value) {
    if let Some(elements) = payment["elements"].as_array_mut() {
        elements.push(element);
    }
}

fn text(value: &Value) -> &str {
    value.as_str().unwrap_or_default()
}

impl Sandbox {
    fn card_decline_reason(&self, card: &Value, amount: i64) -> Option<&'static str> {
        if card["status"] != "active" {
            return Some("card_not_active");
        }
        let account_id = text(&card["account_id"]);
        match self.get(Resource::Account, account_id) {
            Ok(account) if account["status"] == "open" => {}
            _ => return Some("group_locked"),
        }
        let (_, available) = self.balances(account_id);
        (available < amount).then_some("insufficient_funds")
    }

    fn record_card_event(
        &mut self,
        payment_id: &str,
        category: &str,
        at: &str,
        event: &Value,
        counter: Option<(&str, i64)>,
    ) {
        if let Ok(payment) = self.get_mut(Resource::CardPayment, payment_id) {
            push_element(payment, cards::card_payment_element(category, at, event));
            if let Some((name, delta)) = counter {
                let total = payment["state"][name].as_i64().unwrap_or_default() + delta;
                payment["state"][name] = json!(total);
            }
        }
    }

    pub(super) fn simulate_card_authorization(
        &mut self,
        p: &CardAuthorizationSimulateParams,
    ) -> Reply {
        if p.amount <= 0 {
            return Err(invalid_parameters("amount must be positive"));
        }
        let card_id = p
            .card_id
            .as_deref()
            .ok_or_else(|| invalid_parameters("card_id is required"))?;
        let card = self.get(Resource::Card, card_id)?.clone();
        let account_id = text(&card["account_id"]).to_string();
        let merchant = cards::merchant(p);
        let description = merchant
            .get("merchant_descriptor")
            .map(text)
            .unwrap_or_default()
            .to_string();

        let payment_id = self.next_id("card_payment");
        let created_at = self.tick();
        let mut payment = cards::card_payment(&payment_id, &account_id, card_id, &created_at);

        let result = if let Some(reason) = self.card_decline_reason(&card, p.amount) {
            let decline_id = self.next_id("card_decline");
            let declined_id = self.next_id("declined_transaction");
            let decline = cards::card_decline(
                &DeclineIds {
                    id: &decline_id,
                    card_id,
                    card_payment_id: &payment_id,
                    declined_transaction_id: &declined_id,
                },
                p.amount,
                reason,
                &merchant,
            );
            let posting = Posting {
                id: &declined_id,
                account_id: &account_id,
                amount: -p.amount,
                created_at: &created_at,
                description: &description,
                route: Some((card_id, "card")),
            };
            let declined = self.insert(
                Resource::DeclinedTransaction,
                transactions::declined_transaction(&posting, "card_decline", &decline),
            );
            push_element(
                &mut payment,
                cards::card_payment_element("card_decline", &created_at, &decline),
            );
            json!({
                "declined_transaction": declined,
                "pending_transaction": null,
                "type": "inbound_card_authorization_simulation_result",
            })
        } else {
            let authorization_id = self.next_id("card_authorization");
            let pending_id = self.next_id("pending_transaction");
            let expires_at = stamp(self.clock + Duration::days(AUTHORIZATION_TTL_DAYS));
            let authorization = cards::card_authorization(
                &AuthorizationIds {
                    id: &authorization_id,
                    card_id,
                    card_payment_id: &payment_id,
                    pending_transaction_id: &pending_id,
                },
                p.amount,
                &expires_at,
                &merchant,
            );
            let posting = Posting {
                id: &pending_id,
                account_id: &account_id,
                amount: -p.amount,
                created_at: &created_at,
                description: &description,
                route: Some((card_id, "card")),
            };
            let pending = self.insert(
                Resource::PendingTransaction,
                transactions::pending_transaction(&posting, "card_authorization", &authorization),
            );
            push_element(
                &mut payment,
                cards::card_payment_element("card_authorization", &created_at, &authorization),
            );
            payment["state"]["authorized_amount"] = json!(p.amount);
            json!({
                "declined_transaction": null,
                "pending_transaction": pending,
                "type": "inbound_card_authorization_simulation_result",
            })
        };
        self.insert(Resource::CardPayment, payment);
        Ok(result)
    }

    pub(super) fn simulate_card_settlement(&mut self, p: &CardSettlementSimulateParams) -> Reply {
        let pending = self
            .get(Resource::PendingTransaction, &p.pending_transaction_id)?
            .clone();
        if pending["status"] != "pending" || pending["source"]["category"] != "card_authorization"
        {
            return Err(invalid_operation(format!(
                "pending transaction `{}` is not an open card authorization",
                p.pending_transaction_id
            )));
        }
        let authorization = &pending["source"]["card_authorization"];
        if authorization["card_id"] != p.card_id.as_str() {
            return Err(invalid_parameters(format!(
                "pending transaction `{}` does not belong to card `{}`",
                p.pending_transaction_id, p.card_id
            )));
        }
        let amount = p
            .amount
            .unwrap_or_else(|| authorization["amount"].as_i64().unwrap_or_default());
        if amount <= 0 {
            return Err(invalid_parameters("amount must be positive"));
        }

        let settlement_id = self.next_id("card_settlement");
        let transaction_id = self.next_id("transaction");
        let now = self.tick();
        let settlement = cards::card_settlement(
            &settlement_id,
            authorization,
            amount,
            &p.pending_transaction_id,
            &transaction_id,
        );
        let posting = Posting {
            id: &transaction_id,
            account_id: text(&pending["account_id"]),
            amount: -amount,
            created_at: &now,
            description: text(&pending["description"]),
            route: Some((p.card_id.as_str(), "card")),
        };
        let transaction = self.insert(
            Resource::Transaction,
            transactions::transaction(&posting, "card_settlement", &settlement),
        );
        self.complete_pending(&p.pending_transaction_id);
        if let Some(payment_id) = authorization["card_payment_id"].as_str() {
            self.record_card_event(
                payment_id,
                "card_settlement",
                &now,
                &settlement,
                Some(("settled_amount", amount)),
            );
        }
        Ok(transaction)
    }

    pub(super) fn simulate_card_refund(&mut self, p: &CardRefundSimulateParams) -> Reply {
        let settled = self.get(Resource::Transaction, &p.transaction_id)?.clone();
        if settled["source"]["category"] != "card_settlement" {
            return Err(invalid_operation(format!(
                "transaction `{}` is not a card settlement",
                p.transaction_id
            )));
        }
        let settlement = &settled["source"]["card_settlement"];
        let refund_id = self.next_id("card_refund");
        let transaction_id = self.next_id("transaction");
        let now = self.tick();
        let refund = cards::card_refund(&refund_id, settlement, &transaction_id);
        let posting = Posting {
            id: &transaction_id,
            account_id: text(&settled["account_id"]),
            amount: settlement["amount"].as_i64().unwrap_or_default(),
            created_at: &now,
            description: text(&settled["description"]),
            route: Some((text(&settlement["card_id"]), "card")),
        };
        let transaction = self.insert(
            Resource::Transaction,
            transactions::transaction(&posting, "card_refund", &refund),
        );
        if let Some(payment_id) = settlement["card_payment_id"].as_str() {
            self.record_card_event(payment_id, "card_refund", &now, &refund, None);
        }
        Ok(transaction)
    }

    pub(super) fn simulate_ach_submission(&mut self, id: &str) -> Reply {
        let transfer = self.get(Resource::AchTransfer, id)?.clone();
        if transfer["status"] != "pending_submission" {
            return Err(invalid_operation(format!(
                "ach transfer `{id}` is {} and cannot be submitted",
                text(&transfer["status"])
            )));
        }
        let transaction_id = self.next_id("transaction");
        let trace_number = format!("{:015}", self.seq);
        let now = self.tick();
        let posting = Posting {
            id: &transaction_id,
            account_id: text(&transfer["account_id"]),
            amount: -transfer["amount"].as_i64().unwrap_or_default(),
            created_at: &now,
            description: text(&transfer["statement_descriptor"]),
            route: None,
        };
        self.insert(
            Resource::Transaction,
            transactions::transaction(
                &posting,
                "ach_transfer_intention",
                &ach::ach_transfer_intention(&transfer),
            ),
        );
        if let Some(pending_id) = transfer["pending_transaction_id"].as_str() {
            self.complete_pending(pending_id);
        }

        let effective_date = self.clock.date_naive();
        let transfer = self.get_mut(Resource::AchTransfer, id)?;
        transfer["status"] = json!("submitted");
        transfer["transaction_id"] = json!(transaction_id);
        transfer["submission"] = json!({
            "expected_settlement_schedule": "same_day",
            "submitted_at": now,
            "trace_number": trace_number,
            "effective_date": effective_date,
        });
        Ok(transfer.clone())
    }

    pub(super) fn simulate_ach_return(
        &mut self,
        id: &str,
        p: &AchTransferReturnSimulateParams,
    ) -> Reply {
        let transfer = self.get(Resource::AchTransfer, id)?.clone();
        if transfer["status"] != "submitted" {
            return Err(invalid_operation(format!(
                "ach transfer `{id}` is {} and cannot be returned",
                text(&transfer["status"])
            )));
        }
        let transaction_id = self.next_id("transaction");
        let now = self.tick();
        let reason = p.reason.as_deref().unwrap_or("no_account");
        let details = ach::ach_transfer_return(id, &transaction_id, &now, reason);
        let posting = Posting {
            id: &transaction_id,
            account_id: text(&transfer["account_id"]),
            amount: transfer["amount"].as_i64().unwrap_or_default(),
            created_at: &now,
            description: text(&transfer["statement_descriptor"]),
            route: None,
        };
        self.insert(
            Resource::Transaction,
            transactions::transaction(&posting, "ach_transfer_return", &details),
        );

        let transfer = self.get_mut(Resource::AchTransfer, id)?;
        transfer["status"] = json!("returned");
        transfer["return"] = details;
        Ok(transfer.clone())
    }

    fn inbound_ach_decline_reason(&self, number: &Value, amount: i64) -> Option<&'static str> {
        match text(&number["status"]) {
            "canceled" => return Some("ach_route_canceled"),
            "disabled" => return Some("ach_route_disabled"),
            _ => {}
        }
        let account_id = text(&number["account_id"]);
        match self.get(Resource::Account, account_id) {
            Ok(account) if account["status"] == "open" => {}
            _ => return Some("group_locked"),
        }
        if amount >= 0 {
            return None;
        }
        if number["inbound_ach"]["debit_status"] == "blocked" {
            return Some("transaction_not_allowed");
        }
        let (_, available) = self.balances(account_id);
        (available < amount.abs()).then_some("insufficient_funds")
    }

    pub(super) fn simulate_inbound_ach_transfer(
        &mut self,
        p: &InboundAchTransferSimulateParams,
    ) -> Reply {
        if p.amount == 0 {
            return Err(invalid_parameters("amount must not be zero"));
        }
        let number = self
            .get(Resource::AccountNumber, &p.account_number_id)?
            .clone();
        let account_id = text(&number["account_id"]).to_string();
        let id = self.next_id("inbound_ach_transfer");
        let trace_number = format!("{:015}", self.seq);
        let now = self.tick();
        let mut inbound = ach::inbound_ach_transfer(
            &InboundIds {
                id: &id,
                account_id: &account_id,
                trace_number: &trace_number,
            },
            &now,
            p,
        );
        let description = ach::originator_company_name(p);
        let route = Some((p.account_number_id.as_str(), "account_number"));

        if let Some(reason) = self.inbound_ach_decline_reason(&number, p.amount) {
            let declined_id = self.next_id("declined_transaction");
            let posting = Posting {
                id: &declined_id,
                account_id: &account_id,
                amount: p.amount,
                created_at: &now,
                description,
                route,
            };
            self.insert(
                Resource::DeclinedTransaction,
                transactions::declined_transaction(
                    &posting,
                    "ach_decline",
                    &ach::ach_decline(&inbound, reason),
                ),
            );
            inbound["status"] = json!("declined");
            inbound["declined_transaction_id"] = json!(declined_id);
        } else {
            let transaction_id = self.next_id("transaction");
            let posting = Posting {
                id: &transaction_id,
                account_id: &account_id,
                amount: p.amount,
                created_at: &now,
                description,
                route,
            };
            self.insert(
                Resource::Transaction,
                transactions::transaction(
                    &posting,
                    "inbound_ach_transfer",
                    &ach::inbound_ach_transfer_source(&inbound, p.amount),
                ),
            );
            inbound["status"] = json!("accepted");
            inbound["transaction_id"] = json!(transaction_id);
        }
        Ok(self.insert(Resource::InboundAchTransfer, inbound))
    }

    pub(super) fn simulate_interest_payment(
        &mut self,
        p: &InterestPaymentSimulateParams,
    ) -> Reply {
        if p.amount <= 0 {
            return Err(invalid_parameters("amount must be positive"));
        }
        self.require_open_account(&p.account_id)?;
        let transaction_id = self.next_id("transaction");
        let now = self.tick();
        let period_end = p.period_end.unwrap_or(self.clock);
        let period_start = p
            .period_start
            .unwrap_or_else(|| period_end - Duration::days(30));
        let source = json!({
            "accrued_on_account_id": p.account_id,
            "amount": p.amount,
            "currency": "USD",
            "period_end": stamp(period_end),
            "period_start": stamp(period_start),
        });
        let posting = Posting {
            id: &transaction_id,
            account_id: &p.account_id,
            amount: p.amount,
            created_at: &now,
            description: "Interest payment",
            route: None,
        };
        Ok(self.insert(
            Resource::Transaction,
            transactions::transaction(&posting, "interest_payment", &source),
        ))
    }
}
