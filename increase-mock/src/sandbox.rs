//! Stateful in-memory model of the API.
//!
//! Objects are stored as wire JSON per resource, in creation order. Handlers
//! validate bodies by decoding them into the client's parameter types, so a
//! request the client can build is a request the sandbox understands.

mod accounts;
mod ach;
mod cards;
mod entities;
mod seeding;
mod simulations;

use std::collections::HashMap;

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use increase_core::{HttpRequest, HttpResponse, Method};
use increase_types::{IncreaseError, MAX_PAGE_LIMIT, QueryPair, Resource};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

pub type Reply = Result<Value, HttpResponse>;

/// 2024-01-01T00:00:00Z
const EPOCH_SECS: i64 = 1_704_067_200;

pub struct Sandbox {
    seq: u64,
    request_seq: u64,
    clock: DateTime<Utc>,
    objects: HashMap<Resource, Vec<Value>>,
    replays: HashMap<String, HttpResponse>,
}

impl Sandbox {
    pub fn empty() -> Self {
        Self {
            seq: 0,
            request_seq: 0,
            clock: DateTime::<Utc>::from_timestamp(EPOCH_SECS, 0).unwrap_or_default(),
            objects: HashMap::new(),
            replays: HashMap::new(),
        }
    }

    pub fn seeded() -> Self {
        let mut sandbox = Self::empty();
        sandbox.seed();
        sandbox
    }

    fn next_id(&mut self, prefix: &str) -> String {
        self.seq += 1;
        format!("{prefix}_sandbox{:013}", self.seq)
    }

    /// Advance the sandbox clock and return the new time on the wire format.
    fn tick(&mut self) -> String {
        self.clock += Duration::seconds(1);
        stamp(self.clock)
    }

    fn insert(&mut self, resource: Resource, value: Value) -> Value {
        self.objects.entry(resource).or_default().push(value.clone());
        value
    }

    fn all(&self, resource: Resource) -> impl DoubleEndedIterator<Item = &Value> {
        self.objects.get(&resource).into_iter().flatten()
    }

    fn get(&self, resource: Resource, id: &str) -> Result<&Value, HttpResponse> {
        self.all(resource)
            .find(|v| v["id"] == id)
            .ok_or_else(|| not_found(resource, id))
    }

    fn get_mut(&mut self, resource: Resource, id: &str) -> Result<&mut Value, HttpResponse> {
        self.objects
            .get_mut(&resource)
            .and_then(|objects| objects.iter_mut().find(|v| v["id"] == id))
            .ok_or_else(|| not_found(resource, id))
    }

    fn fetch(&self, resource: Resource, id: &str) -> Reply {
        self.get(resource, id).cloned()
    }

    /// Current and available balance. Pending holds count against the available balance.
    fn balances(&self, account_id: &str) -> (i64, i64) {
        let current: i64 = self
            .all(Resource::Transaction)
            .filter(|t| t["account_id"] == account_id)
            .filter_map(|t| t["amount"].as_i64())
            .sum();
        let held: i64 = self
            .all(Resource::PendingTransaction)
            .filter(|p| p["account_id"] == account_id && p["status"] == "pending")
            .filter_map(|p| p["amount"].as_i64())
            .sum();
        (current, current + held)
    }

    fn complete_pending(&mut self, id: &str) {
        let now = self.tick();
        if let Ok(pending) = self.get_mut(Resource::PendingTransaction, id) {
            pending["status"] = json!("complete");
            pending["completed_at"] = json!(now);
        }
    }

    fn list(&self, resource: Resource, query: &[QueryPair]) -> Reply {
        let max = MAX_PAGE_LIMIT as usize;
        let mut offset = 0usize;
        let mut limit = max;
        let mut filters = Vec::new();
        for (key, value) in query {
            match key.as_str() {
                "cursor" => {
                    offset = value
                        .parse()
                        .map_err(|_| invalid_parameters(format!("invalid cursor `{value}`")))?;
                }
                "limit" => {
                    limit = value
                        .parse()
                        .ok()
                        .filter(|l| (1..=max).contains(l))
                        .ok_or_else(|| {
                            invalid_parameters(format!("limit must be between 1 and {max}"))
                        })?;
                }
                _ => filters.push((key.as_str(), value.as_str())),
            }
        }

        let matched: Vec<&Value> = self
            .all(resource)
            .rev()
            .filter(|v| filters.iter().all(|(k, want)| matches_filter(v, k, want)))
            .collect();
        let end = offset.saturating_add(limit).min(matched.len());
        let data: Vec<Value> = matched
            .get(offset..end)
            .unwrap_or_default()
            .iter()
            .map(|v| (*v).clone())
            .collect();
        let next_cursor = (end < matched.len()).then(|| end.to_string());
        Ok(json!({ "data": data, "next_cursor": next_cursor }))
    }

    /// Answer one request, replaying the stored response for a reused idempotency key.
    pub fn handle(&mut self, req: &HttpRequest) -> HttpResponse {
        self.request_seq += 1;
        let request_id = format!("req_sandbox{:013}", self.request_seq);

        let authorized = req
            .header("authorization")
            .and_then(|v| v.strip_prefix("Bearer "))
            .is_some_and(|key| !key.trim().is_empty());
        if !authorized {
            return envelope(
                401,
                "invalid_api_key_error",
                "The API key provided is invalid.",
                None,
                None,
            )
            .with_header("x-request-id", request_id);
        }

        let key = (req.method != Method::Get)
            .then(|| req.header("idempotency-key"))
            .flatten()
            .map(str::to_string);
        if let Some(replay) = key.as_ref().and_then(|k| self.replays.get(k)) {
            return replay
                .clone()
                .with_header("idempotent-replayed", "true")
                .with_header("x-request-id", request_id);
        }

        let resp = match self.route(req, key.as_deref()) {
            Ok(value) => HttpResponse::json(200, &value),
            Err(resp) => resp,
        };
        if let Some(key) = key.filter(|_| resp.is_success()) {
            self.replays.insert(key, resp.clone());
        }
        resp.with_header("x-request-id", request_id)
    }

    fn route(&mut self, req: &HttpRequest, key: Option<&str>) -> Reply {
        use Method::{Get, Patch, Post};

        let segments: Vec<&str> = req.path.segments().iter().map(String::as_str).collect();
        match (req.method, segments.as_slice()) {
            (Get, ["accounts"]) => self.list(Resource::Account, &req.query),
            (Post, ["accounts"]) => self.create_account(&parse(req)?, key),
            (Get, ["accounts", id]) => self.fetch(Resource::Account, id),
            (Patch, ["accounts", id]) => self.update_account(id, &parse(req)?),
            (Post, ["accounts", id, "close"]) => self.close_account(id),
            (Get, ["accounts", id, "balance"]) => self.balance(id),

            (Get, ["account_numbers"]) => self.list(Resource::AccountNumber, &req.query),
            (Post, ["account_numbers"]) => self.create_account_number(&parse(req)?, key),
            (Get, ["account_numbers", id]) => self.fetch(Resource::AccountNumber, id),
            (Patch, ["account_numbers", id]) => self.update_account_number(id, &parse(req)?),

            (Get, ["cards"]) => self.list(Resource::Card, &req.query),
            (Post, ["cards"]) => self.create_card(&parse(req)?, key),
            (Get, ["cards", id]) => self.fetch(Resource::Card, id),
            (Patch, ["cards", id]) => self.update_card(id, &parse(req)?),
            (Get, ["cards", id, "details"]) => self.card_details(id),

            (Get, ["card_payments"]) => self.list(Resource::CardPayment, &req.query),
            (Get, ["card_payments", id]) => self.fetch(Resource::CardPayment, id),

            (Get, ["entities"]) => self.list(Resource::Entity, &req.query),
            (Post, ["entities"]) => self.create_entity(&parse(req)?, key),
            (Get, ["entities", id]) => self.fetch(Resource::Entity, id),
            (Post, ["entities", id, "archive"]) => self.archive_entity(id),

            (Get, ["transactions"]) => self.list(Resource::Transaction, &req.query),
            (Get, ["transactions", id]) => self.fetch(Resource::Transaction, id),
            (Get, ["pending_transactions"]) => {
                self.list(Resource::PendingTransaction, &req.query)
            }
            (Get, ["pending_transactions", id]) => self.fetch(Resource::PendingTransaction, id),
            (Get, ["declined_transactions"]) => {
                self.list(Resource::DeclinedTransaction, &req.query)
            }
            (Get, ["declined_transactions", id]) => {
                self.fetch(Resource::DeclinedTransaction, id)
            }

            (Get, ["ach_transfers"]) => self.list(Resource::AchTransfer, &req.query),
            (Post, ["ach_transfers"]) => self.create_ach_transfer(&parse(req)?, key),
            (Get, ["ach_transfers", id]) => self.fetch(Resource::AchTransfer, id),
            (Post, ["ach_transfers", id, "approve"]) => self.approve_ach_transfer(id),
            (Post, ["ach_transfers", id, "cancel"]) => self.cancel_ach_transfer(id),
            (Get, ["inbound_ach_transfers"]) => {
                self.list(Resource::InboundAchTransfer, &req.query)
            }
            (Get, ["inbound_ach_transfers", id]) => self.fetch(Resource::InboundAchTransfer, id),

            (Post, ["simulations", "card_authorizations"]) => {
                self.simulate_card_authorization(&parse(req)?)
            }
            (Post, ["simulations", "card_settlements"]) => {
                self.simulate_card_settlement(&parse(req)?)
            }
            (Post, ["simulations", "card_refunds"]) => self.simulate_card_refund(&parse(req)?),
            (Post, ["simulations", "ach_transfers", id, "submit"]) => {
                self.simulate_ach_submission(id)
            }
            (Post, ["simulations", "ach_transfers", id, "return"]) => {
                self.simulate_ach_return(id, &parse(req)?)
            }
            (Post, ["simulations", "inbound_ach_transfers"]) => {
                self.simulate_inbound_ach_transfer(&parse(req)?)
            }
            (Post, ["simulations", "interest_payments"]) => {
                self.simulate_interest_payment(&parse(req)?)
            }

            _ => Err(envelope(
                404,
                "api_method_not_found_error",
                "No API method was found for this path.",
                Some(format!("{} {}", req.method, req.path)),
                None,
            )),
        }
    }
}

pub fn stamp(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn parse<T: DeserializeOwned>(req: &HttpRequest) -> Result<T, HttpResponse> {
    let body = req.body.clone().unwrap_or_else(|| json!({}));
    serde_json::from_value(body).map_err(|e| invalid_parameters(e.to_string()))
}

fn lookup<'a>(value: &'a Value, field: &str) -> Option<&'a str> {
    let member = match field {
        "category" => &value["source"]["category"],
        "ach_debit_status" => &value["inbound_ach"]["debit_status"],
        other => &value[other],
    };
    member.as_str()
}

fn matches_filter(value: &Value, key: &str, want: &str) -> bool {
    if let Some(bound) = key.strip_prefix("created_at.") {
        let Some(created) = value["created_at"].as_str() else {
            return false;
        };
        return match bound {
            "after" => created > want,
            "before" => created < want,
            "on_or_after" => created >= want,
            "on_or_before" => created <= want,
            _ => true,
        };
    }
    if let Some(field) = key.strip_suffix(".in") {
        let actual = lookup(value, field);
        return want.split(',').any(|w| Some(w) == actual);
    }
    lookup(value, key) == Some(want)
}

pub fn envelope(
    status: u16,
    kind: &str,
    title: &str,
    detail: Option<String>,
    resource_id: Option<&str>,
) -> HttpResponse {
    let retryable = status == 429 || status >= 500;
    HttpResponse::json(
        status,
        &json!({
            "status": status,
            "type": kind,
            "title": title,
            "detail": detail,
            "retryable": retryable,
            "errors": [],
            "resource_id": resource_id,
        }),
    )
    .with_header("x-should-retry", if retryable { "true" } else { "false" })
}

fn not_found(resource: Resource, id: &str) -> HttpResponse {
    envelope(
        404,
        "object_not_found_error",
        "Could not find the specified object.",
        Some(format!("No {resource} with id `{id}` exists.")),
        Some(id),
    )
}

fn invalid_parameters(detail: impl Into<String>) -> HttpResponse {
    envelope(
        400,
        "invalid_parameters_error",
        "One or more of your parameters are invalid.",
        Some(detail.into()),
        None,
    )
}

fn invalid_operation(detail: impl Into<String>) -> HttpResponse {
    envelope(
        409,
        "invalid_operation_error",
        "The operation is not allowed for this object.",
        Some(detail.into()),
        None,
    )
}

/// Client-side validation failures map to 400s.
fn rejected(e: IncreaseError) -> HttpResponse {
    match e {
        IncreaseError::InvalidArg(message) => invalid_parameters(message),
        other => invalid_parameters(other.to_string()),
    }
}
