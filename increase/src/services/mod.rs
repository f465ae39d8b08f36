//! Per-resource service handles.
//!
//! Each handle borrows the [`Client`](crate::Client) and carries the
//! [`RequestOptions`](increase_core::RequestOptions) layered onto its calls.

#[macro_use]
mod macros;

mod account_numbers;
mod accounts;
mod ach_transfers;
mod card_payments;
mod cards;
mod entities;
pub mod simulations;
mod transactions;

pub use account_numbers::AccountNumbers;
pub use accounts::Accounts;
pub use ach_transfers::AchTransfers;
pub use card_payments::CardPayments;
pub use cards::Cards;
pub use entities::Entities;
pub use simulations::Simulations;
pub use transactions::{DeclinedTransactions, PendingTransactions, Transactions};

use increase_core::{
    HttpRequest, IncreaseError, Method, RequestPath, Result, check_limit,
};
use increase_types::{CursorParams, Resource, ToQuery};
use serde::Serialize;

pub(crate) fn collection(method: Method, resource: Resource) -> Result<HttpRequest> {
    Ok(HttpRequest::new(method, RequestPath::collection(resource)))
}

pub(crate) fn item(method: Method, resource: Resource, id: &str) -> Result<HttpRequest> {
    Ok(HttpRequest::new(method, RequestPath::item(resource, id)?))
}

pub(crate) fn item_action(
    method: Method,
    resource: Resource,
    id: &str,
    action: &str,
) -> Result<HttpRequest> {
    Ok(HttpRequest::new(
        method,
        RequestPath::item(resource, id)?.action(action),
    ))
}

pub(crate) fn json<B: Serialize>(req: Result<HttpRequest>, body: &B) -> Result<HttpRequest> {
    let body = serde_json::to_value(body)
        .map_err(|e| IncreaseError::invalid_arg(format!("could not encode request body: {e}")))?;
    Ok(req?.with_body(body))
}

pub(crate) fn query<Q: ToQuery>(req: Result<HttpRequest>, params: &Q) -> Result<HttpRequest> {
    Ok(req?.with_query(params.to_query()))
}

pub(crate) fn list_request<P: ToQuery + CursorParams>(
    resource: Resource,
    params: &P,
) -> Result<HttpRequest> {
    check_limit(params)?;
    query(collection(Method::Get, resource), params)
}
