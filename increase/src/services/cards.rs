use increase_core::Method;
use increase_types::card::{CardCreateParams, CardListParams, CardUpdateParams};
use increase_types::{Card, CardDetails, Resource};

use crate::services::{collection, item, item_action, json};

service_handle! {
    /// Debit cards: `client.cards()`.
    Cards
}

impl Cards<'_> {
    service_method! {
        /// Issue a card on an account.
        method: create(params: &CardCreateParams) -> Card,
        resource: Card,
        request: json(collection(Method::Post, Resource::Card), params),
    }

    service_method! {
        /// Retrieve a card.
        method: get(card_id: &str) -> Card,
        resource: Card,
        request: item(Method::Get, Resource::Card, card_id),
    }

    service_method! {
        /// Update a card. Canceled cards cannot be updated.
        method: update(card_id: &str, params: &CardUpdateParams) -> Card,
        resource: Card,
        request: json(item(Method::Patch, Resource::Card, card_id), params),
    }

    list_methods! {
        noun: "cards",
        resource: Card,
        params: CardListParams,
        item: Card,
    }

    service_method! {
        /// Sensitive card details: full number, expiry and verification code.
        method: details(card_id: &str) -> CardDetails,
        resource: Card,
        request: item_action(Method::Get, Resource::Card, card_id, "details"),
    }
}
