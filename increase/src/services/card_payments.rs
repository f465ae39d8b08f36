use increase_core::Method;
use increase_types::card_payment::CardPaymentListParams;
use increase_types::{CardPayment, Resource};

use crate::services::item;

service_handle! {
    /// Card payment lifecycles: `client.card_payments()`.
    CardPayments
}

impl CardPayments<'_> {
    service_method! {
        /// Retrieve a card payment with every element recorded so far.
        method: get(card_payment_id: &str) -> CardPayment,
        resource: CardPayment,
        request: item(Method::Get, Resource::CardPayment, card_payment_id),
    }

    list_methods! {
        noun: "card payments",
        resource: CardPayment,
        params: CardPaymentListParams,
        item: CardPayment,
    }
}
