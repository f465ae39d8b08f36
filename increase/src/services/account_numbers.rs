use increase_core::Method;
use increase_types::account_number::{
    AccountNumberCreateParams, AccountNumberListParams, AccountNumberUpdateParams,
};
use increase_types::{AccountNumber, Resource};

use crate::services::{collection, item, json};

service_handle! {
    /// Account and routing numbers: `client.account_numbers()`.
    AccountNumbers
}

impl AccountNumbers<'_> {
    service_method! {
        /// Create an account number routed to an account.
        method: create(params: &AccountNumberCreateParams) -> AccountNumber,
        resource: AccountNumber,
        request: json(collection(Method::Post, Resource::AccountNumber), params),
    }

    service_method! {
        /// Retrieve an account number.
        method: get(account_number_id: &str) -> AccountNumber,
        resource: AccountNumber,
        request: item(Method::Get, Resource::AccountNumber, account_number_id),
    }

    service_method! {
        /// Update an account number.
        ///
        /// Setting `inbound_ach` or `inbound_checks` to `Field::Null` restores
        /// the default; leaving them `Field::Omitted` keeps the current value.
        method: update(account_number_id: &str, params: &AccountNumberUpdateParams) -> AccountNumber,
        resource: AccountNumber,
        request: json(
            item(Method::Patch, Resource::AccountNumber, account_number_id),
            params,
        ),
    }

    list_methods! {
        noun: "account numbers",
        resource: AccountNumber,
        params: AccountNumberListParams,
        item: AccountNumber,
    }
}
