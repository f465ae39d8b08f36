use increase_core::Method;
use increase_types::account::{
    AccountBalanceParams, AccountCreateParams, AccountListParams, AccountUpdateParams,
};
use increase_types::{Account, BalanceLookup, Resource};

use crate::services::{collection, item, item_action, json, query};

service_handle! {
    /// Deposit accounts: `client.accounts()`.
    Accounts
}

impl Accounts<'_> {
    service_method! {
        /// Open an account.
        method: create(params: &AccountCreateParams) -> Account,
        resource: Account,
        request: json(collection(Method::Post, Resource::Account), params),
    }

    service_method! {
        /// Retrieve an account.
        method: get(account_id: &str) -> Account,
        resource: Account,
        request: item(Method::Get, Resource::Account, account_id),
    }

    service_method! {
        /// Update an account's name.
        method: update(account_id: &str, params: &AccountUpdateParams) -> Account,
        resource: Account,
        request: json(item(Method::Patch, Resource::Account, account_id), params),
    }

    list_methods! {
        noun: "accounts",
        resource: Account,
        params: AccountListParams,
        item: Account,
    }

    service_method! {
        /// Current and available balance, optionally as of `params.at_time`.
        method: balance(account_id: &str, params: &AccountBalanceParams) -> BalanceLookup,
        resource: Account,
        request: query(
            item_action(Method::Get, Resource::Account, account_id, "balance"),
            params,
        ),
    }

    service_method! {
        /// Close an account. The balance must be zero.
        method: close(account_id: &str) -> Account,
        resource: Account,
        request: item_action(Method::Post, Resource::Account, account_id, "close"),
    }
}
