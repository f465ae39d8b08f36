use increase_core::Method;
use increase_types::declined_transaction::DeclinedTransactionListParams;
use increase_types::pending_transaction::PendingTransactionListParams;
use increase_types::transaction::TransactionListParams;
use increase_types::{DeclinedTransaction, PendingTransaction, Resource, Transaction};

use crate::services::item;

service_handle! {
    /// Settled transactions: `client.transactions()`.
    Transactions
}

impl Transactions<'_> {
    service_method! {
        /// Retrieve a transaction.
        method: get(transaction_id: &str) -> Transaction,
        resource: Transaction,
        request: item(Method::Get, Resource::Transaction, transaction_id),
    }

    list_methods! {
        noun: "transactions",
        resource: Transaction,
        params: TransactionListParams,
        item: Transaction,
    }
}

service_handle! {
    /// Holds and in-flight transactions: `client.pending_transactions()`.
    PendingTransactions
}

impl PendingTransactions<'_> {
    service_method! {
        /// Retrieve a pending transaction.
        method: get(pending_transaction_id: &str) -> PendingTransaction,
        resource: PendingTransaction,
        request: item(Method::Get, Resource::PendingTransaction, pending_transaction_id),
    }

    list_methods! {
        noun: "pending transactions",
        resource: PendingTransaction,
        params: PendingTransactionListParams,
        item: PendingTransaction,
    }
}

service_handle! {
    /// Declined attempts to move money: `client.declined_transactions()`.
    DeclinedTransactions
}

impl DeclinedTransactions<'_> {
    service_method! {
        /// Retrieve a declined transaction.
        method: get(declined_transaction_id: &str) -> DeclinedTransaction,
        resource: DeclinedTransaction,
        request: item(Method::Get, Resource::DeclinedTransaction, declined_transaction_id),
    }

    list_methods! {
        noun: "declined transactions",
        resource: DeclinedTransaction,
        params: DeclinedTransactionListParams,
        item: DeclinedTransaction,
    }
}
