use increase_core::Method;
use increase_types::ach_transfer::{AchTransferCreateParams, AchTransferListParams};
use increase_types::{AchTransfer, Resource};

use crate::services::{collection, item, item_action, json};

service_handle! {
    /// Outbound ACH transfers: `client.ach_transfers()`.
    AchTransfers
}

impl AchTransfers<'_> {
    service_method! {
        /// Create an ACH transfer.
        ///
        /// The amount must be non-zero, the statement descriptor non-empty, and
        /// a destination given; these are checked before any request is sent.
        /// The funds are held by a pending transaction until the transfer
        /// settles, is returned, or is canceled.
        method: create(params: &AchTransferCreateParams) -> AchTransfer,
        resource: AchTransfer,
        request: params
            .validate()
            .and_then(|()| json(collection(Method::Post, Resource::AchTransfer), params)),
    }

    service_method! {
        /// Retrieve an ACH transfer.
        method: get(ach_transfer_id: &str) -> AchTransfer,
        resource: AchTransfer,
        request: item(Method::Get, Resource::AchTransfer, ach_transfer_id),
    }

    list_methods! {
        noun: "ACH transfers",
        resource: AchTransfer,
        params: AchTransferListParams,
        item: AchTransfer,
    }

    service_method! {
        /// Approve a transfer created with `require_approval`.
        method: approve(ach_transfer_id: &str) -> AchTransfer,
        resource: AchTransfer,
        request: item_action(Method::Post, Resource::AchTransfer, ach_transfer_id, "approve"),
    }

    service_method! {
        /// Cancel a transfer that is still pending approval.
        method: cancel(ach_transfer_id: &str) -> AchTransfer,
        resource: AchTransfer,
        request: item_action(Method::Post, Resource::AchTransfer, ach_transfer_id, "cancel"),
    }
}
