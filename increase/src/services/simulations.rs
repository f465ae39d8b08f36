//! Sandbox simulations: `client.simulations()`.
//!
//! Simulations stand in for the outside world (merchants, the ACH network,
//! interest accrual) and are only accepted by the sandbox environment.

use increase_core::Method;
use increase_types::simulation::{
    AchTransferReturnSimulateParams, CardAuthorizationSimulateParams, CardRefundSimulateParams,
    CardSettlementSimulateParams, InboundAchTransferSimulateParams, InterestPaymentSimulateParams,
};
use increase_types::{
    AchTransfer, CardAuthorizationSimulation, InboundAchTransfer, Resource, Transaction,
};

use crate::services::{collection, item_action, json};

service_handle! {
    /// Entry point to the simulation endpoints.
    Simulations
}

impl<'a> Simulations<'a> {
    /// Card authorizations.
    #[must_use]
    pub fn card_authorizations(&self) -> CardAuthorizations<'a> {
        CardAuthorizations::new(self.client).with_options(self.options.clone())
    }

    /// Card settlements.
    #[must_use]
    pub fn card_settlements(&self) -> CardSettlements<'a> {
        CardSettlements::new(self.client).with_options(self.options.clone())
    }

    /// Card refunds.
    #[must_use]
    pub fn card_refunds(&self) -> CardRefunds<'a> {
        CardRefunds::new(self.client).with_options(self.options.clone())
    }

    /// Outbound ACH transfer lifecycle.
    #[must_use]
    pub fn ach_transfers(&self) -> AchTransfers<'a> {
        AchTransfers::new(self.client).with_options(self.options.clone())
    }

    /// Inbound ACH transfers.
    #[must_use]
    pub fn inbound_ach_transfers(&self) -> InboundAchTransfers<'a> {
        InboundAchTransfers::new(self.client).with_options(self.options.clone())
    }

    /// Interest payments.
    #[must_use]
    pub fn interest_payments(&self) -> InterestPayments<'a> {
        InterestPayments::new(self.client).with_options(self.options.clone())
    }
}

service_handle! {
    /// Simulated card authorizations.
    CardAuthorizations
}

impl CardAuthorizations<'_> {
    service_method! {
        /// Simulate a merchant authorizing a card.
        ///
        /// An approved authorization returns the pending transaction holding
        /// the funds; a refused one returns the declined transaction.
        method: create(params: &CardAuthorizationSimulateParams) -> CardAuthorizationSimulation,
        resource: SimulatedCardAuthorization,
        request: json(
            collection(Method::Post, Resource::SimulatedCardAuthorization),
            params,
        ),
    }
}

service_handle! {
    /// Simulated card settlements.
    CardSettlements
}

impl CardSettlements<'_> {
    service_method! {
        /// Settle a pending card authorization into a transaction.
        method: create(params: &CardSettlementSimulateParams) -> Transaction,
        resource: SimulatedCardSettlement,
        request: json(
            collection(Method::Post, Resource::SimulatedCardSettlement),
            params,
        ),
    }
}

service_handle! {
    /// Simulated card refunds.
    CardRefunds
}

impl CardRefunds<'_> {
    service_method! {
        /// Refund a settled card transaction.
        method: create(params: &CardRefundSimulateParams) -> Transaction,
        resource: SimulatedCardRefund,
        request: json(collection(Method::Post, Resource::SimulatedCardRefund), params),
    }
}

service_handle! {
    /// Simulated ACH network events for outbound transfers.
    AchTransfers
}

impl AchTransfers<'_> {
    service_method! {
        /// Submit a transfer to the network, settling its funds.
        method: submit(ach_transfer_id: &str) -> AchTransfer,
        resource: SimulatedAchTransfer,
        request: item_action(
            Method::Post,
            Resource::SimulatedAchTransfer,
            ach_transfer_id,
            "submit",
        ),
    }

    service_method! {
        /// Return a submitted transfer, crediting the funds back.
        method: return_transfer(
            ach_transfer_id: &str,
            params: &AchTransferReturnSimulateParams
        ) -> AchTransfer,
        resource: SimulatedAchTransfer,
        request: json(
            item_action(
                Method::Post,
                Resource::SimulatedAchTransfer,
                ach_transfer_id,
                "return",
            ),
            params,
        ),
    }
}

service_handle! {
    /// Simulated inbound ACH transfers.
    InboundAchTransfers
}

impl InboundAchTransfers<'_> {
    service_method! {
        /// Simulate another bank sending an ACH credit or debit to an account
        /// number.
        method: create(params: &InboundAchTransferSimulateParams) -> InboundAchTransfer,
        resource: SimulatedInboundAchTransfer,
        request: json(
            collection(Method::Post, Resource::SimulatedInboundAchTransfer),
            params,
        ),
    }
}

service_handle! {
    /// Simulated interest payments.
    InterestPayments
}

impl InterestPayments<'_> {
    service_method! {
        /// Pay interest into an account.
        method: create(params: &InterestPaymentSimulateParams) -> Transaction,
        resource: SimulatedInterestPayment,
        request: json(
            collection(Method::Post, Resource::SimulatedInterestPayment),
            params,
        ),
    }
}
