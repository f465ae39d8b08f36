use increase_types::Resource;
use increase_types::ach_transfer::AchTransferCreateParams;
use serde_json::json;

use super::{Reply, Sandbox, invalid_operation, rejected};
use crate::fixtures::ach::{self, TransferIds};
use crate::fixtures::transactions::{self, Posting};

impl Sandbox {
    pub(super) fn create_ach_transfer(
        &mut self,
        p: &AchTransferCreateParams,
        key: Option<&str>,
    ) -> Reply {
        p.validate().map_err(rejected)?;
        self.require_open_account(&p.account_id)?;

        let id = self.next_id("ach_transfer");
        let pending_id = self.next_id("pending_transaction");
        let now = self.tick();
        let status = if p.require_approval == Some(true) {
            "pending_approval"
        } else {
            "pending_submission"
        };
        let transfer = ach::ach_transfer(
            &TransferIds {
                id: &id,
                pending_transaction_id: &pending_id,
            },
            &now,
            p,
            status,
            key,
        );
        let posting = Posting {
            id: &pending_id,
            account_id: &p.account_id,
            amount: -p.amount,
            created_at: &now,
            description: &p.statement_descriptor,
            route: None,
        };
        self.insert(
            Resource::PendingTransaction,
            transactions::pending_transaction(
                &posting,
                "ach_transfer_instruction",
                &ach::ach_transfer_instruction(&transfer),
            ),
        );
        Ok(self.insert(Resource::AchTransfer, transfer))
    }

    pub(super) fn approve_ach_transfer(&mut self, id: &str) -> Reply {
        let now = self.tick();
        let transfer = self.get_mut(Resource::AchTransfer, id)?;
        if transfer["status"] != "pending_approval" {
            return Err(invalid_operation(format!(
                "ach transfer `{id}` is {} and cannot be approved",
                transfer["status"].as_str().unwrap_or("unknown")
            )));
        }
        transfer["status"] = json!("pending_submission");
        transfer["approval"] = json!({ "approved_at": now, "approved_by": null });
        Ok(transfer.clone())
    }

    pub(super) fn cancel_ach_transfer(&mut self, id: &str) -> Reply {
        let now = self.tick();
        let transfer = self.get_mut(Resource::AchTransfer, id)?;
        if transfer["status"] != "pending_approval" {
            return Err(invalid_operation(format!(
                "ach transfer `{id}` is {} and cannot be canceled",
                transfer["status"].as_str().unwrap_or("unknown")
            )));
        }
        transfer["status"] = json!("canceled");
        transfer["cancellation"] = json!({ "canceled_at": now, "canceled_by": null });
        let transfer = transfer.clone();
        if let Some(pending_id) = transfer["pending_transaction_id"].as_str() {
            self.complete_pending(pending_id);
        }
        Ok(transfer)
    }
}
