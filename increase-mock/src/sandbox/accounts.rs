use increase_core::HttpResponse;
use increase_types::account::{AccountCreateParams, AccountUpdateParams};
use increase_types::account_number::{AccountNumberCreateParams, AccountNumberUpdateParams};
use increase_types::{Field, Resource};
use serde_json::json;

use super::{Reply, Sandbox, invalid_operation, invalid_parameters};
use crate::fixtures::accounts;

impl Sandbox {
    pub(super) fn create_account(&mut self, p: &AccountCreateParams, key: Option<&str>) -> Reply {
        if p.name.trim().is_empty() {
            return Err(invalid_parameters("name must not be empty"));
        }
        for entity_id in [&p.entity_id, &p.informational_entity_id]
            .into_iter()
            .flatten()
        {
            let entity = self.get(Resource::Entity, entity_id)?;
            if entity["status"] != "active" {
                return Err(invalid_operation(format!(
                    "entity `{entity_id}` is not active"
                )));
            }
        }
        let id = self.next_id("account");
        let now = self.tick();
        Ok(self.insert(
            Resource::Account,
            accounts::account(&id, &now, p, key),
        ))
    }

    pub(super) fn update_account(&mut self, id: &str, p: &AccountUpdateParams) -> Reply {
        let account = self.get_mut(Resource::Account, id)?;
        if let Some(name) = &p.name {
            account["name"] = json!(name);
        }
        Ok(account.clone())
    }

    pub(super) fn close_account(&mut self, id: &str) -> Reply {
        if self.get(Resource::Account, id)?["status"] == "closed" {
            return Err(invalid_operation(format!("account `{id}` is already closed")));
        }
        let (current, available) = self.balances(id);
        if current != 0 || available != 0 {
            return Err(invalid_operation(format!(
                "account `{id}` has a balance of {current} and cannot be closed"
            )));
        }
        let now = self.tick();
        let account = self.get_mut(Resource::Account, id)?;
        account["status"] = json!("closed");
        account["closed_at"] = json!(now);
        Ok(account.clone())
    }

    pub(super) fn balance(&self, id: &str) -> Reply {
        self.get(Resource::Account, id)?;
        let (current, available) = self.balances(id);
        Ok(accounts::balance_lookup(id, current, available))
    }

    pub(super) fn require_open_account(&self, id: &str) -> Result<(), HttpResponse> {
        if self.get(Resource::Account, id)?["status"] == "open" {
            Ok(())
        } else {
            Err(invalid_operation(format!("account `{id}` is closed")))
        }
    }

    pub(super) fn create_account_number(
        &mut self,
        p: &AccountNumberCreateParams,
        key: Option<&str>,
    ) -> Reply {
        self.require_open_account(&p.account_id)?;
        let id = self.next_id("account_number");
        let number = (9_800_000_000 + self.seq).to_string();
        let now = self.tick();
        Ok(self.insert(
            Resource::AccountNumber,
            accounts::account_number(&id, &now, p, &number, key),
        ))
    }

    pub(super) fn update_account_number(
        &mut self,
        id: &str,
        p: &AccountNumberUpdateParams,
    ) -> Reply {
        let number = self.get_mut(Resource::AccountNumber, id)?;
        if number["status"] == "canceled" {
            return Err(invalid_operation(format!(
                "account number `{id}` is canceled"
            )));
        }
        if let Some(name) = &p.name {
            number["name"] = json!(name);
        }
        if let Some(status) = p.status {
            number["status"] = json!(status);
        }
        match &p.inbound_ach {
            Field::Omitted => {}
            Field::Null => number["inbound_ach"] = json!(accounts::default_inbound_ach()),
            Field::Value(v) => number["inbound_ach"] = json!(v),
        }
        match &p.inbound_checks {
            Field::Omitted => {}
            Field::Null => number["inbound_checks"] = json!(accounts::default_inbound_checks()),
            Field::Value(v) => number["inbound_checks"] = json!(v),
        }
        Ok(number.clone())
    }
}
