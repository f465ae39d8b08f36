use chrono::Datelike;
use increase_types::card::{CardCreateParams, CardUpdateParams};
use increase_types::{Field, Resource};
use serde_json::{Value, json};

use super::{Reply, Sandbox, invalid_operation};
use crate::fixtures::{self, cards};

impl Sandbox {
    pub(super) fn create_card(&mut self, p: &CardCreateParams, key: Option<&str>) -> Reply {
        self.require_open_account(&p.account_id)?;
        if let Some(entity_id) = &p.entity_id {
            self.get(Resource::Entity, entity_id)?;
        }
        let id = self.next_id("card");
        let last4 = format!("{:04}", self.seq % 10_000);
        let expiration = (
            self.clock.month(),
            u32::try_from(self.clock.year() + 3).unwrap_or(2030),
        );
        let now = self.tick();
        Ok(self.insert(
            Resource::Card,
            cards::card(&id, &now, p, &last4, expiration, key),
        ))
    }

    pub(super) fn update_card(&mut self, id: &str, p: &CardUpdateParams) -> Reply {
        if let Field::Value(entity_id) = &p.entity_id {
            self.get(Resource::Entity, entity_id)?;
        }
        let card = self.get_mut(Resource::Card, id)?;
        if card["status"] == "canceled" {
            return Err(invalid_operation(format!("card `{id}` is canceled")));
        }
        if let Some(description) = &p.description {
            card["description"] = json!(description);
        }
        if let Some(status) = p.status {
            card["status"] = json!(status);
        }
        if let Some(address) = &p.billing_address {
            card["billing_address"] = fixtures::address(address);
        }
        if let Some(wallet) = &p.digital_wallet {
            card["digital_wallet"] = json!(wallet);
        }
        match &p.entity_id {
            Field::Omitted => {}
            Field::Null => card["entity_id"] = Value::Null,
            Field::Value(entity_id) => card["entity_id"] = json!(entity_id),
        }
        Ok(card.clone())
    }

    pub(super) fn card_details(&self, id: &str) -> Reply {
        Ok(cards::card_details(self.get(Resource::Card, id)?))
    }
}
