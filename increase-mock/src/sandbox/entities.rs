use increase_types::Resource;
use increase_types::entity::EntityCreateParams;
use serde_json::json;

use super::{Reply, Sandbox, invalid_operation, rejected};
use crate::fixtures::entities;

impl Sandbox {
    pub(super) fn create_entity(&mut self, p: &EntityCreateParams, key: Option<&str>) -> Reply {
        p.validate().map_err(rejected)?;
        let id = self.next_id("entity");
        let now = self.tick();
        Ok(self.insert(Resource::Entity, entities::entity(&id, &now, p, key)))
    }

    pub(super) fn archive_entity(&mut self, id: &str) -> Reply {
        if self.get(Resource::Entity, id)?["status"] == "archived" {
            return Err(invalid_operation(format!("entity `{id}` is already archived")));
        }
        let open_accounts = self
            .all(Resource::Account)
            .filter(|a| a["entity_id"] == id && a["status"] == "open")
            .count();
        if open_accounts > 0 {
            return Err(invalid_operation(format!(
                "entity `{id}` owns {open_accounts} open account(s)"
            )));
        }
        let entity = self.get_mut(Resource::Entity, id)?;
        entity["status"] = json!("archived");
        Ok(entity.clone())
    }
}
