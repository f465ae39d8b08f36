use increase_core::Method;
use increase_types::entity::{EntityCreateParams, EntityListParams};
use increase_types::{Entity, Resource};

use crate::services::{collection, item, item_action, json};

service_handle! {
    /// Legal entities: `client.entities()`.
    Entities
}

impl Entities<'_> {
    service_method! {
        /// Create an entity.
        ///
        /// The detail member matching `params.structure` must be present; this
        /// is checked before any request is sent.
        method: create(params: &EntityCreateParams) -> Entity,
        resource: Entity,
        request: params
            .validate()
            .and_then(|()| json(collection(Method::Post, Resource::Entity), params)),
    }

    service_method! {
        /// Retrieve an entity.
        method: get(entity_id: &str) -> Entity,
        resource: Entity,
        request: item(Method::Get, Resource::Entity, entity_id),
    }

    list_methods! {
        noun: "entities",
        resource: Entity,
        params: EntityListParams,
        item: Entity,
    }

    service_method! {
        /// Archive an entity. Entities owning open accounts cannot be archived.
        method: archive(entity_id: &str) -> Entity,
        resource: Entity,
        request: item_action(Method::Post, Resource::Entity, entity_id, "archive"),
    }
}
