//! Conversions between `hecs::Entity` and the crate-neutral `EntityId`.

use hecs::Entity;

use starfall_core::types::EntityId;

pub fn entity_id(entity: Entity) -> EntityId {
    EntityId(entity.to_bits().get())
}

pub fn entity(id: EntityId) -> Option<Entity> {
    Entity::from_bits(id.0)
}
