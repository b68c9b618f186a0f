//! Shield regeneration system.

use hecs::World;
use tracing::debug;

use starfall_core::components::DamageModel;
use starfall_core::events::CombatEvent;

use crate::damage;
use crate::ids::entity_id;

/// Run one regen check for every damage model.
pub fn run(world: &mut World, now: f64, events: &mut Vec<CombatEvent>) {
    for (entity, model) in world.query_mut::<&mut DamageModel>() {
        if let Some(shield) = damage::regen_tick(model, now) {
            debug!(?entity, shield, max = model.max_shield, "shield regenerated");
            events.push(CombatEvent::ShieldRegenerated {
                entity: entity_id(entity),
                shield,
            });
        }
    }
}
