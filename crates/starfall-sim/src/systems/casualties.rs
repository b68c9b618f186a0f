//! Reports resolved hits and death notifications.

use hecs::{Entity, World};
use tracing::{debug, info};

use starfall_core::components::{DamageModel, PlayerShip};
use starfall_core::events::CombatEvent;

use crate::damage::DamageOutcome;
use crate::ids::entity_id;

/// Publish the result of a hit on `entity`. `Destroyed` outcomes produce the
/// single death notification; the cleanup system removes the entity.
pub fn record(
    world: &World,
    entity: Entity,
    amount: i32,
    outcome: DamageOutcome,
    events: &mut Vec<CombatEvent>,
) {
    if outcome == DamageOutcome::Inert {
        debug!(?entity, amount, "hit on destroyed entity ignored");
        return;
    }

    if let Ok(model) = world.get::<&DamageModel>(entity) {
        debug!(?entity, amount, hull = model.hull, shield = model.shield, "took damage");
        events.push(CombatEvent::DamageTaken {
            entity: entity_id(entity),
            amount,
            hull: model.hull,
            shield: model.shield,
        });
    }

    if outcome == DamageOutcome::Destroyed {
        let player = world.satisfies::<&PlayerShip>(entity).unwrap_or(false);
        info!(?entity, player, "destroyed");
        events.push(CombatEvent::Destroyed {
            entity: entity_id(entity),
            player,
        });
    }
}
