//! Cleanup system: removes spent projectiles and destroyed entities.

use hecs::{Entity, World};

use starfall_core::components::{DamageModel, Projectile};
use starfall_core::constants::WORLD_RADIUS;
use starfall_core::types::Transform;

/// Remove terminated projectiles, projectiles beyond the world boundary and
/// entities whose damage model was destroyed.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    let radius_sq = WORLD_RADIUS * WORLD_RADIUS;

    for (entity, (projectile, transform)) in world.query_mut::<(&Projectile, &Transform)>() {
        if projectile.spent || transform.position.length_squared() > radius_sq {
            despawn_buffer.push(entity);
        }
    }

    for (entity, model) in world.query_mut::<&DamageModel>() {
        if model.destroyed {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
