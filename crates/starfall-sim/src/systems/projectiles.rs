//! Projectile systems: travel-limit checks on the variable tick and collision
//! resolution on the fixed tick.

use hecs::{Entity, World};
use tracing::debug;

use starfall_core::components::{DamageModel, Projectile};
use starfall_core::events::CombatEvent;
use starfall_core::types::Transform;

use crate::physics::{CollisionEvent, PhysicsSubstrate};
use crate::projectile::{self, Explosion, Termination};
use crate::systems::casualties;

/// Detonate missiles that have reached their travel limit.
pub fn check_travel(
    world: &mut World,
    physics: &mut dyn PhysicsSubstrate,
    events: &mut Vec<CombatEvent>,
) {
    let mut blasts: Vec<Explosion> = Vec::new();
    for (entity, (proj, transform)) in world.query_mut::<(&mut Projectile, &Transform)>() {
        if let Some(termination) = projectile::check_travel(proj, transform.position) {
            debug!(?entity, "missile reached travel limit");
            blasts.extend(termination.explosion);
        }
    }
    for blast in blasts {
        detonate(world, physics, blast, events);
    }
}

/// Resolve contacts one at a time in arrival order. A projectile terminated by
/// an earlier contact ignores the rest.
pub fn resolve_collisions(
    world: &mut World,
    physics: &mut dyn PhysicsSubstrate,
    collisions: &[CollisionEvent],
    now: f64,
    events: &mut Vec<CombatEvent>,
) {
    for contact in collisions {
        let Some(termination) = strike(world, contact, now) else {
            continue;
        };
        if let Some(outcome) = termination.damage {
            let amount = world
                .get::<&Projectile>(contact.projectile)
                .map(|p| p.damage)
                .unwrap_or(0);
            casualties::record(world, contact.other, amount, outcome, events);
        }
        if let Some(blast) = termination.explosion {
            detonate(world, physics, blast, events);
        }
    }
}

fn strike(world: &mut World, contact: &CollisionEvent, now: f64) -> Option<Termination> {
    let mut proj = world.get::<&mut Projectile>(contact.projectile).ok()?;
    let mut model = world.get::<&mut DamageModel>(contact.other).ok();
    projectile::on_collision(&mut proj, model.as_deref_mut(), contact.contact, now)
}

/// Push every body inside the blast radius and publish the explosion.
fn detonate(
    world: &mut World,
    physics: &mut dyn PhysicsSubstrate,
    blast: Explosion,
    events: &mut Vec<CombatEvent>,
) {
    let caught: Vec<Entity> = physics.entities_within_radius(world, blast.position, blast.radius);
    debug!(position = ?blast.position, radius = blast.radius, caught = caught.len(), "explosion");
    for entity in caught {
        physics.apply_explosion_impulse(world, entity, blast.position, blast.radius, blast.force);
    }
    events.push(CombatEvent::Explosion {
        position: blast.position,
        radius: blast.radius,
    });
}
