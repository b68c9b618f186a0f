//! Player weapons system: settles reload timers and fires on held triggers.

use hecs::World;
use rand::Rng;
use tracing::debug;

use starfall_core::commands::PlayerInput;
use starfall_core::components::{Armament, DamageModel, PlayerShip, WeaponStation};
use starfall_core::constants::SHIP_COLLIDER_RADIUS;
use starfall_core::events::CombatEvent;
use starfall_core::types::{EntityId, Transform};

use crate::ids::entity_id;
use crate::weapon::{self, FireOutcome, WeaponEvent};
use crate::world_setup::{self, LaunchOrder};

pub fn run<R: Rng + ?Sized>(
    world: &mut World,
    input: &PlayerInput,
    now: f64,
    rng: &mut R,
    events: &mut Vec<CombatEvent>,
) {
    let mut launches: Vec<LaunchOrder> = Vec::new();

    for (entity, (armament, transform, model)) in world
        .query_mut::<(&mut Armament, &Transform, Option<&DamageModel>)>()
        .with::<&PlayerShip>()
    {
        if model.is_some_and(|m| m.destroyed) {
            continue;
        }
        let id = entity_id(entity);

        let aim = input
            .aim
            .and_then(|a| a.try_normalize())
            .unwrap_or_else(|| transform.forward());
        // Spawn just outside our own collider.
        let muzzle = transform.position + aim * (SHIP_COLLIDER_RADIUS + 1.0);

        for (station, held) in [
            (&mut armament.primary, input.fire_held),
            (&mut armament.secondary, input.fire_alt_held),
        ] {
            settle(station, id, now, events);
            if !held {
                continue;
            }
            match weapon::try_fire(station, now, rng) {
                FireOutcome::Fired(spec) => {
                    launches.push(LaunchOrder {
                        spec,
                        origin: muzzle,
                        direction: aim,
                        owner: Some(entity),
                        target: None,
                    });
                    events.push(CombatEvent::ShotFired {
                        shooter: id,
                        kind: spec.kind,
                    });
                    if station.magazine.reloading {
                        events.push(CombatEvent::ReloadStarted { entity: id });
                    }
                }
                FireOutcome::Blocked(reason) => {
                    debug!(?entity, ?reason, "fire blocked");
                }
            }
        }
    }

    for order in &launches {
        world_setup::spawn_projectile(world, order);
    }
}

fn settle(station: &mut WeaponStation, id: EntityId, now: f64, events: &mut Vec<CombatEvent>) {
    if weapon::update(station, now) == Some(WeaponEvent::ReloadComplete) {
        events.push(CombatEvent::ReloadComplete { entity: id });
    }
}
