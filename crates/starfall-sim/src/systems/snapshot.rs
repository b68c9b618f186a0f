//! Snapshot system: queries the ECS world and builds a complete CombatSnapshot.
//!
//! This system is read-only.

use hecs::World;

use starfall_core::components::*;
use starfall_core::events::CombatEvent;
use starfall_core::state::*;
use starfall_core::types::{SimTime, Transform};

use crate::ids::{entity, entity_id};
use crate::projectile;
use crate::weapon;

pub fn build_snapshot(world: &World, time: &SimTime, events: Vec<CombatEvent>) -> CombatSnapshot {
    let now = time.elapsed_secs;
    CombatSnapshot {
        time: *time,
        player: build_player(world, now),
        agents: build_agents(world, now),
        projectiles: build_projectiles(world),
        events,
    }
}

/// Hull/shield readout. Percentages are in `[0, 100]`.
pub fn hull_view(model: &DamageModel) -> HullView {
    HullView {
        hull: model.hull,
        max_hull: model.max_hull,
        shield: model.shield,
        max_shield: model.max_shield,
        shield_up: model.shield > 0,
        hull_percent: percent(model.hull, model.max_hull),
        shield_percent: percent(model.shield, model.max_shield),
    }
}

pub fn weapon_view(station: &WeaponStation, now: f64) -> WeaponView {
    WeaponView {
        ammo: station.magazine.ammo,
        max_ammo: station.spec.max_ammo,
        reloading: station.magazine.reloading,
        cooldown_remaining_secs: weapon::cooldown_remaining(station, now),
        reload_progress: weapon::reload_progress(station, now),
    }
}

fn percent(value: i32, max: i32) -> f64 {
    if max <= 0 {
        return 0.0;
    }
    (value.max(0) as f64 / max as f64 * 100.0).clamp(0.0, 100.0)
}

fn build_player(world: &World, now: f64) -> Option<PlayerView> {
    world
        .query::<(&Transform, &DamageModel, &Armament)>()
        .with::<&PlayerShip>()
        .iter()
        .next()
        .map(|(e, (transform, model, armament))| PlayerView {
            entity: entity_id(e),
            position: transform.position,
            hull: hull_view(model),
            primary: weapon_view(&armament.primary, now),
            secondary: weapon_view(&armament.secondary, now),
        })
}

fn build_agents(world: &World, now: f64) -> Vec<AgentView> {
    let mut agents: Vec<AgentView> = world
        .query::<(&Transform, &DamageModel, &AgentController)>()
        .iter()
        .map(|(e, (transform, model, controller))| {
            let distance_to_target = controller
                .target
                .and_then(entity)
                .and_then(|t| world.get::<&Transform>(t).ok().map(|tt| tt.position))
                .map(|p| transform.position.distance(p));
            AgentView {
                entity: entity_id(e),
                position: transform.position,
                state: controller.state,
                maneuver: controller.maneuver,
                hull: hull_view(model),
                rack: weapon_view(&controller.rack, now),
                distance_to_target,
            }
        })
        .collect();
    agents.sort_by_key(|a| a.entity);
    agents
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Transform)>()
        .iter()
        .filter(|(_, (p, _))| !p.spent)
        .map(|(e, (p, transform))| ProjectileView {
            entity: entity_id(e),
            kind: projectile::kind(p),
            position: transform.position,
            travelled: projectile::travelled(p, transform.position),
        })
        .collect();
    projectiles.sort_by_key(|p| p.entity);
    projectiles
}
