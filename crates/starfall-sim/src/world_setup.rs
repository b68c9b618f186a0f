//! Entity spawning helpers: player ship, hostile agents, inert bodies and
//! projectiles.

use glam::DVec3;
use hecs::{Entity, World};
use tracing::{debug, warn};

use starfall_core::components::*;
use starfall_core::config::{AgentProfile, HullConfig, ProjectileSpec, WeaponSpec};
use starfall_core::constants::*;
use starfall_core::enums::{AgentState, Maneuver};
use starfall_core::types::Transform;

use crate::damage;
use crate::ids::entity_id;
use crate::projectile;
use crate::weapon;

/// A projectile waiting to be spawned once the systems release their borrows.
#[derive(Debug, Clone, Copy)]
pub struct LaunchOrder {
    pub spec: ProjectileSpec,
    pub origin: DVec3,
    pub direction: DVec3,
    pub owner: Option<Entity>,
    /// Target entity and its position at launch time.
    pub target: Option<(Entity, DVec3)>,
}

/// Spawn the player ship with its gun and missile rack.
pub fn spawn_player(
    world: &mut World,
    transform: Transform,
    hull: &HullConfig,
    primary: WeaponSpec,
    secondary: WeaponSpec,
    now: f64,
) -> Entity {
    world.spawn((
        PlayerShip,
        transform,
        Body {
            velocity: DVec3::ZERO,
            mass: SHIP_MASS,
            max_speed: Some(PLAYER_MAX_SPEED),
        },
        Collider {
            radius: SHIP_COLLIDER_RADIUS,
        },
        damage::new_model(hull, now),
        Armament {
            primary: weapon::new_station(primary, now),
            secondary: weapon::new_station(secondary, now),
        },
    ))
}

/// Spawn a hostile agent hunting `target`.
///
/// Passing `mount: None` leaves the agent unable to fire.
#[allow(clippy::too_many_arguments)]
pub fn spawn_agent(
    world: &mut World,
    transform: Transform,
    hull: &HullConfig,
    profile: AgentProfile,
    rack: WeaponSpec,
    mount: Option<WeaponMount>,
    target: Option<Entity>,
    now: f64,
) -> Entity {
    if mount.is_none() {
        warn!("agent spawned without a weapon mount; it will not fire");
    }
    world.spawn((
        transform,
        Body {
            velocity: DVec3::ZERO,
            mass: SHIP_MASS,
            max_speed: None,
        },
        Collider {
            radius: SHIP_COLLIDER_RADIUS,
        },
        damage::new_model(hull, now),
        AgentController {
            profile,
            state: AgentState::Idle,
            maneuver: Maneuver::Holding,
            detected: false,
            target: target.map(entity_id),
            mount,
            rack: weapon::new_station(rack, now),
            mount_warned: false,
        },
    ))
}

/// Spawn an inert physics body (debris, asteroid). It blocks projectiles and
/// gets pushed by blasts but has no damage model.
pub fn spawn_body(world: &mut World, position: DVec3, radius: f64, mass: f64) -> Entity {
    world.spawn((
        Transform::from_position(position),
        Body {
            velocity: DVec3::ZERO,
            mass,
            max_speed: None,
        },
        Collider { radius },
    ))
}

/// Spawn the projectile described by `order`. Missiles with a target lock
/// their heading at the target's launch-time position.
pub fn spawn_projectile(world: &mut World, order: &LaunchOrder) -> Entity {
    let spec = &order.spec;
    let mut velocity = projectile::launch_velocity(spec, order.direction);
    let target = order.target.map(|(entity, position)| {
        velocity = projectile::lock_on(velocity, order.origin, position);
        entity_id(entity)
    });

    let component = projectile::new_projectile(spec, order.origin, order.owner.map(entity_id), target);
    let entity = world.spawn((
        Transform::looking_along(order.origin, velocity),
        Body {
            velocity,
            mass: PROJECTILE_MASS,
            max_speed: None,
        },
        Collider {
            radius: PROJECTILE_COLLIDER_RADIUS,
        },
        component,
    ));
    debug!(?entity, kind = ?spec.kind, speed = spec.speed, "projectile launched");
    entity
}
