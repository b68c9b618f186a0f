//! Projectile payload: launch, locked trajectories and single-shot termination.
//!
//! A projectile terminates on its first collision or, for missiles, once it
//! has travelled `max_travel_distance` from its launch point. Whichever trigger
//! comes first wins; the `spent` flag turns every later trigger into a no-op.

use glam::DVec3;

use starfall_core::components::{DamageModel, MissileWarhead, Payload, Projectile};
use starfall_core::config::ProjectileSpec;
use starfall_core::enums::ProjectileKind;
use starfall_core::types::EntityId;

use crate::damage::{self, DamageOutcome};

/// Area blast produced when a missile terminates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Explosion {
    pub position: DVec3,
    pub radius: f64,
    pub force: f64,
}

/// What happened when a projectile terminated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Termination {
    /// Direct-hit result, when the struck entity had a damage model.
    pub damage: Option<DamageOutcome>,
    pub explosion: Option<Explosion>,
}

pub fn new_projectile(
    spec: &ProjectileSpec,
    origin: DVec3,
    owner: Option<EntityId>,
    target: Option<EntityId>,
) -> Projectile {
    let payload = match spec.kind {
        ProjectileKind::Bullet => Payload::Bullet,
        ProjectileKind::Missile => Payload::Missile(MissileWarhead {
            explosion_radius: spec.explosion_radius,
            explosion_force: spec.explosion_force,
            max_travel_distance: spec.max_travel_distance,
            target,
        }),
    };
    Projectile {
        payload,
        origin,
        damage: spec.damage,
        owner,
        spent: false,
    }
}

/// Muzzle velocity along `direction`.
pub fn launch_velocity(spec: &ProjectileSpec, direction: DVec3) -> DVec3 {
    direction.normalize_or_zero() * spec.speed
}

/// Re-aim `velocity` at the target's launch-time position, keeping its speed.
/// The result is fixed for the rest of the flight.
pub fn lock_on(velocity: DVec3, origin: DVec3, target_position: DVec3) -> DVec3 {
    match (target_position - origin).try_normalize() {
        Some(direction) => direction * velocity.length(),
        None => velocity,
    }
}

pub fn kind(projectile: &Projectile) -> ProjectileKind {
    match projectile.payload {
        Payload::Bullet => ProjectileKind::Bullet,
        Payload::Missile(_) => ProjectileKind::Missile,
    }
}

/// Distance from the launch point.
pub fn travelled(projectile: &Projectile, position: DVec3) -> f64 {
    projectile.origin.distance(position)
}

/// Resolve a collision at `position`. Damages `struck` if it has a model.
/// Returns `None` if the projectile already terminated.
pub fn on_collision(
    projectile: &mut Projectile,
    struck: Option<&mut DamageModel>,
    position: DVec3,
    now: f64,
) -> Option<Termination> {
    if projectile.spent {
        return None;
    }
    projectile.spent = true;

    let damage = struck.map(|model| damage::apply_damage(model, projectile.damage, now));
    Some(Termination {
        damage,
        explosion: blast(projectile, position),
    })
}

/// Travel-limit trigger. Bullets have no limit.
pub fn check_travel(projectile: &mut Projectile, position: DVec3) -> Option<Termination> {
    if projectile.spent {
        return None;
    }
    let Payload::Missile(warhead) = projectile.payload else {
        return None;
    };
    if travelled(projectile, position) < warhead.max_travel_distance {
        return None;
    }
    projectile.spent = true;
    Some(Termination {
        damage: None,
        explosion: blast(projectile, position),
    })
}

fn blast(projectile: &Projectile, position: DVec3) -> Option<Explosion> {
    match projectile.payload {
        Payload::Bullet => None,
        Payload::Missile(warhead) => Some(Explosion {
            position,
            radius: warhead.explosion_radius,
            force: warhead.explosion_force,
        }),
    }
}
