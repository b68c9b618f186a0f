//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in the simulation's combat modules and systems.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::config::{AgentProfile, WeaponSpec};
use crate::enums::{AgentState, Maneuver};
use crate::types::{EntityId, Transform};

/// Hull and shield counters of a combat entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageModel {
    pub max_hull: i32,
    pub hull: i32,
    pub max_shield: i32,
    pub shield: i32,
    /// Fraction of `max_shield` restored per regen tick.
    pub shield_regen_fraction: f64,
    pub regen_delay_secs: f64,
    pub regen_tick_secs: f64,
    pub last_damage_secs: f64,
    pub last_regen_tick_secs: f64,
    /// Latched when the hull first drops to zero. A destroyed model ignores
    /// damage and never regenerates.
    pub destroyed: bool,
}

/// Mutable firing state of a weapon station.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeaponMagazine {
    pub ammo: u32,
    /// `None` until the first shot.
    pub last_fired_secs: Option<f64>,
    /// Minimum gap before the next shot, drawn after each discharge.
    pub next_interval_secs: f64,
    pub reloading: bool,
    pub reload_started_secs: f64,
    /// Start of the current recharge period (recharge racks only).
    pub recharge_anchor_secs: f64,
}

/// A weapon: static spec plus magazine state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponStation {
    pub spec: WeaponSpec,
    pub magazine: WeaponMagazine,
}

/// Area-effect warhead carried by a missile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MissileWarhead {
    pub explosion_radius: f64,
    pub explosion_force: f64,
    pub max_travel_distance: f64,
    /// Entity the missile was aimed at on launch. Informational only.
    pub target: Option<EntityId>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Payload {
    Bullet,
    Missile(MissileWarhead),
}

/// Finite-lifetime projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub payload: Payload,
    pub origin: DVec3,
    pub damage: i32,
    /// Shooter; never collides with its own projectiles.
    pub owner: Option<EntityId>,
    /// Set by the first termination trigger. Guards against a second
    /// collision or distance trigger in the same tick.
    pub spent: bool,
}

/// Rigid body integrated by the physics substrate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    pub velocity: DVec3,
    pub mass: f64,
    /// Velocity magnitude cap, if any.
    pub max_speed: Option<f64>,
}

/// Sphere collider used for overlap and collision queries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collider {
    pub radius: f64,
}

/// Weapon mount pose relative to the hull it is attached to.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WeaponMount {
    pub local: Transform,
}

/// Hostile ship brain. Owns its behavior state and its missile rack exclusively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentController {
    pub profile: AgentProfile,
    pub state: AgentState,
    pub maneuver: Maneuver,
    /// One-way latch, set when the target first enters detection range.
    pub detected: bool,
    pub target: Option<EntityId>,
    /// Resolved at spawn. `None` disables firing.
    pub mount: Option<WeaponMount>,
    pub rack: WeaponStation,
    /// Whether the missing-mount warning has been logged already.
    pub mount_warned: bool,
}

/// Player-facing weapon pair: primary on `fire_held`, secondary on `fire_alt_held`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Armament {
    pub primary: WeaponStation,
    pub secondary: WeaponStation,
}

/// Marks the player's ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerShip;
