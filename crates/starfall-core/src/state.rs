//! Combat snapshot: the read-only values published to display layers each tick.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::CombatEvent;
use crate::types::{EntityId, SimTime};

/// Complete visible state produced after each variable-rate tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombatSnapshot {
    pub time: SimTime,
    pub player: Option<PlayerView>,
    pub agents: Vec<AgentView>,
    pub projectiles: Vec<ProjectileView>,
    /// Events emitted since the previous snapshot.
    pub events: Vec<CombatEvent>,
}

/// Hull/shield readout shared by player and enemy displays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HullView {
    pub hull: i32,
    pub max_hull: i32,
    pub shield: i32,
    pub max_shield: i32,
    /// Shield bubble visible.
    pub shield_up: bool,
    pub hull_percent: f64,
    pub shield_percent: f64,
}

/// One weapon station readout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeaponView {
    pub ammo: u32,
    pub max_ammo: u32,
    pub reloading: bool,
    /// Seconds until the fire-rate gate opens.
    pub cooldown_remaining_secs: f64,
    /// 0.0 at reload start, 1.0 when ready. 1.0 when not reloading.
    pub reload_progress: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub entity: EntityId,
    pub position: DVec3,
    pub hull: HullView,
    pub primary: WeaponView,
    pub secondary: WeaponView,
}

/// Enemy readout for the floating name plate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentView {
    pub entity: EntityId,
    pub position: DVec3,
    pub state: AgentState,
    pub maneuver: Maneuver,
    pub hull: HullView,
    pub rack: WeaponView,
    /// Range to the agent's target, when it still exists.
    pub distance_to_target: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub entity: EntityId,
    pub kind: ProjectileKind,
    pub position: DVec3,
    /// Distance from the launch point.
    pub travelled: f64,
}
