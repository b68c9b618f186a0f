//! Events emitted by the simulation for effects, audio and UI feedback.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::ProjectileKind;
use crate::types::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombatEvent {
    /// A weapon station discharged.
    ShotFired {
        shooter: EntityId,
        kind: ProjectileKind,
    },
    /// Damage resolved against a hull/shield pair.
    DamageTaken {
        entity: EntityId,
        amount: i32,
        hull: i32,
        shield: i32,
    },
    /// Periodic shield restoration.
    ShieldRegenerated { entity: EntityId, shield: i32 },
    /// Missile blast; the effects layer spawns the visual here.
    Explosion { position: DVec3, radius: f64 },
    /// One-time death notification.
    Destroyed { entity: EntityId, player: bool },
    /// An agent noticed its target for the first time.
    TargetDetected { agent: EntityId, target: EntityId },
    ReloadStarted { entity: EntityId },
    ReloadComplete { entity: EntityId },
}
