//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Published behavior state of a hostile agent.
///
/// `Idle` is left exactly once (on detection). `Approaching`/`Circling` follow
/// the latest tick's range. `Attacking` is reported on ticks where the target sits
/// inside the firing cone; `Reloading` while the rack refills.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentState {
    #[default]
    Idle,
    Approaching,
    Circling,
    Attacking,
    Reloading,
}

/// Movement mode of a detected agent, re-evaluated every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Maneuver {
    /// Target beyond engagement distance, or not yet detected.
    #[default]
    Holding,
    /// Closing on the target.
    Approaching,
    /// Inside break-off distance, weaving around the target.
    Circling,
}

/// Projectile family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Straight-flight round, direct damage only.
    #[default]
    Bullet,
    /// Locked-trajectory missile with an area blast.
    Missile,
}

/// Why a weapon station refused to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockReason {
    OnCooldown,
    Empty,
    Reloading,
}
