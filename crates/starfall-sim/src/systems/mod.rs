//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components.

pub mod agent_ai;
pub mod casualties;
pub mod cleanup;
pub mod player_weapons;
pub mod projectiles;
pub mod regen;
pub mod snapshot;
