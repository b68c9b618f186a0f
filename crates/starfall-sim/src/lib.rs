//! Simulation engine for STARFALL.
//!
//! Owns the hecs ECS world, runs combat systems on a variable-rate and a
//! fixed-rate tick, and produces `CombatSnapshot`s for display layers.

pub mod damage;
pub mod engine;
pub mod error;
pub mod ids;
pub mod physics;
pub mod projectile;
pub mod systems;
pub mod weapon;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use starfall_core as core;
