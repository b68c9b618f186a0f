//! STARFALL application layer.
//!
//! Owns the simulation loop that drives the engine's two update phases and
//! hands snapshots to whatever display sits on top.

pub mod game_loop;
pub mod state;

pub use starfall_core as core;
