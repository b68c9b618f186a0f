//! Hostile agent AI for STARFALL.
//!
//! Implements the agent engagement state machine and its steering helpers
//! as pure functions over plain data.

pub mod fsm;
pub mod steering;

pub use starfall_core as core;

#[cfg(test)]
mod tests;
