//! State shared between the loop thread and its caller.

use std::sync::{Arc, Mutex};

use starfall_core::commands::PlayerInput;
use starfall_core::state::CombatSnapshot;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// Replace the player's input from the next frame on.
    Input(PlayerInput),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot for synchronous polling. Updated by the loop after each frame.
pub type SharedSnapshot = Arc<Mutex<Option<CombatSnapshot>>>;

pub fn shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}
