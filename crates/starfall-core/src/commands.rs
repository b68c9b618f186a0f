//! Player input delivered to the simulation once per tick.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Discrete weapon input for the player's stations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerInput {
    /// Primary trigger (rapid-fire gun).
    pub fire_held: bool,
    /// Secondary trigger (missile rack).
    pub fire_alt_held: bool,
    /// Aim direction supplied by the camera. Falls back to the ship's forward axis.
    pub aim: Option<DVec3>,
}
