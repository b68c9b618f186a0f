//! Fundamental geometric and simulation types.
//!
//! Axis convention: +X right, +Y up, +Z forward.

use glam::{DMat3, DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// Stable entity handle shared across crate boundaries.
/// The simulation maps it to and from `hecs::Entity` bits.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct EntityId(pub u64);

/// Position and orientation of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: DVec3,
    pub rotation: DQuat,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of variable-rate ticks run so far.
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            rotation: DQuat::IDENTITY,
        }
    }
}

impl Transform {
    pub fn new(position: DVec3, rotation: DQuat) -> Self {
        Self { position, rotation }
    }

    pub fn from_position(position: DVec3) -> Self {
        Self {
            position,
            rotation: DQuat::IDENTITY,
        }
    }

    /// Transform at `position` whose forward axis points along `direction`.
    pub fn looking_along(position: DVec3, direction: DVec3) -> Self {
        Self {
            position,
            rotation: look_rotation(direction, DVec3::Y),
        }
    }

    pub fn forward(&self) -> DVec3 {
        self.rotation * DVec3::Z
    }

    pub fn right(&self) -> DVec3 {
        self.rotation * DVec3::X
    }

    pub fn up(&self) -> DVec3 {
        self.rotation * DVec3::Y
    }

    /// Place a child transform expressed in this transform's local space into world space.
    pub fn compose(&self, local: &Transform) -> Transform {
        Transform {
            position: self.position + self.rotation * local.position,
            rotation: (self.rotation * local.rotation).normalize(),
        }
    }

    /// Angle in degrees (0..=180) between the forward axis and the direction to `point`.
    /// Returns 0 when `point` coincides with the position.
    pub fn angle_to(&self, point: DVec3) -> f64 {
        let to_point = point - self.position;
        if to_point.length_squared() < 1e-12 {
            return 0.0;
        }
        self.forward().angle_between(to_point).to_degrees()
    }
}

/// Rotation whose forward (+Z) axis points along `direction`, rolled so that
/// its up axis is as close to `up` as possible.
///
/// A zero direction yields the identity rotation.
pub fn look_rotation(direction: DVec3, up: DVec3) -> DQuat {
    let forward = direction.normalize_or_zero();
    if forward == DVec3::ZERO {
        return DQuat::IDENTITY;
    }
    let mut right = up.cross(forward);
    if right.length_squared() < 1e-12 {
        // direction parallel to up
        right = forward.any_orthonormal_vector();
    }
    let right = right.normalize();
    let up = forward.cross(right);
    DQuat::from_mat3(&DMat3::from_cols(right, up, forward)).normalize()
}

impl SimTime {
    /// Advance by one variable-rate tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt.max(0.0);
    }
}
