//! Steering helpers: turn the agent's desired heading into a motion intent.
//!
//! Rotation changes are bounded by slerping toward the desired heading with a
//! factor of `rotation_speed * dt` per tick.

use glam::{DQuat, DVec3};
use rand::Rng;

use starfall_core::config::AgentProfile;
use starfall_core::constants::{CIRCLING_WEAVE_FREQ_MAX, CIRCLING_WEAVE_FREQ_MIN};
use starfall_core::types::{look_rotation, Transform};

/// New orientation and velocity the physics substrate should apply this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionIntent {
    pub rotation: DQuat,
    pub velocity: DVec3,
}

/// Turn toward the target and fly along the (new) heading.
/// Throttles to half speed once inside half the shooting distance.
pub fn approach(
    profile: &AgentProfile,
    hull: &Transform,
    target: DVec3,
    distance: f64,
    dt: f64,
) -> MotionIntent {
    let desired = look_rotation(target - hull.position, DVec3::Y);
    let rotation = turn_toward(hull.rotation, desired, profile.rotation_speed * dt);

    let speed = if distance <= profile.shoot_distance * 0.5 {
        profile.speed * 0.5
    } else {
        profile.speed
    };

    MotionIntent {
        rotation,
        velocity: rotation * DVec3::Z * speed,
    }
}

/// Evasive circling: chase a random point near the target, bank into the turn
/// and weave vertically.
pub fn circle<R: Rng + ?Sized>(
    profile: &AgentProfile,
    hull: &Transform,
    target: DVec3,
    now: f64,
    dt: f64,
    rng: &mut R,
) -> MotionIntent {
    let aim_point = target + random_in_unit_sphere(rng) * profile.circling_offset_radius;
    let to_aim = (aim_point - hull.position).normalize_or_zero();

    let desired = look_rotation(to_aim, DVec3::Y);
    let turned = turn_toward(hull.rotation, desired, profile.rotation_speed * dt);

    // Bank proportionally to how far the aim point sits to the side.
    let lateral = (turned * DVec3::X).dot(to_aim).clamp(-1.0, 1.0);
    let roll = (lateral * profile.max_roll_rate * dt).to_radians();
    let rotation = (turned * DQuat::from_rotation_z(roll)).normalize();

    let frequency = rng.gen_range(CIRCLING_WEAVE_FREQ_MIN..=CIRCLING_WEAVE_FREQ_MAX);
    let weave = (now * frequency).sin() * profile.weave_amplitude;

    MotionIntent {
        rotation,
        velocity: rotation * DVec3::Z * profile.speed + DVec3::Y * weave,
    }
}

/// Post-reload repositioning: swing the nose 45 degrees to the left of the
/// current heading.
pub fn break_out_rotation(rotation: DQuat) -> DQuat {
    let forward = rotation * DVec3::Z;
    let right = rotation * DVec3::X;
    look_rotation(forward - right, DVec3::Y)
}

fn turn_toward(current: DQuat, desired: DQuat, factor: f64) -> DQuat {
    current.slerp(desired, factor.clamp(0.0, 1.0)).normalize()
}

fn random_in_unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> DVec3 {
    loop {
        let v = DVec3::new(
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
        );
        if v.length_squared() <= 1.0 {
            return v;
        }
    }
}
