//! Agent engagement finite state machine.
//!
//! Pure functions that compute detection, maneuver mode, motion and firing
//! decisions for one agent from its situation. No ECS dependency.
//!
//! The movement mode and the firing logic are evaluated independently each
//! tick: the agent may fire while approaching or while circling.

use glam::{DQuat, DVec3};
use rand::Rng;

use starfall_core::config::AgentProfile;
use starfall_core::enums::{AgentState, Maneuver};
use starfall_core::types::Transform;

use crate::steering::{self, MotionIntent};

/// Input to the agent FSM for a single entity.
pub struct AgentContext<'a> {
    pub profile: &'a AgentProfile,
    /// Detection latch from previous ticks.
    pub detected: bool,
    pub hull: Transform,
    /// Mount pose in hull-local space; `None` when no mount was assigned.
    pub mount: Option<Transform>,
    pub target_position: DVec3,
    /// Rack was reloading at tick entry.
    pub rack_reloading: bool,
    /// Rack finished its reload on this tick.
    pub reload_completed: bool,
    pub now: f64,
    pub dt: f64,
}

/// What the agent wants its weapon to do this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FireDecision {
    Hold,
    /// Target inside the cone; attempt a shot along `direction` from `origin`.
    Fire { origin: DVec3, direction: DVec3 },
    /// Firing was wanted but no weapon mount is configured.
    MountMissing,
}

/// Output from the agent FSM.
#[derive(Debug, Clone, Copy)]
pub struct AgentDecision {
    pub detected: bool,
    pub newly_detected: bool,
    pub maneuver: Maneuver,
    pub state: AgentState,
    pub distance_to_target: f64,
    pub motion: Option<MotionIntent>,
    /// Heading override applied after `motion` on the tick a reload completes.
    pub break_out: Option<DQuat>,
    pub fire: FireDecision,
}

/// Evaluate the FSM for one agent.
pub fn evaluate<R: Rng + ?Sized>(ctx: &AgentContext, rng: &mut R) -> AgentDecision {
    let profile = ctx.profile;
    let distance = ctx.hull.position.distance(ctx.target_position);

    let detected = ctx.detected || distance <= profile.detection_range;
    if !detected {
        return AgentDecision {
            detected: false,
            newly_detected: false,
            maneuver: Maneuver::Holding,
            state: AgentState::Idle,
            distance_to_target: distance,
            motion: None,
            break_out: None,
            fire: FireDecision::Hold,
        };
    }

    let maneuver = select_maneuver(profile, distance);
    let motion = match maneuver {
        Maneuver::Holding => None,
        Maneuver::Approaching => Some(steering::approach(
            profile,
            &ctx.hull,
            ctx.target_position,
            distance,
            ctx.dt,
        )),
        Maneuver::Circling => Some(steering::circle(
            profile,
            &ctx.hull,
            ctx.target_position,
            ctx.now,
            ctx.dt,
            rng,
        )),
    };

    // Weapon logic sees the heading chosen by this tick's steering.
    let hull = Transform {
        position: ctx.hull.position,
        rotation: motion.map_or(ctx.hull.rotation, |m| m.rotation),
    };

    let mut fire = FireDecision::Hold;
    let mut break_out = None;
    let mut in_cone = false;

    if ctx.reload_completed {
        break_out = Some(steering::break_out_rotation(hull.rotation));
    } else if !ctx.rack_reloading {
        match ctx.mount {
            None => fire = FireDecision::MountMissing,
            Some(local) => {
                let mount = hull.compose(&local);
                let angle = mount.angle_to(ctx.target_position);
                in_cone =
                    angle <= profile.shooting_angle / 2.0 && distance <= profile.shoot_distance;
                if in_cone {
                    let direction = (ctx.target_position - mount.position)
                        .try_normalize()
                        .unwrap_or_else(|| mount.forward());
                    fire = FireDecision::Fire {
                        origin: mount.position,
                        direction,
                    };
                }
            }
        }
    }

    let state = if ctx.rack_reloading && !ctx.reload_completed {
        AgentState::Reloading
    } else if in_cone {
        AgentState::Attacking
    } else if maneuver == Maneuver::Circling {
        AgentState::Circling
    } else {
        AgentState::Approaching
    };

    AgentDecision {
        detected,
        newly_detected: !ctx.detected,
        maneuver,
        state,
        distance_to_target: distance,
        motion,
        break_out,
        fire,
    }
}

/// Movement mode for the current range. Not latched: only this tick's
/// distance matters.
pub fn select_maneuver(profile: &AgentProfile, distance: f64) -> Maneuver {
    if distance > profile.engagement_distance {
        Maneuver::Holding
    } else if distance <= profile.break_off_distance {
        Maneuver::Circling
    } else {
        Maneuver::Approaching
    }
}
