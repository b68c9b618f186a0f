//! Agent AI system: runs the engagement FSM for each hostile agent, applies
//! its motion intent and launches missiles from its rack.

use glam::DVec3;
use hecs::{Entity, World};
use rand::Rng;
use tracing::{debug, info, warn};

use starfall_agent_ai::fsm::{self, AgentContext, FireDecision};
use starfall_core::components::{AgentController, Body, DamageModel};
use starfall_core::events::CombatEvent;
use starfall_core::types::Transform;

use crate::ids::{entity, entity_id};
use crate::weapon::{self, FireOutcome, WeaponEvent};
use crate::world_setup::{self, LaunchOrder};

pub fn run<R: Rng + ?Sized>(
    world: &mut World,
    now: f64,
    dt: f64,
    rng: &mut R,
    events: &mut Vec<CombatEvent>,
) {
    // Resolve every agent's target up front; agents whose target is gone or
    // dead sit this tick out.
    let engagements: Vec<(Entity, Entity, DVec3)> = world
        .query::<&AgentController>()
        .iter()
        .filter_map(|(agent, controller)| {
            let target = controller.target.and_then(entity)?;
            if target_destroyed(world, target) {
                return None;
            }
            let position = world.get::<&Transform>(target).ok()?.position;
            Some((agent, target, position))
        })
        .collect();

    let mut launches: Vec<LaunchOrder> = Vec::new();

    for (agent, target, target_position) in engagements {
        let Ok((controller, transform, body, model)) = world.query_one_mut::<(
            &mut AgentController,
            &mut Transform,
            &mut Body,
            Option<&DamageModel>,
        )>(agent) else {
            continue;
        };
        if model.is_some_and(|m| m.destroyed) {
            continue;
        }

        let rack_reloading = controller.rack.magazine.reloading;
        let reload_completed =
            weapon::update(&mut controller.rack, now) == Some(WeaponEvent::ReloadComplete);

        let ctx = AgentContext {
            profile: &controller.profile,
            detected: controller.detected,
            hull: *transform,
            mount: controller.mount.map(|m| m.local),
            target_position,
            rack_reloading,
            reload_completed,
            now,
            dt,
        };
        let decision = fsm::evaluate(&ctx, rng);

        if decision.newly_detected && decision.detected {
            info!(?agent, ?target, distance = decision.distance_to_target, "target detected");
            events.push(CombatEvent::TargetDetected {
                agent: entity_id(agent),
                target: entity_id(target),
            });
        }
        if decision.state != controller.state {
            debug!(?agent, from = ?controller.state, to = ?decision.state, "agent state change");
        }
        controller.detected = decision.detected;
        controller.maneuver = decision.maneuver;
        controller.state = decision.state;

        match decision.motion {
            Some(motion) => {
                transform.rotation = motion.rotation;
                body.velocity = motion.velocity;
            }
            None => body.velocity = DVec3::ZERO,
        }

        if let Some(rotation) = decision.break_out {
            transform.rotation = rotation;
            body.velocity = transform.forward() * body.velocity.length();
            info!(?agent, "reload complete, breaking out");
            events.push(CombatEvent::ReloadComplete {
                entity: entity_id(agent),
            });
        }

        match decision.fire {
            FireDecision::Hold => {}
            FireDecision::MountMissing => {
                if !controller.mount_warned {
                    warn!(?agent, "no weapon mount assigned, firing skipped");
                    controller.mount_warned = true;
                }
            }
            FireDecision::Fire { origin, direction } => {
                if let FireOutcome::Fired(spec) = weapon::try_fire(&mut controller.rack, now, rng) {
                    launches.push(LaunchOrder {
                        spec,
                        origin,
                        direction,
                        owner: Some(agent),
                        target: Some((target, target_position)),
                    });
                    events.push(CombatEvent::ShotFired {
                        shooter: entity_id(agent),
                        kind: spec.kind,
                    });
                    if controller.rack.magazine.reloading {
                        debug!(?agent, "rack empty, reloading");
                        events.push(CombatEvent::ReloadStarted {
                            entity: entity_id(agent),
                        });
                    }
                }
            }
        }
    }

    for order in &launches {
        world_setup::spawn_projectile(world, order);
    }
}

fn target_destroyed(world: &World, target: Entity) -> bool {
    world
        .get::<&DamageModel>(target)
        .map(|model| model.destroyed)
        .unwrap_or(false)
}
