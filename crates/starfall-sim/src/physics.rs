//! Physics substrate seam.
//!
//! The combat core never integrates motion or detects contacts itself; it sets
//! velocities and orientations and consumes collision events and overlap
//! queries through [`PhysicsSubstrate`]. [`KinematicSubstrate`] is the headless
//! implementation used by the engine by default.

use glam::DVec3;
use hecs::{Entity, World};

use starfall_core::components::{Body, Collider, Projectile};
use starfall_core::constants::FIXED_DT;
use starfall_core::types::Transform;

use crate::ids;

/// A projectile touched another collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    pub projectile: Entity,
    pub other: Entity,
    /// Contact point on the projectile's side.
    pub contact: DVec3,
}

pub trait PhysicsSubstrate: Send {
    /// Advance positions from velocities, enforcing each body's speed cap.
    fn integrate(&mut self, world: &mut World, dt: f64);

    /// Contacts produced since the last call, in arrival order.
    fn detect_collisions(&mut self, world: &World) -> Vec<CollisionEvent>;

    /// Every collider overlapping the sphere at `point`.
    fn entities_within_radius(&self, world: &World, point: DVec3, radius: f64) -> Vec<Entity>;

    /// Push `entity` away from a blast centered at `center`.
    fn apply_explosion_impulse(
        &mut self,
        world: &mut World,
        entity: Entity,
        center: DVec3,
        radius: f64,
        force: f64,
    );
}

/// Euler integration, sphere overlap tests and linear blast falloff.
#[derive(Debug, Default)]
pub struct KinematicSubstrate;

impl PhysicsSubstrate for KinematicSubstrate {
    fn integrate(&mut self, world: &mut World, dt: f64) {
        for (_entity, (transform, body)) in world.query_mut::<(&mut Transform, &mut Body)>() {
            if let Some(max_speed) = body.max_speed {
                body.velocity = body.velocity.clamp_length_max(max_speed);
            }
            transform.position += body.velocity * dt;
        }
    }

    fn detect_collisions(&mut self, world: &World) -> Vec<CollisionEvent> {
        let targets: Vec<(Entity, DVec3, f64)> = world
            .query::<(&Transform, &Collider)>()
            .without::<&Projectile>()
            .iter()
            .map(|(entity, (transform, collider))| (entity, transform.position, collider.radius))
            .collect();

        let mut events = Vec::new();
        let mut query = world.query::<(&Projectile, &Transform, &Collider)>();
        for (entity, (projectile, transform, collider)) in query.iter() {
            if projectile.spent {
                continue;
            }
            let owner = projectile.owner.and_then(ids::entity);

            // First contact is the nearest overlapping collider.
            let nearest = targets
                .iter()
                .filter(|(other, _, _)| Some(*other) != owner)
                .map(|(other, position, radius)| {
                    (*other, *position, transform.position.distance(*position) - radius)
                })
                .filter(|(_, _, gap)| *gap <= collider.radius)
                .min_by(|a, b| a.2.total_cmp(&b.2));

            if let Some((other, other_position, _)) = nearest {
                let towards = (other_position - transform.position).normalize_or_zero();
                events.push(CollisionEvent {
                    projectile: entity,
                    other,
                    contact: transform.position + towards * collider.radius,
                });
            }
        }
        events
    }

    fn entities_within_radius(&self, world: &World, point: DVec3, radius: f64) -> Vec<Entity> {
        world
            .query::<(&Transform, &Collider)>()
            .iter()
            .filter(|(_, (transform, collider))| {
                transform.position.distance(point) - collider.radius <= radius
            })
            .map(|(entity, _)| entity)
            .collect()
    }

    /// One fixed step worth of force, scaled by `1 - d/r` and divided by mass.
    fn apply_explosion_impulse(
        &mut self,
        world: &mut World,
        entity: Entity,
        center: DVec3,
        radius: f64,
        force: f64,
    ) {
        let Ok((transform, body)) = world.query_one_mut::<(&Transform, &mut Body)>(entity) else {
            return;
        };
        let offset = transform.position - center;
        let distance = offset.length();
        let falloff = if radius > 0.0 {
            1.0 - (distance / radius).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let direction = offset.try_normalize().unwrap_or(DVec3::Y);
        body.velocity += direction * force * falloff * FIXED_DT / body.mass.max(f64::EPSILON);
    }
}
