//! Simulation engine: the core of the combat loop.
//!
//! `SimulationEngine` owns the hecs ECS world, runs the combat systems on a
//! variable-rate tick (AI, weapons, regen) and a fixed-rate tick (physics,
//! collisions), and produces `CombatSnapshot`s. Completely headless, enabling
//! deterministic testing.

use glam::DVec3;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use starfall_core::commands::PlayerInput;
use starfall_core::components::{DamageModel, WeaponMount};
use starfall_core::config::{ProjectileSpec, SimConfig};
use starfall_core::events::CombatEvent;
use starfall_core::state::CombatSnapshot;
use starfall_core::types::{EntityId, SimTime, Transform};

use crate::damage::{self, DamageOutcome};
use crate::error::SimError;
use crate::ids;
use crate::physics::{KinematicSubstrate, PhysicsSubstrate};
use crate::systems;
use crate::world_setup::{self, LaunchOrder};

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    config: SimConfig,
    rng: ChaCha8Rng,
    physics: Box<dyn PhysicsSubstrate>,
    input: PlayerInput,
    despawn_buffer: Vec<Entity>,
    events: Vec<CombatEvent>,
}

impl SimulationEngine {
    /// Create an engine backed by the kinematic substrate.
    pub fn new(config: SimConfig) -> Self {
        Self::with_substrate(config, Box::new(KinematicSubstrate))
    }

    pub fn with_substrate(config: SimConfig, physics: Box<dyn PhysicsSubstrate>) -> Self {
        info!(seed = config.seed, "simulation engine created");
        Self {
            world: World::new(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            physics,
            input: PlayerInput::default(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Spawn the player ship with the configured hull and weapons.
    pub fn spawn_player(&mut self, transform: Transform) -> EntityId {
        let entity = world_setup::spawn_player(
            &mut self.world,
            transform,
            &self.config.player_hull,
            self.config.gatling,
            self.config.player_missiles,
            self.time.elapsed_secs,
        );
        ids::entity_id(entity)
    }

    /// Spawn a hostile agent hunting `target`. `mount: None` disables its weapon.
    pub fn spawn_agent(
        &mut self,
        transform: Transform,
        mount: Option<WeaponMount>,
        target: Option<EntityId>,
    ) -> EntityId {
        let entity = world_setup::spawn_agent(
            &mut self.world,
            transform,
            &self.config.agent_hull,
            self.config.agent,
            self.config.agent_rack,
            mount,
            target.and_then(ids::entity),
            self.time.elapsed_secs,
        );
        ids::entity_id(entity)
    }

    /// Spawn an inert body that blocks projectiles and reacts to blasts.
    pub fn spawn_body(&mut self, position: DVec3, radius: f64, mass: f64) -> EntityId {
        ids::entity_id(world_setup::spawn_body(&mut self.world, position, radius, mass))
    }

    /// Launch a projectile directly, outside any weapon station.
    pub fn launch_projectile(
        &mut self,
        spec: ProjectileSpec,
        origin: DVec3,
        direction: DVec3,
        owner: Option<EntityId>,
    ) -> EntityId {
        let order = LaunchOrder {
            spec,
            origin,
            direction,
            owner: owner.and_then(ids::entity),
            target: None,
        };
        ids::entity_id(world_setup::spawn_projectile(&mut self.world, &order))
    }

    /// Input applied on every following variable tick until replaced.
    pub fn set_player_input(&mut self, input: PlayerInput) {
        self.input = input;
    }

    /// Apply damage to an entity directly.
    pub fn apply_damage(&mut self, entity: EntityId, amount: i32) -> Result<DamageOutcome, SimError> {
        let handle = ids::entity(entity)
            .filter(|e| self.world.contains(*e))
            .ok_or(SimError::UnknownEntity(entity))?;
        let outcome = {
            let mut model = self
                .world
                .get::<&mut DamageModel>(handle)
                .map_err(|_| SimError::MissingComponent {
                    entity,
                    component: "DamageModel",
                })?;
            damage::apply_damage(&mut model, amount, self.time.elapsed_secs)
        };
        systems::casualties::record(&self.world, handle, amount, outcome, &mut self.events);
        Ok(outcome)
    }

    /// Advance the clock by `dt` and run the per-frame systems. Returns the
    /// snapshot with every event emitted since the previous one.
    pub fn tick_variable(&mut self, dt: f64) -> CombatSnapshot {
        self.time.advance(dt);
        let now = self.time.elapsed_secs;

        systems::regen::run(&mut self.world, now, &mut self.events);
        systems::agent_ai::run(&mut self.world, now, dt, &mut self.rng, &mut self.events);
        systems::player_weapons::run(
            &mut self.world,
            &self.input,
            now,
            &mut self.rng,
            &mut self.events,
        );
        systems::projectiles::check_travel(&mut self.world, self.physics.as_mut(), &mut self.events);
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, events)
    }

    /// Integrate motion and resolve collisions over one physics step.
    pub fn tick_fixed(&mut self, dt: f64) {
        let now = self.time.elapsed_secs;

        self.physics.integrate(&mut self.world, dt);
        let collisions = self.physics.detect_collisions(&self.world);
        if !collisions.is_empty() {
            debug!(count = collisions.len(), "collisions detected");
        }
        systems::projectiles::resolve_collisions(
            &mut self.world,
            self.physics.as_mut(),
            &collisions,
            now,
            &mut self.events,
        );
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for scripted setups and tests.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
