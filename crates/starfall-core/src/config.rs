//! Tunable configuration for hulls, weapons and agents.
//!
//! A config file only needs the fields it overrides. Plain structs fill gaps
//! from `Default`; each weapon block is merged field by field onto its own
//! preset, so a partial missile rack stays a missile rack.

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::*;
use crate::enums::ProjectileKind;
use crate::error::ConfigError;

/// Hull and shield parameters for one combat entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HullConfig {
    pub max_hull: i32,
    pub max_shield: i32,
    /// Fraction of `max_shield` restored per regen tick.
    pub shield_regen_fraction: f64,
    pub regen_delay_secs: f64,
    pub regen_tick_secs: f64,
}

/// How the minimum gap between two shots is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum FireCadence {
    /// Same gap after every shot.
    Fixed { interval_secs: f64 },
    /// Gap drawn uniformly from `[min_secs, max_secs]` after every shot.
    Randomized { min_secs: f64, max_secs: f64 },
}

/// How spent rounds come back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum ReloadPolicy {
    /// Emptying the magazine locks the station until the whole magazine is refilled.
    Magazine { reload_secs: f64 },
    /// One round is restored every period; the station never locks.
    Recharge { recharge_secs: f64 },
}

/// What a station launches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileSpec {
    pub kind: ProjectileKind,
    pub speed: f64,
    pub damage: i32,
    /// Missile only.
    pub explosion_radius: f64,
    /// Missile only.
    pub explosion_force: f64,
    /// Missile only. Distance from the launch point at which it self-detonates.
    pub max_travel_distance: f64,
}

/// Static description of a weapon station.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponSpec {
    pub cadence: FireCadence,
    pub reload: ReloadPolicy,
    /// Magazine size, shot budget, or charge capacity depending on `reload`.
    pub max_ammo: u32,
    pub projectile: ProjectileSpec,
}

/// Behavior thresholds for a hostile agent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentProfile {
    pub speed: f64,
    pub rotation_speed: f64,
    pub engagement_distance: f64,
    pub detection_range: f64,
    pub shoot_distance: f64,
    pub break_off_distance: f64,
    /// Full cone width in degrees.
    pub shooting_angle: f64,
    pub circling_offset_radius: f64,
    pub weave_amplitude: f64,
    pub max_roll_rate: f64,
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub player_hull: HullConfig,
    pub agent_hull: HullConfig,
    #[serde(deserialize_with = "gatling_overrides")]
    pub gatling: WeaponSpec,
    #[serde(deserialize_with = "player_missile_overrides")]
    pub player_missiles: WeaponSpec,
    #[serde(deserialize_with = "agent_rack_overrides")]
    pub agent_rack: WeaponSpec,
    pub agent: AgentProfile,
}

impl Default for HullConfig {
    fn default() -> Self {
        Self {
            max_hull: DEFAULT_MAX_HULL,
            max_shield: DEFAULT_MAX_SHIELD,
            shield_regen_fraction: SHIELD_REGEN_FRACTION,
            regen_delay_secs: SHIELD_REGEN_DELAY_SECS,
            regen_tick_secs: SHIELD_REGEN_TICK_SECS,
        }
    }
}

impl ProjectileSpec {
    pub fn bullet() -> Self {
        Self {
            kind: ProjectileKind::Bullet,
            speed: BULLET_SPEED,
            damage: BULLET_DAMAGE,
            explosion_radius: 0.0,
            explosion_force: 0.0,
            max_travel_distance: 0.0,
        }
    }

    pub fn missile(speed: f64, max_travel_distance: f64) -> Self {
        Self {
            kind: ProjectileKind::Missile,
            speed,
            damage: MISSILE_DAMAGE,
            explosion_radius: MISSILE_EXPLOSION_RADIUS,
            explosion_force: MISSILE_EXPLOSION_FORCE,
            max_travel_distance,
        }
    }
}

impl WeaponSpec {
    /// Player rapid-fire gun.
    pub fn gatling() -> Self {
        Self {
            cadence: FireCadence::Fixed {
                interval_secs: GATLING_FIRE_INTERVAL_SECS,
            },
            reload: ReloadPolicy::Magazine {
                reload_secs: GATLING_RELOAD_SECS,
            },
            max_ammo: GATLING_MAX_AMMO,
            projectile: ProjectileSpec::bullet(),
        }
    }

    /// Player missile rack: charges trickle back one at a time.
    pub fn player_missile_rack() -> Self {
        Self {
            cadence: FireCadence::Fixed {
                interval_secs: PLAYER_MISSILE_FIRE_DELAY_SECS,
            },
            reload: ReloadPolicy::Recharge {
                recharge_secs: PLAYER_MISSILE_RECHARGE_SECS,
            },
            max_ammo: PLAYER_MAX_MISSILES,
            projectile: ProjectileSpec::missile(PLAYER_MISSILE_SPEED, PLAYER_MISSILE_TRAVEL),
        }
    }

    /// Hostile agent rack: short randomized bursts, then a long reload.
    pub fn agent_missile_rack() -> Self {
        Self {
            cadence: FireCadence::Randomized {
                min_secs: AGENT_MIN_SHOOT_INTERVAL_SECS,
                max_secs: AGENT_MAX_SHOOT_INTERVAL_SECS,
            },
            reload: ReloadPolicy::Magazine {
                reload_secs: AGENT_RELOAD_SECS,
            },
            max_ammo: AGENT_MAX_SHOTS,
            projectile: ProjectileSpec::missile(AGENT_MISSILE_SPEED, AGENT_MISSILE_TRAVEL),
        }
    }

    fn validate(&self, weapon: &'static str) -> Result<(), ConfigError> {
        if self.max_ammo == 0 {
            return Err(ConfigError::EmptyMagazine { weapon });
        }
        match self.cadence {
            FireCadence::Fixed { interval_secs } => {
                non_negative("cadence.interval_secs", interval_secs)?
            }
            FireCadence::Randomized { min_secs, max_secs } => {
                non_negative("cadence.min_secs", min_secs)?;
                if min_secs > max_secs {
                    return Err(ConfigError::InvertedInterval {
                        min: min_secs,
                        max: max_secs,
                    });
                }
            }
        }
        match self.reload {
            ReloadPolicy::Magazine { reload_secs } => positive("reload.reload_secs", reload_secs)?,
            ReloadPolicy::Recharge { recharge_secs } => {
                positive("reload.recharge_secs", recharge_secs)?
            }
        }
        positive("projectile.speed", self.projectile.speed)?;
        if self.projectile.kind == ProjectileKind::Missile {
            positive(
                "projectile.max_travel_distance",
                self.projectile.max_travel_distance,
            )?;
        }
        Ok(())
    }
}

impl Default for AgentProfile {
    fn default() -> Self {
        Self {
            speed: AGENT_SPEED,
            rotation_speed: AGENT_ROTATION_SPEED,
            engagement_distance: AGENT_ENGAGEMENT_DISTANCE,
            detection_range: AGENT_DETECTION_RANGE,
            shoot_distance: AGENT_SHOOT_DISTANCE,
            break_off_distance: AGENT_BREAK_OFF_DISTANCE,
            shooting_angle: AGENT_SHOOTING_ANGLE,
            circling_offset_radius: CIRCLING_OFFSET_RADIUS,
            weave_amplitude: CIRCLING_WEAVE_AMPLITUDE,
            max_roll_rate: CIRCLING_MAX_ROLL_RATE,
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            player_hull: HullConfig::default(),
            agent_hull: HullConfig::default(),
            gatling: WeaponSpec::gatling(),
            player_missiles: WeaponSpec::player_missile_rack(),
            agent_rack: WeaponSpec::agent_missile_rack(),
            agent: AgentProfile::default(),
        }
    }
}

impl HullConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        positive("max_hull", self.max_hull as f64)?;
        non_negative("max_shield", self.max_shield as f64)?;
        if !(0.0..=1.0).contains(&self.shield_regen_fraction) {
            return Err(ConfigError::OutOfUnitRange {
                field: "shield_regen_fraction",
                value: self.shield_regen_fraction,
            });
        }
        non_negative("regen_delay_secs", self.regen_delay_secs)?;
        positive("regen_tick_secs", self.regen_tick_secs)
    }
}

impl AgentProfile {
    fn validate(&self) -> Result<(), ConfigError> {
        positive("agent.speed", self.speed)?;
        positive("agent.rotation_speed", self.rotation_speed)?;
        positive("agent.detection_range", self.detection_range)?;
        positive("agent.shoot_distance", self.shoot_distance)?;
        non_negative("agent.break_off_distance", self.break_off_distance)?;
        positive("agent.shooting_angle", self.shooting_angle)
    }
}

impl SimConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.player_hull.validate()?;
        self.agent_hull.validate()?;
        self.gatling.validate("gatling")?;
        self.player_missiles.validate("player_missiles")?;
        self.agent_rack.validate("agent_rack")?;
        self.agent.validate()
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

/// Partial weapon block. Absent fields keep the preset's values.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WeaponOverrides {
    cadence: Option<FireCadence>,
    reload: Option<ReloadPolicy>,
    max_ammo: Option<u32>,
    projectile: Option<ProjectileOverrides>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProjectileOverrides {
    kind: Option<ProjectileKind>,
    speed: Option<f64>,
    damage: Option<i32>,
    explosion_radius: Option<f64>,
    explosion_force: Option<f64>,
    max_travel_distance: Option<f64>,
}

impl WeaponOverrides {
    fn merge_onto(self, preset: WeaponSpec) -> WeaponSpec {
        WeaponSpec {
            cadence: self.cadence.unwrap_or(preset.cadence),
            reload: self.reload.unwrap_or(preset.reload),
            max_ammo: self.max_ammo.unwrap_or(preset.max_ammo),
            projectile: match self.projectile {
                Some(p) => p.merge_onto(preset.projectile),
                None => preset.projectile,
            },
        }
    }
}

impl ProjectileOverrides {
    fn merge_onto(self, preset: ProjectileSpec) -> ProjectileSpec {
        ProjectileSpec {
            kind: self.kind.unwrap_or(preset.kind),
            speed: self.speed.unwrap_or(preset.speed),
            damage: self.damage.unwrap_or(preset.damage),
            explosion_radius: self.explosion_radius.unwrap_or(preset.explosion_radius),
            explosion_force: self.explosion_force.unwrap_or(preset.explosion_force),
            max_travel_distance: self
                .max_travel_distance
                .unwrap_or(preset.max_travel_distance),
        }
    }
}

fn gatling_overrides<'de, D: Deserializer<'de>>(d: D) -> Result<WeaponSpec, D::Error> {
    Ok(WeaponOverrides::deserialize(d)?.merge_onto(WeaponSpec::gatling()))
}

fn player_missile_overrides<'de, D: Deserializer<'de>>(d: D) -> Result<WeaponSpec, D::Error> {
    Ok(WeaponOverrides::deserialize(d)?.merge_onto(WeaponSpec::player_missile_rack()))
}

fn agent_rack_overrides<'de, D: Deserializer<'de>>(d: D) -> Result<WeaponSpec, D::Error> {
    Ok(WeaponOverrides::deserialize(d)?.merge_onto(WeaponSpec::agent_missile_rack()))
}
