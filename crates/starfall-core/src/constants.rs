//! Simulation constants and tuning defaults.
//!
//! Distances in meters, times in seconds, angles in degrees unless noted.

/// Fixed physics step rate (Hz).
pub const FIXED_TICK_RATE: u32 = 50;

/// Seconds per fixed physics step.
pub const FIXED_DT: f64 = 1.0 / FIXED_TICK_RATE as f64;

/// Nominal variable-rate frame rate (Hz) used by the headless loop.
pub const FRAME_RATE: u32 = 60;

/// Projectiles further than this from the origin are removed.
pub const WORLD_RADIUS: f64 = 20_000.0;

// --- Hull / shield ---

pub const DEFAULT_MAX_HULL: i32 = 60;
pub const DEFAULT_MAX_SHIELD: i32 = 50;

/// Fraction of max shield restored per regen tick.
pub const SHIELD_REGEN_FRACTION: f64 = 0.12;

/// Quiet period after the last hit before regeneration starts.
pub const SHIELD_REGEN_DELAY_SECS: f64 = 5.0;

/// Period between regen ticks.
pub const SHIELD_REGEN_TICK_SECS: f64 = 1.0;

// --- Ship bodies ---

pub const SHIP_COLLIDER_RADIUS: f64 = 4.0;
pub const SHIP_MASS: f64 = 10.0;
pub const PLAYER_MAX_SPEED: f64 = 20.0;

pub const PROJECTILE_COLLIDER_RADIUS: f64 = 0.5;
pub const PROJECTILE_MASS: f64 = 1.0;

// --- Player gatling gun ---

pub const GATLING_FIRE_INTERVAL_SECS: f64 = 0.2;
pub const GATLING_MAX_AMMO: u32 = 50;
pub const GATLING_RELOAD_SECS: f64 = 2.0;
pub const BULLET_SPEED: f64 = 100.0;
pub const BULLET_DAMAGE: i32 = 2;

// --- Player missile rack ---

pub const PLAYER_MISSILE_FIRE_DELAY_SECS: f64 = 0.2;
pub const PLAYER_MISSILE_RECHARGE_SECS: f64 = 2.0;
pub const PLAYER_MAX_MISSILES: u32 = 4;
pub const PLAYER_MISSILE_SPEED: f64 = 50.0;
pub const PLAYER_MISSILE_TRAVEL: f64 = 100.0;

// --- Missile warhead ---

pub const MISSILE_DAMAGE: i32 = 4;
pub const MISSILE_EXPLOSION_RADIUS: f64 = 5.0;
pub const MISSILE_EXPLOSION_FORCE: f64 = 1000.0;

// --- Hostile agent ---

pub const AGENT_SPEED: f64 = 50.0;

/// Slerp factor per second toward the desired heading.
pub const AGENT_ROTATION_SPEED: f64 = 1.5;

pub const AGENT_ENGAGEMENT_DISTANCE: f64 = 1000.0;
pub const AGENT_DETECTION_RANGE: f64 = 1000.0;
pub const AGENT_SHOOT_DISTANCE: f64 = 500.0;
pub const AGENT_BREAK_OFF_DISTANCE: f64 = 300.0;

/// Full width of the firing cone.
pub const AGENT_SHOOTING_ANGLE: f64 = 60.0;

pub const AGENT_MAX_SHOTS: u32 = 3;
pub const AGENT_RELOAD_SECS: f64 = 5.0;
pub const AGENT_MIN_SHOOT_INTERVAL_SECS: f64 = 1.0;
pub const AGENT_MAX_SHOOT_INTERVAL_SECS: f64 = 2.5;
pub const AGENT_MISSILE_SPEED: f64 = 100.0;
pub const AGENT_MISSILE_TRAVEL: f64 = 500.0;

/// Radius of the random aim-point cloud around the target while circling.
pub const CIRCLING_OFFSET_RADIUS: f64 = 150.0;

/// Peak vertical weave speed while circling (m/s).
pub const CIRCLING_WEAVE_AMPLITUDE: f64 = 30.0;

/// Weave frequency is drawn per tick from this range (rad/s).
pub const CIRCLING_WEAVE_FREQ_MIN: f64 = 0.5;
pub const CIRCLING_WEAVE_FREQ_MAX: f64 = 1.5;

/// Roll rate at full lateral steering (deg/s).
pub const CIRCLING_MAX_ROLL_RATE: f64 = 45.0;
