//! Weapon station: fire-rate gating, ammo/charge accounting and reload timers.
//!
//! All waiting is a comparison against the simulation clock. Callers run
//! [`update`] once per tick to settle deferred transitions (reload completion,
//! charge restore) and then [`try_fire`] when the trigger is down.

use rand::Rng;

use starfall_core::components::{WeaponMagazine, WeaponStation};
use starfall_core::config::{FireCadence, ProjectileSpec, ReloadPolicy, WeaponSpec};
use starfall_core::enums::BlockReason;

/// Result of a fire attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FireOutcome {
    /// Round discharged; spawn a projectile from this spec.
    Fired(ProjectileSpec),
    Blocked(BlockReason),
}

/// Deferred transitions settled by [`update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaponEvent {
    ReloadComplete,
    Recharged,
}

/// Station with a full magazine, ready to fire immediately.
pub fn new_station(spec: WeaponSpec, now: f64) -> WeaponStation {
    WeaponStation {
        spec,
        magazine: WeaponMagazine {
            ammo: spec.max_ammo,
            last_fired_secs: None,
            next_interval_secs: 0.0,
            reloading: false,
            reload_started_secs: now,
            recharge_anchor_secs: now,
        },
    }
}

pub fn update(station: &mut WeaponStation, now: f64) -> Option<WeaponEvent> {
    let max_ammo = station.spec.max_ammo;
    let mag = &mut station.magazine;

    match station.spec.reload {
        ReloadPolicy::Magazine { reload_secs } => {
            if mag.reloading && now >= mag.reload_started_secs + reload_secs {
                mag.reloading = false;
                mag.ammo = max_ammo;
                return Some(WeaponEvent::ReloadComplete);
            }
        }
        ReloadPolicy::Recharge { recharge_secs } => {
            if mag.ammo < max_ammo && now >= mag.recharge_anchor_secs + recharge_secs {
                mag.ammo += 1;
                mag.recharge_anchor_secs = now;
                return Some(WeaponEvent::Recharged);
            }
        }
    }
    None
}

/// Attempt one discharge at `now`.
///
/// Emptying a magazine weapon starts its reload on the same call.
pub fn try_fire<R: Rng + ?Sized>(
    station: &mut WeaponStation,
    now: f64,
    rng: &mut R,
) -> FireOutcome {
    let spec = station.spec;
    let mag = &mut station.magazine;

    if mag.reloading {
        return FireOutcome::Blocked(BlockReason::Reloading);
    }
    if mag.ammo == 0 {
        return FireOutcome::Blocked(BlockReason::Empty);
    }
    if let Some(last) = mag.last_fired_secs {
        if now < last + mag.next_interval_secs {
            return FireOutcome::Blocked(BlockReason::OnCooldown);
        }
    }

    mag.ammo -= 1;
    mag.last_fired_secs = Some(now);
    mag.next_interval_secs = draw_interval(&spec.cadence, rng);

    match spec.reload {
        ReloadPolicy::Magazine { .. } => {
            if mag.ammo == 0 {
                mag.reloading = true;
                mag.reload_started_secs = now;
            }
        }
        ReloadPolicy::Recharge { .. } => {
            mag.recharge_anchor_secs = now;
        }
    }

    FireOutcome::Fired(spec.projectile)
}

/// Seconds until the fire-rate gate opens (0 when open).
pub fn cooldown_remaining(station: &WeaponStation, now: f64) -> f64 {
    let mag = &station.magazine;
    mag.last_fired_secs
        .map_or(0.0, |last| (last + mag.next_interval_secs - now).max(0.0))
}

/// Progress of the running reload or recharge in `[0, 1]`; 1.0 when idle.
pub fn reload_progress(station: &WeaponStation, now: f64) -> f64 {
    let mag = &station.magazine;
    match station.spec.reload {
        ReloadPolicy::Magazine { reload_secs } if mag.reloading => {
            ((now - mag.reload_started_secs) / reload_secs).clamp(0.0, 1.0)
        }
        ReloadPolicy::Recharge { recharge_secs } if mag.ammo < station.spec.max_ammo => {
            ((now - mag.recharge_anchor_secs) / recharge_secs).clamp(0.0, 1.0)
        }
        _ => 1.0,
    }
}

fn draw_interval<R: Rng + ?Sized>(cadence: &FireCadence, rng: &mut R) -> f64 {
    match *cadence {
        FireCadence::Fixed { interval_secs } => interval_secs,
        FireCadence::Randomized { min_secs, max_secs } => {
            if max_secs > min_secs {
                rng.gen_range(min_secs..=max_secs)
            } else {
                min_secs
            }
        }
    }
}
