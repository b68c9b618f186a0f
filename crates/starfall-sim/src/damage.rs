//! Damage model: shield-first absorption with hull overflow, and delayed
//! periodic shield regeneration.

use starfall_core::components::DamageModel;
use starfall_core::config::HullConfig;

/// Result of applying one hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Hit resolved; the entity is still alive.
    Survived,
    /// This hit destroyed the entity. Returned at most once per model.
    Destroyed,
    /// The model was already destroyed; nothing changed.
    Inert,
}

/// Fresh model with full hull and shield, regen clocks anchored at `now`.
pub fn new_model(config: &HullConfig, now: f64) -> DamageModel {
    DamageModel {
        max_hull: config.max_hull,
        hull: config.max_hull,
        max_shield: config.max_shield,
        shield: config.max_shield,
        shield_regen_fraction: config.shield_regen_fraction,
        regen_delay_secs: config.regen_delay_secs,
        regen_tick_secs: config.regen_tick_secs,
        last_damage_secs: now,
        last_regen_tick_secs: now,
        destroyed: false,
    }
}

/// Apply `amount` points of damage. Negative amounts count as zero.
pub fn apply_damage(model: &mut DamageModel, amount: i32, now: f64) -> DamageOutcome {
    if model.destroyed {
        return DamageOutcome::Inert;
    }
    let amount = amount.max(0);

    if model.shield > 0 {
        model.shield = model.shield.saturating_sub(amount);
        if model.shield < 0 {
            // shield holds the overflow here
            model.hull = model.hull.saturating_add(model.shield);
            model.shield = 0;
        }
    } else {
        model.hull = model.hull.saturating_sub(amount);
    }

    model.last_damage_secs = now;

    if model.hull <= 0 {
        model.hull = 0;
        model.destroyed = true;
        return DamageOutcome::Destroyed;
    }
    DamageOutcome::Survived
}

/// Whether a regen tick is due at `now`.
pub fn regen_due(model: &DamageModel, now: f64) -> bool {
    !model.destroyed
        && model.shield < model.max_shield
        && now >= model.last_damage_secs + model.regen_delay_secs
        && now >= model.last_regen_tick_secs + model.regen_tick_secs
}

/// Run one regen tick if due. Returns the new shield value when it ticked.
pub fn regen_tick(model: &mut DamageModel, now: f64) -> Option<i32> {
    if !regen_due(model, now) {
        return None;
    }
    model.shield = model
        .shield
        .saturating_add(regen_amount(model))
        .min(model.max_shield);
    model.last_regen_tick_secs = now;
    Some(model.shield)
}

/// Shield points restored per tick. Halves round to even.
pub fn regen_amount(model: &DamageModel) -> i32 {
    (model.max_shield as f64 * model.shield_regen_fraction).round_ties_even() as i32
}
