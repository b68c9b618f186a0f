//! Error types for configuration loading.
//!
//! Combat conditions (blocked fire, damage on a destroyed hull, missing weapon
//! mount) are not errors; they are reported through outcome enums.

use thiserror::Error;

/// Rejected simulation configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be within [0, 1], got {value}")]
    OutOfUnitRange { field: &'static str, value: f64 },

    #[error("shoot interval range is inverted: min {min} > max {max}")]
    InvertedInterval { min: f64, max: f64 },

    #[error("{weapon} must hold at least one round")]
    EmptyMagazine { weapon: &'static str },
}
