//! Configuration errors
//!
//! The only failures the engine surfaces are invalid configurations,
//! rejected before any simulation state is constructed. Stochastic non-events
//! (a fire that fails to spread, a propagule lost off-grid) are normal
//! outcomes, not errors, and there is no retry or rollback logic.

use thiserror::Error;

/// A configuration was rejected at entry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Grid dimensions must both be positive.
    #[error("grid dimensions must be positive, got {height}x{width}")]
    InvalidDimensions {
        /// Configured grid height.
        height: usize,
        /// Configured grid width.
        width: usize,
    },

    /// The run must execute at least one step.
    #[error("n_steps must be positive")]
    InvalidStepCount,

    /// Fire events are scheduled every `recurrence_interval` steps, so the
    /// interval must be positive.
    #[error("recurrence_interval must be positive")]
    InvalidRecurrenceInterval,

    /// A fire-spread probability fell outside `[0, 1]`.
    #[error("{name} must lie in [0, 1], got {value}")]
    InvalidProbability {
        /// Which probability option was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The mean dispersal distance must be finite and non-negative.
    #[error("dispersal_rate must be finite and non-negative, got {0}")]
    InvalidDispersalRate(f64),

    /// The base maturation time must be positive and finite.
    #[error("base_fire_recovery_time must be positive and finite, got {0}")]
    InvalidRecoveryTime(f32),

    /// A fertility rate option must be finite and non-negative.
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidFertilityRate {
        /// Which rate option was rejected.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// The edaphic savanna fertility must not undercut the baseline floor.
    #[error("savanna_fertility must be at least 1.0, got {0}")]
    InvalidSavannaFertility(f32),
}
