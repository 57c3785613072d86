//! Model configuration
//!
//! All tunable parameters of a run, with the reference defaults. Validated
//! once, before any simulation state exists.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Configuration for a single simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Grid height (rows).
    pub height: usize,
    /// Grid width (columns).
    pub width: usize,
    /// Total steps to simulate. The run always executes exactly this many.
    pub n_steps: u32,
    /// Steps between fire events.
    pub recurrence_interval: u32,
    /// Base colonisation-to-forest maturation time, scaled per cell by soil
    /// fertility.
    pub base_fire_recovery_time: f32,
    /// Mean of the Poisson dispersal-distance distribution.
    pub dispersal_rate: f64,
    /// Probability that fire spreads into an idle forest neighbour.
    pub fire_probability_forest: f64,
    /// Probability that fire spreads into an idle savanna or
    /// colonised-savanna neighbour.
    pub fire_probability_savanna: f64,
    /// Fertility gained by a burning savanna-like cell (ash deposition).
    pub fire_impact: f32,
    /// Fertility lost per step by unburned forest, floored at baseline.
    pub recovery_rate: f32,
    /// Enable the fire-soil fertility feedback rule.
    pub fire_soil_feedback: bool,
    /// Start with an intrinsic soil-type split instead of uniform fertility.
    pub edaphic_boundary: bool,
    /// Initial fertility of the savanna half when the edaphic boundary is
    /// enabled.
    pub savanna_fertility: f32,
    /// Seed for the run's random-number generator. A fixed seed reproduces
    /// the entire run bit for bit.
    pub seed: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig {
            height: 50,
            width: 200,
            n_steps: 2500,
            recurrence_interval: 15,
            base_fire_recovery_time: 15.0,
            dispersal_rate: 1.0,
            fire_probability_forest: 0.035,
            fire_probability_savanna: 0.3,
            fire_impact: 0.2,
            recovery_rate: 0.001,
            fire_soil_feedback: true,
            edaphic_boundary: false,
            savanna_fertility: 5.0,
            seed: 42,
        }
    }
}

impl ModelConfig {
    /// Check every option against its admissible range.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height == 0 || self.width == 0 {
            return Err(ConfigError::InvalidDimensions {
                height: self.height,
                width: self.width,
            });
        }
        if self.n_steps == 0 {
            return Err(ConfigError::InvalidStepCount);
        }
        if self.recurrence_interval == 0 {
            return Err(ConfigError::InvalidRecurrenceInterval);
        }
        for (name, value) in [
            ("fire_probability_forest", self.fire_probability_forest),
            ("fire_probability_savanna", self.fire_probability_savanna),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidProbability { name, value });
            }
        }
        if !self.dispersal_rate.is_finite() || self.dispersal_rate < 0.0 {
            return Err(ConfigError::InvalidDispersalRate(self.dispersal_rate));
        }
        if !self.base_fire_recovery_time.is_finite() || self.base_fire_recovery_time <= 0.0 {
            return Err(ConfigError::InvalidRecoveryTime(self.base_fire_recovery_time));
        }
        for (name, value) in [
            ("fire_impact", self.fire_impact),
            ("recovery_rate", self.recovery_rate),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidFertilityRate { name, value });
            }
        }
        if !self.savanna_fertility.is_finite() || self.savanna_fertility < 1.0 {
            return Err(ConfigError::InvalidSavannaFertility(self.savanna_fertility));
        }
        Ok(())
    }
}
