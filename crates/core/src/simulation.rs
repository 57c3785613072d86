//! Simulation driver
//!
//! Owns the landscape fields and the RNG, schedules fire events, and
//! sequences the phase functions each step:
//! ignition -> spread -> fertility feedback -> burn losses -> expansion.
//! After every step the current landscape is handed to an observer for
//! external rendering or logging; the engine itself performs no I/O.

use crate::config::ModelConfig;
use crate::error::ConfigError;
use crate::fertility;
use crate::fire::{self, SpreadProbabilities};
use crate::landscape::Landscape;
use crate::rng::SimRng;
use crate::succession::{self, DispersalKernel};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Aggregate counters accumulated over a run.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RunStats {
    /// Steps executed so far.
    pub steps: u32,
    /// Fire events that actually ignited (empty-pool events are skipped).
    pub fire_events: u32,
    /// Cells burning at the end of each spread phase, summed over events.
    pub cells_burned: u64,
    /// Savanna cells colonised by propagules.
    pub cells_colonised: u64,
    /// Colonised cells that matured into forest.
    pub cells_matured: u64,
}

/// Final state and counters returned by a completed run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// The landscape after the last step, including the final class and
    /// fertility fields.
    pub landscape: Landscape,
    /// Counters accumulated over the run.
    pub stats: RunStats,
}

/// The forest-savanna boundary simulation.
pub struct Simulation {
    config: ModelConfig,
    landscape: Landscape,
    rng: SimRng,
    kernel: DispersalKernel,
    probabilities: SpreadProbabilities,
    step: u32,
    stats: RunStats,
}

impl Simulation {
    /// Build a simulation from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any option is out of range; no state is
    /// constructed in that case.
    pub fn new(config: ModelConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let kernel = DispersalKernel::new(config.dispersal_rate)?;
        let landscape = Landscape::half_split(
            config.height,
            config.width,
            config.edaphic_boundary,
            config.savanna_fertility,
        );
        let probabilities = SpreadProbabilities {
            forest: config.fire_probability_forest,
            savanna: config.fire_probability_savanna,
        };

        info!(
            height = config.height,
            width = config.width,
            n_steps = config.n_steps,
            recurrence_interval = config.recurrence_interval,
            fire_soil_feedback = config.fire_soil_feedback,
            edaphic_boundary = config.edaphic_boundary,
            seed = config.seed,
            "simulation initialized"
        );

        let rng = SimRng::from_seed_u64(config.seed);
        Ok(Simulation {
            config,
            landscape,
            rng,
            kernel,
            probabilities,
            step: 0,
            stats: RunStats::default(),
        })
    }

    /// The current landscape snapshot.
    pub fn landscape(&self) -> &Landscape {
        &self.landscape
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Steps executed so far.
    pub fn current_step(&self) -> u32 {
        self.step
    }

    /// Execute one simulation step.
    pub fn step(&mut self) {
        self.step += 1;
        let fire_step = self.step % self.config.recurrence_interval == 0;

        if fire_step {
            self.landscape.reset_burning();
            if let Some((row, col)) = fire::ignite(&mut self.landscape, &mut self.rng.0) {
                debug!(step = self.step, row, col, "fire ignited");
                let ignited =
                    fire::spread(&mut self.landscape, self.probabilities, &mut self.rng.0);
                self.stats.fire_events += 1;
                // Seed cell plus everything the spread reached
                self.stats.cells_burned += ignited as u64 + 1;
            } else {
                // Both ignition pools empty: skip the event rather than
                // sample an empty population.
                warn!(step = self.step, "no ignitable cells, skipping fire event");
            }
        }

        if self.config.fire_soil_feedback {
            // The all-idle burn field makes the ash rule a no-op on non-fire
            // steps; forest recovery still applies every step.
            fertility::apply_fire_soil_feedback(
                &mut self.landscape,
                self.config.fire_impact,
                self.config.recovery_rate,
            );
        }

        let lost = succession::apply_burn_losses(&mut self.landscape);
        let matured = succession::mature_colonised(
            &mut self.landscape,
            self.config.base_fire_recovery_time,
        );
        let colonised =
            succession::disperse_propagules(&mut self.landscape, &self.kernel, &mut self.rng.0);

        self.stats.cells_matured += matured as u64;
        self.stats.cells_colonised += colonised as u64;
        if lost > 0 {
            debug!(step = self.step, lost, "burnt tree cover reverted to savanna");
        }

        if fire_step {
            self.landscape.reset_burning();
        }
        self.stats.steps = self.step;
    }

    /// Run all configured steps, handing the landscape to `observer` after
    /// each one, and return the final state.
    pub fn run_with_observer<F>(mut self, mut observer: F) -> RunOutcome
    where
        F: FnMut(&Landscape, u32),
    {
        for _ in 0..self.config.n_steps {
            self.step();
            observer(&self.landscape, self.step);
        }

        info!(
            steps = self.stats.steps,
            fire_events = self.stats.fire_events,
            cells_burned = self.stats.cells_burned,
            cells_colonised = self.stats.cells_colonised,
            cells_matured = self.stats.cells_matured,
            "run complete"
        );

        RunOutcome {
            landscape: self.landscape,
            stats: self.stats,
        }
    }

    /// Run all configured steps without an observer.
    pub fn run(self) -> RunOutcome {
        self.run_with_observer(|_, _| {})
    }
}

/// Run a full simulation from a configuration and return the final landscape
/// and statistics.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the configuration is invalid.
pub fn run_model(config: ModelConfig) -> Result<RunOutcome, ConfigError> {
    Ok(Simulation::new(config)?.run())
}

/// Like [`run_model`], but hands the landscape to `observer` after every
/// step, for external rendering or data logging.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the configuration is invalid.
pub fn run_model_with_observer<F>(
    config: ModelConfig,
    observer: F,
) -> Result<RunOutcome, ConfigError>
where
    F: FnMut(&Landscape, u32),
{
    Ok(Simulation::new(config)?.run_with_observer(observer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landscape::{BurnState, LandscapeClass};

    fn small_config() -> ModelConfig {
        ModelConfig {
            height: 10,
            width: 20,
            n_steps: 50,
            recurrence_interval: 5,
            seed: 7,
            ..ModelConfig::default()
        }
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = ModelConfig {
            n_steps: 0,
            ..ModelConfig::default()
        };
        assert!(Simulation::new(config).is_err());
    }

    #[test]
    fn test_burning_idle_between_steps() {
        let mut sim = Simulation::new(small_config()).unwrap();
        for _ in 0..20 {
            sim.step();
            // The burn field is consumed within the step and reset before
            // the next one begins.
            assert_eq!(sim.landscape().burning_count(), 0);
        }
    }

    #[test]
    fn test_cells_burned_counts_seed_and_spread() {
        // With zero spread probabilities each fire event burns exactly its
        // ignition seed, so the counter advances by one per event.
        let config = ModelConfig {
            height: 5,
            width: 10,
            n_steps: 20,
            recurrence_interval: 5,
            fire_probability_forest: 0.0,
            fire_probability_savanna: 0.0,
            seed: 13,
            ..ModelConfig::default()
        };
        let outcome = run_model(config).unwrap();

        assert_eq!(outcome.stats.fire_events, 4);
        assert_eq!(outcome.stats.cells_burned, 4);
    }

    #[test]
    fn test_observer_sees_every_step() {
        let config = small_config();
        let n_steps = config.n_steps;
        let mut seen = Vec::new();
        let outcome = run_model_with_observer(config, |land, step| {
            assert_eq!(land.cell_count(), 10 * 20);
            seen.push(step);
        })
        .unwrap();

        assert_eq!(seen.len(), n_steps as usize);
        assert_eq!(*seen.last().unwrap(), n_steps);
        assert_eq!(outcome.stats.steps, n_steps);
    }

    #[test]
    fn test_no_fire_run_keeps_burning_idle() {
        // Interval beyond the horizon: fire never triggers, classes change
        // only through dispersal and maturation.
        let config = ModelConfig {
            height: 8,
            width: 16,
            n_steps: 40,
            recurrence_interval: 1000,
            seed: 3,
            ..ModelConfig::default()
        };
        let outcome = run_model_with_observer(config, |land, _| {
            assert!(land.burn_states().iter().all(|&b| b == BurnState::Idle));
        })
        .unwrap();

        assert_eq!(outcome.stats.fire_events, 0);
        assert_eq!(outcome.stats.cells_burned, 0);
        // Without fire, the forest half can only hold or expand.
        let forest = outcome.landscape.class_count(LandscapeClass::Forest);
        assert!(forest >= 8 * 8, "forest should not shrink without fire");
    }

    #[test]
    fn test_class_and_fertility_invariants_hold() {
        let outcome = run_model_with_observer(small_config(), |land, _| {
            assert!(land.fertility().iter().all(|&f| f >= 1.0));
        })
        .unwrap();

        let total = outcome.landscape.class_count(LandscapeClass::Savanna)
            + outcome.landscape.class_count(LandscapeClass::Forest)
            + outcome
                .landscape
                .class_count(LandscapeClass::ColonisedSavanna);
        assert_eq!(total, outcome.landscape.cell_count());
    }
}
