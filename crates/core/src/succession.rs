//! Vegetation succession: burn losses, maturation and propagule dispersal
//!
//! Maturation runs before dispersal each step, so a cell can never mature and
//! be freshly re-colonised by the same dispersal pass.

use crate::error::ConfigError;
use crate::landscape::{BurnState, Landscape, LandscapeClass};
use rand::Rng;
use rand_distr::{Distribution, Poisson};
use rayon::prelude::*;
use std::f64::consts::TAU;

/// Convert every burning forest or colonised-savanna cell to savanna,
/// modelling catastrophic loss of tree cover to fire. Savanna has no further
/// class to degrade to. Returns the number of converted cells.
pub fn apply_burn_losses(land: &mut Landscape) -> usize {
    let burning = &land.burning;

    land.classes
        .par_iter_mut()
        .enumerate()
        .map(|(idx, class)| {
            if burning[idx] == BurnState::Burning && !matches!(*class, LandscapeClass::Savanna) {
                *class = LandscapeClass::Savanna;
                1
            } else {
                0
            }
        })
        .sum()
}

/// Advance every colonised-savanna cell by one step and promote it to forest
/// once its age reaches the fertility-scaled maturation time
/// `base_fire_recovery_time * fertility`. Returns the number of cells that
/// matured this step.
pub fn mature_colonised(land: &mut Landscape, base_fire_recovery_time: f32) -> usize {
    let mut matured = 0;
    for idx in 0..land.classes.len() {
        if land.classes[idx] != LandscapeClass::ColonisedSavanna {
            continue;
        }

        land.colonisation_age[idx] += 1;
        let required = base_fire_recovery_time * land.fertility[idx];
        if land.colonisation_age[idx] as f32 >= required {
            land.classes[idx] = LandscapeClass::Forest;
            matured += 1;
        }
    }
    matured
}

/// Dispersal-distance distribution for forest propagules.
///
/// Distances are Poisson with the configured mean; a mean of zero is the
/// degenerate distribution that always lands the propagule on its source
/// cell (`rand_distr` rejects a zero rate, so it is stored as `None`).
#[derive(Debug, Clone, Copy)]
pub struct DispersalKernel {
    distance: Option<Poisson<f64>>,
}

impl DispersalKernel {
    /// Build a kernel with the given mean dispersal distance.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDispersalRate`] when the mean is
    /// negative or non-finite.
    pub fn new(mean_distance: f64) -> Result<Self, ConfigError> {
        if !mean_distance.is_finite() || mean_distance < 0.0 {
            return Err(ConfigError::InvalidDispersalRate(mean_distance));
        }

        let distance = if mean_distance > 0.0 {
            Some(
                Poisson::new(mean_distance)
                    .map_err(|_| ConfigError::InvalidDispersalRate(mean_distance))?,
            )
        } else {
            None
        };
        Ok(DispersalKernel { distance })
    }

    /// Draw one dispersal distance.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        self.distance.map_or(0.0, |d| d.sample(rng))
    }
}

/// Emit one propagule from every forest cell and colonise the savanna cells
/// they land on.
///
/// Each propagule draws a Poisson distance and a uniform angle in `[0, 2pi)`;
/// the target is the source offset by `(distance * cos, distance * sin)`
/// rounded to the nearest cell. Out-of-bounds targets are lost. A savanna
/// target becomes colonised savanna with its age reset; any other target
/// class leaves the propagule without effect. Sources are scanned in stable
/// row-major order, so when several propagules hit one cell in a step the
/// first write wins and later ones find it already colonised.
///
/// Returns the number of newly colonised cells.
pub fn disperse_propagules<R: Rng>(
    land: &mut Landscape,
    kernel: &DispersalKernel,
    rng: &mut R,
) -> usize {
    let mut colonised = 0;
    let height = land.height as f64;
    let width = land.width as f64;

    // Dispersal only ever writes Savanna -> ColonisedSavanna, so the forest
    // source set is fixed for the whole scan and in-place iteration is safe.
    for idx in 0..land.classes.len() {
        if land.classes[idx] != LandscapeClass::Forest {
            continue;
        }

        let row = (idx / land.width) as f64;
        let col = (idx % land.width) as f64;

        let distance = kernel.sample(rng);
        let angle = rng.random_range(0.0..TAU);
        let target_row = (row + distance * angle.sin()).round();
        let target_col = (col + distance * angle.cos()).round();

        if target_row < 0.0 || target_col < 0.0 || target_row >= height || target_col >= width {
            // Propagule lost off-grid
            continue;
        }

        let target = land.cell_index(target_row as usize, target_col as usize);
        if land.classes[target] == LandscapeClass::Savanna {
            land.classes[target] = LandscapeClass::ColonisedSavanna;
            land.colonisation_age[target] = 0;
            colonised += 1;
        }
    }
    colonised
}
