//! Stochastic fire ignition and percolation-style spread
//!
//! A fire event is ignition of a single cell followed by breadth-first
//! wavefront propagation across the Moore (8-connected) neighbourhood. Each
//! (source, target) adjacency is an independent Bernoulli trial, so spread
//! extent varies run to run even on identical landscape state.

use crate::landscape::{BurnState, Landscape, LandscapeClass};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 8-connected neighbourhood offsets, `(row, col)`.
const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Per-class probabilities that an idle neighbour of a burning cell catches
/// fire in one spread round.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpreadProbabilities {
    /// Ignition probability for forest cells.
    pub forest: f64,
    /// Ignition probability for savanna and colonised-savanna cells.
    pub savanna: f64,
}

impl Default for SpreadProbabilities {
    fn default() -> Self {
        SpreadProbabilities {
            forest: 0.035,
            savanna: 0.3,
        }
    }
}

/// Select one cell to start a fire event and mark it burning.
///
/// Sampling is two-tier: uniform over all savanna and colonised-savanna
/// cells; if none exist, uniform over forest cells. Returns the ignited
/// `(row, col)`, or `None` when both pools are empty (the driver skips the
/// fire event in that case).
pub fn ignite<R: Rng>(land: &mut Landscape, rng: &mut R) -> Option<(usize, usize)> {
    let mut pool: Vec<usize> = land
        .classes
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_savanna_like())
        .map(|(idx, _)| idx)
        .collect();

    if pool.is_empty() {
        pool = land
            .classes
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == LandscapeClass::Forest)
            .map(|(idx, _)| idx)
            .collect();
    }

    if pool.is_empty() {
        return None;
    }

    let idx = pool[rng.random_range(0..pool.len())];
    land.burning[idx] = BurnState::Burning;
    Some((idx / land.width, idx % land.width))
}

/// Propagate fire from the currently burning cells to quiescence.
///
/// Breadth-first wavefront: each round, every frontier cell tests its idle
/// Moore neighbours with the class-appropriate probability. A neighbour that
/// catches fire is marked burning immediately and joins the next frontier, so
/// later sources in the same round no longer test it; until then, every
/// adjacency is an independent trial. Terminates when a round ignites
/// nothing, which is bounded by the grid diameter.
///
/// Returns the number of newly ignited cells (the seeds excluded).
pub fn spread<R: Rng>(land: &mut Landscape, probs: SpreadProbabilities, rng: &mut R) -> usize {
    let mut frontier: Vec<usize> = land
        .burning
        .iter()
        .enumerate()
        .filter(|(_, b)| **b == BurnState::Burning)
        .map(|(idx, _)| idx)
        .collect();

    let mut ignited = 0_usize;
    let mut rounds = 0_usize;

    while !frontier.is_empty() {
        let mut next = Vec::new();
        for &idx in &frontier {
            let row = (idx / land.width) as i64;
            let col = (idx % land.width) as i64;

            for (d_row, d_col) in MOORE_OFFSETS {
                let n_row = row + d_row;
                let n_col = col + d_col;
                if !land.in_bounds(n_row, n_col) {
                    continue;
                }

                let n_idx = land.cell_index(n_row as usize, n_col as usize);
                if land.burning[n_idx] != BurnState::Idle {
                    continue;
                }

                let p = if land.classes[n_idx] == LandscapeClass::Forest {
                    probs.forest
                } else {
                    probs.savanna
                };
                if rng.random::<f64>() < p {
                    land.burning[n_idx] = BurnState::Burning;
                    next.push(n_idx);
                    ignited += 1;
                }
            }
        }
        rounds += 1;
        frontier = next;
    }

    debug!(rounds, ignited, "fire spread complete");
    ignited
}
