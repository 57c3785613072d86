//! 2-D landscape grid state for the forest-savanna boundary model
//!
//! The `Landscape` owns four dense fields of identical H x W shape: vegetation
//! class, burn state, soil fertility and colonisation age. Fields are created
//! once per run and mutated in place by the phase functions; they are never
//! resized. Indexing is row-major: `index = row * width + col`.

use serde::{Deserialize, Serialize};

/// Baseline soil fertility. Recovery never drives a cell below this value.
pub const FERTILITY_BASELINE: f32 = 1.0;

/// Vegetation class of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LandscapeClass {
    /// Open, low-biomass vegetation with high fire probability.
    Savanna,
    /// Closed-canopy vegetation with low fire probability and slow fertility recovery.
    Forest,
    /// Savanna recently occupied by a forest propagule, maturing toward forest.
    ColonisedSavanna,
}

impl LandscapeClass {
    /// True for the low-biomass classes (savanna and colonised savanna) that
    /// ignite at the savanna fire probability and deposit ash when burned.
    pub fn is_savanna_like(self) -> bool {
        matches!(
            self,
            LandscapeClass::Savanna | LandscapeClass::ColonisedSavanna
        )
    }
}

/// Burn state of a single grid cell during a fire event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BurnState {
    /// Not on fire. The whole grid is idle outside the spread phase.
    Idle,
    /// On fire for the duration of the current fire event.
    Burning,
}

/// The landscape grid and its auxiliary per-cell fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Landscape {
    pub(crate) height: usize,
    pub(crate) width: usize,
    /// Vegetation class per cell, row-major.
    pub(crate) classes: Vec<LandscapeClass>,
    /// Burn state per cell, all-idle outside an active fire event.
    pub(crate) burning: Vec<BurnState>,
    /// Soil fertility per cell, a maturation-time multiplier >= 1.0.
    pub(crate) fertility: Vec<f32>,
    /// Consecutive steps a cell has held `ColonisedSavanna`. Only meaningful
    /// while the cell holds that class; stale otherwise and never read.
    pub(crate) colonisation_age: Vec<u32>,
}

impl Landscape {
    /// Create the initial landscape partition: left half savanna, right half
    /// forest, sharp boundary at `width / 2`.
    ///
    /// With `edaphic_boundary` disabled, fertility is uniform at
    /// [`FERTILITY_BASELINE`]. Enabled, the savanna half starts at
    /// `savanna_fertility` and the forest half at the baseline, modelling an
    /// intrinsic soil-type difference independent of fire history.
    pub fn half_split(
        height: usize,
        width: usize,
        edaphic_boundary: bool,
        savanna_fertility: f32,
    ) -> Self {
        let cell_count = height * width;
        let boundary = width / 2;

        let mut classes = Vec::with_capacity(cell_count);
        let mut fertility = Vec::with_capacity(cell_count);
        for _row in 0..height {
            for col in 0..width {
                if col < boundary {
                    classes.push(LandscapeClass::Savanna);
                    fertility.push(if edaphic_boundary {
                        savanna_fertility
                    } else {
                        FERTILITY_BASELINE
                    });
                } else {
                    classes.push(LandscapeClass::Forest);
                    fertility.push(FERTILITY_BASELINE);
                }
            }
        }

        Landscape {
            height,
            width,
            classes,
            burning: vec![BurnState::Idle; cell_count],
            fertility,
            colonisation_age: vec![0; cell_count],
        }
    }

    /// Grid height (rows).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Grid width (columns).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.classes.len()
    }

    /// Flat index of `(row, col)`.
    #[inline]
    pub(crate) fn cell_index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Whether signed coordinates fall inside `[0, H) x [0, W)`.
    #[inline]
    pub(crate) fn in_bounds(&self, row: i64, col: i64) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Vegetation class at `(row, col)`, bounds-checked.
    pub fn class_at(&self, row: usize, col: usize) -> Option<LandscapeClass> {
        if row < self.height && col < self.width {
            Some(self.classes[self.cell_index(row, col)])
        } else {
            None
        }
    }

    /// Overwrite the vegetation class at `(row, col)`. Returns `false` if the
    /// coordinates are out of bounds.
    pub fn set_class(&mut self, row: usize, col: usize, class: LandscapeClass) -> bool {
        if row < self.height && col < self.width {
            let idx = self.cell_index(row, col);
            self.classes[idx] = class;
            true
        } else {
            false
        }
    }

    /// Burn state at `(row, col)`, bounds-checked.
    pub fn burn_state_at(&self, row: usize, col: usize) -> Option<BurnState> {
        if row < self.height && col < self.width {
            Some(self.burning[self.cell_index(row, col)])
        } else {
            None
        }
    }

    /// Soil fertility at `(row, col)`, bounds-checked.
    pub fn fertility_at(&self, row: usize, col: usize) -> Option<f32> {
        if row < self.height && col < self.width {
            Some(self.fertility[self.cell_index(row, col)])
        } else {
            None
        }
    }

    /// Overwrite the soil fertility at `(row, col)`. Returns `false` if the
    /// coordinates are out of bounds.
    pub fn set_fertility(&mut self, row: usize, col: usize, value: f32) -> bool {
        if row < self.height && col < self.width {
            let idx = self.cell_index(row, col);
            self.fertility[idx] = value;
            true
        } else {
            false
        }
    }

    /// Colonisation age at `(row, col)`, bounds-checked. Only meaningful while
    /// the cell is classed `ColonisedSavanna`.
    pub fn colonisation_age_at(&self, row: usize, col: usize) -> Option<u32> {
        if row < self.height && col < self.width {
            Some(self.colonisation_age[self.cell_index(row, col)])
        } else {
            None
        }
    }

    /// Full vegetation class field, row-major. For external renderers/loggers.
    pub fn classes(&self) -> &[LandscapeClass] {
        &self.classes
    }

    /// Full fertility field, row-major. For external renderers/loggers.
    pub fn fertility(&self) -> &[f32] {
        &self.fertility
    }

    /// Full burn state field, row-major.
    pub fn burn_states(&self) -> &[BurnState] {
        &self.burning
    }

    /// Clear the burn field back to all-idle.
    pub fn reset_burning(&mut self) {
        self.burning.fill(BurnState::Idle);
    }

    /// Number of cells currently holding `class`.
    pub fn class_count(&self, class: LandscapeClass) -> usize {
        self.classes.iter().filter(|&&c| c == class).count()
    }

    /// Number of cells currently burning.
    pub fn burning_count(&self) -> usize {
        self.burning
            .iter()
            .filter(|&&b| b == BurnState::Burning)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_split_partition() {
        let land = Landscape::half_split(4, 10, false, 5.0);

        assert_eq!(land.height(), 4);
        assert_eq!(land.width(), 10);
        assert_eq!(land.cell_count(), 40);

        // Sharp boundary at width / 2
        assert_eq!(land.class_at(0, 4), Some(LandscapeClass::Savanna));
        assert_eq!(land.class_at(0, 5), Some(LandscapeClass::Forest));
        assert_eq!(land.class_count(LandscapeClass::Savanna), 20);
        assert_eq!(land.class_count(LandscapeClass::Forest), 20);
        assert_eq!(land.class_count(LandscapeClass::ColonisedSavanna), 0);

        // Edaphic boundary disabled: uniform baseline fertility
        assert!(land.fertility().iter().all(|&f| f == FERTILITY_BASELINE));
    }

    #[test]
    fn test_edaphic_fertility_split() {
        let land = Landscape::half_split(2, 6, true, 5.0);

        assert_eq!(land.fertility_at(1, 2), Some(5.0));
        assert_eq!(land.fertility_at(1, 3), Some(FERTILITY_BASELINE));
    }

    #[test]
    fn test_bounds_checked_access() {
        let mut land = Landscape::half_split(3, 3, false, 5.0);

        assert!(land.class_at(3, 0).is_none());
        assert!(land.class_at(0, 3).is_none());
        assert!(!land.set_class(3, 3, LandscapeClass::Forest));

        assert!(land.set_class(1, 1, LandscapeClass::ColonisedSavanna));
        assert_eq!(land.class_at(1, 1), Some(LandscapeClass::ColonisedSavanna));
    }

    #[test]
    fn test_reset_burning() {
        let mut land = Landscape::half_split(2, 2, false, 5.0);
        land.burning[0] = BurnState::Burning;
        assert_eq!(land.burning_count(), 1);

        land.reset_burning();
        assert_eq!(land.burning_count(), 0);
    }

    #[test]
    fn test_savanna_like_classes() {
        assert!(LandscapeClass::Savanna.is_savanna_like());
        assert!(LandscapeClass::ColonisedSavanna.is_savanna_like());
        assert!(!LandscapeClass::Forest.is_savanna_like());
    }
}
