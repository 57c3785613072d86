//! Fire-soil fertility feedback
//!
//! Purely per-cell, state-dependent updates with no neighbourhood
//! interaction and no randomness, so the pass runs in parallel without
//! affecting determinism.

use crate::landscape::{BurnState, Landscape, LandscapeClass, FERTILITY_BASELINE};
use rayon::prelude::*;

/// Update the fertility field from the current burn and class fields.
///
/// Burning savanna or colonised savanna deposits ash: fertility rises by
/// `fire_impact`. Unburned forest slowly recovers toward baseline: fertility
/// falls by `recovery_rate`, floored at [`FERTILITY_BASELINE`]. All other
/// cells are unchanged.
pub fn apply_fire_soil_feedback(land: &mut Landscape, fire_impact: f32, recovery_rate: f32) {
    let classes = &land.classes;
    let burning = &land.burning;

    land.fertility
        .par_iter_mut()
        .enumerate()
        .for_each(|(idx, fert)| match (classes[idx], burning[idx]) {
            (LandscapeClass::Savanna | LandscapeClass::ColonisedSavanna, BurnState::Burning) => {
                *fert += fire_impact;
            }
            (LandscapeClass::Forest, BurnState::Idle) => {
                *fert = (*fert - recovery_rate).max(FERTILITY_BASELINE);
            }
            _ => {}
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_burning_savanna_gains_fertility() {
        let mut land = Landscape::half_split(2, 4, false, 5.0);
        let idx = land.cell_index(0, 0);
        land.burning[idx] = BurnState::Burning;

        apply_fire_soil_feedback(&mut land, 0.2, 0.001);

        assert_relative_eq!(land.fertility_at(0, 0).unwrap(), 1.2);
        // Idle savanna neighbour untouched
        assert_relative_eq!(land.fertility_at(0, 1).unwrap(), 1.0);
    }

    #[test]
    fn test_unburned_forest_recovers_with_floor() {
        let mut land = Landscape::half_split(1, 2, false, 5.0);
        land.classes[0] = LandscapeClass::Forest;
        land.classes[1] = LandscapeClass::Forest;
        land.fertility[0] = 1.5;
        land.fertility[1] = FERTILITY_BASELINE;

        for _ in 0..100 {
            apply_fire_soil_feedback(&mut land, 0.2, 0.01);
        }

        // Recovered down to the floor, never below it
        assert_relative_eq!(land.fertility[0], FERTILITY_BASELINE);
        assert_relative_eq!(land.fertility[1], FERTILITY_BASELINE);
    }

    #[test]
    fn test_burning_forest_is_unchanged() {
        let mut land = Landscape::half_split(1, 2, false, 5.0);
        land.classes[0] = LandscapeClass::Forest;
        land.fertility[0] = 2.0;
        land.burning[0] = BurnState::Burning;

        apply_fire_soil_feedback(&mut land, 0.2, 0.001);

        // Neither ash deposition nor recovery applies to burning forest
        assert_relative_eq!(land.fertility[0], 2.0);
    }
}
