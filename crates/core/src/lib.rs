//! Forest-Savanna Boundary Simulation Core Library
//!
//! A discrete-time, discrete-space stochastic cellular model of forest-savanna
//! boundary dynamics on a 2-D landscape grid, driven by stochastic fire
//! ignition and percolation-style spread, soil-fertility feedback, and forest
//! propagule dispersal. Used to explore whether fire-soil feedback or an
//! edaphic (soil-type) boundary better explains observed vegetation
//! transitions.
//!
//! Each step's phases execute strictly in sequence; only the per-cell rules
//! with no cross-cell dependency (fertility feedback, burn losses) run
//! data-parallel. All randomness comes from one seedable generator so a fixed
//! seed reproduces a run exactly. The engine performs no rendering or I/O: it
//! yields the grid state after every step for external consumers.

pub mod config;
pub mod error;
pub mod fertility;
pub mod fire;
pub mod landscape;
pub mod rng;
pub mod simulation;
pub mod succession;

// Re-export the public surface
pub use config::ModelConfig;
pub use error::ConfigError;
pub use fire::SpreadProbabilities;
pub use landscape::{BurnState, Landscape, LandscapeClass, FERTILITY_BASELINE};
pub use rng::SimRng;
pub use simulation::{run_model, run_model_with_observer, RunOutcome, RunStats, Simulation};
pub use succession::DispersalKernel;
