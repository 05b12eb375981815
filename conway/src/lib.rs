// lib.rs - Sparse Game of Life engine for a decorative canvas
//
// Data flow: PatternCatalog -> GridState (seed) -> step, driven by
// AnimationDriver -> render callback. Pointer and viewport events become
// `Command`s that the driver applies between generations.

pub mod config;
pub mod driver;
pub mod error;
pub mod grid;
pub mod history;
pub mod input;
pub mod life;
pub mod patterns;
pub mod rules;
pub mod step;

pub use config::{BoundaryMode, SimConfig};
pub use driver::{AnimationDriver, DriverState};
pub use error::{Error, Result};
pub use grid::{BoundaryPolicy, Coord, GridState};
pub use history::CycleDetector;
pub use input::{CellMetrics, InputAdapter};
pub use life::{Command, Frame, Life};
pub use patterns::{Pattern, PatternCatalog, Selector};
pub use rules::RuleParameters;
pub use step::step;
