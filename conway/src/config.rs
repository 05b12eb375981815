// config.rs - Simulation settings

use crate::grid::Coord;
use crate::input::CellMetrics;
use crate::rules::RuleParameters;

pub const DEFAULT_FPS: u32 = 10;

/// Which boundary policy the grid gets once the viewport is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryMode {
    /// Wrap at the viewport edges; extents follow resizes.
    #[default]
    Toroidal,
    Unbounded,
}

/// Everything needed to set up a simulation. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    pub metrics: CellMetrics,
    pub fps: u32,
    pub rules: RuleParameters,
    pub boundary: BoundaryMode,
    /// Where the seed pattern's top-left corner lands.
    pub origin: Coord,
    /// Replace the pattern once the grid settles into a short cycle.
    pub reseed_on_repeat: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            metrics: CellMetrics::default(),
            fps: DEFAULT_FPS,
            rules: RuleParameters::CONWAY,
            boundary: BoundaryMode::Toroidal,
            origin: Coord::ORIGIN,
            reseed_on_repeat: false,
        }
    }
}

impl SimConfig {
    pub fn with_metrics(self, metrics: CellMetrics) -> Self {
        Self { metrics, ..self }
    }

    pub fn with_fps(self, fps: u32) -> Self {
        Self { fps, ..self }
    }

    pub fn with_rules(self, rules: RuleParameters) -> Self {
        Self { rules, ..self }
    }

    pub fn with_boundary(self, boundary: BoundaryMode) -> Self {
        Self { boundary, ..self }
    }

    pub fn with_origin(self, origin: Coord) -> Self {
        Self { origin, ..self }
    }

    pub fn with_reseed_on_repeat(self, reseed_on_repeat: bool) -> Self {
        Self { reseed_on_repeat, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_canvas_constructor() {
        let config = SimConfig::default();
        assert_eq!(config.metrics.cell_size, 6.0);
        assert_eq!(config.metrics.margin, 1.0);
        assert_eq!(config.metrics.border_width, 1.0);
        assert_eq!(config.fps, 10);
        assert_eq!(config.rules, RuleParameters::new(2, 3, 3));
        assert_eq!(config.boundary, BoundaryMode::Toroidal);
    }

    #[test]
    fn builders_override_single_fields() {
        let config = SimConfig::default()
            .with_fps(30)
            .with_boundary(BoundaryMode::Unbounded)
            .with_origin(Coord::new(5, 5));
        assert_eq!(config.fps, 30);
        assert_eq!(config.boundary, BoundaryMode::Unbounded);
        assert_eq!(config.origin, Coord::new(5, 5));
        assert_eq!(config.rules, RuleParameters::CONWAY);
    }
}
