// input.rs - Pixel geometry and pointer/viewport event translation

use crate::config::BoundaryMode;
use crate::life::Command;
use crate::grid::{BoundaryPolicy, Coord};

/// Size of a drawn cell. Each cell occupies a square of `pitch()` pixels:
/// `margin`, the `cell_size` square, `margin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub cell_size: f32,
    pub margin: f32,
    pub border_width: f32,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            cell_size: 6.0,
            margin: 1.0,
            border_width: 1.0,
        }
    }
}

impl CellMetrics {
    pub fn pitch(&self) -> f32 {
        self.cell_size + 2.0 * self.margin
    }

    /// Top-left corner of the filled square for `coord`, as (x, y).
    pub fn cell_origin(&self, coord: Coord) -> (f32, f32) {
        let pitch = self.pitch();
        (
            coord.col as f32 * pitch + self.margin,
            coord.row as f32 * pitch + self.margin,
        )
    }

    /// Cell under the pixel (x, y), floored so negative pixels map to
    /// negative cells.
    pub fn cell_at(&self, x: f32, y: f32) -> Coord {
        let pitch = self.pitch();
        Coord::new((y / pitch).floor() as i64, (x / pitch).floor() as i64)
    }

    /// Torus extents (columns, rows) for a viewport; always one more than
    /// fully fits so partly visible cells wrap too. A zero pitch saturates
    /// to the widest torus rather than overflowing.
    pub fn extents_for(&self, width: f32, height: f32) -> (u32, u32) {
        let pitch = self.pitch();
        let cells = |pixels: f32| ((pixels.max(0.0) / pitch).floor() as u32).saturating_add(1);
        (cells(width), cells(height))
    }
}

/// Turns pointer clicks and viewport resizes into driver commands.
#[derive(Debug, Clone, Copy)]
pub struct InputAdapter {
    metrics: CellMetrics,
    mode: BoundaryMode,
}

impl InputAdapter {
    pub fn new(metrics: CellMetrics, mode: BoundaryMode) -> Self {
        Self { metrics, mode }
    }

    pub fn metrics(&self) -> CellMetrics {
        self.metrics
    }

    /// Boundary policy for a viewport of `width` x `height` pixels.
    pub fn policy_for(&self, width: f32, height: f32) -> BoundaryPolicy {
        match self.mode {
            BoundaryMode::Toroidal => {
                let (cols, rows) = self.metrics.extents_for(width, height);
                BoundaryPolicy::toroidal(cols, rows).unwrap_or(BoundaryPolicy::Unbounded)
            }
            BoundaryMode::Unbounded => BoundaryPolicy::Unbounded,
        }
    }

    /// Click at (x, y) relative to the canvas' top-left corner.
    pub fn click(&self, x: f32, y: f32) -> Command {
        Command::Toggle(self.metrics.cell_at(x, y))
    }

    /// New viewport size. Unbounded grids do not care.
    pub fn resize(&self, width: f32, height: f32) -> Option<Command> {
        match self.mode {
            BoundaryMode::Toroidal => Some(Command::Resize(self.policy_for(width, height))),
            BoundaryMode::Unbounded => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pitch_is_eight_pixels() {
        assert_eq!(CellMetrics::default().pitch(), 8.0);
    }

    #[test]
    fn cell_origin_includes_margin() {
        let metrics = CellMetrics::default();
        assert_eq!(metrics.cell_origin(Coord::new(0, 0)), (1.0, 1.0));
        assert_eq!(metrics.cell_origin(Coord::new(2, 3)), (25.0, 17.0));
    }

    #[test]
    fn pixels_map_back_to_cells() {
        let metrics = CellMetrics::default();
        assert_eq!(metrics.cell_at(0.0, 0.0), Coord::new(0, 0));
        assert_eq!(metrics.cell_at(7.9, 8.0), Coord::new(1, 0));
        assert_eq!(metrics.cell_at(25.0, 17.0), Coord::new(2, 3));
        assert_eq!(metrics.cell_at(-0.5, -0.5), Coord::new(-1, -1));
    }

    #[test]
    fn extents_add_a_partial_cell() {
        let metrics = CellMetrics::default();
        assert_eq!(metrics.extents_for(800.0, 600.0), (101, 76));
        assert_eq!(metrics.extents_for(0.0, 3.0), (1, 1));
        assert_eq!(metrics.extents_for(-10.0, 7.99), (1, 1));
    }

    #[test]
    fn zero_pitch_saturates_extents() {
        let metrics = CellMetrics { cell_size: 0.0, margin: 0.0, border_width: 0.0 };
        assert_eq!(metrics.extents_for(800.0, 600.0), (u32::MAX, u32::MAX));
        assert_eq!(metrics.extents_for(0.0, 0.0), (1, 1));
    }

    #[test]
    fn click_toggles_cell_under_pointer() {
        let adapter = InputAdapter::new(CellMetrics::default(), BoundaryMode::Toroidal);
        assert_eq!(adapter.click(17.0, 9.0), Command::Toggle(Coord::new(1, 2)));
    }

    #[test]
    fn resize_only_matters_on_a_torus() {
        let torus = InputAdapter::new(CellMetrics::default(), BoundaryMode::Toroidal);
        assert_eq!(
            torus.resize(80.0, 40.0),
            Some(Command::Resize(BoundaryPolicy::toroidal(11, 6).unwrap()))
        );

        let plane = InputAdapter::new(CellMetrics::default(), BoundaryMode::Unbounded);
        assert_eq!(plane.resize(80.0, 40.0), None);
        assert_eq!(plane.policy_for(80.0, 40.0), BoundaryPolicy::Unbounded);
    }
}
