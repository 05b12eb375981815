// main.rs - Decorative Game of Life canvas
// Rendering and input live in ui.rs; the simulation runs on a tokio task

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use conway::{AnimationDriver, Command, Coord, Frame, InputAdapter, PatternCatalog, SimConfig};
use eframe::egui;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod ui;

/// Path of an alternative pattern catalog.
pub const PATTERNS_ENV: &str = "CONWAY_PATTERNS";

/// Generations kept for the fading trail.
pub const TRAIL_LEN: usize = 8;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(log_filter(&std::env::var("RUST_LOG").unwrap_or_default()))
        .init();

    let runtime = tokio::runtime::Runtime::new()?;
    let config = SimConfig::default().with_reseed_on_repeat(true);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |cc| Box::new(CanvasApp::new(cc.egui_ctx.clone(), runtime, config))),
    )?;
    Ok(())
}

/// `RUST_LOG`-style directives, falling back to `info` when none are given.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

fn load_catalog() -> conway::Result<PatternCatalog> {
    match std::env::var_os(PATTERNS_ENV) {
        Some(path) => PatternCatalog::load(path),
        None => Ok(PatternCatalog::builtin()),
    }
}

/// Latest frames as seen by the render side.
#[derive(Debug, Default)]
pub struct Snapshot {
    pub generation: u64,
    pub population: usize,
    pub repeating: bool,
    /// Newest first.
    pub trail: VecDeque<Vec<Coord>>,
}

impl Snapshot {
    fn record(&mut self, frame: &Frame<'_>) {
        let cells = frame.grid.sorted_alive();
        // Edits between ticks redraw the current generation in place
        if frame.generation == self.generation && !self.trail.is_empty() {
            self.trail[0] = cells;
        } else {
            self.trail.push_front(cells);
            self.trail.truncate(TRAIL_LEN);
        }
        self.generation = frame.generation;
        self.population = frame.grid.population();
        self.repeating = frame.repeating;
    }
}

pub fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct CanvasApp {
    config: SimConfig,
    input: InputAdapter,
    catalog: Option<PatternCatalog>,
    driver: AnimationDriver,
    runtime: tokio::runtime::Runtime,
    shared: Arc<Mutex<Snapshot>>,
    ctx: egui::Context,
    viewport: Option<egui::Vec2>,
    launched: bool,
}

impl CanvasApp {
    pub fn new(ctx: egui::Context, runtime: tokio::runtime::Runtime, config: SimConfig) -> Self {
        let catalog = match load_catalog() {
            Ok(catalog) => Some(catalog),
            Err(err) => {
                tracing::error!(error = %err, "could not load patterns");
                None
            }
        };
        Self {
            config,
            input: InputAdapter::new(config.metrics, config.boundary),
            catalog,
            driver: AnimationDriver::new(),
            runtime,
            shared: Arc::default(),
            ctx,
            viewport: None,
            launched: false,
        }
    }

    /// Starts the animation once the canvas size is known.
    fn launch(&mut self, size: egui::Vec2) {
        self.launched = true;
        let empty = PatternCatalog::default();
        let catalog = self.catalog.as_ref().unwrap_or(&empty);

        let _guard = self.runtime.enter();
        let policy = self.input.policy_for(size.x, size.y);
        let shared = Arc::clone(&self.shared);
        let ctx = self.ctx.clone();
        // Failures are logged by the driver; the canvas just stays blank
        let _ = self.driver.launch(catalog, Default::default(), &self.config, policy, move |frame| {
            lock(&shared).record(frame);
            ctx.request_repaint();
        });
    }

    fn resize(&mut self, size: egui::Vec2) {
        if let Some(command) = self.input.resize(size.x, size.y) {
            tracing::debug!(width = size.x, height = size.y, "viewport resized");
            self.driver.send(command);
        }
    }

    fn click(&mut self, x: f32, y: f32) {
        self.driver.send(self.input.click(x, y));
    }

    /// Swaps in a fresh random pattern once the grid has settled.
    fn reseed_if_stale(&mut self) {
        if !self.config.reseed_on_repeat {
            return;
        }
        {
            let mut snapshot = lock(&self.shared);
            if !snapshot.repeating {
                return;
            }
            snapshot.repeating = false;
        }
        let Some(catalog) = &self.catalog else { return };
        if let Ok(pattern) = catalog.pick(Default::default()) {
            tracing::info!("grid settled, reseeding");
            self.driver.send(Command::Seed {
                pattern: pattern.clone(),
                origin: self.config.origin,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conway::GridState;

    fn frame_of(grid: &GridState, generation: u64) -> Frame<'_> {
        Frame { generation, grid, repeating: false }
    }

    #[test]
    fn log_filter_defaults_to_info() {
        assert_eq!(log_filter("").max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn log_filter_honours_more_verbose_levels() {
        assert_eq!(log_filter("debug").max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter("trace").max_level_hint(), Some(LevelFilter::TRACE));
        assert_eq!(log_filter("warn").max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn trail_keeps_newest_generations_first() {
        let mut snapshot = Snapshot::default();
        let mut grid = GridState::unbounded();
        for generation in 1..=(TRAIL_LEN as u64 + 3) {
            grid.set(Coord::new(0, generation as i64), true);
            snapshot.record(&frame_of(&grid, generation));
        }
        assert_eq!(snapshot.trail.len(), TRAIL_LEN);
        assert_eq!(snapshot.trail[0].len(), TRAIL_LEN + 3);
        assert_eq!(snapshot.generation, TRAIL_LEN as u64 + 3);
        assert_eq!(snapshot.population, TRAIL_LEN + 3);
    }

    #[test]
    fn edits_replace_the_current_generation() {
        let mut snapshot = Snapshot::default();
        let mut grid = GridState::unbounded();
        grid.set(Coord::ORIGIN, true);
        snapshot.record(&frame_of(&grid, 4));
        grid.set(Coord::new(1, 1), true);
        snapshot.record(&frame_of(&grid, 4));
        assert_eq!(snapshot.trail.len(), 1);
        assert_eq!(snapshot.trail[0], vec![Coord::ORIGIN, Coord::new(1, 1)]);
    }
}
