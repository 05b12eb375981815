// error.rs - Failure modes of pattern loading and driver start-up

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while setting the simulation up.
///
/// Stepping and drawing never fail; once the driver is running the only
/// way out is `stop()`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("pattern catalog contains no patterns")]
    EmptyCatalog,

    #[error("pattern index {index} is out of range for a catalog of {len} patterns")]
    PatternIndex { index: usize, len: usize },

    #[error("frame rate must be at least one frame per second")]
    ZeroFrameRate,

    #[error("toroidal grid extents must be non-zero (got {width}x{height})")]
    ZeroExtent { width: u32, height: u32 },

    #[error("animation driver is already running")]
    AlreadyRunning,

    #[error("no tokio runtime available to drive the animation")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),

    #[error("failed to read patterns from {}", .path.display())]
    ReadPatterns {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
