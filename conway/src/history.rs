// history.rs - Detects generations that repeat recent ones

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::GridState;

/// Number of recent generations remembered.
pub const HISTORY_LEN: usize = 10;

/// Order-independent fingerprint of the alive set.
pub fn fingerprint(grid: &GridState) -> u64 {
    let mut hasher = DefaultHasher::new();
    for cell in grid.sorted_alive() {
        cell.hash(&mut hasher);
    }
    hasher.finish()
}

/// Remembers the fingerprints of the last `HISTORY_LEN` generations.
///
/// A still life shows up one generation after it settles, an oscillator with
/// period up to `HISTORY_LEN` within one period.
#[derive(Debug, Clone, Default)]
pub struct CycleDetector {
    history: [u64; HISTORY_LEN],
    count: usize,
}

impl CycleDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `grid`; true if it matches one of the remembered generations.
    pub fn observe(&mut self, grid: &GridState) -> bool {
        let current = fingerprint(grid);
        let filled = self.count.min(HISTORY_LEN);
        if self.history[..filled].contains(&current) {
            return true;
        }
        self.history[self.count % HISTORY_LEN] = current;
        self.count += 1;
        false
    }

    pub fn reset(&mut self) {
        self.history = [0; HISTORY_LEN];
        self.count = 0;
    }
}
