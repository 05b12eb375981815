// grid.rs - Sparse grid of alive cells and the boundary policy around it

use std::collections::HashSet;
use std::num::NonZeroU32;

use crate::error::{Error, Result};

/// Moore neighbourhood offsets as (row, col) deltas.
pub const NEIGHBOURS: [(i64, i64); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// A cell position. Rows grow downwards, columns to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: i64,
    pub col: i64,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { row: 0, col: 0 };

    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    pub const fn offset(self, d_row: i64, d_col: i64) -> Self {
        Self { row: self.row + d_row, col: self.col + d_col }
    }

    /// The eight surrounding coordinates, before any wrapping.
    pub fn neighbours(self) -> impl Iterator<Item = Coord> {
        NEIGHBOURS.into_iter().map(move |(dr, dc)| self.offset(dr, dc))
    }
}

impl From<(i64, i64)> for Coord {
    fn from((row, col): (i64, i64)) -> Self {
        Self { row, col }
    }
}

/// How coordinates behave at the edge of the visible area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Rows wrap modulo `height`, columns modulo `width`.
    Toroidal { width: NonZeroU32, height: NonZeroU32 },
    /// Plain integer plane, no wrapping.
    Unbounded,
}

impl BoundaryPolicy {
    pub fn toroidal(width: u32, height: u32) -> Result<Self> {
        match (NonZeroU32::new(width), NonZeroU32::new(height)) {
            (Some(width), Some(height)) => Ok(Self::Toroidal { width, height }),
            _ => Err(Error::ZeroExtent { width, height }),
        }
    }

    /// Maps a coordinate onto the torus. Floored modulo, so -1 becomes the
    /// last row/column rather than staying negative.
    pub fn wrap(&self, coord: Coord) -> Coord {
        match *self {
            Self::Toroidal { width, height } => Coord {
                row: coord.row.rem_euclid(i64::from(height.get())),
                col: coord.col.rem_euclid(i64::from(width.get())),
            },
            Self::Unbounded => coord,
        }
    }
}

/// Set of alive cells. A coordinate that is not stored is dead.
///
/// `set` stores coordinates as given, even outside a toroidal extent (a
/// seed larger than the viewport, or cells left behind by a resize). Such
/// cells are folded back onto the torus by the next `step`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    alive: HashSet<Coord>,
    policy: BoundaryPolicy,
}

impl GridState {
    pub fn new(policy: BoundaryPolicy) -> Self {
        Self { alive: HashSet::new(), policy }
    }

    pub fn unbounded() -> Self {
        Self::new(BoundaryPolicy::Unbounded)
    }

    pub fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    /// Takes effect for the next neighbour count or step. Stored cells are
    /// left where they are.
    pub fn set_policy(&mut self, policy: BoundaryPolicy) {
        self.policy = policy;
    }

    pub fn set(&mut self, coord: Coord, alive: bool) {
        if alive {
            self.alive.insert(coord);
        } else {
            self.alive.remove(&coord);
        }
    }

    pub fn toggle(&mut self, coord: Coord) {
        let alive = self.is_alive(coord);
        self.set(coord, !alive);
    }

    pub fn is_alive(&self, coord: Coord) -> bool {
        self.alive.contains(&coord)
    }

    pub fn clear(&mut self) {
        self.alive.clear();
    }

    pub fn population(&self) -> usize {
        self.alive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alive.is_empty()
    }

    pub fn alive_neighbour_count(&self, coord: Coord) -> u8 {
        coord
            .neighbours()
            .filter(|&n| self.is_alive(self.policy.wrap(n)))
            .count() as u8
    }

    pub fn iter_alive(&self) -> impl Iterator<Item = Coord> + '_ {
        self.alive.iter().copied()
    }

    /// Alive cells in row-major order, for stable output and fingerprints.
    pub fn sorted_alive(&self) -> Vec<Coord> {
        let mut cells: Vec<Coord> = self.iter_alive().collect();
        cells.sort_unstable();
        cells
    }

    /// Same grid with every stored cell wrapped onto the current extent.
    /// Cells that land on the same spot merge.
    pub fn normalized(&self) -> GridState {
        match self.policy {
            BoundaryPolicy::Unbounded => self.clone(),
            policy @ BoundaryPolicy::Toroidal { .. } => GridState {
                alive: self.alive.iter().map(|&c| policy.wrap(c)).collect(),
                policy,
            },
        }
    }
}

impl Default for GridState {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl Extend<Coord> for GridState {
    fn extend<I: IntoIterator<Item = Coord>>(&mut self, cells: I) {
        self.alive.extend(cells);
    }
}
