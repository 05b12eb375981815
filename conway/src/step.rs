// step.rs - One generation transition over the sparse grid

use std::collections::HashSet;

use crate::grid::{Coord, GridState};
use crate::rules::RuleParameters;

/// Every cell that could be alive next generation: the alive cells and their
/// neighbours, already wrapped by the grid's boundary policy.
pub fn candidates(grid: &GridState) -> HashSet<Coord> {
    let policy = grid.policy();
    let mut cells = HashSet::with_capacity(grid.population() * 9);
    for cell in grid.iter_alive() {
        cells.insert(policy.wrap(cell));
        cells.extend(cell.neighbours().map(|n| policy.wrap(n)));
    }
    cells
}

/// Computes the next generation. Neighbour counts are all taken against
/// `grid`; the result is a fresh grid with the same boundary policy.
pub fn step(grid: &GridState, rules: &RuleParameters) -> GridState {
    // Cells stranded outside a (shrunk) torus are folded back first
    let current = grid.normalized();

    let mut next = GridState::new(current.policy());
    next.extend(candidates(&current).into_iter().filter(|&cell| {
        rules.next_state(current.is_alive(cell), current.alive_neighbour_count(cell))
    }));
    next
}

/// Applies `step` `generations` times.
pub fn advance(grid: &GridState, rules: &RuleParameters, generations: usize) -> GridState {
    let mut current = grid.clone();
    for _ in 0..generations {
        current = step(&current, rules);
    }
    current
}
