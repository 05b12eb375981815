// life.rs - Grid, rules and generation bookkeeping bundled together

use crate::grid::{BoundaryPolicy, Coord, GridState};
use crate::history::CycleDetector;
use crate::patterns::{self, Pattern};
use crate::rules::RuleParameters;
use crate::step::step;

/// Direct edits, applied between generations.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Toggle(Coord),
    Set(Coord, bool),
    /// New boundary policy; used for the next step.
    Resize(BoundaryPolicy),
    Seed { pattern: Pattern, origin: Coord },
    Clear,
}

/// What the render callback gets to see.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub generation: u64,
    pub grid: &'a GridState,
    /// This generation repeats one of the last few.
    pub repeating: bool,
}

#[derive(Debug, Clone)]
pub struct Life {
    grid: GridState,
    rules: RuleParameters,
    generation: u64,
    cycles: CycleDetector,
    repeating: bool,
}

impl Life {
    pub fn new(grid: GridState, rules: RuleParameters) -> Self {
        Self {
            grid,
            rules,
            generation: 0,
            cycles: CycleDetector::new(),
            repeating: false,
        }
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame {
            generation: self.generation,
            grid: &self.grid,
            repeating: self.repeating,
        }
    }

    /// Replaces the grid with its successor. Returns whether the new
    /// generation repeats a recent one.
    pub fn update_generation(&mut self) -> bool {
        self.grid = step(&self.grid, &self.rules);
        self.generation += 1;
        self.repeating = self.cycles.observe(&self.grid);
        tracing::trace!(generation = self.generation, population = self.grid.population(), "stepped");
        self.repeating
    }

    pub fn clear_grid(&mut self) {
        self.grid.clear();
        self.restart();
    }

    pub fn apply_pattern(&mut self, pattern: &Pattern, origin: Coord) {
        patterns::apply(&mut self.grid, pattern, origin);
        self.restart();
    }

    pub fn apply(&mut self, command: Command) {
        tracing::debug!(?command, "applying command");
        match command {
            Command::Toggle(coord) => self.grid.toggle(coord),
            Command::Set(coord, alive) => self.grid.set(coord, alive),
            Command::Resize(policy) => self.grid.set_policy(policy),
            Command::Seed { pattern, origin } => self.apply_pattern(&pattern, origin),
            Command::Clear => self.clear_grid(),
        }
    }

    fn restart(&mut self) {
        self.generation = 0;
        self.cycles.reset();
        self.repeating = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generations_count_up_and_reset_on_seed() {
        let blinker = Pattern::from_rows(["###"]);
        let mut life = Life::new(GridState::unbounded(), RuleParameters::CONWAY);
        life.apply(Command::Seed { pattern: blinker.clone(), origin: Coord::new(1, 0) });
        assert_eq!(life.grid().population(), 3);

        assert!(!life.update_generation());
        assert!(!life.update_generation());
        assert!(life.update_generation());
        assert_eq!(life.generation(), 3);
        assert!(life.frame().repeating);

        life.apply(Command::Seed { pattern: blinker, origin: Coord::ORIGIN });
        assert_eq!(life.generation(), 0);
        assert!(!life.frame().repeating);
    }

    #[test]
    fn toggle_and_set_edit_single_cells() {
        let mut life = Life::new(GridState::unbounded(), RuleParameters::CONWAY);
        life.apply(Command::Toggle(Coord::new(2, 2)));
        life.apply(Command::Set(Coord::new(3, 3), true));
        assert_eq!(life.grid().population(), 2);
        life.apply(Command::Toggle(Coord::new(2, 2)));
        assert_eq!(life.grid().sorted_alive(), vec![Coord::new(3, 3)]);
    }

    #[test]
    fn resize_changes_next_step_only() {
        let mut life = Life::new(GridState::unbounded(), RuleParameters::CONWAY);
        life.apply(Command::Seed { pattern: Pattern::from_rows(["##", "##"]), origin: Coord::new(6, 6) });
        life.apply(Command::Resize(BoundaryPolicy::toroidal(4, 4).unwrap()));
        assert!(life.grid().is_alive(Coord::new(6, 6)));
        life.update_generation();
        assert_eq!(
            life.grid().sorted_alive(),
            vec![Coord::new(2, 2), Coord::new(2, 3), Coord::new(3, 2), Coord::new(3, 3)]
        );
    }

    #[test]
    fn clear_empties_grid() {
        let mut life = Life::new(GridState::unbounded(), RuleParameters::CONWAY);
        life.apply(Command::Seed { pattern: Pattern::from_rows(["#"]), origin: Coord::ORIGIN });
        life.apply(Command::Clear);
        assert!(life.grid().is_empty());
        assert_eq!(life.generation(), 0);
    }
}
