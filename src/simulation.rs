//! Repeated stepping of a board

use crate::game_of_life::{GameOfLifeRules, Grid};

/// Drives the stepper, feeding each generation back in as the next input.
///
/// Iterating yields successive generations forever; callers bound the run
/// with `take`.
#[derive(Debug, Clone)]
pub struct Simulation {
    current: Grid,
    generation: usize,
}

impl Simulation {
    pub fn new(initial: Grid) -> Self {
        Self {
            current: initial,
            generation: 0,
        }
    }

    /// The most recent generation
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// Number of steps taken so far
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Advance one generation
    pub fn step(&mut self) -> &Grid {
        self.current = GameOfLifeRules::next_generation(&self.current);
        self.generation += 1;
        &self.current
    }

    /// Initial board followed by `generations` successors
    pub fn history(initial: Grid, generations: usize) -> Vec<Grid> {
        let mut history = Vec::with_capacity(generations + 1);
        history.push(initial.clone());
        history.extend(Simulation::new(initial).take(generations));
        history
    }
}

impl Iterator for Simulation {
    type Item = Grid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.step().clone())
    }
}
