//! Conway's Game of Life stepper
//!
//! Computes successive generations of a square, hard-edged Game of Life board.
//! The core is [`GameOfLifeRules::next_generation`]; everything else drives it.

pub mod config;
pub mod game_of_life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{CellState, GameOfLifeRules, Grid, GridError};
pub use simulation::Simulation;

/// Compute the generation that follows `grid`
pub fn next_generation(grid: &Grid) -> Grid {
    GameOfLifeRules::next_generation(grid)
}
