//! Game of Life rules and the generation stepper

use super::{CellState, Grid, GridError};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Game of Life rules engine
pub struct GameOfLifeRules;

/// Which branch of the rule table decided a cell's next state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    /// Live cell with fewer than two live neighbors dies
    Underpopulation,
    /// Live cell with two or three live neighbors lives on
    Stasis,
    /// Live cell with more than three live neighbors dies
    Overpopulation,
    /// Dead cell with exactly three live neighbors becomes alive
    Reproduction,
    /// Dead cell stays dead
    Dormant,
}

impl Transition {
    pub fn outcome(self) -> CellState {
        match self {
            Transition::Stasis | Transition::Reproduction => CellState::Alive,
            Transition::Underpopulation | Transition::Overpopulation | Transition::Dormant => {
                CellState::Dead
            }
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Transition::Underpopulation => "underpopulation",
            Transition::Stasis => "stasis",
            Transition::Overpopulation => "overpopulation",
            Transition::Reproduction => "reproduction",
            Transition::Dormant => "dormant",
        };
        f.write_str(name)
    }
}

impl GameOfLifeRules {
    /// Compute the successor of `current`.
    ///
    /// Every neighbor count reads the unmodified input; results go into a
    /// freshly allocated grid of the same size.
    pub fn next_generation(current: &Grid) -> Grid {
        let size = current.size();

        let next_cells: Vec<CellState> = (0..size)
            .cartesian_product(0..size)
            .map(|(row, col)| {
                let neighbors = current.count_alive_neighbors(row as isize, col as isize);
                Self::apply_rule(current.get(row, col), neighbors)
            })
            .collect();

        Grid::from_flat(size, next_cells)
    }

    /// Step a raw sequence of `0`/`1` rows.
    ///
    /// Fails before producing anything if the rows are not a square matrix or
    /// hold values other than `0` and `1`.
    pub fn next_generation_rows(rows: &[Vec<u8>]) -> Result<Vec<Vec<u8>>, GridError> {
        let grid = Grid::from_rows(rows)?;
        Ok(Self::next_generation(&grid).to_rows())
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = Self::next_generation(&grid);
        }
        grid
    }

    /// Next state of a cell given its current state and live neighbor count
    pub fn apply_rule(current_state: CellState, alive_neighbors: u8) -> CellState {
        match (current_state, alive_neighbors) {
            (CellState::Alive, 2) | (CellState::Alive, 3) | (CellState::Dead, 3) => {
                CellState::Alive
            }
            _ => CellState::Dead,
        }
    }

    /// Name the rule outcome for a cell
    pub fn classify(current_state: CellState, alive_neighbors: u8) -> Transition {
        match (current_state, alive_neighbors) {
            (CellState::Alive, 0..=1) => Transition::Underpopulation,
            (CellState::Alive, 2..=3) => Transition::Stasis,
            (CellState::Alive, _) => Transition::Overpopulation,
            (CellState::Dead, 3) => Transition::Reproduction,
            (CellState::Dead, _) => Transition::Dormant,
        }
    }

    /// Rule outcome for every cell of `grid`, in row-major order
    pub fn transitions(grid: &Grid) -> Vec<((usize, usize), Transition)> {
        let size = grid.size();
        (0..size)
            .cartesian_product(0..size)
            .map(|(row, col)| {
                let neighbors = grid.count_alive_neighbors(row as isize, col as isize);
                ((row, col), Self::classify(grid.get(row, col), neighbors))
            })
            .collect()
    }
}
