//! Game of Life core functionality

pub mod cell;
pub mod error;
pub mod grid;
pub mod io;
pub mod patterns;
pub mod rules;

pub use cell::{CellState, InvalidCellValue};
pub use error::GridError;
pub use grid::{CellStatus, Grid};
pub use io::{create_example_grids, load_grid_from_file, parse_grid_from_string, save_grid_to_file};
pub use patterns::{find_pattern, Pattern, PATTERNS, SAMPLE};
pub use rules::{GameOfLifeRules, Transition};
