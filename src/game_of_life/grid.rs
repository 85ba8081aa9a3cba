//! Grid representation and utilities for Game of Life

use super::cell::CellState;
use super::error::GridError;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A square Game of Life board.
///
/// Coordinates are `(row, col)`, i.e. `grid[x][y]` with `x` selecting the row.
/// The edge is hard: positions outside `[0, size)` do not exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<CellState>>", try_from = "Vec<Vec<CellState>>")]
pub struct Grid {
    size: usize,
    cells: Vec<CellState>,
}

/// One entry of the board-status listing produced by [`Grid::describe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellStatus {
    pub x: usize,
    pub y: usize,
    pub is_alive: bool,
}

impl Grid {
    /// Create an all-dead grid of the given dimension
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::Empty);
        }
        let len = size.checked_mul(size).ok_or(GridError::TooLarge { size })?;
        Ok(Self {
            size,
            cells: vec![CellState::Dead; len],
        })
    }

    /// Create a grid from rows of cell states
    pub fn from_cells(cells: Vec<Vec<CellState>>) -> Result<Self, GridError> {
        let size = square_dimension(&cells)?;
        Ok(Self {
            size,
            cells: cells.into_iter().flatten().collect(),
        })
    }

    /// Create a grid from rows of `0`/`1` values, rejecting anything else
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, GridError> {
        let size = square_dimension(rows)?;
        let mut cells = Vec::with_capacity(size * size);

        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                let state = CellState::try_from(value)
                    .map_err(|_| GridError::InvalidCell { row, col, value })?;
                cells.push(state);
            }
        }

        Ok(Self { size, cells })
    }

    /// Create a grid with only the listed `(row, col)` positions alive
    pub fn with_living(size: usize, living: &[(usize, usize)]) -> Result<Self, GridError> {
        let mut grid = Self::new(size)?;
        for &(row, col) in living {
            grid.set(row, col, CellState::Alive)?;
        }
        Ok(grid)
    }

    /// Build directly from a row-major buffer whose length is already `size * size`
    pub(crate) fn from_flat(size: usize, cells: Vec<CellState>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Bounds-checked lookup. Returns `None` for positions off the board.
    pub fn cell_state(&self, row: isize, col: isize) -> Option<CellState> {
        let row = usize::try_from(row).ok().filter(|&r| r < self.size)?;
        let col = usize::try_from(col).ok().filter(|&c| c < self.size)?;
        Some(self.cells[self.index(row, col)])
    }

    /// Cell at an on-board position. Callers index within `[0, size)`.
    pub(crate) fn get(&self, row: usize, col: usize) -> CellState {
        self.cells[self.index(row, col)]
    }

    /// Set cell value at coordinates
    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> Result<(), GridError> {
        if row >= self.size || col >= self.size {
            return Err(GridError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        let idx = self.index(row, col);
        self.cells[idx] = state;
        Ok(())
    }

    /// Count living cells among the up to 8 neighbors of `(row, col)`.
    ///
    /// Scans the 3x3 block around the position, then removes the center's own
    /// contribution. Neighbors off the board count as dead.
    pub fn count_alive_neighbors(&self, row: isize, col: isize) -> u8 {
        let block_alive = (row.saturating_sub(1)..=row.saturating_add(1))
            .cartesian_product(col.saturating_sub(1)..=col.saturating_add(1))
            .filter(|&(r, c)| self.cell_state(r, c) == Some(CellState::Alive))
            .count() as u8;

        if self.cell_state(row, col) == Some(CellState::Alive) {
            block_alive - 1
        } else {
            block_alive
        }
    }

    /// Iterate over rows in order
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Rows as `0`/`1` values
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|&cell| u8::from(cell)).collect())
            .collect()
    }

    /// Board-status listing in row-major order
    pub fn describe(&self) -> Vec<CellStatus> {
        (0..self.size)
            .cartesian_product(0..self.size)
            .map(|(x, y)| CellStatus {
                x,
                y,
                is_alive: self.get(x, y).is_alive(),
            })
            .collect()
    }

    /// Get all living cell coordinates
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        self.describe()
            .into_iter()
            .filter(|status| status.is_alive)
            .map(|status| (status.x, status.y))
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Check if no cell is alive
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }
}

/// Side length of a square, non-empty set of rows.
fn square_dimension<T>(rows: &[Vec<T>]) -> Result<usize, GridError> {
    let height = rows.len();
    let width = rows.first().map(Vec::len).ok_or(GridError::Empty)?;

    if width == 0 {
        return Err(GridError::Empty);
    }

    if let Some((row, values)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
        return Err(GridError::RaggedRow {
            row,
            len: values.len(),
            expected: width,
        });
    }

    if width != height {
        return Err(GridError::NotSquare {
            rows: height,
            cols: width,
        });
    }

    Ok(width)
}

impl From<Grid> for Vec<Vec<CellState>> {
    fn from(grid: Grid) -> Self {
        grid.rows().map(<[CellState]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<CellState>>> for Grid {
    type Error = GridError;

    fn try_from(cells: Vec<Vec<CellState>>) -> Result<Self, Self::Error> {
        Grid::from_cells(cells)
    }
}
