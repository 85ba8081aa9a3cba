//! Errors raised while building or parsing grids

use thiserror::Error;

/// Errors produced when a board fails validation.
///
/// Shape errors (`Empty`, `RaggedRow`, `NotSquare`) mean the input is not a
/// square matrix at all. `InvalidCell` and `InvalidChar` mean the shape is
/// fine but a value is neither dead nor alive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,

    #[error("row {row} has length {len}, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("grid is {rows}x{cols}, expected a square board")]
    NotSquare { rows: usize, cols: usize },

    #[error("invalid cell value {value} at ({row}, {col}); only 0 and 1 are allowed")]
    InvalidCell { row: usize, col: usize, value: u8 },

    #[error("invalid character '{ch}' at ({row}, {col}); only '0' and '1' are allowed")]
    InvalidChar { row: usize, col: usize, ch: char },

    #[error("a {size}x{size} grid does not fit in memory")]
    TooLarge { size: usize },

    #[error("coordinates ({row}, {col}) out of bounds for {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },
}

impl GridError {
    /// True when the input was not a square sequence of rows.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            GridError::Empty | GridError::RaggedRow { .. } | GridError::NotSquare { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_classification() {
        assert!(GridError::Empty.is_shape_error());
        assert!(GridError::NotSquare { rows: 2, cols: 3 }.is_shape_error());
        assert!(GridError::RaggedRow { row: 1, len: 2, expected: 3 }.is_shape_error());
        assert!(!GridError::InvalidCell { row: 0, col: 0, value: 7 }.is_shape_error());
        assert!(!GridError::InvalidChar { row: 0, col: 0, ch: 'x' }.is_shape_error());
        assert!(!GridError::TooLarge { size: 1 << 20 }.is_shape_error());
    }

    #[test]
    fn test_messages() {
        let err = GridError::InvalidCell { row: 1, col: 2, value: 5 };
        assert_eq!(
            err.to_string(),
            "invalid cell value 5 at (1, 2); only 0 and 1 are allowed"
        );
        assert_eq!(
            GridError::NotSquare { rows: 3, cols: 4 }.to_string(),
            "grid is 3x4, expected a square board"
        );
    }
}
