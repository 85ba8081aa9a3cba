//! Cell state of a single board position

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// State of one cell. Encoded as `0` (dead) and `1` (alive) on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

/// A raw value that is neither `0` nor `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid cell value {0}; only 0 and 1 are allowed")]
pub struct InvalidCellValue(pub u8);

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    /// Character used by the board text format.
    pub fn as_char(self) -> char {
        match self {
            CellState::Dead => '0',
            CellState::Alive => '1',
        }
    }
}

impl From<CellState> for u8 {
    fn from(state: CellState) -> Self {
        match state {
            CellState::Dead => 0,
            CellState::Alive => 1,
        }
    }
}

impl TryFrom<u8> for CellState {
    type Error = InvalidCellValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CellState::Dead),
            1 => Ok(CellState::Alive),
            other => Err(InvalidCellValue(other)),
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellState::Dead => write!(f, "dead"),
            CellState::Alive => write!(f, "alive"),
        }
    }
}
