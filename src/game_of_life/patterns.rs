//! Named starting boards

use super::{Grid, GridError};

pub struct Pattern {
    pub name: &'static str,
    pub size: usize,
    pub cells: &'static [(usize, usize)],
}

/// The 4x4 board the simulator runs when no other board is given
pub const SAMPLE: Pattern = Pattern {
    name: "sample",
    size: 4,
    cells: &[(0, 0), (1, 0), (1, 3), (2, 1), (2, 2), (3, 3)],
};

pub const PATTERNS: &[Pattern] = &[
    SAMPLE,
    Pattern {
        name: "block",
        size: 4,
        cells: &[(1, 1), (1, 2), (2, 1), (2, 2)],
    },
    Pattern {
        name: "blinker",
        size: 5,
        cells: &[(2, 1), (2, 2), (2, 3)],
    },
    Pattern {
        name: "beacon",
        size: 6,
        cells: &[(1, 1), (1, 2), (2, 1), (3, 4), (4, 3), (4, 4)],
    },
    Pattern {
        name: "glider",
        size: 6,
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
];

impl Pattern {
    pub fn to_grid(&self) -> Result<Grid, GridError> {
        Grid::with_living(self.size, self.cells)
    }
}

/// Look up a pattern by name, ignoring case
pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::GameOfLifeRules;

    #[test]
    fn test_all_patterns_fit() {
        for pattern in PATTERNS {
            let grid = pattern.to_grid().unwrap();
            assert_eq!(grid.size(), pattern.size);
            assert_eq!(grid.living_count(), pattern.cells.len(), "{}", pattern.name);
        }
    }

    #[test]
    fn test_sample_rows() {
        let grid = SAMPLE.to_grid().unwrap();
        assert_eq!(
            grid.to_rows(),
            vec![
                vec![1, 0, 0, 0],
                vec![1, 0, 0, 1],
                vec![0, 1, 1, 0],
                vec![0, 0, 0, 1],
            ]
        );
    }

    #[test]
    fn test_beacon_period_two() {
        let beacon = find_pattern("Beacon").unwrap().to_grid().unwrap();
        let next = GameOfLifeRules::next_generation(&beacon);

        assert_ne!(next, beacon);
        assert_eq!(next.living_count(), 8);
        assert_eq!(GameOfLifeRules::next_generation(&next), beacon);
    }

    #[test]
    fn test_unknown_pattern() {
        assert!(find_pattern("pulsar").is_none());
    }
}
