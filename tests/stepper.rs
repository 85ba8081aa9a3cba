use life_stepper::game_of_life::{parse_grid_from_string, GameOfLifeRules, PATTERNS};
use life_stepper::{next_generation, CellState, Grid, GridError, Simulation};

fn board(text: &str) -> Grid {
    parse_grid_from_string(text).unwrap()
}

/// Every 3x3 board, enumerated from a 9-bit mask.
fn all_3x3_boards() -> impl Iterator<Item = Grid> {
    (0u16..512).map(|mask| {
        let living: Vec<(usize, usize)> = (0..9)
            .filter(|bit| mask & (1 << bit) != 0)
            .map(|bit| (bit / 3, bit % 3))
            .collect();
        Grid::with_living(3, &living).unwrap()
    })
}

#[test]
fn sample_board_regression() {
    let input = vec![
        vec![1, 0, 0, 0],
        vec![1, 0, 0, 1],
        vec![0, 1, 1, 0],
        vec![0, 0, 0, 1],
    ];
    let expected = vec![
        vec![0, 0, 0, 0],
        vec![1, 0, 1, 0],
        vec![0, 1, 1, 1],
        vec![0, 0, 1, 0],
    ];

    assert_eq!(GameOfLifeRules::next_generation_rows(&input).unwrap(), expected);

    let grid = Grid::from_rows(&input).unwrap();
    assert_eq!(next_generation(&grid).to_rows(), expected);
}

#[test]
fn step_preserves_dimension_and_input() {
    for pattern in PATTERNS {
        let grid = pattern.to_grid().unwrap();
        let before = grid.clone();

        let next = next_generation(&grid);

        assert_eq!(grid, before, "{} was mutated", pattern.name);
        assert_eq!(next.size(), grid.size());
        assert_eq!(next.describe().len(), grid.size() * grid.size());
    }
}

#[test]
fn neighbor_counts_stay_in_range() {
    for grid in all_3x3_boards() {
        for row in -2..=4 {
            for col in -2..=4 {
                assert!(grid.count_alive_neighbors(row, col) <= 8);
            }
        }
    }
}

#[test]
fn neighbor_counts_read_previous_generation() {
    // Stepping cell by cell in place would give different answers here
    for grid in all_3x3_boards() {
        let next = next_generation(&grid);
        for row in 0..3 {
            for col in 0..3 {
                let n = grid.count_alive_neighbors(row, col);
                let before = grid.cell_state(row, col).unwrap();
                assert_eq!(
                    next.cell_state(row, col),
                    Some(GameOfLifeRules::apply_rule(before, n))
                );
            }
        }
    }
}

#[test]
fn lookups_off_the_edge_are_absent() {
    let grid = board("1111\n1111\n1111\n1111\n");
    for i in -1..=4isize {
        assert_eq!(grid.cell_state(-1, i), None);
        assert_eq!(grid.cell_state(4, i), None);
        assert_eq!(grid.cell_state(i, -1), None);
        assert_eq!(grid.cell_state(i, 4), None);
    }
    assert_eq!(grid.cell_state(3, 3), Some(CellState::Alive));
}

#[test]
fn block_is_a_still_life() {
    let block = board("0000\n0110\n0110\n0000\n");
    assert_eq!(next_generation(&block), block);
}

#[test]
fn blinker_has_period_two() {
    let horizontal = board("00000\n00000\n01110\n00000\n00000\n");
    let vertical = board("00000\n00100\n00100\n00100\n00000\n");

    assert_eq!(next_generation(&horizontal), vertical);
    assert_eq!(next_generation(&vertical), horizontal);

    let history = Simulation::history(horizontal.clone(), 6);
    for (i, grid) in history.iter().enumerate() {
        let expected = if i % 2 == 0 { &horizontal } else { &vertical };
        assert_eq!(grid, expected, "generation {i}");
    }
}

#[test]
fn blinker_against_the_edge() {
    let horizontal = board("000\n111\n000\n");
    let vertical = board("010\n010\n010\n");
    assert_eq!(next_generation(&horizontal), vertical);
    assert_eq!(next_generation(&vertical), horizontal);
}

#[test]
fn all_dead_is_a_fixed_point() {
    for size in 1..=6 {
        let empty = Grid::new(size).unwrap();
        assert!(next_generation(&empty).is_empty());
    }
}

#[test]
fn no_wraparound_at_edges() {
    // On a torus the far column would feed births into column 0
    let grid = board("0001\n0001\n0001\n0000\n");
    let next = next_generation(&grid);
    assert_eq!(next.to_rows()[1], vec![0, 0, 1, 1]);
    assert_eq!(next.cell_state(1, 0), Some(CellState::Dead));
}

#[test]
fn malformed_rows_fail_before_stepping() {
    let ragged = vec![vec![1, 0, 0], vec![0, 1]];
    assert!(GameOfLifeRules::next_generation_rows(&ragged)
        .unwrap_err()
        .is_shape_error());

    let rectangular = vec![vec![1, 0, 0], vec![0, 1, 0]];
    assert_eq!(
        GameOfLifeRules::next_generation_rows(&rectangular),
        Err(GridError::NotSquare { rows: 2, cols: 3 })
    );

    let out_of_domain = vec![vec![1, 0], vec![0, 255]];
    assert_eq!(
        GameOfLifeRules::next_generation_rows(&out_of_domain),
        Err(GridError::InvalidCell { row: 1, col: 1, value: 255 })
    );
}

#[test]
fn fifty_generations_of_the_sample() {
    let initial = life_stepper::game_of_life::SAMPLE.to_grid().unwrap();
    let history = Simulation::history(initial, 50);

    assert_eq!(history.len(), 51);
    assert!(history.iter().all(|grid| grid.size() == 4));
    assert_eq!(history[50], GameOfLifeRules::evolve_generations(history[0].clone(), 50));
}
