//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::game_of_life::{GameOfLifeRules, Grid};
use anyhow::{Context, Result};
use itertools::Itertools;

/// Format grids for display
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in the configured output format
    pub fn format_grid(grid: &Grid, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(Self::format_grid_compact(grid)),
            OutputFormat::List => Ok(Self::format_grid_list(grid)),
            OutputFormat::Json => {
                serde_json::to_string(grid).context("Failed to serialize grid as JSON")
            }
        }
    }

    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::new();
        for row in grid.rows() {
            output.extend(row.iter().map(|cell| if cell.is_alive() { '█' } else { '·' }));
            output.push('\n');
        }
        output
    }

    /// Format a grid as nested lists, e.g. `[[1, 0], [0, 1]]`
    pub fn format_grid_list(grid: &Grid) -> String {
        let rows = grid
            .rows()
            .map(|row| format!("[{}]", row.iter().map(|&cell| u8::from(cell)).join(", ")))
            .join(", ");
        format!("[{}]", rows)
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for col in 0..grid.size() {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        for (row_idx, row) in grid.rows().enumerate() {
            output.push_str(&format!("{:2} ", row_idx));
            for cell in row {
                output.push_str(if cell.is_alive() { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// Board-status listing, one `x,y is alive|dead` line per cell
    pub fn format_status(grid: &Grid) -> String {
        grid.describe()
            .iter()
            .map(|status| {
                let state = if status.is_alive { "alive" } else { "dead" };
                format!("{},{} is {}\n", status.x, status.y, state)
            })
            .collect()
    }

    /// Board-status listing annotated with the rule outcome for each cell
    pub fn format_transitions(grid: &Grid) -> String {
        GameOfLifeRules::transitions(grid)
            .into_iter()
            .map(|((x, y), transition)| {
                let state = grid.get(x, y);
                let neighbors = grid.count_alive_neighbors(x as isize, y as isize);
                format!(
                    "{},{} is {} ({} neighbors) -> {} ({})\n",
                    x,
                    y,
                    state,
                    neighbors,
                    transition.outcome(),
                    transition
                )
            })
            .collect()
    }

    /// One-line summary of a generation
    pub fn format_summary(generation: usize, grid: &Grid) -> String {
        format!(
            "Generation {} ({}x{}, living: {})",
            generation,
            grid.size(),
            grid.size(),
            grid.living_count()
        )
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::with_living(3, &[(0, 0), (0, 2), (1, 1), (2, 0), (2, 2)]).unwrap()
    }

    #[test]
    fn test_grid_formatting() {
        let grid = sample();

        assert_eq!(GridFormatter::format_grid_compact(&grid), "█·█\n·█·\n█·█\n");

        let with_coords = GridFormatter::format_grid_with_coords(&grid);
        assert!(with_coords.starts_with("    0 1 2\n"));
        assert!(with_coords.contains(" 1 ··██··"));
    }

    #[test]
    fn test_list_and_json() {
        let grid = Grid::with_living(2, &[(0, 0), (1, 1)]).unwrap();

        assert_eq!(GridFormatter::format_grid_list(&grid), "[[1, 0], [0, 1]]");
        assert_eq!(
            GridFormatter::format_grid(&grid, OutputFormat::Json).unwrap(),
            "[[1,0],[0,1]]"
        );
        assert_eq!(
            GridFormatter::format_grid(&grid, OutputFormat::Text).unwrap(),
            "█·\n·█\n"
        );
    }

    #[test]
    fn test_status_listing() {
        let grid = Grid::with_living(2, &[(0, 1)]).unwrap();
        assert_eq!(
            GridFormatter::format_status(&grid),
            "0,0 is dead\n0,1 is alive\n1,0 is dead\n1,1 is dead\n"
        );
    }

    #[test]
    fn test_transition_listing() {
        let grid = Grid::with_living(3, &[(1, 0), (1, 1), (1, 2)]).unwrap();
        let listing = GridFormatter::format_transitions(&grid);

        assert_eq!(listing.lines().count(), 9);
        assert!(listing.contains("0,1 is dead (3 neighbors) -> alive (reproduction)"));
        assert!(listing.contains("1,0 is alive (1 neighbors) -> dead (underpopulation)"));
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            GridFormatter::format_summary(2, &sample()),
            "Generation 2 (3x3, living: 5)"
        );
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        // Should either be colored or plain text
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
