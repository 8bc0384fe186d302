// generation.rs - One tick of Conway's Game of Life, two ways

use std::fmt;
use std::str::FromStr;

use crate::error::ParseStrategyError;
use crate::grid::{ALIVE, DEAD, Grid};
use crate::kernel::{NEIGHBOUR_KERNEL, convolve_same};
use crate::neighbours::count_neighbours;

/// Standard B3/S23 rule for a single cell.
pub fn next_state(alive: bool, neighbours: u8) -> bool {
    match (alive, neighbours) {
        (true, 2) | (true, 3) => ALIVE,   // Survival
        (false, 3)            => ALIVE,   // Birth
        _                     => DEAD,    // Death or stays dead
    }
}

/// Next generation by asking [`count_neighbours`] about every cell.
///
/// Every cell is evaluated against `grid`, which is left untouched, so the
/// update is simultaneous.
pub fn next_generation_counting(grid: &Grid) -> Grid {
    Grid::from_fn(grid.rows(), grid.cols(), |row, col| {
        next_state(grid.get(row, col), count_neighbours(grid, row, col))
    })
}

/// Next generation from a single convolution with [`NEIGHBOUR_KERNEL`].
///
/// A cell lives if it has exactly 3 neighbours, or has 2 and is already alive.
pub fn next_generation_convolution(grid: &Grid) -> Grid {
    let counts = convolve_same(grid, &NEIGHBOUR_KERNEL);
    let cells = counts
        .iter()
        .zip(grid.cells())
        .map(|(&count, &alive)| count == 3 || (count == 2 && alive))
        .collect();
    Grid::from_cells(grid.rows(), grid.cols(), cells)
}

/// Selects which transition implementation drives a simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    Counting,
    #[default]
    Convolution,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Counting, Strategy::Convolution];

    pub fn next_generation(self, grid: &Grid) -> Grid {
        match self {
            Strategy::Counting => next_generation_counting(grid),
            Strategy::Convolution => next_generation_convolution(grid),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Counting => "counting",
            Strategy::Convolution => "convolution",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseStrategyError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn both(grid: &Grid) -> [Grid; 2] {
        [next_generation_counting(grid), next_generation_convolution(grid)]
    }

    #[test]
    fn rule_table() {
        for n in 0..=8 {
            assert_eq!(next_state(ALIVE, n), n == 2 || n == 3, "alive with {n}");
            assert_eq!(next_state(DEAD, n), n == 3, "dead with {n}");
        }
    }

    #[test]
    fn worked_example() {
        let grid = Grid::from_bits(&[&[0, 1, 0, 1], &[1, 1, 0, 0], &[0, 0, 0, 0], &[1, 1, 1, 0]]).unwrap();
        let expected = Grid::from_bits(&[&[1, 1, 1, 0], &[1, 1, 1, 0], &[0, 0, 1, 0], &[0, 1, 0, 0]]).unwrap();
        for next in both(&grid) {
            assert_eq!(next, expected);
        }
    }

    #[test]
    fn empty_grid_stays_empty() {
        let grid = Grid::new(5, 7).unwrap();
        for next in both(&grid) {
            assert_eq!(next, grid);
        }
    }

    #[test]
    fn lone_cell_dies() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(1, 1, ALIVE);
        for next in both(&grid) {
            assert!(next.is_empty());
        }
    }

    #[test]
    fn block_is_still() {
        let grid = Grid::from_bits(&[&[1, 1], &[1, 1]]).unwrap();
        for next in both(&grid) {
            assert_eq!(next, grid);
        }
    }

    #[test]
    fn blinker_oscillates() {
        let horizontal: Grid = ".....\n.....\n.###.\n.....\n.....".parse().unwrap();
        let vertical: Grid = ".....\n..#..\n..#..\n..#..\n.....".parse().unwrap();
        for strategy in Strategy::ALL {
            let once = strategy.next_generation(&horizontal);
            assert_eq!(once, vertical, "{strategy}");
            assert_eq!(strategy.next_generation(&once), horizontal, "{strategy}");
        }
    }

    #[test]
    fn dead_cell_with_two_neighbours_stays_dead() {
        let grid = Grid::from_bits(&[&[1, 0, 1]]).unwrap();
        for next in both(&grid) {
            assert!(next.is_empty());
        }
    }

    #[test]
    fn input_is_not_mutated() {
        let grid = Grid::from_bits(&[&[0, 1, 0], &[0, 1, 0], &[0, 1, 0]]).unwrap();
        let before = grid.clone();
        let _ = both(&grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn strategy_names_round_trip() {
        assert_eq!("counting".parse::<Strategy>(), Ok(Strategy::Counting));
        assert_eq!("Convolution".parse::<Strategy>(), Ok(Strategy::Convolution));
        assert_eq!(
            "hashlife".parse::<Strategy>(),
            Err(ParseStrategyError("hashlife".to_string()))
        );
        assert_eq!(Strategy::default(), Strategy::Convolution);
    }
}
