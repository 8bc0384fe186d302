// patterns.rs - Seed patterns and random fills for a starting grid

use log::debug;
use rand::Rng;

use crate::error::{GridError, UnknownPattern};
use crate::grid::{ALIVE, Grid};

/// A named arrangement of live cells, given as `(row, col)` offsets from
/// the pattern's top-left corner.
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

impl Pattern {
    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(row, _)| row + 1).max().unwrap_or(0)
    }

    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(_, col)| col + 1).max().unwrap_or(0)
    }

    /// Builds a `rows x cols` grid with the pattern centred on it.
    /// Cells that fall outside the grid are dropped.
    pub fn place(&self, rows: usize, cols: usize) -> Result<Grid, GridError> {
        let mut grid = Grid::new(rows, cols)?;
        let top = rows.saturating_sub(self.height()) / 2;
        let left = cols.saturating_sub(self.width()) / 2;

        let mut clipped = 0;
        for &(row, col) in self.cells {
            let (row, col) = (top + row, left + col);
            if grid.contains(row, col) {
                grid.set(row, col, ALIVE);
            } else {
                clipped += 1;
            }
        }
        if clipped > 0 {
            debug!("{}: {clipped} cells fall outside the {rows}x{cols} grid", self.name);
        }
        Ok(grid)
    }
}

/// Looks a pattern up by name, ignoring case and any `-`, `_` or spaces.
pub fn find(name: &str) -> Result<&'static Pattern, UnknownPattern> {
    let wanted = normalize(name);
    PATTERNS
        .iter()
        .find(|pattern| normalize(pattern.name) == wanted)
        .ok_or_else(|| UnknownPattern(name.to_string()))
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Fills a grid cell by cell, each alive with probability `density`.
pub fn random_grid(
    rows: usize,
    cols: usize,
    density: f64,
    rng: &mut impl Rng,
) -> Result<Grid, GridError> {
    if !(0.0..=1.0).contains(&density) {
        return Err(GridError::Density(density));
    }
    if rows == 0 || cols == 0 {
        return Err(GridError::Empty { rows, cols });
    }
    Ok(Grid::from_fn(rows, cols, |_, _| rng.gen_bool(density)))
}
