// grid.rs - Grid type for Conway's Game of Life

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;

pub const ALIVE: bool = true;
pub const DEAD: bool = false;

/// Fixed-size rectangular board of cells, stored row-major.
///
/// A `Grid` is always at least 1x1 and never changes shape once built.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// All-dead grid of the given size.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty { rows, cols });
        }
        Ok(Self { rows, cols, cells: vec![DEAD; rows * cols] })
    }

    /// Builds a grid by evaluating `f(row, col)` for every cell.
    ///
    /// Panics if either dimension is zero.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        assert!(rows > 0 && cols > 0, "grid must be at least 1x1, got {rows}x{cols}");
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(f(row, col));
            }
        }
        Self { rows, cols, cells }
    }

    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, Vec::len);
        if rows.is_empty() || width == 0 {
            return Err(GridError::Empty { rows: rows.len(), cols: width });
        }
        if let Some((row, bad)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(GridError::Ragged { row, expected: width, found: bad.len() });
        }
        let height = rows.len();
        Ok(Self { rows: height, cols: width, cells: rows.into_iter().flatten().collect() })
    }

    /// Builds a grid from 0/1 rows; any non-zero value is alive.
    pub fn from_bits(bits: &[&[u8]]) -> Result<Self, GridError> {
        Self::from_rows(bits.iter().map(|row| row.iter().map(|&b| b != 0).collect()).collect())
    }

    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Cell state at `(row, col)`. Panics when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)]
    }

    /// Sets a single cell. Used while building seeds; transitions never call this.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        let index = self.index(row, col);
        self.cells[index] = alive;
    }

    pub fn row(&self, row: usize) -> &[bool] {
        assert!(row < self.rows, "row {row} out of bounds for {} rows", self.rows);
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.cols)
    }

    /// Flat row-major view of the cells.
    pub fn cells(&self) -> &[bool] { &self.cells }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&alive| alive == DEAD)
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            self.contains(row, col),
            "cell ({row}, {col}) out of bounds for {}x{} grid",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.rows, self.cols)?;
        write!(f, "{self}")
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parses one row per line: `#`, `o`, `O` or `1` alive; `.`, `_` or `0` dead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().map(str::trim_end).collect();
        let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
        let end = lines.iter().rposition(|l| !l.is_empty()).map_or(start, |i| i + 1);

        let mut rows = Vec::with_capacity(end - start);
        for (row, line) in lines[start..end].iter().enumerate() {
            let cells = line
                .chars()
                .enumerate()
                .map(|(col, ch)| match ch {
                    '#' | 'o' | 'O' | '1' => Ok(ALIVE),
                    '.' | '_' | '0' => Ok(DEAD),
                    _ => Err(GridError::InvalidCell { ch, row, col }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(cells);
        }
        Self::from_rows(rows)
    }
}
