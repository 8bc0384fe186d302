// neighbours.rs - Moore-neighbourhood counting with clipped (non-wrapping) edges

use crate::grid::Grid;

/// Counts the live cells around `(row, col)`, never counting the cell itself.
///
/// The 3x3 window is clipped at the grid boundary rather than wrapped, so a
/// corner cell sees at most 3 neighbours and an edge cell at most 5.
///
/// # Panics
///
/// Panics if `(row, col)` lies outside the grid.
pub fn count_neighbours(grid: &Grid, row: usize, col: usize) -> u8 {
    assert!(
        grid.contains(row, col),
        "cell ({row}, {col}) out of bounds for {}x{} grid",
        grid.rows(),
        grid.cols()
    );

    let rows = row.saturating_sub(1)..=(row + 1).min(grid.rows() - 1);
    let cols = col.saturating_sub(1)..=(col + 1).min(grid.cols() - 1);

    let window: u8 = rows
        .map(|r| grid.row(r)[cols.clone()].iter().filter(|&&alive| alive).count() as u8)
        .sum();

    window - u8::from(grid.get(row, col))
}
