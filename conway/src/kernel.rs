// kernel.rs - 3x3 kernel convolution over a grid

use crate::grid::Grid;

pub type Kernel = [[u8; 3]; 3];

/// Weights every Moore neighbour by 1 and the centre by 0.
pub const NEIGHBOUR_KERNEL: Kernel = [
    [1, 1, 1],
    [1, 0, 1],
    [1, 1, 1],
];

/// Convolves the grid (alive = 1, dead = 0) with `kernel`, keeping the
/// grid's shape and treating everything outside the grid as dead.
///
/// Returns one value per cell in row-major order. Each non-zero kernel tap
/// adds a shifted copy of the whole input in a single pass over the rows.
/// Sums are `u32`, so even a kernel of nine 255s cannot overflow.
pub fn convolve_same(grid: &Grid, kernel: &Kernel) -> Vec<u32> {
    let (rows, cols) = (grid.rows(), grid.cols());
    let mut out = vec![0u32; rows * cols];

    for (m, taps) in kernel.iter().enumerate() {
        for (n, &weight) in taps.iter().enumerate() {
            if weight == 0 {
                continue;
            }
            // out[i][j] += k[m][n] * in[i + 1 - m][j + 1 - n]
            let dr = 1 - m as isize;
            let dc = 1 - n as isize;
            let weight = u32::from(weight);

            let lo = usize::from(dc < 0);
            let hi = cols - usize::from(dc > 0);
            if lo >= hi {
                continue;
            }
            let src_lo = (lo as isize + dc) as usize;
            let src_hi = (hi as isize + dc) as usize;

            for i in 0..rows {
                let si = i as isize + dr;
                if si < 0 || si >= rows as isize {
                    continue;
                }
                let src = &grid.row(si as usize)[src_lo..src_hi];
                let dst = &mut out[i * cols + lo..i * cols + hi];
                for (acc, &alive) in dst.iter_mut().zip(src) {
                    *acc += weight * u32::from(alive);
                }
            }
        }
    }

    out
}
