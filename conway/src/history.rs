// history.rs - Spot still lifes and short oscillators by hashing recent grids

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::Grid;

/// How many recent grid hashes are remembered.
pub const HISTORY_LEN: usize = 10;

/// Ring of the last [`HISTORY_LEN`] grid hashes.
///
/// Only hashes are stored, so a previous generation can never be restored
/// from here.
#[derive(Debug, Default, Clone)]
pub struct CycleDetector {
    hashes: [u64; HISTORY_LEN],
    seen: usize,
}

impl CycleDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `grid` and returns `true` if it matches one of the last
    /// [`HISTORY_LEN`] grids observed.
    pub fn observe(&mut self, grid: &Grid) -> bool {
        let hash = hash_grid(grid);
        let filled = self.seen.min(HISTORY_LEN);
        if self.hashes[..filled].contains(&hash) {
            return true;
        }
        self.hashes[self.seen % HISTORY_LEN] = hash;
        self.seen += 1;
        false
    }
}

pub fn hash_grid(grid: &Grid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.hash(&mut hasher);
    hasher.finish()
}
