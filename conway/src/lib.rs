//! Conway's Game of Life on a fixed, non-wrapping grid.
//!
//! The transition comes in two interchangeable flavours that always agree:
//! [`next_generation_counting`] asks [`count_neighbours`] about every cell,
//! while [`next_generation_convolution`] gets every count from one pass of
//! [`convolve_same`] with [`NEIGHBOUR_KERNEL`].

pub mod error;
pub mod generation;
pub mod grid;
pub mod history;
pub mod kernel;
pub mod neighbours;
pub mod patterns;

pub use error::{GridError, ParseStrategyError, UnknownPattern};
pub use generation::{Strategy, next_generation_convolution, next_generation_counting, next_state};
pub use grid::{ALIVE, DEAD, Grid};
pub use history::CycleDetector;
pub use kernel::{Kernel, NEIGHBOUR_KERNEL, convolve_same};
pub use neighbours::count_neighbours;
pub use patterns::{PATTERNS, Pattern, random_grid};
