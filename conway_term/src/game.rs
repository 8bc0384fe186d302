// game.rs - Simulation state driven by the tick loop

use conway::{CycleDetector, Grid, Strategy};
use log::{debug, info};

pub struct GameOfLife {
    grid: Grid,
    generation: u64,
    strategy: Strategy,
    cycles: CycleDetector,
    cycled: bool,
}

impl GameOfLife {
    pub fn new(grid: Grid, strategy: Strategy) -> Self {
        let mut cycles = CycleDetector::new();
        let cycled = cycles.observe(&grid);
        Self { grid, generation: 0, strategy, cycles, cycled }
    }

    pub fn grid(&self) -> &Grid { &self.grid }
    pub fn generation(&self) -> u64 { self.generation }
    pub fn strategy(&self) -> Strategy { self.strategy }

    /// `true` once the current grid matches one of its recent predecessors.
    pub fn has_cycled(&self) -> bool { self.cycled }

    /// Replaces the grid with its successor.
    pub fn update_generation(&mut self) {
        self.grid = self.strategy.next_generation(&self.grid);
        self.generation += 1;
        debug!("generation {}: {} live cells", self.generation, self.grid.live_count());

        if !self.cycled && self.cycles.observe(&self.grid) {
            self.cycled = true;
            info!("grid repeats a recent state at generation {}", self.generation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conway::patterns;

    #[test]
    fn advances_generation_count() {
        let grid = patterns::find("glider").unwrap().place(10, 10).unwrap();
        let mut game = GameOfLife::new(grid.clone(), Strategy::Counting);
        game.update_generation();
        game.update_generation();
        assert_eq!(game.generation(), 2);
        assert_ne!(game.grid(), &grid);
        assert!(!game.has_cycled());
    }

    #[test]
    fn strategies_drive_identical_games() {
        let grid = patterns::find("r-pentomino").unwrap().place(20, 20).unwrap();
        let mut counting = GameOfLife::new(grid.clone(), Strategy::Counting);
        let mut convolution = GameOfLife::new(grid, Strategy::Convolution);
        for _ in 0..25 {
            counting.update_generation();
            convolution.update_generation();
            assert_eq!(counting.grid(), convolution.grid());
        }
    }

    #[test]
    fn detects_oscillator() {
        let grid = patterns::find("toad").unwrap().place(6, 6).unwrap();
        let mut game = GameOfLife::new(grid, Strategy::Convolution);
        game.update_generation();
        assert!(!game.has_cycled());
        game.update_generation();
        assert!(game.has_cycled());
    }

    #[test]
    fn dead_start_dies_out_immediately() {
        let mut game = GameOfLife::new(Grid::new(3, 3).unwrap(), Strategy::Counting);
        game.update_generation();
        assert!(game.grid().is_empty());
        assert!(game.has_cycled());
    }
}
