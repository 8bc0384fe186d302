// config.rs - Command-line configuration for the terminal driver

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use conway::{Grid, Strategy, patterns};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "conway_term",
    version,
    about = "Conway's Game of Life in the terminal"
)]
pub struct Args {
    /// Grid rows
    #[arg(short, long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(1..))]
    pub rows: u16,

    /// Grid columns
    #[arg(short, long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(1..))]
    pub cols: u16,

    /// Character drawn for live cells
    #[arg(short, long, default_value_t = 'o')]
    pub glyph: char,

    /// Milliseconds between generations
    #[arg(long, default_value_t = 500, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_ms: u64,

    /// Probability that a cell starts alive
    #[arg(long, default_value_t = 0.5, value_parser = parse_density)]
    pub density: f64,

    /// Seed for the random fill, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start from a named pattern instead of a random fill
    #[arg(short, long, conflicts_with_all = ["density", "seed"])]
    pub pattern: Option<String>,

    /// Transition implementation: `counting` or `convolution`
    #[arg(short, long, default_value_t = Strategy::Convolution)]
    pub strategy: Strategy,

    /// Stop after this many generations
    #[arg(short = 'n', long)]
    pub generations: Option<u64>,

    /// Stop once the grid repeats one of its recent states
    #[arg(long)]
    pub stop_on_cycle: bool,

    /// Print the available pattern names and exit
    #[arg(long)]
    pub list_patterns: bool,
}

fn parse_density(s: &str) -> Result<f64, String> {
    let density: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&density) {
        Ok(density)
    } else {
        Err(format!("{density} is not between 0.0 and 1.0"))
    }
}

impl Args {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Builds the first generation from `--pattern`, or a random fill otherwise.
    pub fn initial_grid(&self) -> Result<Grid> {
        let (rows, cols) = (usize::from(self.rows), usize::from(self.cols));
        let grid = match &self.pattern {
            Some(name) => patterns::find(name)?.place(rows, cols)?,
            None => {
                let mut rng = match self.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                patterns::random_grid(rows, cols, self.density, &mut rng)?
            }
        };
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["conway_term"]).unwrap();
        assert_eq!((args.rows, args.cols), (20, 20));
        assert_eq!(args.glyph, 'o');
        assert_eq!(args.interval(), Duration::from_millis(500));
        assert_eq!(args.density, 0.5);
        assert_eq!(args.strategy, Strategy::Convolution);
        assert!(args.pattern.is_none() && args.generations.is_none());
        assert!(!args.stop_on_cycle);
    }

    #[test]
    fn parses_every_flag() {
        let args = Args::try_parse_from([
            "conway_term", "-r", "8", "-c", "12", "-g", "#", "--interval-ms", "50",
            "-s", "counting", "-n", "3", "--stop-on-cycle", "--seed", "9",
        ])
        .unwrap();
        assert_eq!((args.rows, args.cols, args.glyph), (8, 12, '#'));
        assert_eq!(args.strategy, Strategy::Counting);
        assert_eq!(args.generations, Some(3));
        assert_eq!(args.seed, Some(9));
        assert!(args.stop_on_cycle);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Args::try_parse_from(["conway_term", "--rows", "0"]).is_err());
        assert!(Args::try_parse_from(["conway_term", "--density", "1.2"]).is_err());
        assert!(Args::try_parse_from(["conway_term", "--strategy", "hashlife"]).is_err());
        assert!(Args::try_parse_from(["conway_term", "-p", "glider", "--seed", "1"]).is_err());
    }

    #[test]
    fn seeded_grids_are_reproducible() {
        let args = Args::try_parse_from(["conway_term", "--seed", "1234", "-r", "6", "-c", "7"]).unwrap();
        let grid = args.initial_grid().unwrap();
        assert_eq!((grid.rows(), grid.cols()), (6, 7));
        assert_eq!(grid, args.initial_grid().unwrap());
    }

    #[test]
    fn pattern_seed() {
        let args = Args::try_parse_from(["conway_term", "-p", "block", "-r", "4", "-c", "4"]).unwrap();
        assert_eq!(args.initial_grid().unwrap().to_string(), "....\n.##.\n.##.\n....");

        let args = Args::try_parse_from(["conway_term", "-p", "nope"]).unwrap();
        assert!(args.initial_grid().is_err());
    }
}
