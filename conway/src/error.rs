use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("grid must be at least 1x1, got {rows}x{cols}")]
    Empty { rows: usize, cols: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },

    #[error("unexpected cell character {ch:?} at row {row}, column {col}")]
    InvalidCell { ch: char, row: usize, col: usize },

    #[error("density must be between 0.0 and 1.0, got {0}")]
    Density(f64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy {0:?} (expected `counting` or `convolution`)")]
pub struct ParseStrategyError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown pattern {0:?}")]
pub struct UnknownPattern(pub String);
