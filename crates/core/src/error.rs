//! Validation errors for grids and pattern text.

use thiserror::Error;

/// Errors raised while building or writing a grid.
///
/// All of these are local, deterministic validation failures. The transition
/// itself is total over valid grids and never produces one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A cell sequence does not hold exactly `n * n` cells (or `n` is zero).
    #[error("grid holds {actual} cells, expected {expected}")]
    InvalidGridSize { expected: usize, actual: usize },

    /// Pattern text does not describe an `n x n` board.
    ///
    /// `row` is the offending row for a width mismatch, or `None` when the
    /// number of rows is wrong.
    #[error("{}", describe_mismatch(.row, .expected, .found))]
    DimensionMismatch {
        row: Option<usize>,
        expected: usize,
        found: usize,
    },

    /// A single-cell write addressed an index past the end of the grid.
    #[error("cell index {index} out of bounds for grid of {len} cells")]
    CellOutOfBounds { index: usize, len: usize },

    /// A placed pattern would extend past the board edge.
    #[error("{width}x{height} pattern at ({row}, {col}) does not fit a {size}x{size} board")]
    PatternDoesNotFit {
        width: usize,
        height: usize,
        row: usize,
        col: usize,
        size: usize,
    },

    /// A cell value other than 0 or 1.
    #[error("cell {index} has value {value}, expected 0 or 1")]
    InvalidCellValue { index: usize, value: u8 },
}

fn describe_mismatch(row: &Option<usize>, expected: &usize, found: &usize) -> String {
    match row {
        Some(row) => format!("pattern row {row} is {found} cells wide, expected {expected}"),
        None => format!("pattern has {found} rows, expected {expected}"),
    }
}
