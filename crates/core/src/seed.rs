//! Grid seeding: random fill and pattern-text parsing.
//!
//! Pattern text is a block of `n` lines of `n` significant characters each.
//! Leading whitespace on a line is ignored, so patterns can be written as
//! indented raw strings; `'0'` is a dead cell and any other character is alive.
//!
//! ```text
//!     010
//!     001
//!     111
//! ```

use log::debug;

use crate::error::GridError;
use crate::grid::{cell_count, GridState};
use crate::rng::SimpleRng;
use crate::types::{Cell, ALIVE, DEAD, RANDOM_ALIVE_THRESHOLD};

/// Random `n x n` generation, seeded from the wall clock.
///
/// Each cell is independently alive with probability 0.3.
pub fn random_generation(n: usize) -> Result<GridState, GridError> {
    random_generation_with(n, &mut SimpleRng::from_entropy())
}

/// Random `n x n` generation drawn from an explicit generator.
///
/// A cell is alive when its uniform draw exceeds [`RANDOM_ALIVE_THRESHOLD`].
pub fn random_generation_with(n: usize, rng: &mut SimpleRng) -> Result<GridState, GridError> {
    let total = cell_count(n)?;
    let cells: Vec<Cell> = (0..total)
        .map(|_| {
            if rng.next_f64() > RANDOM_ALIVE_THRESHOLD {
                ALIVE
            } else {
                DEAD
            }
        })
        .collect();
    GridState::from_cells(n, cells)
}

/// Parse pattern text into an `n x n` generation.
///
/// Every row's width (after stripping leading whitespace and a trailing `\r`)
/// must equal `n`, and there must be exactly `n` rows; the first violation is
/// reported as `DimensionMismatch`. Blank lines are skipped.
///
/// # Examples
///
/// ```
/// use tui_life_core::{parse_pattern, GridError};
///
/// let grid = parse_pattern(3, "010\n101\n010").unwrap();
/// assert_eq!(grid.cells(), &[0, 1, 0, 1, 0, 1, 0, 1, 0]);
///
/// assert!(matches!(
///     parse_pattern(3, "01\n101\n010"),
///     Err(GridError::DimensionMismatch { row: Some(0), expected: 3, found: 2 })
/// ));
/// ```
pub fn parse_pattern(n: usize, text: &str) -> Result<GridState, GridError> {
    if n == 0 {
        return Err(GridError::InvalidGridSize {
            expected: 1,
            actual: 0,
        });
    }

    // Sized from the text, never from `n`: a huge `n` must fail on the first row.
    let mut cells = Vec::with_capacity(text.len());
    let mut rows = 0usize;

    for line in significant_lines(text) {
        let found = line.chars().count();
        if found != n {
            debug!("pattern row {rows} has width {found}, expected {n}");
            return Err(GridError::DimensionMismatch {
                row: Some(rows),
                expected: n,
                found,
            });
        }
        cells.extend(line.chars().map(|ch| if ch == '0' { DEAD } else { ALIVE }));
        rows += 1;
    }

    if rows != n {
        return Err(GridError::DimensionMismatch {
            row: None,
            expected: n,
            found: rows,
        });
    }

    GridState::from_cells(n, cells)
}

/// Lines of `text` with leading whitespace and `\r` removed, blank lines dropped.
fn significant_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).trim_start())
        .filter(|line| !line.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_rows() {
        let g = parse_pattern(3, "010\n101\n010").unwrap();
        assert_eq!(g.cells(), &[0, 1, 0, 1, 0, 1, 0, 1, 0]);
    }

    #[test]
    fn ignores_leading_whitespace_and_blank_lines() {
        let text = "
            110
            011
            000
        ";
        let g = parse_pattern(3, text).unwrap();
        assert_eq!(g.cells(), &[1, 1, 0, 0, 1, 1, 0, 0, 0]);
    }

    #[test]
    fn handles_crlf() {
        let g = parse_pattern(2, "10\r\n01\r\n").unwrap();
        assert_eq!(g.cells(), &[1, 0, 0, 1]);
    }

    #[test]
    fn any_non_zero_character_is_alive() {
        let g = parse_pattern(2, ".#\n0x").unwrap();
        assert_eq!(g.cells(), &[1, 1, 0, 1]);
    }

    #[test]
    fn first_row_too_short() {
        assert_eq!(
            parse_pattern(3, "01\n101\n010"),
            Err(GridError::DimensionMismatch {
                row: Some(0),
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn later_row_too_long() {
        assert_eq!(
            parse_pattern(3, "010\n1010\n010"),
            Err(GridError::DimensionMismatch {
                row: Some(1),
                expected: 3,
                found: 4
            })
        );
    }

    #[test]
    fn wrong_row_count() {
        assert_eq!(
            parse_pattern(3, "010\n101"),
            Err(GridError::DimensionMismatch {
                row: None,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            parse_pattern(2, "01\n10\n11"),
            Err(GridError::DimensionMismatch {
                row: None,
                expected: 2,
                found: 3
            })
        );
        assert!(matches!(
            parse_pattern(2, ""),
            Err(GridError::DimensionMismatch { row: None, .. })
        ));
    }

    #[test]
    fn huge_size_is_a_dimension_mismatch() {
        let n = 1usize << (usize::BITS / 2);
        assert_eq!(
            parse_pattern(n, "0"),
            Err(GridError::DimensionMismatch {
                row: Some(0),
                expected: n,
                found: 1
            })
        );
        assert!(matches!(
            parse_pattern(usize::MAX, ""),
            Err(GridError::DimensionMismatch { row: None, .. })
        ));
    }

    #[test]
    fn random_generation_rejects_overflowing_size() {
        assert!(matches!(
            random_generation_with(usize::MAX, &mut SimpleRng::new(1)),
            Err(GridError::InvalidGridSize { .. })
        ));
    }

    #[test]
    fn random_generation_has_expected_shape() {
        let g = random_generation(20).unwrap();
        assert_eq!(g.len(), 400);
        assert!(g.cells().iter().all(|&c| c == DEAD || c == ALIVE));
        assert!(random_generation(0).is_err());
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = random_generation_with(30, &mut SimpleRng::new(99)).unwrap();
        let b = random_generation_with(30, &mut SimpleRng::new(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn roughly_thirty_percent_alive() {
        let g = random_generation_with(100, &mut SimpleRng::new(12345)).unwrap();
        let ratio = g.population() as f64 / g.len() as f64;
        assert!((0.25..0.35).contains(&ratio), "alive ratio {ratio}");
    }
}
