//! Transition engine - computes the next generation.
//!
//! The transition is a pure function of the current cells and the board size:
//! every cell's next value is computed from the *current* generation into a
//! fresh buffer, so no cell ever sees a partially updated board.

use crate::error::GridError;
use crate::grid::check_len;
use crate::neighbors::neighbor_values;
use crate::rules::update_cell;
use crate::types::Cell;

/// Compute the generation following `current` on an `n x n` board.
///
/// Returns a new vector of the same length; `current` is left untouched.
/// Fails with `InvalidGridSize` when `current.len() != n * n`.
///
/// # Examples
///
/// ```
/// use tui_life_core::next_generation;
///
/// // A vertical blinker becomes horizontal.
/// let current = [
///     0, 1, 0,
///     0, 1, 0,
///     0, 1, 0,
/// ];
/// let next = next_generation(&current, 3).unwrap();
/// assert_eq!(next, vec![
///     0, 0, 0,
///     1, 1, 1,
///     0, 0, 0,
/// ]);
///
/// assert!(next_generation(&current, 4).is_err());
/// ```
pub fn next_generation(current: &[Cell], n: usize) -> Result<Vec<Cell>, GridError> {
    check_len(current, n)?;
    Ok(step_cells(current, n))
}

/// Transition over a slice already known to hold `n * n` cells.
pub(crate) fn step_cells(current: &[Cell], n: usize) -> Vec<Cell> {
    (0..current.len())
        .map(|i| update_cell(current[i], &neighbor_values(current, i, n)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ALIVE, DEAD};

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            next_generation(&[0; 8], 3),
            Err(GridError::InvalidGridSize {
                expected: 9,
                actual: 8
            })
        );
        assert!(next_generation(&[], 0).is_err());
    }

    #[test]
    fn input_is_not_modified() {
        let current = vec![0, 1, 0, 0, 1, 0, 0, 1, 0];
        let before = current.clone();
        let _ = next_generation(&current, 3).unwrap();
        assert_eq!(current, before);
    }

    #[test]
    fn single_cell_board() {
        assert_eq!(next_generation(&[ALIVE], 1), Ok(vec![DEAD]));
        assert_eq!(next_generation(&[DEAD], 1), Ok(vec![DEAD]));
    }

    #[test]
    fn full_two_by_two_is_stable() {
        // Every cell is a corner with exactly 3 live neighbors.
        assert_eq!(next_generation(&[1, 1, 1, 1], 2), Ok(vec![1, 1, 1, 1]));
    }

    #[test]
    fn corner_birth_from_three_neighbors() {
        // Top-left corner is dead but sees right, down and down-right alive.
        let current = [
            0, 1, 0, //
            1, 1, 0, //
            0, 0, 0,
        ];
        let next = next_generation(&current, 3).unwrap();
        assert_eq!(next[0], ALIVE);
    }

    #[test]
    fn bottom_right_corner_does_not_see_top_left() {
        // A wrapping implementation would count the far corners as neighbors.
        let current = [
            1, 0, 1, //
            0, 0, 0, //
            1, 0, 0,
        ];
        let next = next_generation(&current, 3).unwrap();
        assert_eq!(next[8], DEAD);
    }
}
