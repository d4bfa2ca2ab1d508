//! The Game of Life cell rule (B3/S23).

use crate::types::{Cell, ALIVE, DEAD};

/// Count live cells in a neighbor value list.
#[inline]
pub fn live_count(neighbors: &[Cell]) -> usize {
    neighbors.iter().filter(|&&v| v == ALIVE).count()
}

/// Next value of a cell given its current value and its neighbors' values.
///
/// - a live cell with fewer than two or more than three live neighbors dies
/// - a live cell with two or three live neighbors survives
/// - a dead cell with exactly three live neighbors becomes alive
/// - any other dead cell stays dead
///
/// # Examples
///
/// ```
/// use tui_life_core::update_cell;
///
/// assert_eq!(update_cell(1, &[1, 1, 0]), 1);
/// assert_eq!(update_cell(1, &[1, 0, 0]), 0);
/// assert_eq!(update_cell(0, &[1, 1, 1, 0, 0]), 1);
/// ```
pub fn update_cell(cell: Cell, neighbors: &[Cell]) -> Cell {
    match (cell == ALIVE, live_count(neighbors)) {
        (true, 2) | (true, 3) => ALIVE,
        (false, 3) => ALIVE,
        _ => DEAD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(live: usize) -> Vec<Cell> {
        (0..8).map(|i| if i < live { ALIVE } else { DEAD }).collect()
    }

    #[test]
    fn underpopulation_kills() {
        assert_eq!(update_cell(ALIVE, &ring(0)), DEAD);
        assert_eq!(update_cell(ALIVE, &ring(1)), DEAD);
    }

    #[test]
    fn two_or_three_survive() {
        assert_eq!(update_cell(ALIVE, &ring(2)), ALIVE);
        assert_eq!(update_cell(ALIVE, &ring(3)), ALIVE);
    }

    #[test]
    fn overpopulation_kills() {
        for live in 4..=8 {
            assert_eq!(update_cell(ALIVE, &ring(live)), DEAD, "{live} neighbors");
        }
    }

    #[test]
    fn birth_needs_exactly_three() {
        for live in 0..=8 {
            let expected = if live == 3 { ALIVE } else { DEAD };
            assert_eq!(update_cell(DEAD, &ring(live)), expected, "{live} neighbors");
        }
    }

    #[test]
    fn short_lists_from_edges_and_corners() {
        assert_eq!(update_cell(DEAD, &[ALIVE, ALIVE, ALIVE]), ALIVE);
        assert_eq!(update_cell(ALIVE, &[ALIVE, DEAD, DEAD]), DEAD);
        assert_eq!(update_cell(ALIVE, &[]), DEAD);
    }
}
