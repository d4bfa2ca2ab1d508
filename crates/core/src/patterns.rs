//! Built-in seed patterns.
//!
//! Patterns are stored as rows of `'O'` (alive) / `'.'` (dead) and placed onto
//! an `n x n` board by rendering pattern text and running it through
//! [`parse_pattern`], so they go through the same validation as user input.

use crate::error::GridError;
use crate::grid::{cell_count, GridState};
use crate::seed::parse_pattern;

/// A fixed rectangular pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub rows: &'static [&'static str],
}

/// Bill Gosper's glider gun (period 30), 36x9.
pub const GOSPER_GLIDER_GUN: Pattern = Pattern {
    name: "Gosper glider gun",
    rows: &[
        "........................O...........",
        "......................O.O...........",
        "............OO......OO............OO",
        "...........O...O....OO............OO",
        "OO........O.....O...OO..............",
        "OO........O...O.OO....O.O...........",
        "..........O.....O.......O...........",
        "...........O...O....................",
        "............OO......................",
    ],
};

/// South-east travelling glider, 3x3.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    rows: &[".O.", "..O", "OOO"],
};

impl Pattern {
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |r| r.len())
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Pattern text for an `n x n` board with the pattern's top-left corner at
    /// `(row, col)`.
    pub fn to_text(&self, n: usize, row: usize, col: usize) -> Result<String, GridError> {
        if row + self.height() > n || col + self.width() > n {
            return Err(GridError::PatternDoesNotFit {
                width: self.width(),
                height: self.height(),
                row,
                col,
                size: n,
            });
        }

        let mut text = String::with_capacity(cell_count(n)?.saturating_add(n));
        for r in 0..n {
            let pattern_row = r.checked_sub(row).and_then(|pr| self.rows.get(pr));
            for c in 0..n {
                let alive = pattern_row
                    .and_then(|pr| c.checked_sub(col).and_then(|pc| pr.as_bytes().get(pc)))
                    .is_some_and(|&b| b == b'O');
                text.push(if alive { '1' } else { '0' });
            }
            text.push('\n');
        }
        Ok(text)
    }

    /// Place the pattern on an otherwise dead `n x n` board.
    pub fn place(&self, n: usize, row: usize, col: usize) -> Result<GridState, GridError> {
        parse_pattern(n, &self.to_text(n, row, col)?)
    }
}

/// The Gosper glider gun on an `n x n` board, one cell in from the top-left.
///
/// Needs `n >= 37`.
pub fn gosper_glider_gun(n: usize) -> Result<GridState, GridError> {
    GOSPER_GLIDER_GUN.place(n, 1, 1)
}
