//! Grid module - one generation of the board.
//!
//! The board is an `n x n` grid stored as a flat, row-major `Vec<u8>` of
//! 0 (dead) / 1 (alive) cells. Index `i` is row `i / n`, column `i % n`.
//!
//! A `GridState` can only be built through validating constructors, so the
//! length is always exactly `n * n` and every value is 0 or 1.

use crate::error::GridError;
use crate::transition::step_cells;
use crate::types::{Cell, ALIVE, DEAD};

/// One complete generation of an `n x n` board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridState {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Cell>,
}

impl GridState {
    /// Create an all-dead `n x n` grid.
    pub fn dead(n: usize) -> Result<Self, GridError> {
        let len = cell_count(n)?;
        Ok(Self {
            size: n,
            cells: vec![DEAD; len],
        })
    }

    /// Wrap an existing flat cell vector.
    ///
    /// Fails with `InvalidGridSize` unless `cells.len() == n * n` (and `n > 0`),
    /// and with `InvalidCellValue` on the first value outside {0, 1}.
    pub fn from_cells(n: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        check_len(&cells, n)?;
        if let Some((index, &value)) = cells.iter().enumerate().find(|(_, v)| **v > ALIVE) {
            return Err(GridError::InvalidCellValue { index, value });
        }
        Ok(Self { size: n, cells })
    }

    /// Build from a list of live `(row, col)` coordinates.
    ///
    /// Coordinates outside the board are rejected with `CellOutOfBounds`.
    pub fn from_live_cells(
        n: usize,
        live: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, GridError> {
        let mut grid = Self::dead(n)?;
        for (row, col) in live {
            let index = grid.index(row, col).ok_or(GridError::CellOutOfBounds {
                index: row.saturating_mul(n).saturating_add(col),
                len: grid.cells.len(),
            })?;
            grid.cells[index] = ALIVE;
        }
        Ok(grid)
    }

    /// Side length `n` of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (`n * n`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Flat index of `(row, col)`, or `None` when out of bounds.
    #[inline(always)]
    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    /// Cell at flat index `i`.
    pub fn get(&self, i: usize) -> Option<Cell> {
        self.cells.get(i).copied()
    }

    /// Cell at `(row, col)`.
    pub fn get_at(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    pub fn is_alive(&self, i: usize) -> bool {
        self.get(i) == Some(ALIVE)
    }

    /// Write `value` (0 or 1) into cell `i`.
    pub fn set(&mut self, i: usize, value: Cell) -> Result<(), GridError> {
        if value > ALIVE {
            return Err(GridError::InvalidCellValue { index: i, value });
        }
        let len = self.cells.len();
        let cell = self
            .cells
            .get_mut(i)
            .ok_or(GridError::CellOutOfBounds { index: i, len })?;
        *cell = value;
        Ok(())
    }

    /// Flip cell `i` and return its new value.
    pub fn toggle(&mut self, i: usize) -> Result<Cell, GridError> {
        let len = self.cells.len();
        let cell = self
            .cells
            .get_mut(i)
            .ok_or(GridError::CellOutOfBounds { index: i, len })?;
        *cell ^= ALIVE;
        Ok(*cell)
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&v| v == ALIVE).count()
    }

    /// Whether every cell is dead.
    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|&v| v == DEAD)
    }

    /// The flat cell slice.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Compute the next generation.
    ///
    /// Infallible: the grid's shape is already validated.
    pub fn next_generation(&self) -> GridState {
        Self {
            size: self.size,
            cells: step_cells(&self.cells, self.size),
        }
    }

    /// Stable 64-bit fingerprint of the board (FNV-1a over size and cells).
    ///
    /// Used by the frontend to skip redraws when nothing changed.
    pub fn fingerprint(&self) -> u64 {
        const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
        const PRIME: u64 = 0x100000001b3;

        let mut state = OFFSET_BASIS;
        for b in (self.size as u64).to_le_bytes() {
            state ^= b as u64;
            state = state.wrapping_mul(PRIME);
        }
        for &c in &self.cells {
            state ^= c as u64;
            state = state.wrapping_mul(PRIME);
        }
        state
    }

    /// Render as pattern text: one line per row, `'1'` alive and `'0'` dead.
    ///
    /// The output parses back with [`crate::parse_pattern`].
    pub fn to_pattern_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.size);
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                out.push('\n');
            }
            out.extend(row.iter().map(|&c| if c == ALIVE { '1' } else { '0' }));
        }
        out
    }
}

/// Number of cells on an `n x n` board.
///
/// Fails with `InvalidGridSize` when `n` is zero or `n * n` overflows.
pub(crate) fn cell_count(n: usize) -> Result<usize, GridError> {
    match n.checked_mul(n) {
        Some(len) if n > 0 => Ok(len),
        Some(_) => Err(GridError::InvalidGridSize {
            expected: 1,
            actual: 0,
        }),
        None => Err(GridError::InvalidGridSize {
            expected: usize::MAX,
            actual: 0,
        }),
    }
}

/// Check that a flat cell slice describes an `n x n` grid.
pub(crate) fn check_len(cells: &[Cell], n: usize) -> Result<(), GridError> {
    let expected = n.checked_mul(n).unwrap_or(usize::MAX);
    if n == 0 || cells.len() != expected {
        return Err(GridError::InvalidGridSize {
            expected,
            actual: cells.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_calculation() {
        let g = GridState::dead(10).unwrap();
        assert_eq!(g.index(0, 0), Some(0));
        assert_eq!(g.index(0, 9), Some(9));
        assert_eq!(g.index(1, 0), Some(10));
        assert_eq!(g.index(9, 9), Some(99));
        assert_eq!(g.index(10, 0), None);
        assert_eq!(g.index(0, 10), None);
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(
            GridState::dead(0),
            Err(GridError::InvalidGridSize { .. })
        ));
        assert!(matches!(
            GridState::from_cells(0, vec![]),
            Err(GridError::InvalidGridSize { .. })
        ));
    }

    #[test]
    fn oversized_side_is_rejected_instead_of_overflowing() {
        // The square of this side is exactly 2^BITS, one past usize::MAX.
        let n = 1usize << (usize::BITS / 2);
        assert!(matches!(
            GridState::dead(n),
            Err(GridError::InvalidGridSize { .. })
        ));
        assert!(matches!(
            GridState::dead(usize::MAX),
            Err(GridError::InvalidGridSize { .. })
        ));
        assert!(matches!(
            GridState::from_live_cells(usize::MAX, [(0, 0)]),
            Err(GridError::InvalidGridSize { .. })
        ));
    }

    #[test]
    fn from_cells_validates_length_and_values() {
        assert_eq!(
            GridState::from_cells(2, vec![0, 1, 0]),
            Err(GridError::InvalidGridSize {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            GridState::from_cells(2, vec![0, 1, 2, 0]),
            Err(GridError::InvalidCellValue { index: 2, value: 2 })
        );
        assert!(GridState::from_cells(2, vec![0, 1, 1, 0]).is_ok());
    }

    #[test]
    fn set_and_toggle() {
        let mut g = GridState::dead(3).unwrap();
        g.set(4, ALIVE).unwrap();
        assert!(g.is_alive(4));
        assert_eq!(g.toggle(4), Ok(DEAD));
        assert_eq!(g.toggle(0), Ok(ALIVE));
        assert_eq!(g.population(), 1);

        assert_eq!(
            g.set(9, ALIVE),
            Err(GridError::CellOutOfBounds { index: 9, len: 9 })
        );
        assert_eq!(
            g.toggle(42),
            Err(GridError::CellOutOfBounds { index: 42, len: 9 })
        );
        assert_eq!(
            g.set(1, 7),
            Err(GridError::InvalidCellValue { index: 1, value: 7 })
        );
    }

    #[test]
    fn from_live_cells_places_coordinates() {
        let g = GridState::from_live_cells(3, [(0, 1), (2, 2)]).unwrap();
        assert_eq!(g.cells(), &[0, 1, 0, 0, 0, 0, 0, 0, 1]);
        assert!(matches!(
            GridState::from_live_cells(3, [(3, 0)]),
            Err(GridError::CellOutOfBounds { .. })
        ));
    }

    #[test]
    fn fingerprint_tracks_content() {
        let a = GridState::dead(4).unwrap();
        let mut b = a.clone();
        assert_eq!(a.fingerprint(), b.fingerprint());
        b.toggle(5).unwrap();
        assert_ne!(a.fingerprint(), b.fingerprint());
        // Same cell count, different shape.
        let wide = GridState::dead(2).unwrap();
        assert_ne!(wide.fingerprint(), GridState::dead(4).unwrap().fingerprint());
    }

    #[test]
    fn pattern_text_lists_rows() {
        let g = GridState::from_cells(3, vec![0, 1, 0, 1, 0, 1, 0, 1, 0]).unwrap();
        assert_eq!(g.to_pattern_text(), "010\n101\n010");
    }
}
