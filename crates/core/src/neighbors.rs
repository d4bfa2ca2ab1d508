//! Neighbor resolution on a bounded (non-wrapping) square grid.
//!
//! Each cell of an `n x n` row-major grid is addressed by its flat index `i`,
//! at row `x = i / n` and column `y = i % n`. A neighbor that would fall
//! outside the board is omitted, never clamped or wrapped, so corner cells see
//! 3 neighbors, edge cells 5 and interior cells 8.

use arrayvec::ArrayVec;

use crate::types::MAX_NEIGHBORS;

/// Fixed-capacity list of neighbor indices (no allocation).
pub type Neighbors = ArrayVec<usize, MAX_NEIGHBORS>;

/// Position of a cell relative to the board edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Edges {
    first_row: bool,
    last_row: bool,
    first_col: bool,
    last_col: bool,
}

impl Edges {
    #[inline(always)]
    fn of(i: usize, n: usize) -> Self {
        let x = i / n;
        let y = i % n;
        Self {
            first_row: x == 0,
            last_row: x == n - 1,
            first_col: y == 0,
            last_col: y == n - 1,
        }
    }
}

/// Flat indices of the in-bounds neighbors of cell `i` on an `n x n` grid.
///
/// `i` must be below `n * n` and `n` must be non-zero.
///
/// # Examples
///
/// ```
/// use tui_life_core::neighbor_indices;
///
/// // Top-left corner of a 3x3 board: right, down, down-right.
/// let mut corner = neighbor_indices(0, 3).to_vec();
/// corner.sort();
/// assert_eq!(corner, vec![1, 3, 4]);
///
/// // The center sees the whole ring.
/// assert_eq!(neighbor_indices(4, 3).len(), 8);
/// ```
pub fn neighbor_indices(i: usize, n: usize) -> Neighbors {
    debug_assert!(n > 0 && i < n * n, "cell {i} outside {n}x{n} grid");

    let e = Edges::of(i, n);
    let mut out = Neighbors::new();

    // Same row.
    if !e.last_col {
        out.push(i + 1);
    }
    if !e.first_col {
        out.push(i - 1);
    }

    // Same column.
    if !e.last_row {
        out.push(i + n);
    }
    if !e.first_row {
        out.push(i - n);
    }

    // Anti-diagonal.
    if !e.first_col && !e.last_row {
        out.push(i + (n - 1));
    }
    if !e.first_row && !e.last_col {
        out.push(i - (n - 1));
    }

    // Main diagonal.
    if !e.last_col && !e.last_row {
        out.push(i + (n + 1));
    }
    if !e.first_row && !e.first_col {
        out.push(i - (n + 1));
    }

    out
}

/// Values of the neighbors of cell `i` in `cells`.
pub fn neighbor_values(cells: &[u8], i: usize, n: usize) -> ArrayVec<u8, MAX_NEIGHBORS> {
    neighbor_indices(i, n).iter().map(|&j| cells[j]).collect()
}
