//! Board cursor and cell toggling.
//!
//! The cursor stands in for clicking a single checkbox: arrow keys (or
//! `h`/`j`/`k`/`l`) move it, Space toggles the cell under it. Mouse clicks
//! toggle the clicked cell directly, given a hit-test from the view.

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};

use crate::types::LifeAction;

/// Cursor position on an `n x n` board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorHandler {
    size: usize,
    row: usize,
    col: usize,
}

impl CursorHandler {
    /// Create a cursor centered on an `n x n` board.
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        Self {
            size,
            row: size / 2,
            col: size / 2,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Flat index of the cell under the cursor.
    pub fn index(&self) -> usize {
        self.row * self.size + self.col
    }

    /// Move by `(drow, dcol)`, clamped to the board.
    pub fn move_by(&mut self, drow: isize, dcol: isize) {
        let max = self.size - 1;
        self.row = self.row.saturating_add_signed(drow).min(max);
        self.col = self.col.saturating_add_signed(dcol).min(max);
    }

    /// Move directly to `index`, ignoring indices past the board.
    pub fn move_to(&mut self, index: usize) {
        if index < self.size * self.size {
            self.row = index / self.size;
            self.col = index % self.size;
        }
    }

    /// Handle a key press.
    ///
    /// Movement keys update the cursor and return `None`; Space returns a
    /// toggle for the cell under the cursor.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<LifeAction> {
        match code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => self.move_by(0, -1),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => self.move_by(0, 1),
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => self.move_by(-1, 0),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => self.move_by(1, 0),
            KeyCode::Home => self.col = 0,
            KeyCode::End => self.col = self.size - 1,
            KeyCode::PageUp => self.row = 0,
            KeyCode::PageDown => self.row = self.size - 1,
            KeyCode::Char(' ') => return Some(LifeAction::ToggleCell(self.index())),
            _ => {}
        }
        None
    }

    /// Handle a mouse event.
    ///
    /// A left click on a board cell moves the cursor there and toggles it.
    /// `hit_test` maps terminal `(column, row)` to a flat cell index.
    pub fn handle_mouse(
        &mut self,
        event: MouseEvent,
        hit_test: impl Fn(u16, u16) -> Option<usize>,
    ) -> Option<LifeAction> {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        let index = hit_test(event.column, event.row)?;
        self.move_to(index);
        Some(LifeAction::ToggleCell(index))
    }
}
