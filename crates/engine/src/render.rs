//! Render callback used to present a generation.
//!
//! The driver never draws anything itself. Frontends implement [`Render`]
//! (or pass a closure) and receive each board as it is presented.

use std::convert::Infallible;

use crate::core::GridState;

/// Receives a board to display.
///
/// The board carries its own size (`grid.size()`); `generation` counts
/// transitions since the board was last replaced.
pub trait Render {
    type Error;

    fn render(&mut self, grid: &GridState, generation: u64) -> Result<(), Self::Error>;
}

impl<F> Render for F
where
    F: FnMut(&GridState, u64),
{
    type Error = Infallible;

    fn render(&mut self, grid: &GridState, generation: u64) -> Result<(), Self::Error> {
        self(grid, generation);
        Ok(())
    }
}
