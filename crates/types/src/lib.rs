//! Shared types and constants.
//!
//! This crate defines the plain data shared by the simulation core, the driver
//! and the terminal frontend. It has no dependencies so it can be used in any
//! context (core logic, rendering, input mapping).
//!
//! # Cells
//!
//! A cell is a `u8` holding [`DEAD`] (0) or [`ALIVE`] (1). A generation is a flat,
//! row-major slice of `N * N` cells: index `i` is row `i / N`, column `i % N`.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GENERATION_MS` | 175 | Interval between generations while running |
//! | `FRAME_MS` | 16 | Frontend frame / input poll interval (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use tui_life_types::{LifeAction, ALIVE, DEAD, DEFAULT_BOARD_SIZE};
//!
//! assert_eq!(DEFAULT_BOARD_SIZE, 50);
//! assert_eq!(DEAD, 0);
//! assert_eq!(ALIVE, 1);
//!
//! assert_eq!(LifeAction::Clear.as_str(), "clear");
//! assert_eq!(LifeAction::ToggleCell(7).as_str(), "toggleCell");
//! ```

/// A single cell value: [`DEAD`] or [`ALIVE`].
pub type Cell = u8;

/// Dead cell value.
pub const DEAD: Cell = 0;

/// Live cell value.
pub const ALIVE: Cell = 1;

/// Default board side length (50x50 cells).
pub const DEFAULT_BOARD_SIZE: usize = 50;

/// Largest board side length accepted from configuration.
pub const MAX_BOARD_SIZE: usize = 200;

/// Interval between generations while the simulation is running.
pub const GENERATION_MS: u32 = 175;

/// Frontend frame interval in milliseconds (16ms ≈ 60 FPS).
pub const FRAME_MS: u32 = 16;

/// A cell is seeded alive when a uniform draw in `[0, 1)` exceeds this value.
///
/// This gives each cell an independent 30% chance of starting alive.
pub const RANDOM_ALIVE_THRESHOLD: f64 = 0.7;

/// Maximum number of neighbors any cell can have.
pub const MAX_NEIGHBORS: usize = 8;

/// Actions the frontend can apply to the running simulation.
///
/// These are produced by keyboard/mouse input and consumed by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifeAction {
    /// Start advancing generations on the timer (no-op when already running)
    Start,
    /// Stop the timer (no-op when already stopped)
    Stop,
    /// Stop and replace the board with a random generation
    Reset,
    /// Stop and kill every cell
    Clear,
    /// Stop and load the Gosper glider gun seed pattern
    LoadGosperGun,
    /// Advance exactly one generation, whether or not the timer runs
    Step,
    /// Flip the cell at the given flat index
    ToggleCell(usize),
}

impl LifeAction {
    /// Convert to a camelCase string (for logs and the status line).
    pub fn as_str(&self) -> &'static str {
        match self {
            LifeAction::Start => "start",
            LifeAction::Stop => "stop",
            LifeAction::Reset => "reset",
            LifeAction::Clear => "clear",
            LifeAction::LoadGosperGun => "gosperGun",
            LifeAction::Step => "step",
            LifeAction::ToggleCell(_) => "toggleCell",
        }
    }
}
