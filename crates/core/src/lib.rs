//! Core simulation logic - pure, deterministic, and testable
//!
//! This crate holds the Game of Life rules on a bounded square board.
//! It has **zero dependencies** on UI, timers, or I/O, making it:
//!
//! - **Deterministic**: a transition depends only on the current cells and the board size
//! - **Testable**: every rule and edge case is covered by unit tests
//! - **Portable**: usable from the terminal frontend, headless runs, or benchmarks
//!
//! # Module Structure
//!
//! - [`grid`]: `GridState`, one validated `n x n` generation stored flat and row-major
//! - [`neighbors`]: bounded neighbor resolution (no wraparound)
//! - [`rules`]: the B3/S23 cell rule
//! - [`transition`]: next-generation computation
//! - [`seed`]: random fill and pattern-text parsing
//! - [`patterns`]: the built-in Gosper glider gun seed
//! - [`rng`]: small LCG for reproducible seeding
//!
//! # Board Edges
//!
//! The board does not wrap. A cell on the first row has no "up" neighbors, a
//! cell in the last column has no "right" neighbors, and so on; corners see 3
//! neighbors, edges 5 and interior cells 8.
//!
//! # Example
//!
//! ```
//! use tui_life_core::{next_generation, parse_pattern};
//!
//! let block = parse_pattern(4, "
//!     0000
//!     0110
//!     0110
//!     0000
//! ").unwrap();
//!
//! // A 2x2 block is a still life.
//! let next = next_generation(block.cells(), 4).unwrap();
//! assert_eq!(next, block.cells());
//! ```

pub mod error;
pub mod grid;
pub mod neighbors;
pub mod patterns;
pub mod rng;
pub mod rules;
pub mod seed;
pub mod transition;

pub use tui_life_types as types;

// Re-export commonly used types for convenience
pub use error::GridError;
pub use grid::GridState;
pub use neighbors::{neighbor_indices, neighbor_values, Neighbors};
pub use patterns::{gosper_glider_gun, Pattern, GLIDER, GOSPER_GLIDER_GUN};
pub use rng::SimpleRng;
pub use rules::{live_count, update_cell};
pub use seed::{parse_pattern, random_generation, random_generation_with};
pub use transition::next_generation;
