//! Terminal input module (driver-facing).
//!
//! This module is independent of any rendering code. It maps `crossterm` key
//! and mouse events into [`crate::types::LifeAction`]s and tracks the board
//! cursor used to toggle cells from the keyboard.

pub mod handler;
pub mod map;

pub use tui_life_types as types;

pub use handler::CursorHandler;
pub use map::{handle_key_event, should_quit};
