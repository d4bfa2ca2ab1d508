//! Terminal frontend.
//!
//! This is a small, game-oriented rendering layer for the terminal.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that is diffed and flushed to the terminal backend.
//!
//! Goals:
//! - Keep `core` and `engine` free of any I/O
//! - Redraw only what changed between generations
//! - Keep cells roughly square (2 chars wide per cell) when the terminal allows

pub mod fb;
pub mod grid_view;
pub mod render_throttle;
pub mod renderer;
pub mod text;

pub use tui_life_core as core;
pub use tui_life_engine as engine;
pub use tui_life_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use grid_view::{AnchorY, BoardLayout, GridView, Overlay, Viewport};
pub use render_throttle::{frame_fingerprint, RenderThrottle};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use text::TextRender;
