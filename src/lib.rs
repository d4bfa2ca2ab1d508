//! TUI Life (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof as
//! `tui_life::{core, engine, input, term, types}`; the implementation lives in
//! dedicated crates under `crates/`.

pub use tui_life_core as core;
pub use tui_life_engine as engine;
pub use tui_life_input as input;
pub use tui_life_term as term;
pub use tui_life_types as types;
