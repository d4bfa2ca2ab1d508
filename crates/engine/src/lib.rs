//! Simulation driver and runtime configuration.
//!
//! [`LifeGame`] replaces the ambient "current generation" and "interval
//! handle" of a browser page with one owned object: the frontend holds it,
//! feeds it elapsed time and user actions, and presents its board through a
//! [`Render`] implementation.
//!
//! # Example
//!
//! ```
//! use tui_life_engine::LifeGame;
//! use tui_life_types::LifeAction;
//!
//! let mut game = LifeGame::new(50, 7).unwrap().with_interval(175);
//! game.apply_action(LifeAction::Start).unwrap();
//!
//! // Ten 16ms frames are not enough for a 175ms generation...
//! let produced = (0..10).filter(|_| game.tick(16)).count();
//! assert_eq!(produced, 0);
//!
//! // ...but the eleventh crosses the interval.
//! assert!(game.tick(16));
//! assert_eq!(game.generation(), 1);
//! ```

pub mod config;
pub mod driver;
pub mod render;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use config::LifeConfig;
pub use driver::{LifeGame, LifeSnapshot};
pub use render::Render;
