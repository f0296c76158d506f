//! Turn-based Snake on a fixed grid.
//!
//! The simulation lives in [`grid`], [`snake`], [`fruit`] and [`game`]; the
//! front ends in [`term`] and [`console`] only feed it commands and draw the
//! snapshots it hands back.

pub mod config;
pub mod console;
pub mod error;
pub mod fruit;
pub mod game;
pub mod grid;
pub mod input;
pub mod render;
pub mod snake;
pub mod term;

pub use config::GameConfig;
pub use error::GameError;
pub use game::{Command, Game, GameState, SessionEnd, Snapshot, run_session};
