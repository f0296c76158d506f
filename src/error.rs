use std::io;

use thiserror::Error;

use crate::grid::Position;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid grid size {width}x{height}: {reason}")]
    InvalidGrid { width: u16, height: u16, reason: &'static str },

    #[error("position ({}, {}) is outside the {width}x{height} grid", .pos.x, .pos.y)]
    OutOfBounds { pos: Position, width: u16, height: u16 },

    #[error("a snake needs at least one segment")]
    EmptySnake,

    #[error("snake is already at its maximum length of {capacity}")]
    OutOfCapacity { capacity: usize },

    #[error("fruit at ({}, {}) overlaps the snake", .pos.x, .pos.y)]
    FruitOnSnake { pos: Position },

    #[error("no free cell left to place fruit")]
    NoFreeCell,

    #[error(transparent)]
    Io(#[from] io::Error),
}
