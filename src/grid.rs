use crate::error::GameError;

/// A cell coordinate. Signed, so a head that steps off the board is still
/// representable and can be caught by the wall check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Position { x: self.x + dx, y: self.y + dy }
    }
}

/// Fixed-size playing field covering `[0, width) x [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
}

impl Grid {
    pub fn new(width: u16, height: u16) -> Result<Self, GameError> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidGrid { width, height, reason: "dimensions must be non-zero" });
        }

        Ok(Grid { width, height })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells, which is also the longest a snake can get.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width as i32 && pos.y < self.height as i32
    }

    pub fn center(&self) -> Position {
        Position::new(self.width as i32 / 2, self.height as i32 / 2)
    }

    pub fn check(&self, pos: Position) -> Result<Position, GameError> {
        if self.contains(pos) {
            Ok(pos)
        } else {
            Err(GameError::OutOfBounds { pos, width: self.width, height: self.height })
        }
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }
}
