//! Game settings and their defaults.

use crate::error::GameError;
use crate::grid::Grid;

/// Columns on the default board.
pub const DEFAULT_WIDTH: u16 = 10;

/// Rows on the default board.
pub const DEFAULT_HEIGHT: u16 = 10;

/// Points awarded per fruit.
pub const DEFAULT_FRUIT_VALUE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub fruit_value: u32,
    /// Fixed seed for fruit placement; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig { width: DEFAULT_WIDTH, height: DEFAULT_HEIGHT, fruit_value: DEFAULT_FRUIT_VALUE, seed: None }
    }
}

impl GameConfig {
    /// Builds the grid this config describes. The board needs room for the
    /// starting head plus one fruit.
    pub fn grid(&self) -> Result<Grid, GameError> {
        let grid = Grid::new(self.width, self.height)?;
        if grid.cell_count() < 2 {
            return Err(GameError::InvalidGrid {
                width: self.width,
                height: self.height,
                reason: "need at least two cells",
            });
        }

        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        let grid = config.grid().unwrap();

        assert_eq!((grid.width(), grid.height()), (10, 10));
        assert_eq!(config.fruit_value, 10);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn rejects_tiny_boards() {
        for (width, height) in [(0, 4), (4, 0), (1, 1)] {
            let config = GameConfig { width, height, ..GameConfig::default() };
            assert!(matches!(config.grid(), Err(GameError::InvalidGrid { .. })));
        }
    }

    #[test]
    fn single_row_is_fine() {
        let config = GameConfig { width: 2, height: 1, ..GameConfig::default() };
        assert_eq!(config.grid().unwrap().cell_count(), 2);
    }
}
