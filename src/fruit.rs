use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::GameError;
use crate::grid::{Grid, Position};
use crate::snake::Snake;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fruit {
    position: Position,
}

impl Fruit {
    pub fn spawn<R: Rng + ?Sized>(grid: &Grid, snake: &Snake, rng: &mut R) -> Result<Self, GameError> {
        pick_position(grid, snake, rng).map(|position| Fruit { position }).ok_or(GameError::NoFreeCell)
    }

    /// A fruit at a fixed cell, which must be on the grid and off the snake.
    pub fn at(position: Position, grid: &Grid, snake: &Snake) -> Result<Self, GameError> {
        let position = grid.check(position)?;
        if snake.occupies(position) {
            return Err(GameError::FruitOnSnake { pos: position });
        }

        Ok(Fruit { position })
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Moves the fruit to a free cell. Returns `false`, leaving the fruit
    /// where it was, when the snake covers the whole grid.
    pub fn relocate<R: Rng + ?Sized>(&mut self, grid: &Grid, snake: &Snake, rng: &mut R) -> bool {
        match pick_position(grid, snake, rng) {
            Some(position) => {
                debug!("fruit moved from {:?} to {:?}", self.position, position);
                self.position = position;
                true
            },
            None => false,
        }
    }
}

/// Uniformly random grid cell not covered by the snake, scanning the grid in
/// row-major order so a fixed seed always gives the same answer.
pub fn pick_position<R: Rng + ?Sized>(grid: &Grid, snake: &Snake, rng: &mut R) -> Option<Position> {
    let choices: Vec<Position> = grid.cells().filter(|pos| !snake.occupies(*pos)).collect();
    choices.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SEED: u64 = 0x5eed_f00d;

    #[test]
    fn never_lands_on_the_snake() {
        let grid = Grid::new(4, 4).unwrap();
        let body: Vec<Position> = grid.cells().take(13).collect();
        let snake = Snake::from_body(body, grid.cell_count()).unwrap();
        let mut rng = StdRng::seed_from_u64(SEED);

        for _ in 0..200 {
            let pos = pick_position(&grid, &snake, &mut rng).unwrap();
            assert!(!snake.occupies(pos));
            assert!(grid.contains(pos));
        }
    }

    #[test]
    fn only_free_cell_is_chosen() {
        let grid = Grid::new(3, 1).unwrap();
        let snake = Snake::from_body(vec![Position::new(0, 0), Position::new(2, 0)], 3).unwrap();
        let mut rng = StdRng::seed_from_u64(SEED);

        assert_eq!(pick_position(&grid, &snake, &mut rng), Some(Position::new(1, 0)));
    }

    #[test]
    fn full_grid_has_no_position() {
        let grid = Grid::new(2, 1).unwrap();
        let snake = Snake::from_body(vec![Position::new(0, 0), Position::new(1, 0)], 2).unwrap();
        let mut rng = StdRng::seed_from_u64(SEED);

        assert_eq!(pick_position(&grid, &snake, &mut rng), None);
        assert!(matches!(Fruit::spawn(&grid, &snake, &mut rng), Err(GameError::NoFreeCell)));
    }

    #[test]
    fn same_seed_same_cell() {
        let grid = Grid::new(8, 8).unwrap();
        let snake = Snake::new(grid.center(), grid.cell_count());

        let a = pick_position(&grid, &snake, &mut StdRng::seed_from_u64(SEED));
        let b = pick_position(&grid, &snake, &mut StdRng::seed_from_u64(SEED));
        assert_eq!(a, b);
    }

    #[test]
    fn fixed_fruit_is_validated() {
        let grid = Grid::new(4, 4).unwrap();
        let snake = Snake::new(Position::new(1, 1), grid.cell_count());

        assert!(Fruit::at(Position::new(2, 1), &grid, &snake).is_ok());
        assert!(matches!(Fruit::at(Position::new(1, 1), &grid, &snake), Err(GameError::FruitOnSnake { .. })));
        assert!(matches!(Fruit::at(Position::new(4, 1), &grid, &snake), Err(GameError::OutOfBounds { .. })));
    }

    #[test]
    fn relocate_keeps_fruit_when_board_is_full() {
        let grid = Grid::new(2, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(SEED);
        let mut fruit = Fruit::at(Position::new(1, 0), &grid, &Snake::new(Position::new(0, 0), 2)).unwrap();
        let full = Snake::from_body(vec![Position::new(1, 0), Position::new(0, 0)], 2).unwrap();

        assert!(!fruit.relocate(&grid, &full, &mut rng));
        assert_eq!(fruit.position(), Position::new(1, 0));
    }
}
