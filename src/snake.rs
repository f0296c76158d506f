use crate::error::GameError;
use crate::grid::{Grid, Position};
use Direction::*;
use MoveResult::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveResult {
    /// `old_tail` is the cell the last segment left; for a lone head it equals `old_head`.
    Moved { new_head: Position, old_head: Position, old_tail: Position },
    /// The step would have put the head on its own neck; nothing changed.
    Reversed,
}

/// The snake's segment chain. Index 0 is the head; every stored segment is
/// live, so the chain never has gaps and its length is `body.len()`.
#[derive(Debug, Clone)]
pub struct Snake {
    body: Vec<Position>,
    capacity: usize,
    direction: Option<Direction>,
}

impl Snake {
    /// A one-segment snake. `capacity` is the longest it may ever grow,
    /// normally the number of cells in the grid.
    pub fn new(head: Position, capacity: usize) -> Self {
        Snake { body: vec![head], capacity: capacity.max(1), direction: None }
    }

    /// A snake laid out along `body`, head first.
    pub fn from_body(body: Vec<Position>, capacity: usize) -> Result<Self, GameError> {
        if body.is_empty() {
            return Err(GameError::EmptySnake);
        }
        if body.len() > capacity {
            return Err(GameError::OutOfCapacity { capacity });
        }

        Ok(Snake { body, capacity, direction: None })
    }

    pub fn body(&self) -> &[Position] {
        &self.body
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Last direction actually travelled, `None` until the first move.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    pub fn move_step(&mut self, direction: Direction) -> MoveResult {
        let old_head = self.head();
        let new_head = old_head.offset(direction.delta());

        if self.body.get(1) == Some(&new_head) {
            return Reversed;
        }

        // Each segment takes the cell its predecessor held before this step.
        let mut carried = old_head;
        self.body[0] = new_head;
        for segment in self.body.iter_mut().skip(1) {
            carried = std::mem::replace(segment, carried);
        }

        self.direction = Some(direction);
        Moved { new_head, old_head, old_tail: carried }
    }

    /// Appends a segment behind the tail, continuing the line formed by the
    /// last two segments. Returns where it was placed.
    pub fn grow(&mut self) -> Result<Position, GameError> {
        if self.body.len() >= self.capacity {
            return Err(GameError::OutOfCapacity { capacity: self.capacity });
        }

        let tail = self.body[self.body.len() - 1];
        let trailing = match self.body.len() {
            1 => self.direction.map_or(Left.delta(), |dir| dir.opposite().delta()),
            n => {
                let ahead = self.body[n - 2];
                (tail.x - ahead.x, tail.y - ahead.y)
            }
        };

        let segment = tail.offset(trailing);
        self.body.push(segment);
        Ok(segment)
    }

    pub fn hits_wall(&self, grid: &Grid) -> bool {
        !grid.contains(self.head())
    }

    pub fn hits_itself(&self) -> bool {
        self.body[1..].contains(&self.head())
    }
}
