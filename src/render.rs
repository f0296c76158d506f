//! Turns a game snapshot into rows of text. Nothing here writes to the
//! terminal; that is left to whichever [`Screen`] is in use.

use std::io;

use crate::game::Snapshot;
use crate::grid::Position;
use crate::snake::Direction;

pub const EMPTY_CHAR: char = ' ';
pub const SNAKE_BODY_CHAR: char = '*';
pub const FRUIT_CHAR: char = 'O';
pub const DEAD_SNAKE_CHAR: char = 'X';
pub const RESTING_HEAD_CHAR: char = '@';

/// Output side of a game front end.
pub trait Screen {
    fn present(&mut self, snapshot: &Snapshot) -> io::Result<()>;
}

pub fn head_char(direction: Option<Direction>) -> char {
    match direction {
        Some(Direction::Up) => '^',
        Some(Direction::Down) => 'v',
        Some(Direction::Left) => '<',
        Some(Direction::Right) => '>',
        None => RESTING_HEAD_CHAR,
    }
}

/// The symbol grid for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Board {
    pub fn project(snapshot: &Snapshot) -> Self {
        let (width, height) = (snapshot.width as usize, snapshot.height as usize);
        let mut board = Board { width, height, cells: vec![EMPTY_CHAR; width * height] };

        board.put(snapshot.fruit, FRUIT_CHAR);

        let dead = snapshot.state.is_loss();
        // Tail first, so the head wins when it overlaps the body.
        for (i, pos) in snapshot.segments.iter().enumerate().rev() {
            let ch = match (dead, i) {
                (true, _) => DEAD_SNAKE_CHAR,
                (false, 0) => head_char(snapshot.direction),
                (false, _) => SNAKE_BODY_CHAR,
            };
            board.put(*pos, ch);
        }

        board
    }

    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.width.max(1))
    }

    /// The board as framed text, three columns per cell.
    pub fn lines(&self) -> Vec<String> {
        let rule = format!("+{}+", "-".repeat(self.width * 3));
        let mut lines = Vec::with_capacity(self.height + 2);

        lines.push(rule.clone());
        for row in self.rows() {
            let mut line = String::with_capacity(self.width * 3 + 2);
            line.push('|');
            for ch in row {
                line.push(' ');
                line.push(*ch);
                line.push(' ');
            }
            line.push('|');
            lines.push(line);
        }
        lines.push(rule);

        lines
    }

    // Off-board positions (a head past the wall, a freshly grown tail) are skipped.
    fn put(&mut self, pos: Position, ch: char) {
        if pos.x < 0 || pos.y < 0 {
            return;
        }

        let (x, y) = (pos.x as usize, pos.y as usize);
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = ch;
        }
    }
}

pub fn status_line(snapshot: &Snapshot) -> String {
    format!("Score: {}  Length: {}  Turn: {}", snapshot.score, snapshot.segments.len(), snapshot.turn)
}
