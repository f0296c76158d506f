use std::io::{self, BufRead, Write};

use crate::game::{Command, Snapshot};
use crate::input::{CommandSource, KeyAction, action_from_line};
use crate::render::{Board, Screen, status_line};

/// Line-oriented front end: prints each frame as plain text and reads one
/// typed line per turn. Works with pipes and dumb terminals.
pub struct PlainConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> PlainConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        PlainConsole { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()
    }
}

impl<R: BufRead, W: Write> CommandSource for PlainConsole<R, W> {
    fn next_command(&mut self) -> io::Result<Option<Command>> {
        // Bytes that are not UTF-8 still make a line; they just map to `Stay`.
        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }

        match action_from_line(&String::from_utf8_lossy(&line)) {
            KeyAction::Play(command) => Ok(Some(command)),
            KeyAction::Quit => Ok(None),
        }
    }
}

impl<R: BufRead, W: Write> Screen for PlainConsole<R, W> {
    fn present(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        for line in Board::project(snapshot).lines() {
            writeln!(self.writer, "{}", line)?;
        }
        writeln!(self.writer, "{}", status_line(snapshot))?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::game::{Game, GameState, SessionEnd, run_session};
    use crate::grid::{Grid, Position};
    use crate::snake::Snake;

    #[test]
    fn reads_one_command_per_line() {
        let mut console = PlainConsole::new(Cursor::new("w\n\nxyz\nD\nq\nd\n"), Vec::new());

        assert_eq!(console.next_command().unwrap(), Some(Command::Up));
        assert_eq!(console.next_command().unwrap(), Some(Command::Stay));
        assert_eq!(console.next_command().unwrap(), Some(Command::Stay));
        assert_eq!(console.next_command().unwrap(), Some(Command::Right));
        assert_eq!(console.next_command().unwrap(), None);
    }

    #[test]
    fn garbage_bytes_wait_a_turn() {
        let mut console = PlainConsole::new(Cursor::new(vec![0xff, b'\n', b'd', b'\n']), Vec::new());

        assert_eq!(console.next_command().unwrap(), Some(Command::Stay));
        assert_eq!(console.next_command().unwrap(), Some(Command::Right));
        assert_eq!(console.next_command().unwrap(), None);
    }

    #[test]
    fn end_of_input_quits() {
        let mut console = PlainConsole::new(Cursor::new("s"), Vec::new());

        assert_eq!(console.next_command().unwrap(), Some(Command::Down));
        assert_eq!(console.next_command().unwrap(), None);
    }

    #[test]
    fn plays_a_whole_session() {
        let grid = Grid::new(3, 3).unwrap();
        let snake = Snake::new(Position::new(1, 1), grid.cell_count());
        let mut game = Game::from_parts(grid, snake, Position::new(2, 2), 10, StdRng::seed_from_u64(1)).unwrap();
        let mut console = PlainConsole::new(Cursor::new("a\na\n"), Vec::new());

        let end = run_session(&mut game, &mut console).unwrap();
        assert_eq!(end, SessionEnd::Finished { state: GameState::LostWall, score: 0 });

        let out = String::from_utf8(console.into_writer()).unwrap();
        assert_eq!(out.matches("+---------+").count(), 6);
        assert!(out.contains("|    @    |"));
        assert!(out.contains("| <       |"));
        assert!(out.contains("|       O |"));
        assert!(out.ends_with("Score: 0  Length: 1  Turn: 2\n"));
    }
}
