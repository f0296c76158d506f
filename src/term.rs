use std::io::{self, Stdout, Write, stdout};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read};

use crate::game::{Command, Snapshot};
use crate::input::{CommandSource, KeyAction, action_from_key};
use crate::render::{Board, Screen, status_line};

/// Raw-mode, alternate-screen front end. Every frame is redrawn in full from
/// the top-left corner.
pub struct TermManager {
    stdout: Stdout,
    // Size of the last frame drawn, (0, 0) before the first one.
    frame: (u16, u16),
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout(), frame: (0, 0) }
    }

    pub fn setup(&mut self) -> io::Result<()> {
        execute!(self.stdout, EnterAlternateScreen, cursor::Hide, cursor::DisableBlinking)?;
        terminal::enable_raw_mode()
    }

    pub fn restore(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
    }

    pub fn read_key_blocking(&self) -> io::Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read()? {
                return Ok(ev);
            }
        }
    }

    /// Waits for a key press that means something, skipping releases.
    pub fn read_action(&self) -> io::Result<KeyAction> {
        loop {
            if let Some(action) = action_from_key(&self.read_key_blocking()?) {
                return Ok(action);
            }
        }
    }

    /// Prints `lines` in a box centred on the last frame drawn, or on the
    /// whole terminal when nothing has been drawn yet.
    pub fn show_message(&mut self, lines: &[&str]) -> io::Result<()> {
        let (width, height) = match self.frame {
            (0, 0) => terminal::size()?,
            frame => frame,
        };
        let msg_width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0) as u16 + 4;
        let msg_height = lines.len() as u16 + 2;
        let left = width.saturating_sub(msg_width) / 2;
        let top = height.saturating_sub(msg_height) / 2;

        let blank = " ".repeat(msg_width as usize);
        queue!(self.stdout, cursor::MoveTo(left, top), style::Print(&blank))?;
        for (i, line) in lines.iter().enumerate() {
            let padded = format!("{line: ^width$}", line = line, width = msg_width as usize);
            queue!(self.stdout, cursor::MoveTo(left, top + 1 + i as u16), style::Print(padded))?;
        }
        queue!(self.stdout, cursor::MoveTo(left, top + msg_height - 1), style::Print(&blank))?;

        self.stdout.flush()
    }

    pub fn clear(&mut self) -> io::Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All))
    }

    fn print_lines(&mut self, lines: &[String]) -> io::Result<()> {
        queue!(self.stdout, terminal::Clear(ClearType::All))?;
        for (y, line) in lines.iter().enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, y as u16), style::Print(line))?;
        }

        let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        self.frame = (width as u16, lines.len() as u16);
        self.stdout.flush()
    }
}

impl CommandSource for TermManager {
    fn next_command(&mut self) -> io::Result<Option<Command>> {
        match self.read_action()? {
            KeyAction::Play(command) => Ok(Some(command)),
            KeyAction::Quit => Ok(None),
        }
    }
}

impl Screen for TermManager {
    fn present(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        let mut lines = Board::project(snapshot).lines();
        lines.push(status_line(snapshot));
        self.print_lines(&lines)
    }
}
