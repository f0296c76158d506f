use std::io;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::Command;

/// Anything that can hand the turn engine one command at a time.
pub trait CommandSource {
    /// Blocks until the next command. `Ok(None)` means the player quit or
    /// the input ran dry.
    fn next_command(&mut self) -> io::Result<Option<Command>>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Play(Command),
    Quit,
}

/// WASD in either case; anything else means "do nothing this turn".
pub fn command_from_char(ch: char) -> Command {
    match ch.to_ascii_lowercase() {
        'w' => Command::Up,
        'a' => Command::Left,
        's' => Command::Down,
        'd' => Command::Right,
        _ => Command::Stay,
    }
}

/// Interprets one line of typed input by its first character. A lone `q`
/// quits.
pub fn action_from_line(line: &str) -> KeyAction {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") {
        return KeyAction::Quit;
    }

    KeyAction::Play(line.chars().next().map_or(Command::Stay, command_from_char))
}

/// Maps a key press to an action. Releases and repeats yield `None` so the
/// caller keeps waiting.
pub fn action_from_key(ev: &KeyEvent) -> Option<KeyAction> {
    if ev.kind != KeyEventKind::Press {
        return None;
    }

    let action = match ev.code {
        _ if is_ctrl_c(ev) => KeyAction::Quit,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        KeyCode::Up => KeyAction::Play(Command::Up),
        KeyCode::Down => KeyAction::Play(Command::Down),
        KeyCode::Left => KeyAction::Play(Command::Left),
        KeyCode::Right => KeyAction::Play(Command::Right),
        KeyCode::Char(ch) => KeyAction::Play(command_from_char(ch)),
        _ => KeyAction::Play(Command::Stay),
    };

    Some(action)
}

pub fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn wasd() {
        assert_eq!(command_from_char('w'), Command::Up);
        assert_eq!(command_from_char('A'), Command::Left);
        assert_eq!(command_from_char('s'), Command::Down);
        assert_eq!(command_from_char('d'), Command::Right);
        assert_eq!(command_from_char('x'), Command::Stay);
    }

    #[test]
    fn lines_use_their_first_character() {
        assert_eq!(action_from_line("dance\n"), KeyAction::Play(Command::Right));
        assert_eq!(action_from_line("\n"), KeyAction::Play(Command::Stay));
        assert_eq!(action_from_line("?"), KeyAction::Play(Command::Stay));
        assert_eq!(action_from_line("q\n"), KeyAction::Quit);
        assert_eq!(action_from_line("quiet"), KeyAction::Play(Command::Stay));
    }

    #[test]
    fn keys() {
        assert_eq!(action_from_key(&press(KeyCode::Up)), Some(KeyAction::Play(Command::Up)));
        assert_eq!(action_from_key(&press(KeyCode::Char('a'))), Some(KeyAction::Play(Command::Left)));
        assert_eq!(action_from_key(&press(KeyCode::Tab)), Some(KeyAction::Play(Command::Stay)));
        assert_eq!(action_from_key(&press(KeyCode::Esc)), Some(KeyAction::Quit));
        assert_eq!(action_from_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)), Some(KeyAction::Quit));
    }

    #[test]
    fn releases_are_skipped() {
        let release = KeyEvent::new_with_kind_and_state(KeyCode::Up, KeyModifiers::NONE, KeyEventKind::Release, KeyEventState::NONE);
        assert_eq!(action_from_key(&release), None);
    }
}
