use crate::game::direction::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A player command, independent of the key that produced it
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    TogglePause,
    Restart,
    Quit,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w') | KeyCode::Up) => Some(Command::MoveUp),
            (KeyModifiers::NONE, KeyCode::Char('s') | KeyCode::Down) => Some(Command::MoveDown),
            (KeyModifiers::NONE, KeyCode::Char('a') | KeyCode::Left) => Some(Command::MoveLeft),
            (KeyModifiers::NONE, KeyCode::Char('d') | KeyCode::Right) => {
                Some(Command::MoveRight)
            }
            (KeyModifiers::NONE, KeyCode::Char('p')) => Some(Command::TogglePause),
            (KeyModifiers::NONE, KeyCode::Char('r')) => Some(Command::Restart),
            (KeyModifiers::NONE, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(Command::Quit),
            _ => None,
        }
    }

    /// Return the direction requested by a movement command
    pub(crate) fn direction(self) -> Option<Direction> {
        match self {
            Command::MoveUp => Some(Direction::Up),
            Command::MoveDown => Some(Direction::Down),
            Command::MoveLeft => Some(Direction::Left),
            Command::MoveRight => Some(Direction::Right),
            Command::TogglePause | Command::Restart | Command::Quit => None,
        }
    }
}
