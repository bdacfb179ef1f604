use crate::game::Direction;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

/// A keypress that means something to the game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Key {
    Up,
    Down,
    Left,
    Right,
    Quit,
    Restart,
}

impl Key {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Key> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Key::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => Some(Key::Up),
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => Some(Key::Down),
            (KeyModifiers::NONE, KeyCode::Char('a' | 'h') | KeyCode::Left) => Some(Key::Left),
            (KeyModifiers::NONE, KeyCode::Char('d' | 'l') | KeyCode::Right) => Some(Key::Right),
            (KeyModifiers::NONE, KeyCode::Char('q') | KeyCode::Esc) => Some(Key::Quit),
            (KeyModifiers::NONE, KeyCode::Char('r')) => Some(Key::Restart),
            _ => None,
        }
    }

    pub(crate) fn from_event(event: &Event) -> Option<Key> {
        Key::from_key_event(event.as_key_press_event()?)
    }

    /// The direction to steer the snake in, if this is a steering key
    pub(crate) fn direction(self) -> Option<Direction> {
        match self {
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            Key::Quit | Key::Restart => None,
        }
    }
}

/// Collapse a batch of keypresses that arrived during one tick into the one
/// that counts: the most recent, unless a quit request appears anywhere in
/// the batch.
pub(crate) fn latest_key<I: IntoIterator<Item = Key>>(keys: I) -> Option<Key> {
    let mut latest = None;
    for key in keys {
        if key == Key::Quit {
            return Some(Key::Quit);
        }
        latest = Some(key);
    }
    latest
}
