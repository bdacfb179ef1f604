use super::position::Position;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    /// Return the position one cell over from `pos` in this direction.  The
    /// result may lie outside the playing field.
    pub(crate) fn step(self, pos: Position) -> Position {
        let Position { row, col } = pos;
        match self {
            Direction::Up => Position::new(row - 1, col),
            Direction::Down => Position::new(row + 1, col),
            Direction::Left => Position::new(row, col - 1),
            Direction::Right => Position::new(row, col + 1),
        }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
