use serde::Deserialize;
use std::fmt;

/// A cell on the playing field.  Rows grow downwards and columns grow
/// rightwards; `(0, 0)` is the top-left corner.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Position {
    pub(crate) row: i32,
    pub(crate) col: i32,
}

impl Position {
    pub(crate) const fn new(row: i32, col: i32) -> Position {
        Position { row, col }
    }

    /// Returns `true` if `other` shares an edge with `self`
    pub(crate) fn is_adjacent(self, other: Position) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
