use super::direction::Direction;
use super::error::ConfigurationError;
use super::position::Position;
use std::collections::{HashSet, VecDeque};

/// The snake: where it is, where it is heading, and how much it still has
/// to grow
///
/// All positions are relative to the top-left corner of the playing field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The cells occupied by the snake, from the head at the front to the
    /// tail at the back.  Never empty, never contains duplicates.
    segments: VecDeque<Position>,

    /// The direction in which the snake is currently facing
    direction: Direction,

    /// The number of upcoming advances that will not drop the tail
    pending_growth: usize,
}

impl Snake {
    /// Create a straight snake of `length` segments with its head at `head`,
    /// facing `direction`, and its body trailing out behind it.
    pub(crate) fn new(
        head: Position,
        direction: Direction,
        length: usize,
    ) -> Result<Snake, ConfigurationError> {
        let behind = direction.reverse();
        Snake::from_segments(
            std::iter::successors(Some(head), |&p| Some(behind.step(p))).take(length),
            direction,
        )
    }

    /// Create a snake from an explicit head-to-tail list of cells.
    ///
    /// # Errors
    ///
    /// Fails if the list is empty, if two consecutive cells are not adjacent,
    /// or if a cell appears more than once.
    pub(crate) fn from_segments<I>(
        segments: I,
        direction: Direction,
    ) -> Result<Snake, ConfigurationError>
    where
        I: IntoIterator<Item = Position>,
    {
        let segments = segments.into_iter().collect::<VecDeque<_>>();
        if segments.is_empty() {
            return Err(ConfigurationError::ZeroLength);
        }
        let mut seen = HashSet::with_capacity(segments.len());
        for &pos in &segments {
            if !seen.insert(pos) {
                return Err(ConfigurationError::Overlap(pos));
            }
        }
        for (&a, &b) in segments.iter().zip(segments.iter().skip(1)) {
            if !a.is_adjacent(b) {
                return Err(ConfigurationError::NotAdjacent { a, b });
            }
        }
        Ok(Snake {
            segments,
            direction,
            pending_growth: 0,
        })
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Position {
        *self
            .segments
            .front()
            .expect("snake should always have at least one segment")
    }

    /// Return the position of the snake's tail
    pub(crate) fn tail(&self) -> Position {
        *self
            .segments
            .back()
            .expect("snake should always have at least one segment")
    }

    /// Return the cells occupied by the snake, head first
    pub(crate) fn segments(&self) -> &VecDeque<Position> {
        &self.segments
    }

    pub(crate) fn len(&self) -> usize {
        self.segments.len()
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn pending_growth(&self) -> usize {
        self.pending_growth
    }

    #[cfg(test)]
    pub(crate) fn occupies(&self, pos: Position) -> bool {
        self.segments.contains(&pos)
    }

    /// Change the snake's heading to `direction`.  Attempts to turn the snake
    /// straight back onto its own neck are ignored.
    pub(crate) fn set_direction(&mut self, direction: Direction) {
        if direction != self.direction.reverse() {
            self.direction = direction;
        }
    }

    /// Return the cell that the head will move into on the next advance
    pub(crate) fn next_head(&self) -> Position {
        self.direction.step(self.head())
    }

    /// Returns `true` if moving the head into `pos` would run the snake into
    /// its own body.  The tail only counts when it is not about to move out
    /// of the way, i.e., when the snake is growing.
    pub(crate) fn bites(&self, pos: Position) -> bool {
        let vacating = usize::from(self.pending_growth == 0);
        self.segments
            .iter()
            .take(self.segments.len() - vacating)
            .any(|&p| p == pos)
    }

    /// Move the snake forwards one cell in the current direction and return
    /// the new head position.  The tail is dropped unless growth is pending.
    pub(crate) fn advance(&mut self) -> Position {
        let head = self.next_head();
        self.segments.push_front(head);
        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            let _ = self.segments.pop_back();
        }
        head
    }

    /// Queue `n` more segments to be added over the next advances
    pub(crate) fn grow(&mut self, n: usize) {
        self.pending_growth += n;
    }
}
