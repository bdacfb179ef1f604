use super::error::{ConfigurationError, NoSpaceError};
use super::position::Position;
use rand::{seq::IteratorRandom, Rng};
use std::collections::HashSet;

/// The playing field: its fixed dimensions and the current food, if any
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct World {
    width: u16,
    height: u16,
    food: Option<Position>,
}

impl World {
    pub(crate) fn new(width: u16, height: u16) -> Result<World, ConfigurationError> {
        if width == 0 || height == 0 {
            return Err(ConfigurationError::EmptyField { width, height });
        }
        Ok(World {
            width,
            height,
            food: None,
        })
    }

    pub(crate) fn width(&self) -> u16 {
        self.width
    }

    pub(crate) fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells in the field
    pub(crate) fn area(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    pub(crate) fn food(&self) -> Option<Position> {
        self.food
    }

    /// Where a snake starts when no position is configured: halfway down and
    /// a quarter of the way across
    pub(crate) fn default_start(&self) -> Position {
        Position::new(i32::from(self.height / 2), i32::from(self.width / 4))
    }

    pub(crate) fn is_in_bounds(&self, pos: Position) -> bool {
        (0..i32::from(self.height)).contains(&pos.row)
            && (0..i32::from(self.width)).contains(&pos.col)
    }

    /// Iterate over every cell in the field in row-major order
    pub(crate) fn cells(&self) -> impl Iterator<Item = Position> {
        let width = i32::from(self.width);
        (0..i32::from(self.height))
            .flat_map(move |row| (0..width).map(move |col| Position::new(row, col)))
    }

    /// Put the food in a cell chosen uniformly at random from those not in
    /// `exclude`, and return that cell.
    ///
    /// # Errors
    ///
    /// Fails if every cell is excluded, in which case there is no food
    /// afterwards.
    pub(crate) fn place_food<R: Rng + ?Sized>(
        &mut self,
        exclude: &HashSet<Position>,
        rng: &mut R,
    ) -> Result<Position, NoSpaceError> {
        self.food = self.cells().filter(|p| !exclude.contains(p)).choose(rng);
        self.food.ok_or(NoSpaceError)
    }

    pub(crate) fn clear_food(&mut self) {
        self.food = None;
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, pos: Position) {
        self.food = Some(pos);
    }
}
