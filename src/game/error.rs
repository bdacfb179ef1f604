use super::position::Position;
use thiserror::Error;

/// Error returned when a game cannot be set up from the given parameters
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum ConfigurationError {
    #[error("playing field must be at least 1x1 cells; got {width}x{height}")]
    EmptyField { width: u16, height: u16 },
    #[error("snake must be at least one segment long")]
    ZeroLength,
    #[error("snake of length {length} does not fit in a field of {cells} cells")]
    SnakeTooLong { length: usize, cells: usize },
    #[error("snake segments {a} and {b} are not adjacent")]
    NotAdjacent { a: Position, b: Position },
    #[error("snake occupies {0} more than once")]
    Overlap(Position),
    #[error("snake segment {pos} lies outside the {width}x{height} playing field")]
    OutOfBounds {
        pos: Position,
        width: u16,
        height: u16,
    },
    #[error("tick interval must be positive")]
    ZeroTickInterval,
}

/// Error returned when food cannot be placed because every cell is taken
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("no free cells left in which to place food")]
pub(crate) struct NoSpaceError;
