mod direction;
mod engine;
mod error;
mod position;
mod runner;
mod snake;
mod world;
pub(crate) use self::direction::Direction;
pub(crate) use self::error::{ConfigurationError, NoSpaceError};
pub(crate) use self::position::Position;
pub(crate) use self::runner::{InputSource, Renderer, Runner};
pub(crate) use self::snake::Snake;
pub(crate) use self::world::World;
use crate::config::Settings;
use rand::Rng;
use std::collections::HashSet;
use std::fmt;

/// Everything that changes over the course of a single game
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameState {
    snake: Snake,
    world: World,
    status: Status,
    food_eaten: u32,
}

impl GameState {
    /// Start a new game: the snake in its initial position and a first piece
    /// of food somewhere else.  If the snake leaves no room for food, the
    /// game is over before it begins.
    pub(crate) fn new<R: Rng + ?Sized>(settings: &Settings, rng: &mut R) -> GameState {
        let snake = settings.snake().clone();
        let mut world = settings.world().clone();
        let occupied = snake.segments().iter().copied().collect::<HashSet<_>>();
        let status = match world.place_food(&occupied, rng) {
            Ok(_) => Status::Running,
            Err(NoSpaceError) => Status::GameOver(Ending::BoardFilled),
        };
        GameState {
            snake,
            world,
            status,
            food_eaten: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(snake: Snake, world: World, status: Status) -> GameState {
        GameState {
            snake,
            world,
            status,
            food_eaten: 0,
        }
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn world(&self) -> &World {
        &self.world
    }

    pub(crate) fn status(&self) -> Status {
        self.status
    }

    pub(crate) fn food_eaten(&self) -> u32 {
        self.food_eaten
    }

    #[cfg(test)]
    pub(crate) fn running(&self) -> bool {
        self.status == Status::Running
    }

    pub(crate) fn summary(&self) -> Summary {
        Summary {
            length: self.snake.len(),
            food_eaten: self.food_eaten,
            ending: match self.status {
                Status::Running => None,
                Status::GameOver(ending) => Some(ending),
            },
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Status {
    Running,
    GameOver(Ending),
}

/// The reason a game ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Ending {
    WallCollision,
    SelfCollision,
    /// The snake has filled the field and there is nowhere left to put food.
    BoardFilled,
}

impl fmt::Display for Ending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ending::WallCollision => write!(f, "the snake hit a wall"),
            Ending::SelfCollision => write!(f, "the snake ran into itself"),
            Ending::BoardFilled => write!(f, "the snake filled the field"),
        }
    }
}

/// What happened during a single tick
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Event {
    Moved,
    FoodEaten,
    WallCollision,
    SelfCollision,
    BoardFilled,
}

impl Event {
    /// Returns `true` if the event ends the game
    pub(crate) fn is_terminal(self) -> bool {
        matches!(
            self,
            Event::WallCollision | Event::SelfCollision | Event::BoardFilled
        )
    }
}

impl From<Ending> for Event {
    fn from(ending: Ending) -> Event {
        match ending {
            Ending::WallCollision => Event::WallCollision,
            Ending::SelfCollision => Event::SelfCollision,
            Ending::BoardFilled => Event::BoardFilled,
        }
    }
}

/// Final tally of a game, printed once the terminal has been restored
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Summary {
    pub(crate) length: usize,
    pub(crate) food_eaten: u32,
    /// `None` if the player quit before the game ended
    pub(crate) ending: Option<Ending>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ending {
            Some(ending) => writeln!(f, "Game Over: {ending}")?,
            None => writeln!(f, "Game Over")?,
        }
        writeln!(f, "Your final length: {}", self.length)?;
        write!(f, "Food eaten: {}", self.food_eaten)
    }
}
