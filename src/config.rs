use crate::consts;
use crate::game::{ConfigurationError, Direction, Position, Snake, World};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Gameplay options, before any command-line overrides
    #[serde(default)]
    pub(crate) game: GameOptions,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("slither").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

/// Unvalidated gameplay options, as written in the configuration file
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct GameOptions {
    pub(crate) width: u16,
    pub(crate) height: u16,
    /// Where the snake's head starts; if unset, a spot is picked based on the
    /// field size
    pub(crate) initial_position: Option<Position>,
    pub(crate) initial_direction: Direction,
    pub(crate) initial_length: usize,
    pub(crate) tick_interval_ms: u64,
    pub(crate) food_char: char,
    pub(crate) snake_char: char,
    pub(crate) head_char: char,
}

impl Default for GameOptions {
    fn default() -> GameOptions {
        let glyphs = Glyphs::default();
        GameOptions {
            width: consts::DEFAULT_WIDTH,
            height: consts::DEFAULT_HEIGHT,
            initial_position: None,
            initial_direction: Direction::default(),
            initial_length: consts::DEFAULT_SNAKE_LENGTH,
            tick_interval_ms: consts::DEFAULT_TICK_INTERVAL_MS,
            food_char: glyphs.food,
            snake_char: glyphs.snake,
            head_char: glyphs.head,
        }
    }
}

impl GameOptions {
    /// Check the options and build the starting snake & field from them
    ///
    /// # Errors
    ///
    /// Returns `Err` if the field or tick interval is empty, or if the
    /// starting snake does not fit inside the field.
    pub(crate) fn settings(&self) -> Result<Settings, ConfigurationError> {
        let world = World::new(self.width, self.height)?;
        if self.tick_interval_ms == 0 {
            return Err(ConfigurationError::ZeroTickInterval);
        }
        if self.initial_length > world.area() {
            return Err(ConfigurationError::SnakeTooLong {
                length: self.initial_length,
                cells: world.area(),
            });
        }
        let head = self
            .initial_position
            .unwrap_or_else(|| world.default_start());
        // Walk the body out from the head before building it, stopping at the
        // first cell off the field so that no coordinate can overflow.
        let behind = self.initial_direction.reverse();
        let outside = if world.is_in_bounds(head) {
            std::iter::successors(Some(head), |&p| Some(behind.step(p)))
                .take(self.initial_length)
                .find(|&p| !world.is_in_bounds(p))
        } else {
            Some(head)
        };
        if let Some(pos) = outside {
            return Err(ConfigurationError::OutOfBounds {
                pos,
                width: self.width,
                height: self.height,
            });
        }
        let snake = Snake::new(head, self.initial_direction, self.initial_length)?;
        Ok(Settings {
            world,
            snake,
            tick_interval: Duration::from_millis(self.tick_interval_ms),
            glyphs: Glyphs {
                food: self.food_char,
                snake: self.snake_char,
                head: self.head_char,
            },
        })
    }
}

/// Validated settings from which every new game is started
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Settings {
    /// The empty playing field
    world: World,
    /// The snake as it is at the start of a game
    snake: Snake,
    tick_interval: Duration,
    glyphs: Glyphs,
}

impl Settings {
    pub(crate) fn world(&self) -> &World {
        &self.world
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub(crate) fn glyphs(&self) -> Glyphs {
        self.glyphs
    }
}

/// Characters used to draw things on the playing field
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Glyphs {
    pub(crate) food: char,
    pub(crate) snake: char,
    pub(crate) head: char,
}

impl Default for Glyphs {
    fn default() -> Glyphs {
        Glyphs {
            food: consts::FOOD_SYMBOL,
            snake: consts::SNAKE_BODY_SYMBOL,
            head: consts::SNAKE_HEAD_SYMBOL,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
