//! Assorted constants & hard-coded defaults
use ratatui::style::{Color, Modifier, Style};

/// Default width of the playing field, in cells
pub(crate) const DEFAULT_WIDTH: u16 = 20;

/// Default height of the playing field, in cells
pub(crate) const DEFAULT_HEIGHT: u16 = 10;

/// Default number of segments in a newly-created snake
pub(crate) const DEFAULT_SNAKE_LENGTH: usize = 3;

/// Default time between movements of the snake, in milliseconds
pub(crate) const DEFAULT_TICK_INTERVAL_MS: u64 = 150;

/// How many segments the snake gains per piece of food eaten
pub(crate) const SNAKE_GROWTH: usize = 1;

/// Name of the environment variable holding the log filter directives
pub(crate) const LOG_FILTER_VAR: &str = "SLITHER_LOG";

/// Default glyph for the food
pub(crate) const FOOD_SYMBOL: char = '*';

/// Default glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = 'o';

/// Default glyph for the snake's head
pub(crate) const SNAKE_HEAD_SYMBOL: char = '@';

/// Glyph for the snake's head once it has run into a wall or itself
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the status bar at the top of the game screen
pub(crate) const STATUS_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
