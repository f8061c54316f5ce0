//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};
use std::time::Duration;

/// Time between movements of the snake before any food has been eaten
pub(crate) const TICK_INTERVAL: Duration = Duration::from_millis(150);

/// Lower bound on the time between movements of the snake, no matter how much
/// food has been eaten
pub(crate) const MIN_TICK_INTERVAL: Duration = Duration::from_millis(50);

/// How much the time between movements shrinks for each food item eaten
pub(crate) const SPEEDUP_PER_FOOD: Duration = Duration::from_millis(5);

/// Default width of the board's interior, in cells
pub(crate) const BOARD_WIDTH: u16 = 40;

/// Default height of the board's interior, in cells
pub(crate) const BOARD_HEIGHT: u16 = 18;

/// Smallest allowed board dimension, applied to both width and height
pub(crate) const MIN_BOARD_EDGE: u16 = 5;

/// Default snake length before any food has been eaten
pub(crate) const INITIAL_SNAKE_LENGTH: u16 = 5;

/// Score awarded for each food item eaten
pub(crate) const FOOD_VALUE: u32 = 1;

/// Number of random cells to try when placing food before falling back to
/// scanning the board for free cells
pub(crate) const PLACEMENT_ATTEMPTS: usize = 64;

/// Default glyph for the border around the board
pub(crate) const BORDER_GLYPH: char = '#';

/// Glyph for the snake's head when it is moving north/up
pub(crate) const SNAKE_HEAD_NORTH_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving south/down
pub(crate) const SNAKE_HEAD_SOUTH_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving east/right
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving west/left
pub(crate) const SNAKE_HEAD_WEST_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '*';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '@';

/// Glyph for the snake's head when it's collided with a wall or itself
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

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the currently-selected menu item
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);
