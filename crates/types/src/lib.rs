//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, engine, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The playfield is derived from a pixel viewport and a cell size:
//!
//! - **Viewport**: 640x480 pixels
//! - **Cell size**: 20 pixels
//! - **Grid**: 640 / 20 = 32 columns, 480 / 20 = 24 rows
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_HZ` | 15 | Simulation ticks per second (also the snake speed) |
//! | `TICK_MS` | 66 | Fixed timestep interval derived from `TICK_HZ` |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Cell, Direction, GameAction};
//!
//! let head = Cell::new(17, 11);
//! assert_eq!(head.x, 17);
//!
//! assert!(Direction::Left.is_opposite(Direction::Right));
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//!
//! assert_eq!(GameAction::from_str("up"), Some(GameAction::Turn(Direction::Up)));
//! assert_eq!(GameAction::from_str("N"), Some(GameAction::Restart));
//! ```

/// Default viewport width in pixels.
pub const VIEWPORT_WIDTH_PX: u16 = 640;

/// Default viewport height in pixels.
pub const VIEWPORT_HEIGHT_PX: u16 = 480;

/// Default edge length of one grid cell in pixels.
pub const CELL_SIZE_PX: u16 = 20;

/// Simulation ticks per second.
pub const TICK_HZ: u32 = 15;

/// Fixed timestep interval in milliseconds (1000 / 15, truncated).
pub const TICK_MS: u32 = 1000 / TICK_HZ;

/// Body of a freshly spawned snake, tail first, head last.
pub const INITIAL_SNAKE: [(u16, u16); 4] = [(14, 11), (15, 11), (16, 11), (17, 11)];

/// Direction a freshly spawned snake is facing.
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Top-left pixel position of the score text.
pub const SCORE_TEXT_POSITION: (u16, u16) = (10, 10);

/// Font size of the score text in pixels.
pub const SCORE_TEXT_FONT_SIZE: u16 = 25;

/// Key that restarts the game once it is over.
pub const RESTART_KEY: char = 'n';

/// One discrete grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub x: u16,
    pub y: u16,
}

impl Cell {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

impl From<(u16, u16)> for Cell {
    fn from((x, y): (u16, u16)) -> Self {
        Self::new(x, y)
    }
}

/// Direction the snake is travelling in.
///
/// Screen coordinates: `y` grows downwards, so `Up` decrements `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction pointing the other way.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns true if turning from `self` to `other` would be a 180-degree turn.
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Per-step offset `(dx, dy)` for this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Lowercase name, matching the symbolic key names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Discrete player inputs understood by the game loop.
///
/// Human input is mapped onto these by the input crate; anything that does not
/// map is dropped before it reaches the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Attempt to change the snake's direction (reversals are ignored)
    Turn(Direction),
    /// Start a new game (only effective once the game is over)
    Restart,
}

impl GameAction {
    /// Parse an action from a symbolic key name (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("Left"), Some(GameAction::Turn(Direction::Left)));
    /// assert_eq!(GameAction::from_str("n"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("space"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(GameAction::Turn(Direction::Up)),
            "down" => Some(GameAction::Turn(Direction::Down)),
            "left" => Some(GameAction::Turn(Direction::Left)),
            "right" => Some(GameAction::Turn(Direction::Right)),
            "n" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Canonical key name for this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Turn(direction) => direction.as_str(),
            GameAction::Restart => "n",
        }
    }
}

/// Palette shared by the game logic and renderers.
///
/// The game only ever asks for these four roles; renderers decide what each
/// looks like on their surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Navy play-area background, also used to erase squares
    Background,
    /// White snake body
    Snake,
    /// Yellow food
    Food,
    /// Green score text
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_is_32_by_24() {
        assert_eq!(VIEWPORT_WIDTH_PX / CELL_SIZE_PX, 32);
        assert_eq!(VIEWPORT_HEIGHT_PX / CELL_SIZE_PX, 24);
        assert_eq!(TICK_MS, 66);
    }

    #[test]
    fn opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Up));
        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Right.is_opposite(Direction::Down));
    }

    #[test]
    fn direction_delta_uses_screen_coordinates() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn action_names_round_trip() {
        for direction in Direction::ALL {
            let action = GameAction::Turn(direction);
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
        assert_eq!(GameAction::from_str("N"), Some(GameAction::Restart));
        assert_eq!(GameAction::from_str("q"), None);
    }

    #[test]
    fn initial_snake_is_horizontal_and_faces_right() {
        assert_eq!(INITIAL_DIRECTION, Direction::Right);
        for pair in INITIAL_SNAKE.windows(2) {
            assert_eq!(pair[1].0, pair[0].0 + 1);
            assert_eq!(pair[1].1, pair[0].1);
        }
    }
}
