//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules for a single snake on a wrapping grid.
//! It has **no dependencies** on terminals, windows or clocks, making it:
//!
//! - **Deterministic**: food placement is driven by a caller-supplied RNG
//! - **Testable**: every rule is exercised without a screen
//! - **Portable**: anything that implements [`Renderer`] can display it
//!
//! # Module Structure
//!
//! - [`geometry`]: pixel/cell conversions and wrap-around arithmetic
//! - [`snake`]: body, direction rules, deferred growth, self-collision
//! - [`food`]: random placement and consumption test
//! - [`score`]: score counter, game-over latch and status text
//! - [`render`]: the drawing boundary plus headless renderers
//!
//! # Game Rules
//!
//! - The snake moves one cell per tick and wraps around all four edges
//! - Reversing onto itself is ignored; every other turn is accepted
//! - Eating food scores one point and grows the snake on the following move
//! - Running into its own body ends the game
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{Food, GridGeometry, Snake};
//!
//! let geometry = GridGeometry::default();
//! let mut snake = Snake::new(geometry);
//! let food = Food::at(geometry.step(snake.head(), snake.direction()), &geometry);
//!
//! snake.move_step();
//! assert!(food.was_eaten(snake.head()));
//!
//! snake.grow();
//! snake.move_step();
//! assert_eq!(snake.len(), 5);
//! ```

pub mod food;
pub mod geometry;
pub mod render;
pub mod score;
pub mod snake;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use food::Food;
pub use geometry::GridGeometry;
pub use render::{DrawCommand, NullRenderer, RecordingRenderer, Renderer};
pub use score::ScoreTracker;
pub use snake::Snake;
