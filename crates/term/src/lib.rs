//! Terminal rendering for the snake game.
//!
//! The game draws through the core `Renderer` trait onto a [`TermCanvas`],
//! which writes into an in-memory [`FrameBuffer`]. [`TerminalRenderer`] then
//! flushes the framebuffer to the terminal, writing only what changed.
//!
//! Each grid cell is 2 characters wide and 1 tall to keep squares square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{FrameBuffer, Glyph, GlyphStyle, Rect, Rgb};
pub use game_view::{palette, AnchorY, GameView, TermCanvas, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
