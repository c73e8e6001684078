//! Drawing boundary between the game logic and a concrete surface.
//!
//! The game only needs three primitives: clear the frame, draw a square on a
//! cell, and draw a line of text at a pixel position. Erasing is drawing a
//! square in [`Color::Background`].

use crate::types::{Cell, Color};

/// A surface the game can draw a frame onto.
pub trait Renderer {
    /// Start a new frame.
    fn clear(&mut self);

    /// Draw a filled square of `size_px` pixels anchored at the top-left of `cell`.
    fn draw_square(&mut self, cell: Cell, size_px: u16, color: Color);

    /// Draw a line of text with its top-left corner at the given pixel.
    fn draw_text(&mut self, content: &str, x_px: u16, y_px: u16, font_size: u16, color: Color);
}

/// Discards everything. Used for headless simulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn clear(&mut self) {}

    fn draw_square(&mut self, _cell: Cell, _size_px: u16, _color: Color) {}

    fn draw_text(&mut self, _content: &str, _x_px: u16, _y_px: u16, _font_size: u16, _color: Color) {}
}

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Clear,
    Square {
        cell: Cell,
        size_px: u16,
        color: Color,
    },
    Text {
        content: String,
        x_px: u16,
        y_px: u16,
        font_size: u16,
        color: Color,
    },
}

/// Keeps the draw calls of the current frame.
///
/// `clear()` starts a new frame, so after a tick the recorder holds exactly
/// what that tick drew, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Cells drawn in `color`, in draw order.
    pub fn squares(&self, color: Color) -> impl Iterator<Item = Cell> + '_ {
        self.commands.iter().filter_map(move |cmd| match cmd {
            DrawCommand::Square { cell, color: c, .. } if *c == color => Some(*cell),
            _ => None,
        })
    }

    /// Text lines drawn this frame, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn draw_square(&mut self, cell: Cell, size_px: u16, color: Color) {
        self.commands.push(DrawCommand::Square {
            cell,
            size_px,
            color,
        });
    }

    fn draw_text(&mut self, content: &str, x_px: u16, y_px: u16, font_size: u16, color: Color) {
        self.commands.push(DrawCommand::Text {
            content: content.to_string(),
            x_px,
            y_px,
            font_size,
            color,
        });
    }
}
