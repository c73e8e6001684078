//! GameView: lays the snake grid out on a terminal framebuffer.
//!
//! This module is pure (no I/O). The game draws through [`TermCanvas`], which
//! implements the core [`Renderer`] boundary on top of a [`FrameBuffer`].

use crate::core::{GridGeometry, Renderer};
use crate::fb::{FrameBuffer, Glyph, GlyphStyle, Rect, Rgb};
use crate::types::{Cell, Color};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Navy background shared by the play area and erased squares.
const BACKGROUND: Rgb = Rgb::new(0, 0, 128);

const BORDER: GlyphStyle = GlyphStyle {
    fg: Rgb::new(200, 200, 200),
    bg: Rgb::new(0, 0, 0),
    bold: false,
};

/// Terminal styling for each palette role.
pub fn palette(color: Color) -> GlyphStyle {
    let fg = match color {
        Color::Background => BACKGROUND,
        Color::Snake => Rgb::new(255, 255, 255),
        Color::Food => Rgb::new(255, 255, 0),
        Color::Text => Rgb::new(0, 200, 0),
    };
    GlyphStyle {
        fg,
        bg: BACKGROUND,
        bold: color == Color::Text,
    }
}

/// Frame layout for a grid on a terminal.
pub struct GameView {
    geometry: GridGeometry,
    /// Grid cell width in terminal columns.
    cell_w: u32,
    /// Grid cell height in terminal rows.
    cell_h: u32,
    anchor_y: AnchorY,
}

impl GameView {
    /// 2x1 characters per cell compensates for typical terminal glyph aspect ratio.
    pub fn new(geometry: GridGeometry) -> Self {
        Self {
            geometry,
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Size of the bordered frame in terminal cells. May exceed the terminal.
    pub fn frame_size(&self) -> (u32, u32) {
        (
            self.geometry.width() as u32 * self.cell_w + 2,
            self.geometry.height() as u32 * self.cell_h + 2,
        )
    }

    /// Prepare `fb` for a new frame and hand back a canvas on the play area.
    ///
    /// The framebuffer is resized to the viewport and the border is drawn;
    /// everything inside the border is left to the game. A frame larger than
    /// the viewport is pinned to the top-left corner and clipped.
    pub fn begin_frame<'a>(&self, fb: &'a mut FrameBuffer, viewport: Viewport) -> TermCanvas<'a> {
        fb.resize(viewport.width, viewport.height);
        fb.fill_all(Glyph::BLANK);

        let (frame_w, frame_h) = self.frame_size();
        let x = (viewport.width as u32).saturating_sub(frame_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => (viewport.height as u32).saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        let frame = Rect::new(x, y, frame_w, frame_h);
        draw_border(fb, frame);

        TermCanvas {
            fb,
            play: Rect::new(x + 1, y + 1, frame_w - 2, frame_h - 2),
            cell_w: self.cell_w,
            cell_h: self.cell_h,
            cell_px: self.geometry.cell_size_px() as u32,
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Rect) {
    if frame.w < 2 || frame.h < 2 {
        return;
    }
    let (left, top) = (frame.x, frame.y);
    let (right, bottom) = (frame.right() - 1, frame.bottom() - 1);
    let line = |ch| Glyph::new(ch, BORDER);

    fb.fill(Rect::new(left + 1, top, frame.w - 2, 1), line('─'));
    fb.fill(Rect::new(left + 1, bottom, frame.w - 2, 1), line('─'));
    fb.fill(Rect::new(left, top + 1, 1, frame.h - 2), line('│'));
    fb.fill(Rect::new(right, top + 1, 1, frame.h - 2), line('│'));

    fb.put(left, top, line('┌'));
    fb.put(right, top, line('┐'));
    fb.put(left, bottom, line('└'));
    fb.put(right, bottom, line('┘'));
}

/// The play area of one frame, addressed in grid cells and game pixels.
pub struct TermCanvas<'a> {
    fb: &'a mut FrameBuffer,
    /// Inside of the border, in terminal coordinates. May extend past the buffer.
    play: Rect,
    cell_w: u32,
    cell_h: u32,
    cell_px: u32,
}

impl TermCanvas<'_> {
    /// Terminal region covered by a grid cell, clipped to the play area.
    fn cell_rect(&self, cell: Cell) -> Rect {
        Rect::new(
            self.play.x + cell.x as u32 * self.cell_w,
            self.play.y + cell.y as u32 * self.cell_h,
            self.cell_w,
            self.cell_h,
        )
        .intersect(self.play)
    }
}

impl Renderer for TermCanvas<'_> {
    fn clear(&mut self) {
        self.fb
            .fill(self.play, Glyph::new(' ', palette(Color::Background)));
    }

    // Squares fill the whole cell; the one-pixel gap is below terminal resolution.
    fn draw_square(&mut self, cell: Cell, _size_px: u16, color: Color) {
        let ch = match color {
            Color::Background => ' ',
            Color::Snake | Color::Food | Color::Text => '█',
        };
        let area = self.cell_rect(cell);
        self.fb.fill(area, Glyph::new(ch, palette(color)));
    }

    // Terminal text has a single size, so `font_size` is not used.
    fn draw_text(&mut self, content: &str, x_px: u16, y_px: u16, _font_size: u16, color: Color) {
        let col = self.play.x + x_px as u32 * self.cell_w / self.cell_px;
        let row = self.play.y + y_px as u32 * self.cell_h / self.cell_px;
        if row >= self.play.bottom() {
            return;
        }
        self.fb
            .write_str(col, row, self.play.right(), content, palette(color));
    }
}
