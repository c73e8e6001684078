//! Character framebuffer the game view paints into.
//!
//! Regions are described with [`Rect`] in `u32` so callers can address space
//! beyond the buffer (a grid wider than the terminal, say) and let the buffer
//! clip, instead of doing overflow-prone `u16` arithmetic themselves.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl GlyphStyle {
    /// Light grey on black, the terminal's look outside the play area.
    pub const PLAIN: Self = Self {
        fg: Rgb::new(220, 220, 220),
        bg: Rgb::new(0, 0, 0),
        bold: false,
    };
}

impl Default for GlyphStyle {
    fn default() -> Self {
        Self::PLAIN
    }
}

/// A styled character occupying one terminal column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: GlyphStyle,
}

impl Glyph {
    pub const BLANK: Self = Self::new(' ', GlyphStyle::PLAIN);

    pub const fn new(ch: char, style: GlyphStyle) -> Self {
        Self { ch, style }
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Axis-aligned region in terminal columns and rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// One past the last column.
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.w)
    }

    /// One past the last row.
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.h)
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Overlap of two regions; empty when they do not touch.
    pub fn intersect(&self, other: Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rect::new(x, y, right.saturating_sub(x), bottom.saturating_sub(y))
    }
}

/// Row-major grid of glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::BLANK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// The whole buffer as a region.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as u32, self.height as u32)
    }

    /// Change dimensions. Contents are unspecified afterwards; callers repaint.
    pub fn resize(&mut self, width: u16, height: u16) {
        if (self.width, self.height) == (width, height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.glyphs
            .resize(width as usize * height as usize, Glyph::BLANK);
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.glyphs[self.offset(x as u32, y as u32)])
    }

    /// Glyphs of row `y`; empty past the last row.
    pub fn row(&self, y: u16) -> &[Glyph] {
        if y >= self.height {
            return &[];
        }
        let start = self.offset(0, y as u32);
        &self.glyphs[start..start + self.width as usize]
    }

    pub fn put(&mut self, x: u32, y: u32, glyph: Glyph) {
        self.fill(Rect::new(x, y, 1, 1), glyph);
    }

    /// Fill `area`, clipped to the buffer.
    pub fn fill(&mut self, area: Rect, glyph: Glyph) {
        let area = area.intersect(self.bounds());
        if area.is_empty() {
            return;
        }
        for y in area.y..area.bottom() {
            let start = self.offset(area.x, y);
            self.glyphs[start..start + area.w as usize].fill(glyph);
        }
    }

    pub fn fill_all(&mut self, glyph: Glyph) {
        self.glyphs.fill(glyph);
    }

    /// Write `text` from column `x` and stop before `limit` or the right edge.
    ///
    /// Returns the number of columns written.
    pub fn write_str(&mut self, x: u32, y: u32, limit: u32, text: &str, style: GlyphStyle) -> u32 {
        if y >= self.height as u32 {
            return 0;
        }
        let end = limit.min(self.width as u32);
        let mut col = x;
        for ch in text.chars() {
            if col >= end {
                break;
            }
            let i = self.offset(col, y);
            self.glyphs[i] = Glyph::new(ch, style);
            col += 1;
        }
        col.saturating_sub(x)
    }

    /// Characters of row `y` with styling dropped.
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|g| g.ch).collect()
    }
}
