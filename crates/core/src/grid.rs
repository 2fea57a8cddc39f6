//! 19×19 logical LED buffer.
//!
//! The grid is the only thing screens draw into. Every write clips silently,
//! so games can draw sprites that hang off the edge without bounds checks.

use std::fmt::Write as _;

use arrayvec::ArrayString;

use crate::font::{Font, FontOverrides, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::types::{Rgb, GRID_SIZE};

/// Horizontal gap (in glyph columns) between characters.
pub const DEFAULT_TEXT_SPACING: i32 = 1;

/// The LED matrix contents plus the font used to draw text into it.
#[derive(Debug, Clone)]
pub struct GridBuffer {
    cells: [[Rgb; GRID_SIZE]; GRID_SIZE],
    font: Font,
}

impl Default for GridBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl GridBuffer {
    pub fn new() -> Self {
        Self {
            cells: [[Rgb::BLACK; GRID_SIZE]; GRID_SIZE],
            font: Font::new(),
        }
    }

    pub fn with_font(font: Font) -> Self {
        Self {
            cells: [[Rgb::BLACK; GRID_SIZE]; GRID_SIZE],
            font,
        }
    }

    #[inline]
    fn index(x: i32, y: i32) -> Option<(usize, usize)> {
        let in_range = |v: i32| v >= 0 && (v as usize) < GRID_SIZE;
        if in_range(x) && in_range(y) {
            Some((x as usize, y as usize))
        } else {
            None
        }
    }

    /// Set one LED. Out-of-bounds coordinates are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some((x, y)) = Self::index(x, y) {
            self.cells[y][x] = color;
        }
    }

    /// Read one LED, `None` when outside the grid.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        Self::index(x, y).map(|(x, y)| self.cells[y][x])
    }

    /// Read one LED, black when outside the grid.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Rgb {
        self.get(x, y).unwrap_or(Rgb::BLACK)
    }

    pub fn clear(&mut self, color: Rgb) {
        for row in self.cells.iter_mut() {
            row.fill(color);
        }
    }

    pub fn clear_black(&mut self) {
        self.clear(Rgb::BLACK);
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
        for dy in 0..h.max(0) {
            for dx in 0..w.max(0) {
                self.set_pixel(x + dx, y + dy, color);
            }
        }
    }

    /// Bresenham line, both endpoints inclusive.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx - dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.set_pixel(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Draw `text` with its top-left at (`x`, `y`) using the 3×5 font.
    pub fn render_text(&mut self, text: &str, x: i32, y: i32, color: Rgb, scale: i32) {
        self.render_text_spaced(text, x, y, color, scale, DEFAULT_TEXT_SPACING);
    }

    /// Like [`render_text`](Self::render_text) with an explicit gap between
    /// characters, in glyph columns before scaling.
    pub fn render_text_spaced(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        color: Rgb,
        scale: i32,
        spacing: i32,
    ) {
        let scale = scale.max(1);
        let advance = (GLYPH_WIDTH as i32 + spacing) * scale;
        let mut cursor = x;

        for ch in text.chars() {
            let glyph = self.font.glyph_for(ch);
            for row in 0..GLYPH_HEIGHT {
                for col in 0..GLYPH_WIDTH {
                    if glyph.is_on(col, row) {
                        self.fill_rect(
                            cursor + col as i32 * scale,
                            y + row as i32 * scale,
                            scale,
                            scale,
                            color,
                        );
                    }
                }
            }
            cursor += advance;
        }
    }

    /// Draw a decimal number. Negative values lead with the hyphen glyph.
    pub fn render_number(&mut self, n: i64, x: i32, y: i32, color: Rgb, scale: i32) {
        let mut buf = ArrayString::<24>::new();
        // i64::MIN is 20 chars; cannot overflow.
        let _ = write!(buf, "{n}");
        self.render_text(&buf, x, y, color, scale);
    }

    /// Number of lit (non-black) LEDs.
    pub fn lit_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| !c.is_off())
            .count()
    }

    /// FNV-1a over every cell in row-major order.
    pub fn fingerprint(&self) -> u64 {
        const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const PRIME: u64 = 0x0000_0100_0000_01b3;
        let mut h = OFFSET;
        for c in self.cells.iter().flatten() {
            for b in [c.r, c.g, c.b] {
                h ^= b as u64;
                h = h.wrapping_mul(PRIME);
            }
        }
        h
    }

    pub fn rows(&self) -> &[[Rgb; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn set_font_overrides(&mut self, overrides: FontOverrides) {
        self.font.set_overrides(overrides);
    }
}
