//! Terminal cell grid for the LED view.
//!
//! Image cells are half blocks: the glyph's upper half shows the foreground
//! color and the lower half the background, so one cell carries two surface
//! pixels. Status text uses ordinary character cells in the same grid.

use crate::types::Rgb;

/// Upper half block; foreground paints the top pixel.
pub const HALF_BLOCK: char = '▀';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self { fg, bg, dim: false }
    }

    pub const fn dimmed(self) -> Self {
        Self { dim: true, ..self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::BLACK)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    /// Two stacked pixels: `upper` on top, `lower` below.
    pub const fn half_block(upper: Rgb, lower: Rgb) -> Self {
        Self {
            ch: HALF_BLOCK,
            style: CellStyle::new(upper, lower),
        }
    }

    /// An empty cell showing only `bg`.
    pub const fn blank(bg: Rgb) -> Self {
        Self {
            ch: ' ',
            style: CellStyle::new(bg, bg),
        }
    }

    /// Colors of the (upper, lower) pixels this cell shows.
    pub fn pixels(&self) -> (Rgb, Rgb) {
        if self.ch == HALF_BLOCK {
            (self.style.fg, self.style.bg)
        } else {
            (self.style.bg, self.style.bg)
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(Rgb::BLACK)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let mut fb = Self::default();
        fb.resize(width, height);
        fb
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize to the terminal, reusing the allocation.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells
            .resize(width as usize * height as usize, Cell::default());
    }

    /// Rows top to bottom, each `width` cells long.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Blank every cell to `bg`.
    pub fn fill(&mut self, bg: Rgb) {
        self.cells.fill(Cell::blank(bg));
    }

    pub fn put_half_block(&mut self, x: u16, y: u16, upper: Rgb, lower: Rgb) {
        self.set(x, y, Cell::half_block(upper, lower));
    }

    /// Write `s` from `(x, y)`, cut off at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        for (cx, ch) in (x..self.width).zip(s.chars()) {
            self.set(cx, y, Cell { ch, style });
        }
    }
}
