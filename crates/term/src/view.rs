//! ConsoleView: maps the presented LED surface into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Each terminal cell shows two vertically stacked surface pixels as `▀` with
//! the upper pixel as foreground and the lower one as background. When the
//! surface is larger than the viewport it is box-downsampled by the smallest
//! integer factor that fits. The bottom two rows hold the status bar.

use std::fmt::Write as _;

use arrayvec::ArrayString;

use crate::core::Surface;
use crate::engine::ConsoleStatus;
use crate::fb::{CellStyle, FrameBuffer, HALF_BLOCK};
use crate::types::Rgb;

/// Rows reserved below the image.
pub const STATUS_ROWS: u16 = 2;

const CONTROLS: &str = "+/- Size  [/] Spacing  ,/. Gap  T Shape  L Layout  O Sound  Q Quit";

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

/// Where the image landed inside the viewport, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImagePlacement {
    pub x: u16,
    pub y: u16,
    pub cols: u16,
    pub rows: u16,
    /// Surface pixels per terminal pixel along each axis.
    pub factor: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct ConsoleView {
    background: Rgb,
    status_style: CellStyle,
    hint_style: CellStyle,
}

impl Default for ConsoleView {
    fn default() -> Self {
        Self {
            background: Rgb::BLACK,
            status_style: CellStyle::new(Rgb::new(150, 150, 150), Rgb::BLACK).dimmed(),
            hint_style: CellStyle::new(Rgb::new(120, 200, 255), Rgb::BLACK),
        }
    }
}

/// Smallest integer factor that makes a `w`×`h` pixel image fit in
/// `cols`×`pixel_rows`. `None` when nothing fits.
pub fn downsample_factor(w: u32, h: u32, cols: u32, pixel_rows: u32) -> Option<u32> {
    if cols == 0 || pixel_rows == 0 {
        return None;
    }
    let fx = w.div_ceil(cols);
    let fy = h.div_ceil(pixel_rows);
    Some(fx.max(fy).max(1))
}

/// Average of the `factor`×`factor` block whose top-left pixel is `(x, y)`,
/// clipped to the surface.
fn sample(surface: &Surface, x: u32, y: u32, factor: u32) -> Rgb {
    if factor == 1 {
        return surface.get(x, y).unwrap_or(Rgb::BLACK);
    }
    let (mut r, mut g, mut b, mut n) = (0u32, 0u32, 0u32, 0u32);
    for sy in y..(y + factor).min(surface.height()) {
        let row = surface.row(sy);
        let end = ((x + factor) as usize).min(row.len());
        for px in row.get(x as usize..end).unwrap_or(&[]) {
            r += px.r as u32;
            g += px.g as u32;
            b += px.b as u32;
            n += 1;
        }
    }
    if n == 0 {
        return Rgb::BLACK;
    }
    Rgb::new((r / n) as u8, (g / n) as u8, (b / n) as u8)
}

impl ConsoleView {
    /// Render the surface and status into an existing framebuffer sized to
    /// `viewport`. Reuses the framebuffer's allocation across frames.
    pub fn render_into(
        &self,
        surface: &Surface,
        status: &ConsoleStatus,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) -> ImagePlacement {
        fb.resize(viewport.width, viewport.height);
        fb.fill(self.background);

        let placement = self.render_image(surface, viewport, fb);
        self.render_status(status, viewport, fb);
        placement
    }

    fn render_image(&self, surface: &Surface, viewport: Viewport, fb: &mut FrameBuffer) -> ImagePlacement {
        let image_rows = viewport.height.saturating_sub(STATUS_ROWS);
        let Some(factor) = downsample_factor(
            surface.width(),
            surface.height(),
            viewport.width as u32,
            image_rows as u32 * 2,
        ) else {
            return ImagePlacement::default();
        };

        let px_w = surface.width().div_ceil(factor);
        let px_h = surface.height().div_ceil(factor);
        let cols = px_w as u16;
        let rows = px_h.div_ceil(2) as u16;
        let x0 = (viewport.width - cols) / 2;
        let y0 = (image_rows - rows) / 2;

        for cy in 0..rows {
            let upper_y = cy as u32 * 2;
            let lower_y = upper_y + 1;
            for cx in 0..cols {
                let sx = cx as u32 * factor;
                let upper = sample(surface, sx, upper_y * factor, factor);
                let lower = if lower_y < px_h {
                    sample(surface, sx, lower_y * factor, factor)
                } else {
                    self.background
                };
                fb.put_half_block(x0 + cx, y0 + cy, upper, lower);
            }
        }

        ImagePlacement {
            x: x0,
            y: y0,
            cols,
            rows,
            factor,
        }
    }

    fn render_status(&self, status: &ConsoleStatus, viewport: Viewport, fb: &mut FrameBuffer) {
        if viewport.height < STATUS_ROWS {
            return;
        }
        let top = viewport.height - STATUS_ROWS;
        fb.put_str(0, top, CONTROLS, self.status_style);

        let mut line = ArrayString::<256>::new();
        let style = &status.style;
        // Overflow only truncates the line.
        let _ = write!(
            line,
            "{} | {} | LED {} SP {} GAP {} {} {} | SOUND {}",
            status.game.unwrap_or(status.state.as_str()),
            status.hint,
            style.led_size(),
            style.led_spacing(),
            style.led_gap(),
            style.shape.as_str(),
            style.layout.as_str(),
            if status.sound { "ON" } else { "OFF" },
        );
        fb.put_str(0, top + 1, &line, self.hint_style);
    }
}
