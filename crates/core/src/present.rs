//! Presenting the logical grid onto a pixel [`Surface`].
//!
//! Each LED expands into a short list of [`DrawOp`]s computed by
//! [`led_draw_ops`]. Drawing happens in two passes over the whole grid, glow
//! first and bodies second, so a bright LED's halo never paints over the body
//! of its neighbour.

use arrayvec::ArrayVec;

use crate::grid::GridBuffer;
use crate::style::{LedShape, VisualStyle};
use crate::surface::Surface;
use crate::types::Rgb;

/// Opacity of the glow rings, innermost first, at full brightness.
pub const GLOW_ALPHA: [u8; 2] = [96, 48];

/// Extra diameter (px) each glow ring adds around the lit disc.
pub const GLOW_RING_STEP: u32 = 4;

/// Brightness added to the highlight spot.
pub const HIGHLIGHT_BOOST: u8 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Glow,
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpShape {
    /// Disc centered on the LED cell, shifted by (`dx2`, `dy2`) half-pixels.
    Circle { diameter: u32, dx2: i32, dy2: i32 },
    /// Square inset from the LED cell's top-left corner.
    Rect { inset: u32, size: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawOp {
    pub layer: Layer,
    pub shape: OpShape,
    pub color: Rgb,
    pub alpha: u8,
}

pub type LedOps = ArrayVec<DrawOp, 8>;

/// Color of the unlit LED lens behind `color`.
pub fn dim_color(color: Rgb) -> Rgb {
    let f = |c: u8| (c / 10).max(5);
    Rgb::new(f(color.r), f(color.g), f(color.b))
}

/// Opacity of glow ring `ring` (0 = innermost) for an LED of `color`.
pub fn glow_alpha(color: Rgb, ring: usize) -> u8 {
    let base = GLOW_ALPHA.get(ring).copied().unwrap_or(0) as u32;
    (base * color.peak() as u32 / 255) as u8
}

/// Ordered draw operations for one LED of `color` under `style`.
pub fn led_draw_ops(color: Rgb, style: &VisualStyle) -> LedOps {
    let mut ops = LedOps::new();
    let size = style.led_size();
    let gap = style.led_gap();
    let inner = size.saturating_sub(2 * gap).max(1);
    let lit = !color.is_off();

    match style.shape {
        LedShape::Circular => {
            ops.push(DrawOp {
                layer: Layer::Body,
                shape: OpShape::Circle { diameter: inner + 2, dx2: 0, dy2: 0 },
                color: dim_color(color),
                alpha: 255,
            });
            if !lit {
                return ops;
            }
            for ring in (0..GLOW_ALPHA.len()).rev() {
                let alpha = glow_alpha(color, ring);
                if alpha == 0 {
                    continue;
                }
                ops.push(DrawOp {
                    layer: Layer::Glow,
                    shape: OpShape::Circle {
                        diameter: inner + GLOW_RING_STEP * (ring as u32 + 1),
                        dx2: 0,
                        dy2: 0,
                    },
                    color,
                    alpha,
                });
            }
            ops.push(DrawOp {
                layer: Layer::Body,
                shape: OpShape::Circle { diameter: inner, dx2: 0, dy2: 0 },
                color,
                alpha: 255,
            });
            if inner >= 3 {
                let shift = -((inner / 3) as i32);
                ops.push(DrawOp {
                    layer: Layer::Body,
                    shape: OpShape::Circle {
                        diameter: (inner / 3).max(1),
                        dx2: shift,
                        dy2: shift,
                    },
                    color: color.saturating_add(HIGHLIGHT_BOOST),
                    alpha: 255,
                });
            }
        }
        LedShape::Square => {
            ops.push(DrawOp {
                layer: Layer::Body,
                shape: OpShape::Rect { inset: 0, size },
                color: dim_color(color),
                alpha: 255,
            });
            if lit {
                ops.push(DrawOp {
                    layer: Layer::Body,
                    shape: OpShape::Rect { inset: gap.min((size - 1) / 2), size: inner },
                    color,
                    alpha: 255,
                });
            }
        }
    }
    ops
}

fn draw_op(surface: &mut Surface, origin: (u32, u32), led_size: u32, op: &DrawOp) {
    let (ox, oy) = (origin.0 as i64, origin.1 as i64);
    match op.shape {
        OpShape::Circle { diameter, dx2, dy2 } => {
            let cx2 = 2 * ox + led_size as i64 + dx2 as i64;
            let cy2 = 2 * oy + led_size as i64 + dy2 as i64;
            surface.fill_circle(cx2, cy2, diameter, op.color, op.alpha);
        }
        OpShape::Rect { inset, size } => {
            let x = ox + inset as i64;
            let y = oy + inset as i64;
            surface.fill_rect_blend(x, y, size, size, op.color, op.alpha);
        }
    }
}

/// Draw `grid` onto `surface` (resized to the style's dimensions).
pub fn present(grid: &GridBuffer, surface: &mut Surface, style: &VisualStyle) {
    let (w, h) = style.surface_size();
    surface.resize(w, h);
    surface.clear(Rgb::BLACK);

    for layer in [Layer::Glow, Layer::Body] {
        for (y, row) in grid.rows().iter().enumerate() {
            for (x, &color) in row.iter().enumerate() {
                let origin = style.led_origin(x, y);
                for op in led_draw_ops(color, style).iter().filter(|op| op.layer == layer) {
                    draw_op(surface, origin, style.led_size(), op);
                }
            }
        }
    }
}
