//! LED grid rendering - pure, deterministic, and testable
//!
//! This crate owns everything between "a screen wants LED (3, 4) red" and
//! "these pixels are on the display surface". It has no dependency on the
//! terminal or on any particular game.
//!
//! # Module Structure
//!
//! - [`grid`]: the 19×19 logical LED buffer with clipped drawing primitives
//! - [`font`]: the 3×5 bitmap font and per-character overrides
//! - [`style`]: LED size/spacing/gap/shape/layout and the geometry they imply
//! - [`surface`]: a plain RGB pixel image with alpha blending
//! - [`present`]: expands each LED into glow and body draw ops and paints them
//! - [`layout`]: fixed text zones for titles, HUDs and hints
//! - [`rng`]: deterministic randomness shared by the games
//!
//! # Example
//!
//! ```
//! use led_console_core::{present, GridBuffer, Rgb, Surface, VisualStyle};
//!
//! let mut grid = GridBuffer::new();
//! grid.render_text("HI", 2, 2, Rgb::new(0, 255, 0), 1);
//!
//! let style = VisualStyle::default();
//! let mut surface = Surface::default();
//! present(&grid, &mut surface, &style);
//! assert_eq!(surface.size(), style.surface_size());
//! ```

pub mod font;
pub mod grid;
pub mod layout;
pub mod present;
pub mod rng;
pub mod style;
pub mod surface;

pub use led_console_types as types;

pub use font::{Font, FontOverrides, Glyph};
pub use grid::GridBuffer;
pub use layout::TextZone;
pub use present::{led_draw_ops, present, DrawOp};
pub use rng::SimpleRng;
pub use style::{Layout, LedShape, VisualStyle};
pub use surface::Surface;
pub use types::Rgb;
