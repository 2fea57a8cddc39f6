//! Fixed text zones on the 19×19 grid.
//!
//! Text is 5 rows tall at scale 1, so only a few lines fit. Screens place
//! titles, HUD numbers and hints in these zones so they never overlap.

use crate::font::GLYPH_WIDTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextZone {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl TextZone {
    pub const TITLE: TextZone = TextZone { x: 0, y: 0, w: 19, h: 5 };
    pub const HINT: TextZone = TextZone { x: 0, y: 14, w: 19, h: 5 };
    pub const HUD_LEFT: TextZone = TextZone { x: 0, y: 0, w: 9, h: 7 };
    pub const HUD_RIGHT: TextZone = TextZone { x: 10, y: 0, w: 9, h: 7 };

    /// Left edge that centers `chars` characters in this zone, never left of it.
    pub fn centered_x(&self, chars: usize, scale: i32, spacing: i32) -> i32 {
        let w = text_width(chars, scale, spacing);
        self.x + ((self.w - w) / 2).max(0)
    }
}

/// Pixel width of `chars` characters. Includes the trailing spacing.
pub fn text_width(chars: usize, scale: i32, spacing: i32) -> i32 {
    chars as i32 * (GLYPH_WIDTH as i32 + spacing) * scale
}
