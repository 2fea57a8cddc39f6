//! LED visual style and the pixel geometry derived from it.

use crate::types::GRID_SIZE;

pub const MIN_LED_SIZE: u32 = 2;
pub const MAX_LED_SIZE: u32 = 24;
pub const MIN_LED_SPACING: u32 = 0;
pub const MAX_LED_SPACING: u32 = 12;
pub const MIN_LED_GAP: u32 = 0;
pub const MAX_LED_GAP: u32 = 4;

/// Blank border around the grid on the surface, in pixels.
pub const SURFACE_MARGIN: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LedShape {
    #[default]
    Circular,
    Square,
}

impl LedShape {
    pub fn toggled(self) -> Self {
        match self {
            LedShape::Circular => LedShape::Square,
            LedShape::Square => LedShape::Circular,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LedShape::Circular => "circle",
            LedShape::Square => "square",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circle" | "circular" | "round" => Some(LedShape::Circular),
            "square" | "pixel" => Some(LedShape::Square),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    #[default]
    Portrait,
    Landscape,
}

impl Layout {
    pub fn toggled(self) -> Self {
        match self {
            Layout::Portrait => Layout::Landscape,
            Layout::Landscape => Layout::Portrait,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Portrait => "portrait",
            Layout::Landscape => "landscape",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "portrait" => Some(Layout::Portrait),
            "landscape" => Some(Layout::Landscape),
            _ => None,
        }
    }
}

/// How each LED is drawn onto the display surface.
///
/// All fields stay inside their documented ranges: the adjusters clamp, and
/// [`VisualStyle::new`] clamps its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisualStyle {
    led_size: u32,
    led_spacing: u32,
    led_gap: u32,
    pub shape: LedShape,
    pub layout: Layout,
}

impl Default for VisualStyle {
    fn default() -> Self {
        Self {
            led_size: 6,
            led_spacing: 2,
            led_gap: 1,
            shape: LedShape::Circular,
            layout: Layout::Portrait,
        }
    }
}

fn clamp_delta(value: u32, delta: i32, lo: u32, hi: u32) -> u32 {
    (value as i64 + delta as i64).clamp(lo as i64, hi as i64) as u32
}

impl VisualStyle {
    pub fn new(size: u32, spacing: u32, gap: u32, shape: LedShape, layout: Layout) -> Self {
        Self {
            led_size: size.clamp(MIN_LED_SIZE, MAX_LED_SIZE),
            led_spacing: spacing.clamp(MIN_LED_SPACING, MAX_LED_SPACING),
            led_gap: gap.clamp(MIN_LED_GAP, MAX_LED_GAP),
            shape,
            layout,
        }
    }

    pub fn led_size(&self) -> u32 {
        self.led_size
    }

    pub fn led_spacing(&self) -> u32 {
        self.led_spacing
    }

    pub fn led_gap(&self) -> u32 {
        self.led_gap
    }

    pub fn adjust_size(&mut self, delta: i32) {
        self.led_size = clamp_delta(self.led_size, delta, MIN_LED_SIZE, MAX_LED_SIZE);
    }

    pub fn adjust_spacing(&mut self, delta: i32) {
        self.led_spacing = clamp_delta(self.led_spacing, delta, MIN_LED_SPACING, MAX_LED_SPACING);
    }

    pub fn adjust_gap(&mut self, delta: i32) {
        self.led_gap = clamp_delta(self.led_gap, delta, MIN_LED_GAP, MAX_LED_GAP);
    }

    pub fn toggle_shape(&mut self) {
        self.shape = self.shape.toggled();
    }

    pub fn toggle_layout(&mut self) {
        self.layout = self.layout.toggled();
    }

    /// Distance between the top-left corners of neighbouring LEDs.
    pub fn pitch(&self) -> u32 {
        self.led_size + self.led_spacing
    }

    /// Width (and height) of the 19×19 LED block.
    pub fn extent(&self) -> u32 {
        self.pitch() * GRID_SIZE as u32 - self.led_spacing
    }

    /// Surface dimensions `(width, height)` for the current layout.
    pub fn surface_size(&self) -> (u32, u32) {
        let side = self.extent() + 2 * SURFACE_MARGIN;
        match self.layout {
            Layout::Portrait => (side, side),
            Layout::Landscape => (side * 14 / 9, side),
        }
    }

    /// Top-left pixel of LED (`x`, `y`) with the grid centered on the surface.
    pub fn led_origin(&self, x: usize, y: usize) -> (u32, u32) {
        let (w, h) = self.surface_size();
        let extent = self.extent();
        let off_x = (w - extent) / 2;
        let off_y = (h - extent) / 2;
        (
            off_x + x as u32 * self.pitch(),
            off_y + y as u32 * self.pitch(),
        )
    }
}
