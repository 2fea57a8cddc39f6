//! Core types module - shared data structures and constants
//!
//! This module defines the plain data shared by every layer of the console:
//! colors, keys, input snapshots, and the fixed grid/timing constants. Nothing
//! here knows about rendering, terminals, or games.
//!
//! # Grid Dimensions
//!
//! The simulated LED matrix is fixed at 19×19 logical LEDs:
//!
//! - **Width**: 19 columns (indexed 0-18)
//! - **Height**: 19 rows (indexed 0-18)
//! - **Cells**: 361
//!
//! # Frame Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TARGET_FPS` | 60 | Nominal frame rate of the console loop |
//! | `FRAME_MS` | 16 | Frame interval in milliseconds (~60 FPS) |
//! | `MAX_FRAME_DT` | 0.25 | Largest frame delta the host forwards after a stall |
//! | `BOOT_DURATION_SECS` | 3.0 | Length of the boot animation |
//!
//! # Examples
//!
//! ```
//! use led_console_types::{HeldKeys, Key, Rgb, GRID_SIZE};
//!
//! assert_eq!(GRID_SIZE, 19);
//!
//! // Letter keys are case-insensitive.
//! assert_eq!(Key::from_char('W'), Some(Key::Char('w')));
//! assert_eq!(Key::from_char('='), Some(Key::Plus));
//!
//! let mut held = HeldKeys::new();
//! held.insert(Key::Up);
//! assert!(held.contains(Key::Up));
//!
//! let c = Rgb::new(200, 100, 50);
//! assert_eq!(c.peak(), 200);
//! ```

use arrayvec::ArrayVec;

/// Width and height of the LED matrix.
pub const GRID_SIZE: usize = 19;

/// Number of logical LEDs.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Nominal frame rate of the console loop.
pub const TARGET_FPS: u32 = 60;

/// Frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Largest frame delta (seconds) the host forwards after a stall.
pub const MAX_FRAME_DT: f32 = 0.25;

/// Length of the boot animation in seconds.
pub const BOOT_DURATION_SECS: f32 = 3.0;

/// Maximum number of simultaneously held keys tracked per frame.
pub const MAX_HELD_KEYS: usize = 16;

/// Maximum number of discrete key-down events delivered per frame.
pub const MAX_EVENTS_PER_FRAME: usize = 32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_dimensions_are_fixed() {
        assert_eq!(GRID_SIZE, 19);
        assert_eq!(CELL_COUNT, 361);
    }

    #[test]
    fn frame_interval_matches_target_rate() {
        assert_eq!(1000 / TARGET_FPS, FRAME_MS);
    }

    #[test]
    fn hsv_primary_hues() {
        assert_eq!(Rgb::from_hsv(0.0, 1.0, 1.0), Rgb::new(255, 0, 0));
        assert_eq!(Rgb::from_hsv(120.0, 1.0, 1.0), Rgb::new(0, 255, 0));
        assert_eq!(Rgb::from_hsv(240.0, 1.0, 1.0), Rgb::new(0, 0, 255));
        assert_eq!(Rgb::from_hsv(360.0, 1.0, 1.0), Rgb::new(255, 0, 0));
        assert_eq!(Rgb::from_hsv(90.0, 0.0, 0.5), Rgb::new(127, 127, 127));
    }

    #[test]
    fn held_keys_ignore_duplicates_and_overflow() {
        let mut held = HeldKeys::new();
        held.insert(Key::Up);
        held.insert(Key::Up);
        assert_eq!(held.len(), 1);

        for c in 'a'..='z' {
            held.insert(Key::Char(c));
        }
        assert_eq!(held.len(), MAX_HELD_KEYS);

        held.remove(Key::Up);
        assert!(!held.contains(Key::Up));
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// The "off" color of an LED.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Brightest channel, used as the LED's perceived intensity.
    pub fn peak(self) -> u8 {
        self.r.max(self.g).max(self.b)
    }

    pub fn is_off(self) -> bool {
        self == Rgb::BLACK
    }

    /// Multiply each channel by `num / den` (integer math, rounds down).
    pub fn scale(self, num: u32, den: u32) -> Self {
        if den == 0 {
            return Rgb::BLACK;
        }
        let f = |c: u8| ((c as u32 * num) / den).min(255) as u8;
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    /// Multiply each channel by a factor in `[0, 1]`.
    pub fn scale_f32(self, factor: f32) -> Self {
        let k = factor.clamp(0.0, 1.0);
        let f = |c: u8| (c as f32 * k) as u8;
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    pub fn saturating_add(self, amount: u8) -> Self {
        Self::new(
            self.r.saturating_add(amount),
            self.g.saturating_add(amount),
            self.b.saturating_add(amount),
        )
    }

    /// HSV to RGB (`h` in degrees, `s` and `v` in `[0, 1]`).
    ///
    /// ```
    /// use led_console_types::Rgb;
    ///
    /// assert_eq!(Rgb::from_hsv(60.0, 1.0, 1.0), Rgb::new(255, 255, 0));
    /// ```
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        let h = h.rem_euclid(360.0) / 60.0;
        let s = s.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);

        let sector = h.floor();
        let frac = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * frac);
        let t = v * (1.0 - s * (1.0 - frac));

        let (r, g, b) = match sector as u32 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        let to_u8 = |c: f32| (c * 255.0) as u8;
        Self::new(to_u8(r), to_u8(g), to_u8(b))
    }
}

/// Keys the console understands.
///
/// Letter and digit keys are carried as lowercase `Char`s; punctuation used by
/// the global controls has dedicated variants so `+` and `=` collapse to one
/// key, like on a US keyboard where they share a key cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Space,
    Enter,
    Escape,
    Plus,
    Minus,
    LeftBracket,
    RightBracket,
    Comma,
    Period,
    /// Lowercase letter or digit.
    Char(char),
}

impl Key {
    /// Map a typed character to a key (case-insensitive for letters).
    ///
    /// # Examples
    ///
    /// ```
    /// use led_console_types::Key;
    ///
    /// assert_eq!(Key::from_char('t'), Some(Key::Char('t')));
    /// assert_eq!(Key::from_char('T'), Some(Key::Char('t')));
    /// assert_eq!(Key::from_char(' '), Some(Key::Space));
    /// assert_eq!(Key::from_char('['), Some(Key::LeftBracket));
    /// assert_eq!(Key::from_char('~'), None);
    /// ```
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            ' ' => Some(Key::Space),
            '+' | '=' => Some(Key::Plus),
            '-' | '_' => Some(Key::Minus),
            '[' => Some(Key::LeftBracket),
            ']' => Some(Key::RightBracket),
            ',' => Some(Key::Comma),
            '.' => Some(Key::Period),
            c if c.is_ascii_alphanumeric() => Some(Key::Char(c.to_ascii_lowercase())),
            _ => None,
        }
    }

    /// True for SPACE or ENTER, the "confirm" keys of every screen.
    pub fn is_confirm(self) -> bool {
        matches!(self, Key::Space | Key::Enter)
    }
}

/// Discrete key-down transitions observed since the previous frame.
pub type KeyEvents = ArrayVec<Key, MAX_EVENTS_PER_FRAME>;

/// Set of keys currently held down.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeldKeys {
    keys: ArrayVec<Key, MAX_HELD_KEYS>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_keys(keys: &[Key]) -> Self {
        let mut held = Self::new();
        for &k in keys {
            held.insert(k);
        }
        held
    }

    /// Add a key; duplicates are ignored and keys beyond capacity are dropped.
    pub fn insert(&mut self, key: Key) {
        if !self.contains(key) {
            let _ = self.keys.try_push(key);
        }
    }

    pub fn remove(&mut self, key: Key) {
        self.keys.retain(|k| *k != key);
    }

    pub fn contains(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = Key> + '_ {
        self.keys.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
