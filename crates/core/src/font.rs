//! 3×5 bitmap font used by [`GridBuffer::render_text`](crate::GridBuffer::render_text).
//!
//! Glyphs are stored as five rows of three bits (bit 2 is the left column).
//! Lookup is case-insensitive and never fails: characters without a glyph
//! render as [`Glyph::BLANK`].

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::warn;
use serde_json::Value;

/// Glyph width in LEDs.
pub const GLYPH_WIDTH: usize = 3;

/// Glyph height in LEDs.
pub const GLYPH_HEIGHT: usize = 5;

/// A 3×5 on/off mask for one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Glyph {
    rows: [u8; GLYPH_HEIGHT],
}

impl Glyph {
    pub const BLANK: Glyph = Glyph { rows: [0; GLYPH_HEIGHT] };

    /// Build from packed rows; only the low three bits of each row are used.
    pub const fn from_rows(rows: [u8; GLYPH_HEIGHT]) -> Self {
        Self {
            rows: [
                rows[0] & 0b111,
                rows[1] & 0b111,
                rows[2] & 0b111,
                rows[3] & 0b111,
                rows[4] & 0b111,
            ],
        }
    }

    /// Build from a row-major 0/1 matrix (any non-zero counts as on).
    pub fn from_matrix(matrix: [[u8; GLYPH_WIDTH]; GLYPH_HEIGHT]) -> Self {
        let mut rows = [0u8; GLYPH_HEIGHT];
        for (row, cols) in rows.iter_mut().zip(matrix.iter()) {
            for (col, &v) in cols.iter().enumerate() {
                if v != 0 {
                    *row |= 0b100 >> col;
                }
            }
        }
        Self { rows }
    }

    /// Whether the LED at (`col`, `row`) is lit. Out-of-range is off.
    pub fn is_on(&self, col: usize, row: usize) -> bool {
        if col >= GLYPH_WIDTH || row >= GLYPH_HEIGHT {
            return false;
        }
        self.rows[row] & (0b100 >> col) != 0
    }

    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|r| *r == 0)
    }

    pub fn rows(&self) -> [u8; GLYPH_HEIGHT] {
        self.rows
    }
}

/// Built-in glyph for `ch` (already upper-cased), if the console font has one.
pub fn builtin_glyph(ch: char) -> Option<Glyph> {
    let rows = match ch {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b111, 0b100, 0b100, 0b100, 0b111],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b111, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b111, 0b100, 0b100],
        'G' => [0b111, 0b100, 0b101, 0b101, 0b111],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b001, 0b001, 0b001, 0b101, 0b010],
        'K' => [0b101, 0b110, 0b100, 0b110, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'N' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'O' => [0b111, 0b101, 0b101, 0b101, 0b111],
        'P' => [0b111, 0b101, 0b111, 0b100, 0b100],
        'Q' => [0b111, 0b101, 0b101, 0b111, 0b001],
        'R' => [0b111, 0b101, 0b111, 0b110, 0b101],
        'S' => [0b111, 0b100, 0b111, 0b001, 0b111],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => [0b101, 0b101, 0b111, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        ' ' => [0b000; GLYPH_HEIGHT],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        _ => return None,
    };
    Some(Glyph::from_rows(rows))
}

/// Whether the built-in font can draw `ch` (case-insensitive).
pub fn is_supported(ch: char) -> bool {
    builtin_glyph(ch.to_ascii_uppercase()).is_some()
}

/// Per-character whole-glyph replacements, keyed by uppercase character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontOverrides {
    glyphs: HashMap<char, Glyph>,
}

impl FontOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_glyph(&mut self, ch: char, glyph: Glyph) {
        self.glyphs.insert(ch.to_ascii_uppercase(), glyph);
    }

    pub fn clear_glyph(&mut self, ch: char) {
        self.glyphs.remove(&ch.to_ascii_uppercase());
    }

    pub fn get(&self, ch: char) -> Option<Glyph> {
        self.glyphs.get(&ch.to_ascii_uppercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Parse an override document:
    ///
    /// ```json
    /// { "A": [[0,1,0],[1,0,1],[1,1,1],[1,0,1],[1,0,1]] }
    /// ```
    ///
    /// Entries that are not five rows of three numbers are skipped.
    pub fn from_json(text: &str) -> Result<Self> {
        let doc: Value = serde_json::from_str(text).context("font overrides are not valid JSON")?;
        let Value::Object(map) = doc else {
            bail!("font overrides must be a JSON object keyed by character");
        };

        let mut out = Self::new();
        for (key, raw) in map {
            let Some(ch) = key.chars().next() else {
                warn!("skipping font override with empty key");
                continue;
            };
            match glyph_from_value(&raw) {
                Some(glyph) => out.set_glyph(ch, glyph),
                None => warn!("skipping malformed font override for {key:?}"),
            }
        }
        Ok(out)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading font overrides from {}", path.display()))?;
        Self::from_json(&text)
    }
}

fn glyph_from_value(raw: &Value) -> Option<Glyph> {
    let rows = raw.as_array()?;
    if rows.len() != GLYPH_HEIGHT {
        return None;
    }
    let mut matrix = [[0u8; GLYPH_WIDTH]; GLYPH_HEIGHT];
    for (dst, row) in matrix.iter_mut().zip(rows) {
        let cols = row.as_array()?;
        if cols.len() != GLYPH_WIDTH {
            return None;
        }
        for (cell, v) in dst.iter_mut().zip(cols) {
            let lit = match v {
                Value::Bool(b) => *b,
                Value::Number(n) => n.as_f64()? != 0.0,
                _ => return None,
            };
            *cell = lit as u8;
        }
    }
    Some(Glyph::from_matrix(matrix))
}

/// Glyph lookup: overrides first, then the built-in table, then blank.
#[derive(Debug, Clone, Default)]
pub struct Font {
    overrides: FontOverrides,
}

impl Font {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overrides(overrides: FontOverrides) -> Self {
        Self { overrides }
    }

    pub fn glyph_for(&self, ch: char) -> Glyph {
        let upper = ch.to_ascii_uppercase();
        self.overrides
            .get(upper)
            .or_else(|| builtin_glyph(upper))
            .unwrap_or(Glyph::BLANK)
    }

    pub fn overrides(&self) -> &FontOverrides {
        &self.overrides
    }

    pub fn set_overrides(&mut self, overrides: FontOverrides) {
        self.overrides = overrides;
    }
}
