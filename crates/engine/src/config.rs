//! Startup settings read from `LED_CONSOLE_*` environment variables.
//!
//! Every value is optional. Anything missing or unparseable falls back to its
//! default; style values are clamped into range.

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::style::{Layout, LedShape};
use crate::types::TARGET_FPS;
use crate::VisualStyle;

pub const MIN_FPS: u32 = 10;
pub const MAX_FPS: u32 = 240;
pub const DEFAULT_LOG_PATH: &str = "/tmp/led-console.log";

#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleConfig {
    /// Fixed seed; `None` seeds from the clock.
    pub seed: Option<u32>,
    pub fps: u32,
    pub sound: bool,
    /// JSON glyph override file.
    pub font_path: Option<PathBuf>,
    pub log_path: PathBuf,
    pub style: VisualStyle,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            seed: None,
            fps: TARGET_FPS,
            sound: true,
            font_path: None,
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            style: VisualStyle::default(),
        }
    }
}

impl ConsoleConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source, e.g. a map in tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };
        let number = |key: &str| text(key).and_then(|s| s.parse::<u32>().ok());

        let seed = number("LED_CONSOLE_SEED");
        let fps = number("LED_CONSOLE_FPS")
            .map(|f| f.clamp(MIN_FPS, MAX_FPS))
            .unwrap_or(defaults.fps);
        let sound = text("LED_CONSOLE_SOUND")
            .map(|s| !matches!(s.to_ascii_lowercase().as_str(), "0" | "false" | "off" | "no"))
            .unwrap_or(defaults.sound);
        let font_path = text("LED_CONSOLE_FONT").map(PathBuf::from);
        let log_path = text("LED_CONSOLE_LOG")
            .map(PathBuf::from)
            .unwrap_or(defaults.log_path);

        let base = defaults.style;
        let style = VisualStyle::new(
            number("LED_CONSOLE_LED_SIZE").unwrap_or(base.led_size()),
            number("LED_CONSOLE_LED_SPACING").unwrap_or(base.led_spacing()),
            number("LED_CONSOLE_LED_GAP").unwrap_or(base.led_gap()),
            text("LED_CONSOLE_SHAPE")
                .and_then(|s| LedShape::parse(&s))
                .unwrap_or(base.shape),
            text("LED_CONSOLE_LAYOUT")
                .and_then(|s| Layout::parse(&s))
                .unwrap_or(base.layout),
        );

        Self {
            seed,
            fps,
            sound,
            font_path,
            log_path,
            style,
        }
    }

    /// The configured seed, or one derived from the wall clock.
    pub fn resolved_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.fps.max(1) as u64)
    }
}
