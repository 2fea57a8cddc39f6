//! The ordered list of games the menu offers.
//!
//! Built once at startup and validated there; the console treats it as
//! immutable afterwards.

use anyhow::{bail, ensure, Result};
use arrayvec::ArrayVec;

use crate::font::is_supported;
use crate::games::{basketball, flappy, pong, snake, Basketball, Flappy, Pong, Snake};
use crate::screen::ActiveScreen;
use crate::types::Rgb;

/// Most games the carousel can number with a single digit.
pub const MAX_GAMES: usize = 9;

/// Longest name that fits under a menu card.
pub const MAX_NAME_LEN: usize = 5;

/// Logo area on a menu card, in LEDs.
pub const LOGO_WIDTH: u8 = 11;
pub const LOGO_HEIGHT: u8 = 9;

/// One lit LED of a menu logo, relative to the logo's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoPixel {
    pub dx: u8,
    pub dy: u8,
    pub color: Rgb,
}

pub const fn logo_px(dx: u8, dy: u8, color: Rgb) -> LogoPixel {
    LogoPixel { dx, dy, color }
}

/// Builds a fresh game screen from a seed.
pub type ScreenFactory = fn(seed: u32) -> ActiveScreen;

#[derive(Clone, Copy)]
pub struct GameEntry {
    pub name: &'static str,
    /// Controls summary shown in the status bar while playing.
    pub hint: &'static str,
    pub factory: ScreenFactory,
    pub logo: &'static [LogoPixel],
}

impl std::fmt::Debug for GameEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEntry")
            .field("name", &self.name)
            .field("logo_pixels", &self.logo.len())
            .finish_non_exhaustive()
    }
}

impl GameEntry {
    fn validate(&self) -> Result<()> {
        ensure!(!self.name.is_empty(), "game name must not be empty");
        ensure!(
            self.name.chars().count() <= MAX_NAME_LEN,
            "game name {:?} is longer than {MAX_NAME_LEN} characters",
            self.name
        );
        if let Some(ch) = self.name.chars().find(|c| !is_supported(*c)) {
            bail!("game name {:?} contains {ch:?}, which the LED font cannot draw", self.name);
        }
        if let Some(px) = self
            .logo
            .iter()
            .find(|p| p.dx >= LOGO_WIDTH || p.dy >= LOGO_HEIGHT)
        {
            bail!(
                "logo for {:?} has a pixel at ({}, {}) outside the {LOGO_WIDTH}x{LOGO_HEIGHT} card area",
                self.name,
                px.dx,
                px.dy
            );
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Registry {
    entries: ArrayVec<GameEntry, MAX_GAMES>,
}

impl Registry {
    pub fn new(entries: impl IntoIterator<Item = GameEntry>) -> Result<Self> {
        let mut list = ArrayVec::new();
        for entry in entries {
            entry.validate()?;
            if list.try_push(entry).is_err() {
                bail!("at most {MAX_GAMES} games can be registered");
            }
        }
        ensure!(!list.is_empty(), "at least one game must be registered");
        Ok(Self { entries: list })
    }

    /// Pong, Snake, Flappy and Basketball, in menu order.
    pub fn builtin() -> Result<Self> {
        Self::new([
            GameEntry {
                name: pong::NAME,
                hint: pong::HINT,
                factory: |seed| ActiveScreen::Pong(Pong::new(seed)),
                logo: pong::LOGO,
            },
            GameEntry {
                name: snake::NAME,
                hint: snake::HINT,
                factory: |seed| ActiveScreen::Snake(Snake::new(seed)),
                logo: snake::LOGO,
            },
            GameEntry {
                name: flappy::NAME,
                hint: flappy::HINT,
                factory: |seed| ActiveScreen::Flappy(Flappy::new(seed)),
                logo: flappy::LOGO,
            },
            GameEntry {
                name: basketball::NAME,
                hint: basketball::HINT,
                factory: |seed| ActiveScreen::Basketball(Basketball::new(seed)),
                logo: basketball::LOGO,
            },
        ])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GameEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[GameEntry] {
        &self.entries
    }
}
