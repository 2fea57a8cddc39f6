//! Terminal bell as a sound sink.
//!
//! A terminal can make exactly one noise, so every effect rings the same
//! bell. Effects that fire constantly (turns, flaps, menu moves) are left
//! silent to keep it bearable.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::engine::SoundSink;

const BEL: &[u8] = b"\x07";

/// Effects that ring the bell.
const AUDIBLE: &[&str] = &["paddle_hit", "score", "win", "eat", "die", "menu_select", "toggle"];

pub struct TerminalBell<W: Write = io::Stdout> {
    out: W,
}

impl TerminalBell {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SoundSink for TerminalBell<W> {
    fn play_effect(&mut self, name: &str) -> Result<()> {
        if !AUDIBLE.contains(&name) {
            return Ok(());
        }
        self.out.write_all(BEL).context("write terminal bell")?;
        self.out.flush().context("flush terminal bell")?;
        Ok(())
    }
}
