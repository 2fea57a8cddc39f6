//! LED console runner (default binary).
//!
//! Boots the console, then runs a fixed-rate loop: drain terminal input until
//! the frame deadline, tick the console, present the LED grid and flush it to
//! the terminal. Logs go to a file because the terminal belongs to the UI.

use std::fs::OpenOptions;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use log::{info, warn};

use led_console::core::{FontOverrides, Surface};
use led_console::engine::{Console, ConsoleConfig, Registry, SoundBoard};
use led_console::input::{is_interrupt, KeyTracker};
use led_console::term::{ConsoleView, FrameBuffer, TerminalBell, TerminalRenderer, Viewport};
use led_console::types::MAX_FRAME_DT;

fn main() -> Result<()> {
    let config = ConsoleConfig::from_env();
    init_logging(&config)?;

    let registry = Registry::builtin().context("invalid game registry")?;
    let seed = config.resolved_seed();
    info!("starting led-console (seed {seed}, {} fps)", config.fps);

    let sound = SoundBoard::new(Box::new(TerminalBell::stdout()), config.sound);
    let mut console = Console::new(registry, config.style, sound, seed);
    if let Some(path) = &config.font_path {
        match FontOverrides::load(path) {
            Ok(overrides) => {
                info!("loaded {} glyph overrides from {}", overrides.len(), path.display());
                console.set_font_overrides(overrides);
            }
            Err(err) => warn!("using the built-in font: {err:#}"),
        }
    }
    console.start();

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &mut console, &config));

    // Always try to restore terminal state.
    let restored = term.exit();
    info!("led-console exiting");
    result.and(restored)
}

fn init_logging(config: &ConsoleConfig) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&config.log_path)
        .with_context(|| format!("open log file {}", config.log_path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, console: &mut Console, config: &ConsoleConfig) -> Result<()> {
    let frame = config.frame_interval();
    let view = ConsoleView::default();
    let mut tracker = KeyTracker::new();
    let mut surface = Surface::default();
    let mut fb = FrameBuffer::default();

    let mut last_tick = Instant::now();
    let mut deadline = last_tick + frame;

    while !console.quit_requested() {
        // Input until the next frame is due.
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if is_interrupt(key) => {
                    info!("interrupted");
                    return Ok(());
                }
                Event::Key(key) => tracker.handle_event(key, Instant::now()),
                Event::Resize(..) => term.invalidate(),
                Event::FocusLost => tracker.clear(),
                _ => {}
            }
        }

        let now = Instant::now();
        deadline += frame;
        if deadline < now {
            // Fell behind; do not try to catch up with a burst of frames.
            deadline = now + frame;
        }
        let dt = now.duration_since(last_tick).as_secs_f32().min(MAX_FRAME_DT);
        last_tick = now;

        let input = tracker.frame(now);
        console.tick(dt, &input.held, &input.events);
        console.present(&mut surface);

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&surface, &console.status(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;
    }

    info!("quit requested");
    Ok(())
}
