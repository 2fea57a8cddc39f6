//! Startup animation: a row scan, a column scan, then a ring from the center.

use crate::screen::Screen;
use crate::types::{HeldKeys, Key, Rgb, BOOT_DURATION_SECS, GRID_SIZE};
use crate::GridBuffer;

const ROW_SCAN_END: f32 = 0.33;
const COLUMN_SCAN_END: f32 = 0.66;
const RING_WIDTH: f32 = 3.0;

/// Elapsed time is counted in whole microseconds, so 180 frames of 1/60 s
/// add up to the full 3 s.
#[derive(Debug, Clone)]
pub struct BootScreen {
    elapsed_us: u64,
    duration_us: u64,
    running: bool,
}

impl Default for BootScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl BootScreen {
    pub fn new() -> Self {
        Self::with_duration(BOOT_DURATION_SECS)
    }

    pub fn with_duration(duration: f32) -> Self {
        Self {
            elapsed_us: 0,
            duration_us: secs_to_us(duration).max(1),
            running: true,
        }
    }

    /// Seconds played so far.
    pub fn elapsed(&self) -> f32 {
        self.elapsed_us as f32 / 1_000_000.0
    }

    /// Fraction of the animation played, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        (self.elapsed_us as f64 / self.duration_us as f64).clamp(0.0, 1.0) as f32
    }

    fn scan_color(i: usize) -> Rgb {
        Rgb::from_hsv((i * 20 % 360) as f32, 1.0, 1.0)
    }
}

impl Screen for BootScreen {
    fn update(&mut self, dt: f32) {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed_us = self.elapsed_us.saturating_add(secs_to_us(dt));
        }
        if self.elapsed_us >= self.duration_us {
            self.running = false;
        }
    }

    fn render(&self, grid: &mut GridBuffer) {
        grid.clear_black();
        let progress = self.progress();
        let n = GRID_SIZE as i32;

        if progress < ROW_SCAN_END {
            let lines = (progress / ROW_SCAN_END * GRID_SIZE as f32) as usize;
            for i in 0..lines.min(GRID_SIZE) {
                grid.fill_rect(0, i as i32, n, 1, Self::scan_color(i));
            }
        } else if progress < COLUMN_SCAN_END {
            let stage = (progress - ROW_SCAN_END) / (COLUMN_SCAN_END - ROW_SCAN_END);
            let lines = (stage * GRID_SIZE as f32) as usize;
            for i in 0..lines.min(GRID_SIZE) {
                grid.fill_rect(i as i32, 0, 1, n, Self::scan_color(i));
            }
        } else {
            let stage = (progress - COLUMN_SCAN_END) / (1.0 - COLUMN_SCAN_END);
            let center = (GRID_SIZE / 2) as f32;
            let radius = stage * center * 1.5;

            for y in 0..GRID_SIZE {
                for x in 0..GRID_SIZE {
                    let dx = x as f32 - center;
                    let dy = y as f32 - center;
                    let dist = (dx * dx + dy * dy).sqrt();
                    let off = (dist - radius).abs();
                    if off < RING_WIDTH {
                        let hue = dist * 10.0 + self.elapsed() * 100.0;
                        let color = Rgb::from_hsv(hue, 1.0, 1.0 - off / RING_WIDTH);
                        grid.set_pixel(x as i32, y as i32, color);
                    }
                }
            }
        }
    }

    fn handle_input(&mut self, _held: &HeldKeys, events: &[Key]) {
        if events.iter().any(|k| k.is_confirm()) {
            self.running = false;
        }
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

fn secs_to_us(secs: f32) -> u64 {
    if secs.is_finite() && secs > 0.0 {
        (secs as f64 * 1_000_000.0).round() as u64
    } else {
        0
    }
}
