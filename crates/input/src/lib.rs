//! Terminal input module (console-facing).
//!
//! Maps `crossterm` key events onto console [`Key`](crate::types::Key)s and
//! derives the per-frame held set and key-down events the console consumes.
//! Works in terminals that never emit key-release events by timing keys out.

pub mod map;
pub mod tracker;

pub use led_console_types as types;

pub use map::{is_interrupt, map_key};
pub use tracker::{InputFrame, KeyTracker};
