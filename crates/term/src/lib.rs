//! Terminal front end for the LED console.
//!
//! Renders the presented LED surface into a character framebuffer using
//! half-block cells and flushes it to a real terminal with diffing. Also
//! provides the terminal bell as a sound sink.
//!
//! Goals:
//! - Keep `core` and `engine` free of any terminal concerns
//! - Allocation-free steady state (framebuffers are reused across frames)
//! - Stay legible at any terminal size by integer downsampling

pub mod bell;
pub mod fb;
pub mod renderer;
pub mod view;

pub use led_console_core as core;
pub use led_console_engine as engine;
pub use led_console_types as types;

pub use bell::TerminalBell;
pub use fb::{Cell, CellStyle, FrameBuffer, HALF_BLOCK};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{downsample_factor, ConsoleView, ImagePlacement, Viewport, STATUS_ROWS};
