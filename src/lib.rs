//! LED console (workspace facade crate).
//!
//! Re-exports the member crates under one roof so the binary, integration
//! tests and benches can write `led_console::{core,engine,input,term,types}`.

pub use led_console_core as core;
pub use led_console_engine as engine;
pub use led_console_input as input;
pub use led_console_term as term;
pub use led_console_types as types;
