//! Console engine - screens, games and the state machine that drives them
//!
//! Everything here is deterministic given a seed, a sequence of frame deltas
//! and a sequence of inputs. No terminal, clock or thread is touched; the
//! binary owns those and feeds [`Console::tick`] once per frame.
//!
//! # Module Structure
//!
//! - [`screen`]: the [`Screen`] trait, the closed [`ActiveScreen`] enum and sound cues
//! - [`console`]: BOOT → MENU → PLAYING → MENU transitions and global controls
//! - [`registry`]: the validated, ordered list of games
//! - [`boot`], [`menu`], [`games`]: the screens themselves
//! - [`sound`]: fire-and-forget effect playback
//! - [`config`]: startup settings from the environment
//!
//! # Example
//!
//! ```
//! use led_console_engine::{Console, ConsoleState, Registry, SoundBoard, VisualStyle};
//! use led_console_engine::types::{HeldKeys, Key};
//!
//! let registry = Registry::builtin().unwrap();
//! let mut console = Console::new(registry, VisualStyle::default(), SoundBoard::silent(), 7);
//! console.start();
//!
//! // Skip the boot animation, then pick the second game.
//! console.tick(0.016, &HeldKeys::new(), &[Key::Space]);
//! assert_eq!(console.state(), ConsoleState::Menu);
//! console.tick(0.016, &HeldKeys::new(), &[Key::Right, Key::Space]);
//! assert_eq!(console.state(), ConsoleState::Playing);
//! assert_eq!(console.selected_game_index(), 1);
//! ```

pub mod boot;
pub mod config;
pub mod console;
pub mod games;
pub mod menu;
pub mod registry;
pub mod screen;
pub mod sound;

pub use led_console_core::{font, layout, style};
pub use led_console_core::{GridBuffer, SimpleRng, Surface, VisualStyle};
pub use led_console_types as types;

pub use boot::BootScreen;
pub use config::ConsoleConfig;
pub use console::{Console, ConsoleState, ConsoleStatus};
pub use menu::MenuScreen;
pub use registry::{GameEntry, Registry};
pub use screen::{ActiveScreen, EffectQueue, Screen, ScreenKind, SoundEffect};
pub use sound::{NullSound, SoundBoard, SoundSink};
