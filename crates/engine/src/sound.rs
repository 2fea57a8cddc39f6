//! Fire-and-forget sound triggers.
//!
//! The console never synthesises audio itself. It hands effect names to a
//! [`SoundSink`]; whatever the sink does with them, failures stop here.

use log::debug;

use crate::screen::SoundEffect;

/// Something that can play a named effect.
pub trait SoundSink {
    fn play_effect(&mut self, name: &str) -> anyhow::Result<()>;
}

/// Sink that drops every effect.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSound;

impl SoundSink for NullSound {
    fn play_effect(&mut self, _name: &str) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Enabled flag plus the sink effects go to.
pub struct SoundBoard {
    sink: Box<dyn SoundSink>,
    enabled: bool,
}

impl std::fmt::Debug for SoundBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoundBoard")
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

impl Default for SoundBoard {
    fn default() -> Self {
        Self::silent()
    }
}

impl SoundBoard {
    pub fn new(sink: Box<dyn SoundSink>, enabled: bool) -> Self {
        Self { sink, enabled }
    }

    pub fn silent() -> Self {
        Self::new(Box::new(NullSound), false)
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Flip the enabled flag; a short cue confirms switching on.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        if self.enabled {
            self.trigger(SoundEffect::Toggle);
        }
        self.enabled
    }

    pub fn trigger(&mut self, effect: SoundEffect) {
        if !self.enabled {
            return;
        }
        if let Err(err) = self.sink.play_effect(effect.name()) {
            debug!("sound effect {} failed: {err:#}", effect.name());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl SoundSink for Recorder {
        fn play_effect(&mut self, name: &str) -> anyhow::Result<()> {
            self.0.borrow_mut().push(name.to_string());
            Ok(())
        }
    }

    struct Broken;

    impl SoundSink for Broken {
        fn play_effect(&mut self, _name: &str) -> anyhow::Result<()> {
            anyhow::bail!("no audio device")
        }
    }

    #[test]
    fn disabled_board_plays_nothing() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut board = SoundBoard::new(Box::new(Recorder(log.clone())), false);
        board.trigger(SoundEffect::Score);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn toggle_on_plays_confirmation() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut board = SoundBoard::new(Box::new(Recorder(log.clone())), false);
        assert!(board.toggle());
        assert!(!board.toggle());
        assert_eq!(*log.borrow(), vec!["toggle".to_string()]);
    }

    #[test]
    fn sink_failures_are_swallowed() {
        let mut board = SoundBoard::new(Box::new(Broken), true);
        board.trigger(SoundEffect::Die);
        assert!(board.enabled());
    }
}
