//! Held-key tracking for terminal environments.
//!
//! Many terminals only report presses (repeating while a key is held) and
//! never report releases. A key therefore counts as held until it is
//! released or until no press for it has arrived within the release timeout.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::map_key;
use crate::types::{HeldKeys, Key, KeyEvents, MAX_HELD_KEYS};

// Long enough to bridge the gap between a terminal's auto-repeat presses,
// short enough that a tap does not read as a hold.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

/// Input for one console tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub held: HeldKeys,
    pub events: KeyEvents,
}

#[derive(Debug, Clone)]
pub struct KeyTracker {
    /// Held keys with the time each was last pressed.
    held: ArrayVec<(Key, Instant), MAX_HELD_KEYS>,
    events: KeyEvents,
    release_timeout: Duration,
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyTracker {
    pub fn new() -> Self {
        Self {
            held: ArrayVec::new(),
            events: KeyEvents::new(),
            release_timeout: Duration::from_millis(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
        }
    }

    pub fn with_release_timeout(mut self, timeout: Duration) -> Self {
        self.release_timeout = timeout;
        self
    }

    pub fn release_timeout(&self) -> Duration {
        self.release_timeout
    }

    /// Feed one terminal key event observed at `now`.
    pub fn handle_event(&mut self, event: KeyEvent, now: Instant) {
        let Some(key) = map_key(event) else {
            return;
        };
        match event.kind {
            KeyEventKind::Press => self.press(key, now),
            KeyEventKind::Repeat => {
                self.refresh(key, now);
            }
            KeyEventKind::Release => self.release(key),
        }
    }

    /// A press of a key that is not already held is a key-down event; a press
    /// of a held key is terminal auto-repeat and only keeps it held.
    pub fn press(&mut self, key: Key, now: Instant) {
        if self.refresh(key, now) {
            return;
        }
        if self.events.try_push(key).is_err() {
            log::debug!("input: dropping {key:?}, too many events this frame");
        }
        let _ = self.held.try_push((key, now));
    }

    pub fn release(&mut self, key: Key) {
        self.held.retain(|(k, _)| *k != key);
    }

    fn refresh(&mut self, key: Key, now: Instant) -> bool {
        match self.held.iter_mut().find(|(k, _)| *k == key) {
            Some((_, seen)) => {
                *seen = now;
                true
            }
            None => false,
        }
    }

    /// Expire stale keys and hand out this frame's input.
    pub fn frame(&mut self, now: Instant) -> InputFrame {
        let timeout = self.release_timeout;
        self.held
            .retain(|(_, seen)| now.saturating_duration_since(*seen) <= timeout);

        let mut held = HeldKeys::new();
        for (key, _) in &self.held {
            held.insert(*key);
        }
        InputFrame {
            held,
            events: std::mem::take(&mut self.events),
        }
    }

    /// Forget everything, e.g. after the terminal lost focus.
    pub fn clear(&mut self) {
        self.held.clear();
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn event(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_press_is_event_and_held() {
        let t0 = Instant::now();
        let mut tracker = KeyTracker::new();
        tracker.press(Key::Up, t0);
        let frame = tracker.frame(t0);
        assert_eq!(frame.events.as_slice(), &[Key::Up]);
        assert!(frame.held.contains(Key::Up));

        // Events are one-shot; the key stays held.
        let frame = tracker.frame(t0 + ms(10));
        assert!(frame.events.is_empty());
        assert!(frame.held.contains(Key::Up));
    }

    #[test]
    fn test_auto_repeat_is_not_a_new_event() {
        let t0 = Instant::now();
        let mut tracker = KeyTracker::new();
        tracker.press(Key::Char('w'), t0);
        tracker.frame(t0);
        tracker.press(Key::Char('w'), t0 + ms(100));
        tracker.press(Key::Char('w'), t0 + ms(200));
        let frame = tracker.frame(t0 + ms(300));
        assert!(frame.events.is_empty());
        assert!(frame.held.contains(Key::Char('w')));
    }

    #[test]
    fn test_key_times_out_without_presses() {
        let t0 = Instant::now();
        let mut tracker = KeyTracker::new();
        tracker.press(Key::Down, t0);
        assert!(tracker.frame(t0 + ms(150)).held.contains(Key::Down));
        assert!(tracker.frame(t0 + ms(151)).held.is_empty());
    }

    #[test]
    fn test_release_event_releases() {
        let t0 = Instant::now();
        let mut tracker = KeyTracker::new();
        tracker.handle_event(event(KeyCode::Char('s'), KeyEventKind::Press), t0);
        tracker.handle_event(event(KeyCode::Char('s'), KeyEventKind::Release), t0);
        let frame = tracker.frame(t0);
        // A tap within one frame still registers as an event.
        assert_eq!(frame.events.as_slice(), &[Key::Char('s')]);
        assert!(frame.held.is_empty());
    }

    #[test]
    fn test_repeat_kind_without_press_is_ignored() {
        let t0 = Instant::now();
        let mut tracker = KeyTracker::new();
        tracker.handle_event(event(KeyCode::Left, KeyEventKind::Repeat), t0);
        assert_eq!(tracker.frame(t0), InputFrame::default());
    }

    #[test]
    fn test_repeat_kind_keeps_held_key_alive() {
        let t0 = Instant::now();
        let mut tracker = KeyTracker::new();
        tracker.handle_event(event(KeyCode::Char('a'), KeyEventKind::Press), t0);
        tracker.frame(t0);

        tracker.handle_event(event(KeyCode::Char('a'), KeyEventKind::Repeat), t0 + ms(120));
        let frame = tracker.frame(t0 + ms(200));
        assert!(frame.events.is_empty());
        assert!(frame.held.contains(Key::Char('a')));

        // Without another repeat the refreshed hold still expires.
        assert!(tracker.frame(t0 + ms(271)).held.is_empty());
    }

    #[test]
    fn test_custom_timeout() {
        let t0 = Instant::now();
        let mut tracker = KeyTracker::new().with_release_timeout(ms(500));
        tracker.press(Key::Left, t0);
        assert!(tracker.frame(t0 + ms(400)).held.contains(Key::Left));
        tracker.clear();
        assert!(tracker.frame(t0 + ms(400)).held.is_empty());
    }
}
