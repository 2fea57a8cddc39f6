//! Key mapping from terminal events to console keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::Key;

/// Map a terminal key to a console key. Chords with CONTROL or ALT are not
/// console keys.
pub fn map_key(key: KeyEvent) -> Option<Key> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Char(c) => Key::from_char(c),
        _ => None,
    }
}

/// Ctrl-C always leaves, whatever screen is up.
pub fn is_interrupt(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Left)), Some(Key::Left));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Up)), Some(Key::Up));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter)), Some(Key::Enter));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Esc)), Some(Key::Escape));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char(' '))), Some(Key::Space));
    }

    #[test]
    fn test_letters_fold_to_lowercase() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('W'))), Some(Key::Char('w')));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('T'), KeyModifiers::SHIFT)),
            Some(Key::Char('t'))
        );
    }

    #[test]
    fn test_style_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('='))), Some(Key::Plus));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('+'))), Some(Key::Plus));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('-'))), Some(Key::Minus));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char(']'))), Some(Key::RightBracket));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char(','))), Some(Key::Comma));
    }

    #[test]
    fn test_control_chords_are_not_keys() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c), None);
        assert!(is_interrupt(ctrl_c));
        assert!(!is_interrupt(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(map_key(KeyEvent::from(KeyCode::F(1))), None);
    }
}
