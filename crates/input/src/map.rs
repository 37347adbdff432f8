//! Key mapping from terminal events to driver events.

use crate::types::DriverEvent;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to a driver event.
///
/// `q` quits and `p` toggles the spin. Raw mode swallows SIGINT, so Ctrl-C
/// arrives here as a key and also quits. Everything else is ignored.
pub fn handle_key_event(key: KeyEvent) -> Option<DriverEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(DriverEvent::Quit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Char('q') => Some(DriverEvent::Quit),
        KeyCode::Char('p') => Some(DriverEvent::TogglePause),
        _ => None,
    }
}

/// Map any terminal event to a driver event.
pub fn handle_event(event: &Event) -> Option<DriverEvent> {
    match event {
        Event::Key(key) => handle_key_event(*key),
        Event::Resize(width, height) => Some(DriverEvent::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('q'))),
            Some(DriverEvent::Quit)
        );
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(DriverEvent::Quit)
        );
    }

    #[test]
    fn test_pause_key() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('p'))),
            Some(DriverEvent::TogglePause)
        );
    }

    #[test]
    fn test_other_keys_are_ignored() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('c'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('Q'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Esc)), None);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_release_events_are_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(handle_key_event(release), None);
    }

    #[test]
    fn test_resize_event() {
        assert_eq!(
            handle_event(&Event::Resize(120, 40)),
            Some(DriverEvent::Resize {
                width: 120,
                height: 40
            })
        );
        assert_eq!(handle_event(&Event::FocusGained), None);
    }
}
