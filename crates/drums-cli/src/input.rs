use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

/// Player action from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapAction {
    Hit,
    Quit,
}

/// Wait up to `timeout` for a key press and map it to an action.
///
/// Returns `Ok(None)` on timeout or for keys without an action.
pub fn poll_action(timeout: Duration) -> std::io::Result<Option<TapAction>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key_event) => {
            let action = classify_key(&key_event);
            if action.is_some() {
                debug!("Key {:?} -> {:?}", key_event.code, action);
            }
            Ok(action)
        }
        _ => Ok(None),
    }
}

/// Map a key event to an action.
///
/// - Space, F, J: hit
/// - Esc, q, Q, Ctrl+C: quit
fn classify_key(event: &KeyEvent) -> Option<TapAction> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(TapAction::Quit)
        }
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(TapAction::Quit),
        KeyCode::Char(' ') => Some(TapAction::Hit),
        KeyCode::Char(c) if matches!(c.to_ascii_lowercase(), 'f' | 'j') => Some(TapAction::Hit),
        _ => None,
    }
}
