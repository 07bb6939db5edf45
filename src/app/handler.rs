//! Input handling: maps key/mouse events to state mutations.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::config::Action;
use crate::core::viewport::Viewport;

use super::state::AppState;

/// Rows moved per mouse-wheel notch.
const WHEEL_ROWS: i64 = 3;

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent, now: Instant) {
    // Ctrl+c always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };

    match action {
        Action::Quit => state.should_quit = true,
        Action::ToggleNotifier => state.toggle_notifier(),
        Action::ScrollUp => {
            state.scroll_with(now, |v| v.scroll_by(-1));
        }
        Action::ScrollDown => {
            state.scroll_with(now, |v| v.scroll_by(1));
        }
        Action::PageUp => {
            state.scroll_with(now, Viewport::page_up);
        }
        Action::PageDown => {
            state.scroll_with(now, Viewport::page_down);
        }
        Action::Top => {
            state.scroll_with(now, Viewport::scroll_to_top);
        }
        Action::Bottom => {
            state.scroll_with(now, Viewport::scroll_to_bottom);
        }
    }
}

/// Mouse wheel scrolls; everything else is ignored.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent, now: Instant) {
    let delta = match mouse.kind {
        MouseEventKind::ScrollUp => -WHEEL_ROWS,
        MouseEventKind::ScrollDown => WHEEL_ROWS,
        _ => return,
    };
    state.scroll_with(now, |v| v.scroll_by(delta));
}
