//! Page chrome: the visual states, scroll lock, and toasts the notifier
//! drives.  The renderer reads it; nothing else writes it.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::core::edge::VisualState;
use crate::core::notifier::{Notify, PageStyle};

use super::toast::ToastQueue;

#[derive(Debug, Default)]
pub struct PageChrome {
    states: HashSet<VisualState>,
    scroll_locked: bool,
    pub toasts: ToastQueue,
}

impl PageChrome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_state(&self, state: VisualState) -> bool {
        self.states.contains(&state)
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Row shift toward the reached edge while a bounce is showing:
    /// content lifts at the bottom and drops at the top.
    pub fn bounce_shift(&self) -> i16 {
        if self.has_state(VisualState::BounceBottom) {
            -1
        } else if self.has_state(VisualState::BounceTop) {
            1
        } else {
            0
        }
    }
}

impl PageStyle for PageChrome {
    fn apply_state(&mut self, state: VisualState) {
        tracing::trace!(class = state.class_name(), "apply visual state");
        self.states.insert(state);
    }

    fn clear_state(&mut self, state: VisualState) {
        tracing::trace!(class = state.class_name(), "clear visual state");
        self.states.remove(&state);
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }
}

impl Notify for PageChrome {
    fn notify(&mut self, message: &str, duration: Duration, now: Instant) {
        self.toasts.notify(message, duration, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounce_shift_follows_state() {
        let mut chrome = PageChrome::new();
        assert_eq!(chrome.bounce_shift(), 0);
        chrome.apply_state(VisualState::BounceBottom);
        assert_eq!(chrome.bounce_shift(), -1);
        chrome.clear_state(VisualState::BounceBottom);
        chrome.apply_state(VisualState::BounceTop);
        assert_eq!(chrome.bounce_shift(), 1);
    }

    #[test]
    fn test_notify_queues_toast() {
        let mut chrome = PageChrome::new();
        chrome.notify("hello", Duration::from_secs(1), Instant::now());
        assert_eq!(chrome.toasts.len(), 1);
    }
}
