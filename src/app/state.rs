//! Central application state.
//!
//! All mutable state lives here so rendering can be a pure function over
//! `&AppState` and input handling a function over `&mut AppState`.

use std::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::core::notifier::ScrollEdgeNotifier;
use crate::core::viewport::Viewport;
use crate::ui::entrance::{Entrance, ENTRANCE_DURATION};

use super::chrome::PageChrome;

/// Rows the main region rises through on entrance.
const ENTRANCE_RISE_ROWS: u16 = 2;
/// Redraw interval while the entrance animation runs.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub struct AppState {
    /// Page content, one entry per row.
    pub lines: Vec<String>,
    pub viewport: Viewport,
    /// Visual states, scroll lock, and toasts.
    pub chrome: PageChrome,
    /// The scroll-edge notifier while mounted.
    pub notifier: Option<ScrollEdgeNotifier>,
    pub entrance: Entrance,
    pub config: AppConfig,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(lines: Vec<String>, config: AppConfig, edge_notify: bool, now: Instant) -> Self {
        let viewport = Viewport::new(lines.len() as u32);
        let notifier = edge_notify.then(|| ScrollEdgeNotifier::mount(config.notifier_config()));
        Self {
            lines,
            viewport,
            chrome: PageChrome::new(),
            notifier,
            entrance: Entrance::new(now, ENTRANCE_DURATION, ENTRANCE_RISE_ROWS),
            config,
            should_quit: false,
        }
    }

    /// Apply a viewport movement unless scrolling is locked.  A scroll event
    /// reaches the notifier only when the offset actually moved.
    pub fn scroll_with(&mut self, now: Instant, movement: impl FnOnce(&mut Viewport) -> bool) -> bool {
        if self.chrome.scroll_locked() {
            return false;
        }
        let moved = movement(&mut self.viewport);
        if moved {
            self.emit_scroll(now);
        }
        moved
    }

    /// Match the viewport to the main region's height.  A resize that
    /// clamps the offset counts as a scroll.
    pub fn resize_viewport(&mut self, rows: u16, now: Instant) {
        if self.viewport.height() == rows as u32 {
            return;
        }
        if self.viewport.set_height(rows as u32) {
            self.emit_scroll(now);
        }
    }

    fn emit_scroll(&mut self, now: Instant) {
        if let Some(notifier) = self.notifier.as_mut() {
            notifier.on_scroll(&self.viewport, now, &mut self.chrome);
        }
    }

    /// Run due deferred work: cycle ends and toast expiry.
    pub fn tick(&mut self, now: Instant) {
        if let Some(notifier) = self.notifier.as_mut() {
            notifier.poll(now, &mut self.chrome);
        }
        self.chrome.toasts.prune(now);
    }

    /// Next instant something on screen changes without input.
    pub fn next_deadline(&self, now: Instant) -> Option<Instant> {
        let entrance = (!self.entrance.is_done(now)).then_some(now + FRAME_INTERVAL);
        [
            self.notifier.as_ref().and_then(|n| n.next_deadline()),
            self.chrome.toasts.next_expiry(),
            entrance,
        ]
        .into_iter()
        .flatten()
        .min()
    }

    pub fn notifier_mounted(&self) -> bool {
        self.notifier.is_some()
    }

    /// Mount the notifier if it is off, unmount it if it is on.
    pub fn toggle_notifier(&mut self) {
        match self.notifier.take() {
            Some(notifier) => notifier.unmount(&mut self.chrome),
            None => self.notifier = Some(ScrollEdgeNotifier::mount(self.config.notifier_config())),
        }
    }

    /// Release the notifier before exit.
    pub fn shutdown(&mut self) {
        if let Some(notifier) = self.notifier.take() {
            notifier.unmount(&mut self.chrome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::edge::VisualState;

    fn state(rows: usize, height: u16, now: Instant) -> AppState {
        let lines = (0..rows).map(|i| format!("row {i}")).collect();
        let mut s = AppState::new(lines, AppConfig::default(), true, now);
        s.resize_viewport(height, now);
        s
    }

    #[test]
    fn test_reaching_bottom_starts_cycle() {
        let t0 = Instant::now();
        let mut s = state(50, 10, t0);

        assert!(s.scroll_with(t0, |v| v.scroll_by(20)));
        assert!(!s.chrome.scroll_locked());
        assert!(s.scroll_with(t0, Viewport::scroll_to_bottom));

        assert!(s.chrome.scroll_locked());
        assert!(s.chrome.has_state(VisualState::BounceBottom));
        assert_eq!(s.chrome.toasts.len(), 1);
    }

    #[test]
    fn test_locked_scroll_is_ignored_until_cycle_ends() {
        let t0 = Instant::now();
        let mut s = state(50, 10, t0);
        s.scroll_with(t0, Viewport::scroll_to_bottom);

        assert!(!s.scroll_with(t0, |v| v.scroll_by(-5)));
        assert_eq!(s.viewport.offset(), 40);

        s.tick(t0 + Duration::from_millis(800));
        assert!(!s.chrome.scroll_locked());
        assert!(!s.chrome.has_state(VisualState::BounceBottom));
        assert!(s.scroll_with(t0, |v| v.scroll_by(-5)));
    }

    #[test]
    fn test_toggle_mid_cycle_releases_lock() {
        let t0 = Instant::now();
        let mut s = state(50, 10, t0);
        s.scroll_with(t0, Viewport::scroll_to_bottom);
        assert!(s.chrome.scroll_locked());

        s.toggle_notifier();
        assert!(!s.notifier_mounted());
        assert!(!s.chrome.scroll_locked());
        assert!(!s.chrome.has_state(VisualState::BounceBottom));

        // With the notifier off, edges are silent.
        s.scroll_with(t0, Viewport::scroll_to_top);
        assert!(!s.chrome.has_state(VisualState::BounceTop));

        s.toggle_notifier();
        assert!(s.notifier_mounted());
    }

    #[test]
    fn test_next_deadline_covers_cycle_and_toast() {
        let t0 = Instant::now();
        let mut s = state(50, 10, t0);
        let later = t0 + Duration::from_secs(1);
        assert_eq!(s.next_deadline(later), None);

        s.scroll_with(later, Viewport::scroll_to_bottom);
        // Cycle end (800 ms) comes before toast expiry (1500 ms).
        assert_eq!(s.next_deadline(later), Some(later + Duration::from_millis(800)));
    }

    #[test]
    fn test_toast_outlives_cycle_on_event_clock() {
        let t0 = Instant::now();
        let mut s = state(50, 10, t0);
        let later = t0 + Duration::from_secs(10);

        s.scroll_with(later, Viewport::scroll_to_bottom);
        s.tick(later + Duration::from_millis(1000));
        assert!(!s.chrome.scroll_locked());
        assert_eq!(s.chrome.toasts.len(), 1);

        s.tick(later + Duration::from_millis(1500));
        assert!(s.chrome.toasts.is_empty());
    }

    #[test]
    fn test_resize_clamping_to_top_counts_as_scroll() {
        let t0 = Instant::now();
        let mut s = state(50, 10, t0);
        s.scroll_with(t0, Viewport::scroll_to_bottom);
        assert!(s.chrome.has_state(VisualState::BounceBottom));
        let t1 = t0 + Duration::from_millis(800);
        s.tick(t1);
        assert!(!s.chrome.has_state(VisualState::BounceBottom));

        // Tall enough to show every row: offset clamps from 40 to 0.
        s.resize_viewport(50, t1);
        assert_eq!(s.viewport.offset(), 0);
        assert!(s.chrome.has_state(VisualState::BounceTop));
        assert!(s.chrome.scroll_locked());
    }

    #[test]
    fn test_disabled_notifier_never_mounts() {
        let t0 = Instant::now();
        let mut s = AppState::new(vec!["x".into(); 30], AppConfig::default(), false, t0);
        s.resize_viewport(5, t0);
        s.scroll_with(t0, Viewport::scroll_to_bottom);
        assert!(!s.chrome.scroll_locked());
        assert!(s.chrome.toasts.is_empty());
    }
}
