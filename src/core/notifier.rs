//! Scroll-edge notifier: bounce + toast when the page hits an edge.
//!
//! On every scroll event the notifier compares the new offset with the
//! previous one.  Moving down onto the bottom edge (or up onto the top edge)
//! starts a *cycle*: scrolling is locked, a bounce state is applied to the
//! page, and a toast is shown.  After `cycle_duration` the lock and the
//! bounce state are released.  Only one cycle runs at a time.
//!
//! Side effects go through the [`PageStyle`] and [`Notify`] capabilities so
//! the notifier can run without a terminal.  The cycle-end step is a
//! cancellable task in a queue the notifier owns, so unmounting mid-cycle
//! can never leave a revert firing against a page that is gone.

use std::time::{Duration, Instant};

use super::edge::{detect_edge, EdgeEvent, VisualState};
use super::timer::{TimerId, Timers};
use super::viewport::ScrollSource;

/// Toggles named visual states and the scroll lock on the page root.
pub trait PageStyle {
    fn apply_state(&mut self, state: VisualState);
    fn clear_state(&mut self, state: VisualState);
    fn set_scroll_locked(&mut self, locked: bool);
}

/// Transient notification display.  `now` is the time of the scroll event
/// that raised the notice; display time counts from it.
pub trait Notify {
    fn notify(&mut self, message: &str, duration: Duration, now: Instant);
}

/// Tuning knobs for the notifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifierConfig {
    /// Rows short of the true bottom that still count as "at the bottom".
    pub bottom_tolerance: u32,
    /// How long the toast stays up.
    pub notice_duration: Duration,
    /// How long scrolling stays locked and the bounce state stays applied.
    pub cycle_duration: Duration,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            bottom_tolerance: 5,
            notice_duration: Duration::from_millis(1500),
            cycle_duration: Duration::from_millis(800),
        }
    }
}

/// Per-instance scroll bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub last_scroll_top: u32,
    pub is_animating: bool,
}

/// The mounted notifier.  Create with [`ScrollEdgeNotifier::mount`], tear
/// down with [`ScrollEdgeNotifier::unmount`].
#[derive(Debug)]
pub struct ScrollEdgeNotifier {
    config: NotifierConfig,
    state: ScrollState,
    /// Pending cycle-end tasks, carrying the edge whose state to clear.
    timers: Timers<EdgeEvent>,
    /// Handle of the running cycle's revert task.
    pending: Option<TimerId>,
    cycles_fired: u64,
}

impl ScrollEdgeNotifier {
    pub fn mount(config: NotifierConfig) -> Self {
        tracing::debug!(?config, "scroll-edge notifier mounted");
        Self {
            config,
            state: ScrollState::default(),
            timers: Timers::new(),
            pending: None,
            cycles_fired: 0,
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating
    }

    /// Number of cycles started since mount.
    pub fn cycles_fired(&self) -> u64 {
        self.cycles_fired
    }

    /// When the running cycle ends, if one is running.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Handle one scroll event.  Returns the edge if a cycle started.
    pub fn on_scroll<F>(&mut self, source: &impl ScrollSource, now: Instant, fx: &mut F) -> Option<EdgeEvent>
    where
        F: PageStyle + Notify,
    {
        if self.state.is_animating {
            return None;
        }
        let metrics = source.scroll_metrics()?;

        let edge = detect_edge(metrics, self.state.last_scroll_top, self.config.bottom_tolerance);
        if let Some(edge) = edge {
            self.start_cycle(edge, now, fx);
        }

        self.state.last_scroll_top = metrics.offset;
        edge
    }

    /// Run every cycle-end task due at `now`.  Returns the edge whose cycle
    /// completed, if any.
    pub fn poll<F: PageStyle>(&mut self, now: Instant, fx: &mut F) -> Option<EdgeEvent> {
        let mut finished = None;
        while let Some((id, edge)) = self.timers.pop_due(now) {
            if self.pending == Some(id) {
                self.pending = None;
            }
            Self::revert(edge, fx);
            self.state.is_animating = false;
            tracing::debug!(?edge, "edge cycle finished");
            finished = Some(edge);
        }
        finished
    }

    /// Tear down: cancel the pending revert and undo its effects now.
    pub fn unmount<F: PageStyle>(mut self, fx: &mut F) {
        if let Some(id) = self.pending.take() {
            if let Some(edge) = self.timers.cancel(id) {
                tracing::debug!(?edge, "unmounted mid-cycle; revert cancelled and applied");
                Self::revert(edge, fx);
            }
        }
        self.timers.clear();
        self.state = ScrollState::default();
        tracing::debug!(cycles = self.cycles_fired, "scroll-edge notifier unmounted");
    }

    fn start_cycle<F>(&mut self, edge: EdgeEvent, now: Instant, fx: &mut F)
    where
        F: PageStyle + Notify,
    {
        self.state.is_animating = true;
        self.cycles_fired += 1;

        fx.set_scroll_locked(true);
        fx.apply_state(edge.visual_state());
        fx.notify(edge.message(), self.config.notice_duration, now);

        self.pending = Some(self.timers.schedule(now + self.config.cycle_duration, edge));
        tracing::debug!(?edge, cycle = self.cycles_fired, "edge cycle started");
    }

    fn revert<F: PageStyle>(edge: EdgeEvent, fx: &mut F) {
        fx.set_scroll_locked(false);
        fx.clear_state(edge.visual_state());
    }
}

impl Drop for ScrollEdgeNotifier {
    fn drop(&mut self) {
        if self.pending.is_some() {
            tracing::warn!("scroll-edge notifier dropped mid-cycle without unmount");
        }
    }
}
