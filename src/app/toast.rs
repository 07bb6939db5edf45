//! Toast notifications with per-toast expiry.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::core::notifier::Notify;

/// At most this many toasts are kept; older ones are dropped first.
pub const MAX_TOASTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

/// Visible toasts, oldest first.
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_at(&mut self, message: &str, duration: Duration, now: Instant) {
        if self.toasts.len() == MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            message: message.to_string(),
            expires_at: now + duration,
        });
    }

    /// Drop expired toasts.  Returns `true` if any were removed.
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.expires_at > now);
        self.toasts.len() != before
    }

    /// Earliest expiry, so the event loop can wake to clear it.
    pub fn next_expiry(&self) -> Option<Instant> {
        self.toasts.iter().map(|t| t.expires_at).min()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Notify for ToastQueue {
    fn notify(&mut self, message: &str, duration: Duration, now: Instant) {
        tracing::debug!(message, ?duration, "toast");
        self.push_at(message, duration, now);
    }
}
