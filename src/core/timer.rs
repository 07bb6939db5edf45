//! Cancellable deferred tasks.
//!
//! The event loop is single-threaded: nothing runs "later" on its own.
//! Instead the owner keeps a `Timers` queue, sleeps until `next_deadline()`,
//! and drains due tasks with `pop_due()`.  Cancelling a task (or dropping
//! the queue) guarantees it never runs.

use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

/// Handle to a scheduled task, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// Deadline-ordered queue of pending tasks.
#[derive(Debug)]
pub struct Timers<T> {
    next_id: u64,
    /// (deadline, id) → task.  The id breaks ties in scheduling order.
    queue: BTreeMap<(Instant, u64), T>,
    /// id → deadline, for O(log n) cancel.
    deadlines: HashMap<u64, Instant>,
}

impl<T> Default for Timers<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            queue: BTreeMap::new(),
            deadlines: HashMap::new(),
        }
    }
}

impl<T> Timers<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task` to become due at `at`.
    pub fn schedule(&mut self, at: Instant, task: T) -> TimerId {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.queue.insert((at, id), task);
        self.deadlines.insert(id, at);
        TimerId(id)
    }

    /// Remove a pending task.  Returns it if it had not fired yet.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let at = self.deadlines.remove(&id.0)?;
        self.queue.remove(&(at, id.0))
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.keys().next().map(|&(at, _)| at)
    }

    /// Take the earliest task whose deadline is `<= now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<(TimerId, T)> {
        let &(at, id) = self.queue.keys().next()?;
        if at > now {
            return None;
        }
        let task = self.queue.remove(&(at, id))?;
        self.deadlines.remove(&id);
        Some((TimerId(id), task))
    }

    /// Drop every pending task.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.deadlines.clear();
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
