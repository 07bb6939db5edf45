//! Core logic: viewport math, edge detection, deferred tasks, and the
//! scroll-edge notifier.
//!
//! Nothing in this module depends on any TUI or rendering crate.

pub mod edge;
pub mod notifier;
pub mod timer;
pub mod viewport;
