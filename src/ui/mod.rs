//! UI / rendering layer: everything that touches Ratatui widgets.
//!
//! Takes the application state and turns it into cells on the terminal.

pub mod entrance;
pub mod layout;
pub mod page;
pub mod theme;
pub mod toast;
