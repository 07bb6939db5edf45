//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme: change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── header ─────────────────────────────────────────────────
    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    // ── main ───────────────────────────────────────────────────
    pub fn content_style() -> Style {
        Style::default().fg(Color::White)
    }

    /// Edge rule drawn while a bounce state is active.
    pub fn bounce_style() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    // ── footer / overlays ──────────────────────────────────────
    pub fn footer_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn toast_style() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn toast_border_style() -> Style {
        Style::default().fg(Color::Yellow)
    }
}
