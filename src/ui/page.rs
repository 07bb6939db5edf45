//! The page: header, animated main content, and footer.

use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::app::state::AppState;

use super::layout::PageLayout;
use super::theme::Theme;
use super::toast::ToastStack;

/// Renders the whole screen for one frame.
pub struct PageView<'a> {
    pub state: &'a AppState,
    pub now: Instant,
    /// Year shown in the footer.
    pub year: i32,
}

impl<'a> Widget for PageView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = PageLayout::from_area(area);

        self.render_header(layout.header_area, buf);
        self.render_content(layout.content_area, buf);
        self.render_footer(layout.footer_area, buf);

        ToastStack {
            toasts: &self.state.chrome.toasts,
        }
        .render(layout.main_area, buf);
    }
}

impl<'a> PageView<'a> {
    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Theme::border_style());
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(Span::styled(format!(" {}", self.state.config.title), Theme::title_style())),
            Line::from(Span::styled(
                format!(" {}", self.state.config.hint(self.state.notifier_mounted())),
                Theme::hint_style(),
            )),
        ];
        Paragraph::new(lines).render(inner, buf);

        let viewport = &self.state.viewport;
        let first = (viewport.total() > 0) as u32 + viewport.offset();
        let last = (viewport.offset() + viewport.height()).min(viewport.total());
        let position = format!("{first}-{last}/{} ", viewport.total());
        // Sized to its own text so the title's style on the same row survives.
        let width = (position.chars().count() as u16).min(inner.width);
        let row = Rect::new(inner.right() - width, inner.y, width, inner.height.min(1));
        Paragraph::new(Line::from(Span::styled(position, Theme::hint_style()))).render(row, buf);
    }

    fn render_content(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let state = self.state;
        let entrance = &state.entrance;

        let mut style = Theme::content_style();
        if entrance.dimmed(self.now) {
            style = style.add_modifier(Modifier::DIM);
        }

        let shift = entrance.row_offset(self.now) as i32 + state.chrome.bounce_shift() as i32;
        let first = state.viewport.offset() as usize;
        let rows = area.height as usize;

        for (i, line) in state.lines.iter().skip(first).take(rows).enumerate() {
            let y = i as i32 + shift;
            if y < 0 || y >= rows as i32 {
                continue;
            }
            buf.set_stringn(area.x, area.y + y as u16, line, area.width as usize, style);
        }

        // Rule on the side the content bounced away from.
        let rule = "─".repeat(area.width as usize);
        match state.chrome.bounce_shift() {
            s if s < 0 => {
                buf.set_string(area.x, area.y + area.height - 1, &rule, Theme::bounce_style());
            }
            s if s > 0 => {
                buf.set_string(area.x, area.y, &rule, Theme::bounce_style());
            }
            _ => {}
        }
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        // Copyright sits on the last footer row; the rows above are padding.
        let row = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
        Paragraph::new(format!("© {} {}", self.year, self.state.config.title))
            .style(Theme::footer_style())
            .alignment(Alignment::Center)
            .render(row, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::viewport::Viewport;
    use ratatui::style::Color;
    use crate::ui::entrance::ENTRANCE_DURATION;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect::<String>()
    }

    fn render(state: &AppState, now: Instant) -> Buffer {
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        PageView {
            state,
            now,
            year: 2026,
        }
        .render(area, &mut buf);
        buf
    }

    #[test]
    fn test_header_content_and_footer() {
        let t0 = Instant::now();
        let lines = (0..20).map(|i| format!("line {i}")).collect();
        let mut state = AppState::new(lines, AppConfig::default(), true, t0);
        state.resize_viewport(5, t0);
        let settled = t0 + ENTRANCE_DURATION;

        let buf = render(&state, settled);
        assert!(row_text(&buf, 0).contains("Where Did My Money Go?"));
        assert!(row_text(&buf, 0).contains("1-5/20"));
        assert!(row_text(&buf, 4).contains("line 0"));
        assert!(row_text(&buf, 11).contains("© 2026"));
    }

    #[test]
    fn test_title_keeps_its_colour_beside_position() {
        let t0 = Instant::now();
        let lines = (0..20).map(|i| format!("line {i}")).collect();
        let mut state = AppState::new(lines, AppConfig::default(), true, t0);
        state.resize_viewport(5, t0);

        let buf = render(&state, t0 + ENTRANCE_DURATION);
        // Row 0 is ` "Where Did...`; column 2 is the `W`.
        assert_eq!(buf[(2, 0)].symbol(), "W");
        assert_eq!(buf[(2, 0)].fg, Color::Green);
        let pos_x = row_text(&buf, 0).find("1-5/20").unwrap() as u16;
        assert_eq!(buf[(pos_x, 0)].fg, Color::DarkGray);
    }

    #[test]
    fn test_bottom_bounce_lifts_content() {
        let t0 = Instant::now();
        let lines = (0..20).map(|i| format!("line {i}")).collect();
        let mut state = AppState::new(lines, AppConfig::default(), true, t0);
        state.resize_viewport(5, t0);
        let settled = t0 + ENTRANCE_DURATION;
        state.scroll_with(settled, Viewport::scroll_to_bottom);

        let buf = render(&state, settled);
        // Offset 15: "line 15" is lifted out of view, "line 16" takes row 4.
        assert!(row_text(&buf, 4).contains("line 16"));
        assert!(row_text(&buf, 8).contains("─"));
        assert!(buf_contains(&buf, "reached the bottom"));
    }

    fn buf_contains(buf: &Buffer, needle: &str) -> bool {
        (0..buf.area.height).any(|y| row_text(buf, y).contains(needle))
    }
}
