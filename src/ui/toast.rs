//! Toast overlay: stacked boxes in the bottom-right of an area.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::app::toast::ToastQueue;

use super::theme::Theme;

/// Toast box height: border + one line + border.
const TOAST_HEIGHT: u16 = 3;

pub struct ToastStack<'a> {
    pub toasts: &'a ToastQueue,
}

impl<'a> Widget for ToastStack<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Newest at the bottom, older ones stacked above it.
        let mut bottom = area.y + area.height;
        for toast in self.toasts.iter().rev() {
            if bottom < area.y + TOAST_HEIGHT {
                break;
            }
            let width = (toast.message.chars().count() as u16 + 4).min(area.width);
            let rect = anchored_bottom_right(width, TOAST_HEIGHT, area, bottom);
            Clear.render(rect, buf);

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Theme::toast_border_style());
            let inner = block.inner(rect);
            block.render(rect, buf);
            Paragraph::new(format!(" {}", toast.message))
                .style(Theme::toast_style())
                .render(inner, buf);

            bottom -= TOAST_HEIGHT;
        }
    }
}

/// A `width`×`height` rectangle flush with the right edge of `area`,
/// ending just above row `bottom`.
fn anchored_bottom_right(width: u16, height: u16, area: Rect, bottom: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(bottom.saturating_sub(area.y));
    let x = area.x + area.width.saturating_sub(w);
    Rect::new(x, bottom - h, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn test_anchor_sits_in_corner() {
        let area = Rect::new(0, 3, 40, 10);
        assert_eq!(anchored_bottom_right(20, 3, area, 13), Rect::new(20, 10, 20, 3));
    }

    #[test]
    fn test_stack_draws_newest_lowest() {
        let now = Instant::now();
        let mut q = ToastQueue::new();
        q.push_at("older", Duration::from_secs(1), now);
        q.push_at("newer", Duration::from_secs(1), now);

        let area = Rect::new(0, 0, 30, 8);
        let mut buf = Buffer::empty(area);
        ToastStack { toasts: &q }.render(area, &mut buf);

        let row = |y: u16| (0..30).map(|x| buf[(x, y)].symbol().to_string()).collect::<String>();
        assert!(row(6).contains("newer"));
        assert!(row(3).contains("older"));
    }
}
