//! Layout helpers: split the terminal into header, main, and footer.

use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

/// Header rows: title, key hints, bottom rule.
const HEADER_ROWS: u16 = 3;
/// Footer rows: top padding, copyright line.
const FOOTER_ROWS: u16 = 2;

/// Primary screen layout.
pub struct PageLayout {
    pub header_area: Rect,
    /// Whole main region (toasts anchor here).
    pub main_area: Rect,
    /// Main region minus padding; content rows are drawn here.
    pub content_area: Rect,
    pub footer_area: Rect,
}

impl PageLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_ROWS),
                Constraint::Min(1), // main takes all remaining space
                Constraint::Length(FOOTER_ROWS),
            ])
            .split(area);

        let main_area = chunks[1];
        Self {
            header_area: chunks[0],
            main_area,
            content_area: main_area.inner(Margin {
                horizontal: 2,
                vertical: 1,
            }),
            footer_area: chunks[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_stack_vertically() {
        let layout = PageLayout::from_area(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.footer_area.height, 2);
        assert_eq!(layout.main_area.height, 19);
        assert_eq!(layout.content_area, Rect::new(2, 4, 76, 17));
    }

    #[test]
    fn test_tiny_terminal_has_no_content_rows() {
        let layout = PageLayout::from_area(Rect::new(0, 0, 80, 6));
        assert_eq!(layout.content_area.height, 0);
    }
}
