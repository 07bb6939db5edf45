//! Scrollable viewport over a block of content rows.
//!
//! All offsets are in content rows.  The viewport is the terminal analogue
//! of a browser window: `offset` is how far the page has been scrolled,
//! `height` is how many rows fit on screen, `total` is the full page length.

/// A snapshot of the scroll position, read on every scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollMetrics {
    /// First visible row.
    pub offset: u32,
    /// Visible rows.
    pub viewport_height: u32,
    /// Total scrollable rows.
    pub total_height: u32,
}

impl ScrollMetrics {
    pub fn new(offset: u32, viewport_height: u32, total_height: u32) -> Self {
        Self {
            offset,
            viewport_height,
            total_height,
        }
    }
}

/// Anything that can report the current scroll position.
///
/// Returns `None` when there is no viewport to measure (e.g. the main region
/// has collapsed to zero rows), in which case edge effects are skipped.
pub trait ScrollSource {
    fn scroll_metrics(&self) -> Option<ScrollMetrics>;
}

/// Clamped scroll position over `total` rows shown `height` at a time.
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    offset: u32,
    height: u32,
    total: u32,
}

impl Viewport {
    pub fn new(total: u32) -> Self {
        Self {
            offset: 0,
            height: 0,
            total,
        }
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Largest offset that still fills the viewport.
    pub fn max_offset(&self) -> u32 {
        self.total.saturating_sub(self.height)
    }

    /// Resize the visible area.  Returns `true` if the offset had to move
    /// to stay in range.
    pub fn set_height(&mut self, height: u32) -> bool {
        self.height = height;
        self.clamp()
    }

    /// Replace the content length.  Returns `true` if the offset moved.
    pub fn set_total(&mut self, total: u32) -> bool {
        self.total = total;
        self.clamp()
    }

    /// Move by `delta` rows (negative = up).  Returns `true` if the offset
    /// changed.
    pub fn scroll_by(&mut self, delta: i64) -> bool {
        let target = (self.offset as i64 + delta).clamp(0, self.max_offset() as i64);
        self.set_offset(target as u32)
    }

    pub fn scroll_to_top(&mut self) -> bool {
        self.set_offset(0)
    }

    pub fn scroll_to_bottom(&mut self) -> bool {
        self.set_offset(self.max_offset())
    }

    /// Move up by one screen, keeping one row of overlap.
    pub fn page_up(&mut self) -> bool {
        self.scroll_by(-(self.page_step() as i64))
    }

    /// Move down by one screen, keeping one row of overlap.
    pub fn page_down(&mut self) -> bool {
        self.scroll_by(self.page_step() as i64)
    }

    fn page_step(&self) -> u32 {
        self.height.saturating_sub(1).max(1)
    }

    fn set_offset(&mut self, offset: u32) -> bool {
        let offset = offset.min(self.max_offset());
        if offset == self.offset {
            return false;
        }
        self.offset = offset;
        true
    }

    fn clamp(&mut self) -> bool {
        let max = self.max_offset();
        if self.offset > max {
            self.offset = max;
            true
        } else {
            false
        }
    }
}

impl ScrollSource for Viewport {
    fn scroll_metrics(&self) -> Option<ScrollMetrics> {
        if self.height == 0 {
            return None;
        }
        Some(ScrollMetrics::new(self.offset, self.height, self.total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(total: u32, height: u32) -> Viewport {
        let mut v = Viewport::new(total);
        v.set_height(height);
        v
    }

    #[test]
    fn test_scroll_clamps_to_range() {
        let mut v = viewport(50, 10);
        assert!(!v.scroll_by(-3));
        assert!(v.scroll_by(100));
        assert_eq!(v.offset(), 40);
        assert!(!v.scroll_by(1));
    }

    #[test]
    fn test_short_content_never_scrolls() {
        let mut v = viewport(4, 10);
        assert_eq!(v.max_offset(), 0);
        assert!(!v.page_down());
        assert!(!v.scroll_to_bottom());
    }

    #[test]
    fn test_page_step_keeps_one_row_overlap() {
        let mut v = viewport(100, 10);
        assert!(v.page_down());
        assert_eq!(v.offset(), 9);
        assert!(v.page_up());
        assert_eq!(v.offset(), 0);
    }

    #[test]
    fn test_growing_height_pulls_offset_back() {
        let mut v = viewport(30, 10);
        v.scroll_to_bottom();
        assert_eq!(v.offset(), 20);
        assert!(v.set_height(25));
        assert_eq!(v.offset(), 5);
    }

    #[test]
    fn test_shrinking_content_clamps_offset() {
        let mut v = viewport(30, 10);
        v.scroll_to_bottom();
        assert!(v.set_total(12));
        assert_eq!(v.offset(), 2);
        assert!(!v.set_total(40));
    }

    #[test]
    fn test_no_metrics_without_viewport() {
        let v = Viewport::new(30);
        assert_eq!(v.scroll_metrics(), None);
        let v = viewport(30, 5);
        assert_eq!(v.scroll_metrics(), Some(ScrollMetrics::new(0, 5, 30)));
    }
}
