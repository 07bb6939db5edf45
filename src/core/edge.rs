//! Edge-of-page detection.

use super::viewport::ScrollMetrics;

/// Which end of the page a scroll movement ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeEvent {
    TopReached,
    BottomReached,
}

impl EdgeEvent {
    /// The visual state shown on the page while the cycle runs.
    pub fn visual_state(self) -> VisualState {
        match self {
            EdgeEvent::TopReached => VisualState::BounceTop,
            EdgeEvent::BottomReached => VisualState::BounceBottom,
        }
    }

    /// Toast text announcing the edge.
    pub fn message(self) -> &'static str {
        match self {
            EdgeEvent::TopReached => "You've reached the top of the page",
            EdgeEvent::BottomReached => "You've reached the bottom of the page",
        }
    }
}

/// Named visual states the notifier toggles on the page root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualState {
    BounceTop,
    BounceBottom,
}

impl VisualState {
    pub fn class_name(self) -> &'static str {
        match self {
            VisualState::BounceTop => "scroll-bounce-top",
            VisualState::BounceBottom => "scroll-bounce-bottom",
        }
    }
}

/// Classify a scroll sample against the previous offset.
///
/// Bottom is checked first.  With unsigned offsets the two conditions are
/// mutually exclusive: downward motion implies `offset > 0`.
pub fn detect_edge(metrics: ScrollMetrics, last_offset: u32, bottom_tolerance: u32) -> Option<EdgeEvent> {
    let ScrollMetrics {
        offset,
        viewport_height,
        total_height,
    } = metrics;

    let at_bottom =
        offset as u64 + viewport_height as u64 >= total_height.saturating_sub(bottom_tolerance) as u64;
    if at_bottom && offset > last_offset {
        return Some(EdgeEvent::BottomReached);
    }

    if offset == 0 && offset < last_offset {
        return Some(EdgeEvent::TopReached);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bottom_requires_downward_motion() {
        let m = ScrollMetrics::new(400, 100, 505);
        assert_eq!(detect_edge(m, 100, 5), Some(EdgeEvent::BottomReached));
        assert_eq!(detect_edge(m, 400, 5), None);
        assert_eq!(detect_edge(m, 450, 5), None);
    }

    #[test]
    fn test_tolerance_absorbs_last_rows() {
        let m = ScrollMetrics::new(396, 100, 505);
        assert_eq!(detect_edge(m, 300, 5), None);
        let m = ScrollMetrics::new(400, 100, 505);
        assert_eq!(detect_edge(m, 300, 0), None);
    }

    #[test]
    fn test_top_requires_upward_motion() {
        let m = ScrollMetrics::new(0, 100, 1000);
        assert_eq!(detect_edge(m, 300, 5), Some(EdgeEvent::TopReached));
        assert_eq!(detect_edge(m, 0, 5), None);
    }

    #[test]
    fn test_short_page_edges() {
        // Whole page fits: "at bottom" holds, but offset 0 only moves up.
        let m = ScrollMetrics::new(0, 100, 50);
        assert_eq!(detect_edge(m, 3, 5), Some(EdgeEvent::TopReached));
        let m = ScrollMetrics::new(2, 10, 12);
        assert_eq!(detect_edge(m, 1, 5), Some(EdgeEvent::BottomReached));
    }

    #[test]
    fn test_visual_state_names() {
        assert_eq!(EdgeEvent::TopReached.visual_state().class_name(), "scroll-bounce-top");
        assert_eq!(
            EdgeEvent::BottomReached.visual_state().class_name(),
            "scroll-bounce-bottom"
        );
    }
}
