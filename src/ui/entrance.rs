//! Entrance animation for the main region: fade in while sliding up.
//!
//! Terminals have no opacity, so the "fade" is the DIM modifier for the
//! first half of the animation.  The slide starts `rise_rows` below the
//! resting position and eases out to zero.

use std::time::{Duration, Instant};

/// Default animation length.
pub const ENTRANCE_DURATION: Duration = Duration::from_millis(400);

/// Cubic ease-out: f(t) = 1 - (1-t)³
#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

#[derive(Debug, Clone)]
pub struct Entrance {
    start: Instant,
    duration: Duration,
    rise_rows: f64,
}

impl Entrance {
    pub fn new(start: Instant, duration: Duration, rise_rows: u16) -> Self {
        Self {
            start,
            duration,
            rise_rows: rise_rows as f64,
        }
    }

    /// Eased progress in `[0, 1]` at `now`.
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        cubic_ease_out(elapsed.as_secs_f64() / self.duration.as_secs_f64())
    }

    /// Rows the content still sits below its resting position.
    pub fn row_offset(&self, now: Instant) -> u16 {
        ((1.0 - self.progress(now)) * self.rise_rows).round() as u16
    }

    /// Still in the "faded" first half.
    pub fn dimmed(&self, now: Instant) -> bool {
        self.progress(now) < 0.5
    }

    pub fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slides_up_and_settles() {
        let t0 = Instant::now();
        let e = Entrance::new(t0, ENTRANCE_DURATION, 2);
        assert_eq!(e.row_offset(t0), 2);
        assert!(e.dimmed(t0));
        assert!(!e.is_done(t0));

        let end = t0 + ENTRANCE_DURATION;
        assert_eq!(e.row_offset(end), 0);
        assert!(!e.dimmed(end));
        assert!(e.is_done(end));
    }

    #[test]
    fn test_progress_is_monotonic() {
        let t0 = Instant::now();
        let e = Entrance::new(t0, ENTRANCE_DURATION, 2);
        let mut prev = 0.0;
        for ms in (0..=400).step_by(20) {
            let p = e.progress(t0 + Duration::from_millis(ms));
            assert!(p >= prev);
            prev = p;
        }
    }

    #[test]
    fn test_zero_duration_is_instant() {
        let t0 = Instant::now();
        let e = Entrance::new(t0, Duration::ZERO, 2);
        assert_eq!(e.row_offset(t0), 0);
    }
}
