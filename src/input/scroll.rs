//! Damped scroll progress source.
//!
//! The flight core only reads a scroll offset each frame. This is the
//! reference source that produces one: raw wheel/page input moves a target
//! offset immediately, and the published offset chases it with exponential
//! damping so the flight never jumps.

use crate::options::ScrollOptions;
use crate::util::smoothing::damp_factor;

/// Damping rate (per second) at `damping = 1`.
const DAMP_LAMBDA: f32 = 4.0;

/// Scroll container state: raw target plus the damped published offset.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollDriver {
    target: f32,
    offset: f32,
    pages: f32,
    damping: f32,
}

impl ScrollDriver {
    /// Driver at the top of the page.
    #[must_use]
    pub fn new(options: &ScrollOptions) -> Self {
        Self {
            target: 0.0,
            offset: 0.0,
            pages: options.pages.max(1.0),
            damping: options.damping.max(0.0),
        }
    }

    /// Scroll by a number of viewport pages (negative scrolls back).
    pub fn scroll_by(&mut self, pages: f32) {
        self.set_target(self.target + pages / self.pages);
    }

    /// Jump the raw target to `offset` (clamped to [0, 1]).
    pub fn set_target(&mut self, offset: f32) {
        if offset.is_nan() {
            return;
        }
        self.target = offset.clamp(0.0, 1.0);
    }

    /// Advance the damped offset by `delta` seconds.
    ///
    /// Exponential decay at rate `4 / damping`. `damping = 0` disables
    /// damping and publishes the target directly.
    pub fn tick(&mut self, delta: f32) {
        if self.damping == 0.0 {
            if delta > 0.0 {
                self.offset = self.target;
            }
            return;
        }
        if let Some(f) = damp_factor(delta, DAMP_LAMBDA / self.damping) {
            self.offset += (self.target - self.offset) * f;
        }
    }

    /// Published scroll offset, the value the flight reads each frame.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Raw (undamped) scroll target.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Whether the published offset is within `epsilon` of the target.
    #[must_use]
    pub fn is_settled(&self, epsilon: f32) -> bool {
        (self.target - self.offset).abs() <= epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_scrolls_move_the_target_by_page_fractions() {
        let mut driver = ScrollDriver::new(&ScrollOptions::default());
        driver.scroll_by(10.0);
        assert!((driver.target() - 0.1).abs() < 1e-6);
        assert_eq!(driver.offset(), 0.0);

        driver.scroll_by(-50.0);
        assert_eq!(driver.target(), 0.0);
        driver.scroll_by(500.0);
        assert_eq!(driver.target(), 1.0);
    }

    #[test]
    fn offset_chases_target_monotonically() {
        let mut driver = ScrollDriver::new(&ScrollOptions::default());
        driver.set_target(0.5);
        let mut prev = driver.offset();
        for _ in 0..600 {
            driver.tick(1.0 / 60.0);
            assert!(driver.offset() >= prev);
            assert!(driver.offset() <= 0.5);
            prev = driver.offset();
        }
        assert!(driver.is_settled(1e-4));
    }

    #[test]
    fn degenerate_ticks_do_nothing() {
        let mut driver = ScrollDriver::new(&ScrollOptions::default());
        driver.set_target(0.3);
        driver.tick(0.0);
        driver.tick(-1.0);
        driver.tick(f32::NAN);
        assert_eq!(driver.offset(), 0.0);
    }

    #[test]
    fn zero_damping_publishes_immediately() {
        let mut driver = ScrollDriver::new(&ScrollOptions {
            pages: 4.0,
            damping: 0.0,
        });
        driver.scroll_by(1.0);
        driver.tick(1.0 / 60.0);
        assert_eq!(driver.offset(), 0.25);
    }
}
