//! Per-frame input published by the progress source.

/// What the core reads once per rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Scroll progress, nominally in [0, 1]. Negative values (an
    /// overscrolled container) are treated as 0.
    pub scroll_offset: f32,
    /// Seconds since the previous frame. Zero, negative or NaN steps leave
    /// all smoothed state untouched.
    pub delta: f32,
}

impl FrameInput {
    /// Input for one frame.
    #[must_use]
    pub fn new(scroll_offset: f32, delta: f32) -> Self {
        Self {
            scroll_offset,
            delta,
        }
    }

    /// Scroll progress clamped into the curve's parameter range.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.scroll_offset.is_nan() {
            return 0.0;
        }
        self.scroll_offset.clamp(0.0, 1.0)
    }
}
