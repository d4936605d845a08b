//! Shared utilities: frame timing and frame-rate independent smoothing.

pub mod frame_timing;
pub mod smoothing;
