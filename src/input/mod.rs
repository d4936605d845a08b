//! Progress sources: turn raw scroll input into the per-frame offset the
//! flight reads.

/// Damped scroll container.
pub mod scroll;

pub use scroll::ScrollDriver;
