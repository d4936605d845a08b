//! Route geometry: the Catmull-Rom path curve and its arc-length table.
//!
//! The curve is built once from the configured control points and is
//! read-only afterwards, so it can be shared freely between updaters.

mod arc_length;
mod cubic;
/// Path curve construction and sampling.
pub mod curve;

pub use curve::{CurveType, PathCurve, DEFAULT_ARC_LENGTH_DIVISIONS};
