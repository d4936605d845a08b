//! Camera system for the scroll-driven flight.
//!
//! The rig follows the path with exponential smoothing; the viewpoint is
//! the perspective camera mounted on it.

/// Viewpoint camera and GPU uniform types.
pub mod core;
/// Path-following camera rig.
pub mod rig;

pub use self::core::{CameraUniform, Viewpoint};
pub use rig::{look_rotation, CameraRig, RigTarget};
