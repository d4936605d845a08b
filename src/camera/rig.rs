//! Camera rig: the moving transform the renderer's viewpoint hangs from.
//!
//! Each frame the rig trails toward the path point at the current scroll
//! progress and turns toward a look-ahead sample, using exponential
//! smoothing so the motion is frame-rate independent.

use glam::{Mat3, Mat4, Quat, Vec3};

use crate::frame::FrameInput;
use crate::options::CameraOptions;
use crate::path::PathCurve;
use crate::util::smoothing::follow_factor;

/// Path-derived (non-smoothed) targets for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigTarget {
    /// Curve point at the current progress.
    pub point: Vec3,
    /// Unit direction from the look-ahead sample back to `point`, or zero
    /// at the very end of the route where both samples coincide.
    ///
    /// The rig's local +Z faces this way, which puts the viewpoint camera
    /// (looking down local -Z) facing forward along the route.
    pub look: Vec3,
}

impl RigTarget {
    /// Sample the curve at `progress` and `progress + lookahead` (capped
    /// at 1).
    #[must_use]
    pub fn sample(path: &PathCurve, progress: f32, lookahead: f32) -> Self {
        let point = path.position(progress);
        let ahead = path.position((progress + lookahead).min(1.0));
        Self {
            point,
            look: (point - ahead).normalize_or_zero(),
        }
    }

    /// Orientation of an unsmoothed frame at `point` facing `look`.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        look_rotation(self.look)
    }
}

/// Rotation whose local +Z axis points along `dir` with +Y kept up.
///
/// A zero `dir` yields the identity. Directions parallel to +Y are nudged
/// off the pole so the frame stays well defined.
#[must_use]
pub fn look_rotation(dir: Vec3) -> Quat {
    let mut z = dir.normalize_or(Vec3::Z);
    let mut x = Vec3::Y.cross(z);
    if x.length_squared() == 0.0 {
        z.z += 1e-4;
        z = z.normalize();
        x = Vec3::Y.cross(z);
    }
    let x = x.normalize();
    let y = z.cross(x);
    Quat::from_mat3(&Mat3::from_cols(x, y, z))
}

/// Mutable camera rig state, owned by the caller across frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    position: Vec3,
    look_dir: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Z)
    }
}

impl CameraRig {
    /// Rig at `position` facing `look_dir` (normalized; zero means +Z).
    #[must_use]
    pub fn new(position: Vec3, look_dir: Vec3) -> Self {
        Self {
            position,
            look_dir: look_dir.normalize_or(Vec3::Z),
        }
    }

    /// World-space position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Smoothed unit look direction (the rig's local +Z in world space).
    #[must_use]
    pub fn look_direction(&self) -> Vec3 {
        self.look_dir
    }

    /// Orientation derived from the look direction.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        look_rotation(self.look_dir)
    }

    /// Local-to-world transform for the scene graph.
    #[must_use]
    pub fn transform(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation(), self.position)
    }

    /// Advance one frame toward `target`.
    ///
    /// Position and heading each cover `min(1, delta * rate)` of their
    /// remaining distance. Degenerate time steps leave the rig unchanged.
    pub fn update(
        &mut self,
        target: &RigTarget,
        input: &FrameInput,
        options: &CameraOptions,
    ) {
        if let Some(f) = follow_factor(input.delta, options.position_rate) {
            self.position = self.position.lerp(target.point, f);
        }

        if let Some(f) = follow_factor(input.delta, options.look_rate) {
            let blended = self.look_dir.lerp(target.look, f);
            // A cancelled-out blend keeps the previous heading
            self.look_dir = blended.normalize_or(self.look_dir);
        }
    }
}
