//! Bank (roll) angle derived from the route's turn ahead of the vehicle.

use std::f32::consts::FRAC_PI_2;

use glam::{EulerRot, Quat, Vec3};

use crate::camera::{look_rotation, RigTarget};
use crate::options::VehicleOptions;
use crate::path::PathCurve;

/// Target bank in radians for the vehicle at `progress`.
///
/// The tangent is sampled `lookahead` further along the route (capped at
/// the end) so the vehicle leans into turns before reaching them.
#[must_use]
pub fn bank_angle(
    path: &PathCurve,
    target: &RigTarget,
    progress: f32,
    options: &VehicleOptions,
) -> f32 {
    let tangent = path.tangent((progress + options.lookahead).min(1.0));
    bank_from_tangent(tangent, target.look, options)
}

/// Bank for a travel `tangent` seen from a reference frame facing `look`.
///
/// The tangent is brought into the frame's yaw-free space and its planar
/// heading measured against straight ahead. That angle is left unwrapped,
/// in (-3PI/2, PI/2], so any tangent pointing behind the frame banks
/// negative. It is exaggerated by `bank_gain` and clamped
/// to `±max_bank_degrees`. A zero tangent banks level.
#[must_use]
pub fn bank_from_tangent(
    tangent: Vec3,
    look: Vec3,
    options: &VehicleOptions,
) -> f32 {
    if tangent == Vec3::ZERO {
        return 0.0;
    }

    let yaw = frame_yaw(look);
    let local = Quat::from_axis_angle(Vec3::Y, -yaw) * tangent;

    // Straight ahead in the frame is -Z, which atan2 reports as PI/2
    let heading = (-local.z).atan2(local.x) - FRAC_PI_2;
    let max = options.max_bank_radians();
    (heading * options.bank_gain).clamp(-max, max)
}

/// Yaw of the reference frame, as its XYZ Euler decomposition reports it.
fn frame_yaw(look: Vec3) -> f32 {
    let (_, yaw, _) = look_rotation(look).to_euler(EulerRot::XYZ);
    yaw
}
