use glam::{EulerRot, Quat};

use super::bank::bank_angle;
use crate::camera::RigTarget;
use crate::frame::FrameInput;
use crate::options::VehicleOptions;
use crate::path::PathCurve;
use crate::util::smoothing::follow_factor;

/// Vehicle orientation relative to the camera rig.
///
/// Position is inherited from the rig; only the rotation is owned here.
/// Pitch and yaw are carried through untouched while the roll eases toward
/// the bank target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleState {
    orientation: Quat,
    target_bank: f32,
}

impl Default for VehicleState {
    fn default() -> Self {
        Self::new(Quat::IDENTITY)
    }
}

impl VehicleState {
    /// Vehicle starting from `orientation`.
    #[must_use]
    pub fn new(orientation: Quat) -> Self {
        Self {
            orientation: orientation.normalize(),
            target_bank: 0.0,
        }
    }

    /// Current rotation relative to the rig.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Current roll in radians.
    #[must_use]
    pub fn bank(&self) -> f32 {
        self.orientation.to_euler(EulerRot::XYZ).2
    }

    /// Roll the vehicle was easing toward on the last applied frame.
    #[must_use]
    pub fn target_bank(&self) -> f32 {
        self.target_bank
    }

    /// Advance one frame.
    ///
    /// `target` is this frame's unsmoothed rig target; the smoothed rig
    /// state is never consulted. Degenerate time steps leave the vehicle
    /// unchanged.
    pub fn update(
        &mut self,
        path: &PathCurve,
        target: &RigTarget,
        input: &FrameInput,
        options: &VehicleOptions,
    ) {
        let Some(f) = follow_factor(input.delta, options.bank_rate) else {
            return;
        };

        let bank = bank_angle(path, target, input.progress(), options);
        let (pitch, yaw, _) = self.orientation.to_euler(EulerRot::XYZ);
        let goal = Quat::from_euler(EulerRot::XYZ, pitch, yaw, bank);

        self.orientation = self.orientation.slerp(goal, f).normalize();
        self.target_bank = bank;
        log::trace!("vehicle bank target {:.2}°", bank.to_degrees());
    }
}
