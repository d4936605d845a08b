//! Per-frame orchestration: one route, one rig, one vehicle.
//!
//! [`Flight`] owns the immutable configuration and the prebuilt curve;
//! [`FlightState`] owns everything that moves. Keeping them apart lets a
//! host run several independent viewers over the same route.

use crate::camera::{CameraRig, RigTarget, Viewpoint};
use crate::error::FlightError;
use crate::frame::FrameInput;
use crate::options::Options;
use crate::path::PathCurve;
use crate::ribbon::RibbonMesh;
use crate::vehicle::VehicleState;

/// Smoothed state carried from frame to frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlightState {
    /// Camera rig trailing the scroll position.
    pub rig: CameraRig,
    /// Vehicle roll relative to the rig.
    pub vehicle: VehicleState,
}

/// Route plus fixed configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct Flight {
    options: Options,
    path: PathCurve,
}

impl Flight {
    /// Validate `options` and build the route curve.
    pub fn new(options: Options) -> Result<Self, FlightError> {
        options.validate()?;
        let path = PathCurve::from_options(&options.path)?;
        log::info!(
            "Flight ready: route length {:.1}, {} control points",
            path.length(),
            path.control_points().len()
        );
        Ok(Self { options, path })
    }

    /// The route curve.
    #[must_use]
    pub fn path(&self) -> &PathCurve {
        &self.path
    }

    /// Configuration the flight was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Advance `state` by one frame.
    ///
    /// The path targets are sampled once and shared: the rig smooths
    /// toward them and the vehicle derives its bank from the same
    /// unsmoothed look direction.
    pub fn update(&self, state: &mut FlightState, input: FrameInput) {
        let target = RigTarget::sample(
            &self.path,
            input.progress(),
            self.options.camera.lookahead,
        );
        state.rig.update(&target, &input, &self.options.camera);
        state
            .vehicle
            .update(&self.path, &target, &input, &self.options.vehicle);
    }

    /// Guide ribbon mesh for this route.
    #[must_use]
    pub fn ribbon(&self) -> RibbonMesh {
        RibbonMesh::build(&self.path, &self.options.path)
    }

    /// World-space viewpoint hung off the rig in `state`.
    #[must_use]
    pub fn viewpoint(&self, state: &FlightState, aspect: f32) -> Viewpoint {
        Viewpoint::from_rig(&state.rig, &self.options.camera, aspect)
    }
}
