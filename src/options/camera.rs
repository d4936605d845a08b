use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FlightError;

/// Parameter offset of the look-at sample ahead of the rig.
pub const CURVE_AHEAD_CAMERA: f32 = 0.008;
/// Exponential smoothing rate (per second) for rig position and heading.
pub const CAMERA_SMOOTH_RATE: f32 = 24.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera rig follow behavior and viewpoint projection parameters.
pub struct CameraOptions {
    /// Path-parameter offset of the look-at sample.
    #[schemars(title = "Look Ahead", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub lookahead: f32,
    /// Position smoothing rate (per second).
    #[schemars(title = "Follow Rate", range(min = 1.0, max = 60.0), extend("step" = 1.0))]
    pub position_rate: f32,
    /// Heading smoothing rate (per second).
    #[schemars(title = "Turn Rate", range(min = 1.0, max = 60.0), extend("step" = 1.0))]
    pub look_rate: f32,
    /// Viewpoint position in rig-local space.
    #[schemars(skip)]
    pub viewpoint_offset: [f32; 3],
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 15.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            lookahead: CURVE_AHEAD_CAMERA,
            position_rate: CAMERA_SMOOTH_RATE,
            look_rate: CAMERA_SMOOTH_RATE,
            viewpoint_offset: [0.0, 0.0, 5.0],
            fovy: 30.0,
            znear: 0.1,
            zfar: 2000.0,
        }
    }
}

impl CameraOptions {
    pub(crate) fn validate(&self) -> Result<(), FlightError> {
        if !(self.lookahead > 0.0 && self.lookahead < 1.0) {
            return Err(FlightError::InvalidOption(format!(
                "camera.lookahead must be in (0, 1), got {}",
                self.lookahead
            )));
        }
        for (name, rate) in
            [("position_rate", self.position_rate), ("look_rate", self.look_rate)]
        {
            if !(rate > 0.0 && rate.is_finite()) {
                return Err(FlightError::InvalidOption(format!(
                    "camera.{name} must be positive, got {rate}"
                )));
            }
        }
        if !(self.znear > 0.0 && self.zfar > self.znear) {
            return Err(FlightError::InvalidOption(
                "camera clip planes must satisfy 0 < znear < zfar".to_owned(),
            ));
        }
        Ok(())
    }
}
