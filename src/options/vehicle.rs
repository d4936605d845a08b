use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FlightError;

/// Parameter offset of the tangent sample the vehicle banks into.
pub const CURVE_AHEAD_AIRPLANE: f32 = 0.02;
/// Bank envelope in degrees (applied symmetrically).
pub const AIRPLANE_MAX_ANGLE: f32 = 35.0;
/// Exaggeration applied to the geometric turn angle.
pub const BANK_GAIN: f32 = 2.4;
/// Slerp rate (per second) toward the target bank.
pub const BANK_SMOOTH_RATE: f32 = 2.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Vehicle", inline)]
#[serde(default)]
/// Vehicle banking parameters.
pub struct VehicleOptions {
    /// Path-parameter offset of the tangent sample.
    #[schemars(title = "Look Ahead", range(min = 0.001, max = 0.1), extend("step" = 0.001))]
    pub lookahead: f32,
    /// Maximum bank magnitude in degrees.
    #[schemars(title = "Max Bank", range(min = 0.0, max = 90.0), extend("step" = 1.0))]
    pub max_bank_degrees: f32,
    /// Multiplier on the geometric turn angle.
    #[schemars(title = "Bank Gain", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub bank_gain: f32,
    /// Orientation slerp rate (per second).
    #[schemars(title = "Bank Rate", range(min = 0.1, max = 20.0), extend("step" = 0.1))]
    pub bank_rate: f32,
}

impl Default for VehicleOptions {
    fn default() -> Self {
        Self {
            lookahead: CURVE_AHEAD_AIRPLANE,
            max_bank_degrees: AIRPLANE_MAX_ANGLE,
            bank_gain: BANK_GAIN,
            bank_rate: BANK_SMOOTH_RATE,
        }
    }
}

impl VehicleOptions {
    /// Bank envelope in radians.
    #[must_use]
    pub fn max_bank_radians(&self) -> f32 {
        self.max_bank_degrees.to_radians()
    }

    pub(crate) fn validate(&self) -> Result<(), FlightError> {
        if !(self.lookahead > 0.0 && self.lookahead < 1.0) {
            return Err(FlightError::InvalidOption(format!(
                "vehicle.lookahead must be in (0, 1), got {}",
                self.lookahead
            )));
        }
        if !(0.0..=180.0).contains(&self.max_bank_degrees) {
            return Err(FlightError::InvalidOption(format!(
                "vehicle.max_bank_degrees must be in [0, 180], got {}",
                self.max_bank_degrees
            )));
        }
        if !self.bank_gain.is_finite() {
            return Err(FlightError::InvalidOption(
                "vehicle.bank_gain must be finite".to_owned(),
            ));
        }
        if !(self.bank_rate > 0.0 && self.bank_rate.is_finite()) {
            return Err(FlightError::InvalidOption(format!(
                "vehicle.bank_rate must be positive, got {}",
                self.bank_rate
            )));
        }
        Ok(())
    }
}
