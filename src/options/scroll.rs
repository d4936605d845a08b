use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FlightError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scroll", inline)]
#[serde(default)]
/// Reference scroll source parameters.
pub struct ScrollOptions {
    /// Scrollable height in viewport pages; one page of scrolling advances
    /// the offset by `1 / pages`.
    #[schemars(title = "Pages", range(min = 1.0, max = 500.0), extend("step" = 1.0))]
    pub pages: f32,
    /// Damping time scale; larger values settle more slowly.
    ///
    /// Drives a plain exponential decay, which only approximates the
    /// critically damped smooth-time easing of a browser scroll container.
    #[schemars(title = "Damping", range(min = 0.0, max = 5.0), extend("step" = 0.05))]
    pub damping: f32,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            pages: 100.0,
            damping: 1.0,
        }
    }
}

impl ScrollOptions {
    pub(crate) fn validate(&self) -> Result<(), FlightError> {
        if !(self.pages >= 1.0 && self.pages.is_finite()) {
            return Err(FlightError::InvalidOption(format!(
                "scroll.pages must be at least 1, got {}",
                self.pages
            )));
        }
        if !(self.damping >= 0.0 && self.damping.is_finite()) {
            return Err(FlightError::InvalidOption(format!(
                "scroll.damping must be non-negative, got {}",
                self.damping
            )));
        }
        Ok(())
    }
}
