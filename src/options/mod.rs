//! Flight configuration with TOML preset support.
//!
//! Route geometry, camera follow rates, vehicle banking and the reference
//! scroll source are consolidated here. Options serialize to/from TOML for
//! presets stored in `assets/flight_presets/`. They are read once at
//! startup; the per-frame update only borrows them.

mod camera;
mod path;
mod scroll;
mod vehicle;

use std::path::Path;

pub use camera::{CameraOptions, CAMERA_SMOOTH_RATE, CURVE_AHEAD_CAMERA};
pub use path::{
    reference_control_points, CurveKind, PathOptions, CURVE_DISTANCE,
    CURVE_TENSION, LINE_NB_POINTS,
};
use schemars::JsonSchema;
pub use scroll::ScrollOptions;
use serde::{Deserialize, Serialize};
pub use vehicle::{
    VehicleOptions, AIRPLANE_MAX_ANGLE, BANK_GAIN, BANK_SMOOTH_RATE,
    CURVE_AHEAD_AIRPLANE,
};

use crate::error::FlightError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[vehicle]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Route control points and guide ribbon.
    pub path: PathOptions,
    /// Camera rig follow and viewpoint projection.
    pub camera: CameraOptions,
    /// Vehicle banking.
    pub vehicle: VehicleOptions,
    /// Reference scroll source.
    pub scroll: ScrollOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FlightError> {
        let content =
            std::fs::read_to_string(path).map_err(FlightError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| FlightError::OptionsParse(e.to_string()))?;
        options.validate()?;
        log::info!("Loaded flight options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FlightError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FlightError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FlightError::Io)?;
        }
        std::fs::write(path, content).map_err(FlightError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Check every section for out-of-range values.
    ///
    /// Control-point problems are reported by curve construction instead,
    /// so they surface with the same error whether or not options are used.
    pub fn validate(&self) -> Result<(), FlightError> {
        self.path.validate()?;
        self.camera.validate()?;
        self.vehicle.validate()?;
        self.scroll.validate()
    }
}
