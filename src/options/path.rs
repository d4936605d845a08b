use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FlightError;
use crate::path::CurveType;

/// Spacing between consecutive control points along -Z.
pub const CURVE_DISTANCE: f32 = 250.0;
/// Sweep steps of the guide ribbon traced under the path.
pub const LINE_NB_POINTS: u32 = 1000;
/// Catmull-Rom tension of the reference scene.
pub const CURVE_TENSION: f32 = 0.5;

/// Lateral (X) offsets of the reference route, one per control point.
const REFERENCE_LATERAL: [f32; 8] =
    [0.0, 0.0, 100.0, -100.0, 100.0, 0.0, 0.0, 0.0];

/// The eight control points of the reference scene: one every
/// [`CURVE_DISTANCE`] along -Z with a lateral S-bend in the middle.
#[must_use]
pub fn reference_control_points() -> Vec<[f32; 3]> {
    REFERENCE_LATERAL
        .iter()
        .enumerate()
        .map(|(i, &x)| [x, 0.0, -(i as f32) * CURVE_DISTANCE])
        .collect()
}

/// Spline parameterization used between control points.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    /// Non-uniform Catmull-Rom with alpha = 0.5.
    #[default]
    Centripetal,
    /// Non-uniform Catmull-Rom with alpha = 1.
    Chordal,
    /// Uniform Catmull-Rom scaled by `tension`.
    #[serde(rename = "catmullrom")]
    CatmullRom,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Path", inline)]
#[serde(default)]
/// Flight route and guide ribbon parameters.
pub struct PathOptions {
    /// Ordered control points of the route (world space).
    #[schemars(skip)]
    pub control_points: Vec<[f32; 3]>,
    /// Spline parameterization.
    #[schemars(title = "Curve Type")]
    pub curve_type: CurveKind,
    /// Tangent scale for the uniform Catmull-Rom variant.
    #[schemars(title = "Tension", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub tension: f32,
    /// Samples in the cumulative arc-length table.
    #[schemars(skip)]
    pub arc_length_divisions: u32,
    /// Sweep steps of the guide ribbon.
    #[schemars(title = "Ribbon Segments", range(min = 1, max = 4000))]
    pub ribbon_segments: u32,
    /// Half of the ribbon's cross-section height.
    #[schemars(skip)]
    pub ribbon_half_width: f32,
    /// Vertical offset of the ribbon below the route.
    #[schemars(skip)]
    pub ribbon_offset_y: f32,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            control_points: reference_control_points(),
            curve_type: CurveKind::Centripetal,
            tension: CURVE_TENSION,
            arc_length_divisions: 200,
            ribbon_segments: LINE_NB_POINTS,
            ribbon_half_width: 0.08,
            ribbon_offset_y: -2.0,
        }
    }
}

impl PathOptions {
    /// Resolve the configured parameterization into a curve type.
    #[must_use]
    pub fn resolved_curve_type(&self) -> CurveType {
        match self.curve_type {
            CurveKind::Centripetal => CurveType::Centripetal,
            CurveKind::Chordal => CurveType::Chordal,
            CurveKind::CatmullRom => CurveType::CatmullRom {
                tension: self.tension,
            },
        }
    }

    pub(crate) fn validate(&self) -> Result<(), FlightError> {
        if !self.tension.is_finite() {
            return Err(FlightError::InvalidOption(
                "path.tension must be finite".to_owned(),
            ));
        }
        if self.arc_length_divisions == 0 {
            return Err(FlightError::InvalidOption(
                "path.arc_length_divisions must be at least 1".to_owned(),
            ));
        }
        if self.ribbon_segments == 0 {
            return Err(FlightError::InvalidOption(
                "path.ribbon_segments must be at least 1".to_owned(),
            ));
        }
        if !(self.ribbon_half_width > 0.0 && self.ribbon_half_width.is_finite())
        {
            return Err(FlightError::InvalidOption(
                "path.ribbon_half_width must be positive".to_owned(),
            ));
        }
        Ok(())
    }
}
