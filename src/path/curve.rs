//! The immutable route the camera rig and vehicle fly along.

use glam::Vec3;

use super::arc_length::ArcLengthTable;
use super::cubic::CubicPoly;
use crate::error::FlightError;
use crate::options::PathOptions;

/// Parameter step used for finite-difference tangents.
const TANGENT_DELTA: f32 = 1e-4;

/// Default number of samples in the arc-length table.
pub const DEFAULT_ARC_LENGTH_DIVISIONS: u32 = 200;

/// Knot parameterization between control points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CurveType {
    /// Knot spacing `|Δp|^0.5`; avoids cusps and self-intersections.
    #[default]
    Centripetal,
    /// Knot spacing `|Δp|`.
    Chordal,
    /// Uniform knots with tangents scaled by `tension`.
    CatmullRom {
        /// Tangent scale (0.5 is the classic Catmull-Rom spline).
        tension: f32,
    },
}

/// Open Catmull-Rom spline through a fixed list of control points.
///
/// `position(t)` spreads `t` uniformly over the spans, so equal steps in
/// `t` are not equal distances. Use the `*_at` variants for arc-length
/// parameterized queries.
#[derive(Debug, Clone)]
pub struct PathCurve {
    points: Vec<Vec3>,
    curve_type: CurveType,
    spans: Vec<CubicPoly>,
    arc_lengths: ArcLengthTable,
}

impl PathCurve {
    /// Build a curve with the default arc-length resolution.
    pub fn new(
        points: Vec<Vec3>,
        curve_type: CurveType,
    ) -> Result<Self, FlightError> {
        Self::with_divisions(points, curve_type, DEFAULT_ARC_LENGTH_DIVISIONS)
    }

    /// Build a curve from path options.
    pub fn from_options(options: &PathOptions) -> Result<Self, FlightError> {
        let points =
            options.control_points.iter().copied().map(Vec3::from).collect();
        Self::with_divisions(
            points,
            options.resolved_curve_type(),
            options.arc_length_divisions,
        )
    }

    /// Build a curve sampling `divisions + 1` points for arc-length queries.
    ///
    /// Fails when fewer than two control points are given or any point has
    /// a non-finite coordinate.
    pub fn with_divisions(
        points: Vec<Vec3>,
        curve_type: CurveType,
        divisions: u32,
    ) -> Result<Self, FlightError> {
        if points.len() < 2 {
            return Err(FlightError::TooFewControlPoints {
                count: points.len(),
            });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(FlightError::NonFiniteControlPoint { index });
        }

        let spans = build_spans(&points, curve_type);
        let arc_lengths =
            ArcLengthTable::build(divisions, |t| eval_spans(&points, &spans, t));

        log::info!(
            "Built {curve_type:?} path curve: {} control points, length {:.1}",
            points.len(),
            arc_lengths.total()
        );
        log::debug!("Arc-length table uses {divisions} divisions");

        Ok(Self {
            points,
            curve_type,
            spans,
            arc_lengths,
        })
    }

    /// Point on the curve at parameter `t`.
    ///
    /// `t` is clamped to [0, 1]; the end parameters return the first and
    /// last control points exactly.
    #[must_use]
    pub fn position(&self, t: f32) -> Vec3 {
        eval_spans(&self.points, &self.spans, t)
    }

    /// Unit direction of travel at parameter `t`.
    ///
    /// Central difference over `t ± 1e-4`, clamped to the curve ends.
    /// Returns `Vec3::ZERO` where the curve does not move.
    #[must_use]
    pub fn tangent(&self, t: f32) -> Vec3 {
        let t1 = (t - TANGENT_DELTA).max(0.0);
        let t2 = (t + TANGENT_DELTA).min(1.0);
        (self.position(t2) - self.position(t1)).normalize_or_zero()
    }

    /// Approximate total length of the curve.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.arc_lengths.total()
    }

    /// Map a distance fraction `u` in [0, 1] to the curve parameter `t`.
    #[must_use]
    pub fn u_to_t(&self, u: f32) -> f32 {
        self.arc_lengths.u_to_t(u)
    }

    /// Point at distance fraction `u` along the curve.
    #[must_use]
    pub fn point_at(&self, u: f32) -> Vec3 {
        self.position(self.u_to_t(u))
    }

    /// Unit tangent at distance fraction `u` along the curve.
    #[must_use]
    pub fn tangent_at(&self, u: f32) -> Vec3 {
        self.tangent(self.u_to_t(u))
    }

    /// `divisions + 1` points equally spaced by arc length, ends included.
    #[must_use]
    pub fn spaced_points(&self, divisions: u32) -> Vec<Vec3> {
        let divisions = divisions.max(1);
        (0..=divisions)
            .map(|d| self.point_at(d as f32 / divisions as f32))
            .collect()
    }

    /// The control points the curve passes through.
    #[must_use]
    pub fn control_points(&self) -> &[Vec3] {
        &self.points
    }

    /// Knot parameterization of this curve.
    #[must_use]
    pub fn curve_type(&self) -> CurveType {
        self.curve_type
    }
}

/// One cubic per span, with phantom end points mirrored off the ends.
fn build_spans(points: &[Vec3], curve_type: CurveType) -> Vec<CubicPoly> {
    let n = points.len();
    (0..n - 1)
        .map(|i| {
            let p0 = if i == 0 {
                points[0] * 2.0 - points[1]
            } else {
                points[i - 1]
            };
            let p1 = points[i];
            let p2 = points[i + 1];
            let p3 = if i + 2 >= n {
                points[n - 1] * 2.0 - points[n - 2]
            } else {
                points[i + 2]
            };

            match curve_type {
                CurveType::Centripetal => {
                    CubicPoly::non_uniform(p0, p1, p2, p3, 0.25)
                }
                CurveType::Chordal => CubicPoly::non_uniform(p0, p1, p2, p3, 0.5),
                CurveType::CatmullRom { tension } => {
                    CubicPoly::uniform(p0, p1, p2, p3, tension)
                }
            }
        })
        .collect()
}

fn eval_spans(points: &[Vec3], spans: &[CubicPoly], t: f32) -> Vec3 {
    if t.is_nan() || t <= 0.0 {
        return points[0];
    }
    if t >= 1.0 {
        return points[points.len() - 1];
    }

    let p = spans.len() as f32 * t;
    let span = (p.floor() as usize).min(spans.len() - 1);
    spans[span].eval(p - span as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::reference_control_points;

    fn reference_curve() -> PathCurve {
        let points = reference_control_points()
            .into_iter()
            .map(Vec3::from)
            .collect();
        PathCurve::new(points, CurveType::Centripetal).unwrap()
    }

    #[test]
    fn endpoints_are_exact() {
        for curve_type in [
            CurveType::Centripetal,
            CurveType::Chordal,
            CurveType::CatmullRom { tension: 0.5 },
        ] {
            let points = reference_control_points()
                .into_iter()
                .map(Vec3::from)
                .collect::<Vec<_>>();
            let curve = PathCurve::new(points.clone(), curve_type).unwrap();
            assert_eq!(curve.position(0.0), points[0]);
            assert_eq!(curve.position(1.0), points[points.len() - 1]);
        }
    }

    #[test]
    fn passes_through_interior_control_points() {
        let curve = reference_curve();
        let n = curve.control_points().len();
        for (i, &p) in curve.control_points().iter().enumerate() {
            let t = i as f32 / (n - 1) as f32;
            assert!(
                (curve.position(t) - p).length() < 1e-2,
                "control point {i} missed: {:?} vs {:?}",
                curve.position(t),
                p
            );
        }
    }

    #[test]
    fn positions_are_finite_and_continuous() {
        let curve = reference_curve();
        let steps = 10_000;
        let mut prev = curve.position(0.0);
        // Max step is bounded by the longest span's speed times dt
        let max_step = curve.length() / steps as f32 * 4.0;
        for i in 1..=steps {
            let p = curve.position(i as f32 / steps as f32);
            assert!(p.is_finite());
            assert!(
                (p - prev).length() < max_step,
                "jump at step {i}: {}",
                (p - prev).length()
            );
            prev = p;
        }
    }

    #[test]
    fn out_of_range_parameters_clamp_to_ends() {
        let curve = reference_curve();
        assert_eq!(curve.position(-0.5), curve.position(0.0));
        assert_eq!(curve.position(1.5), curve.position(1.0));
        assert_eq!(curve.position(f32::NAN), curve.position(0.0));
    }

    #[test]
    fn tangent_follows_straight_segments() {
        let points = vec![Vec3::ZERO, Vec3::new(0.0, 0.0, -250.0)];
        let curve = PathCurve::new(points, CurveType::Centripetal).unwrap();
        for t in [0.0, 0.3, 1.0] {
            let tangent = curve.tangent(t);
            assert!((tangent - Vec3::NEG_Z).length() < 1e-4);
        }
    }

    #[test]
    fn tangent_is_unit_length_everywhere() {
        let curve = reference_curve();
        for i in 0..=100 {
            let tangent = curve.tangent(i as f32 / 100.0);
            assert!((tangent.length() - 1.0).abs() < 1e-3);
        }
    }

    #[test]
    fn rejects_degenerate_control_polygons() {
        assert!(matches!(
            PathCurve::new(vec![Vec3::ZERO], CurveType::Centripetal),
            Err(FlightError::TooFewControlPoints { count: 1 })
        ));
        assert!(matches!(
            PathCurve::new(Vec::new(), CurveType::Chordal),
            Err(FlightError::TooFewControlPoints { count: 0 })
        ));
        assert!(matches!(
            PathCurve::new(
                vec![Vec3::ZERO, Vec3::new(f32::NAN, 0.0, 0.0)],
                CurveType::Centripetal
            ),
            Err(FlightError::NonFiniteControlPoint { index: 1 })
        ));
    }

    #[test]
    fn coincident_points_yield_zero_tangent_not_nan() {
        let curve =
            PathCurve::new(vec![Vec3::ONE, Vec3::ONE], CurveType::Centripetal)
                .unwrap();
        assert_eq!(curve.tangent(0.5), Vec3::ZERO);
        assert_eq!(curve.length(), 0.0);
        assert_eq!(curve.point_at(0.5), Vec3::ONE);
    }

    #[test]
    fn spaced_points_are_evenly_distributed() {
        let curve = reference_curve();
        let points = curve.spaced_points(50);
        assert_eq!(points.len(), 51);
        assert_eq!(points[0], curve.position(0.0));
        assert_eq!(points[50], curve.position(1.0));

        let expected = curve.length() / 50.0;
        for pair in points.windows(2) {
            let step = pair[0].distance(pair[1]);
            assert!(
                (step - expected).abs() < expected * 0.05,
                "uneven spacing {step} vs {expected}"
            );
        }
    }

    #[test]
    fn reference_route_is_longer_than_its_straight_extent() {
        let curve = reference_curve();
        assert!(curve.length() > 7.0 * 250.0);
        assert!(curve.length() < 7.0 * 250.0 * 1.3);
    }
}
