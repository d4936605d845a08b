//! Per-span cubic polynomials for Catmull-Rom evaluation.
//!
//! Each span between control points `p1` and `p2` is a Hermite cubic whose
//! end tangents come from the neighbouring points `p0` and `p3`.

use glam::Vec3;

/// Spans shorter than this are treated as degenerate by the non-uniform
/// parameterizations.
const MIN_SPAN: f32 = 1e-4;

/// `c0 + c1·t + c2·t² + c3·t³`, evaluated for `t` in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CubicPoly {
    c0: Vec3,
    c1: Vec3,
    c2: Vec3,
    c3: Vec3,
}

impl CubicPoly {
    /// Hermite cubic from end values `x0`, `x1` and end tangents `t0`, `t1`.
    fn hermite(x0: Vec3, x1: Vec3, t0: Vec3, t1: Vec3) -> Self {
        Self {
            c0: x0,
            c1: t0,
            c2: -3.0 * x0 + 3.0 * x1 - 2.0 * t0 - t1,
            c3: 2.0 * x0 - 2.0 * x1 + t0 + t1,
        }
    }

    /// Uniform Catmull-Rom span with tangents scaled by `tension`.
    pub(crate) fn uniform(
        p0: Vec3,
        p1: Vec3,
        p2: Vec3,
        p3: Vec3,
        tension: f32,
    ) -> Self {
        Self::hermite(p1, p2, tension * (p2 - p0), tension * (p3 - p1))
    }

    /// Non-uniform Catmull-Rom span.
    ///
    /// Knot spacing is `|p_i+1 - p_i|^alpha`, passed in as `exponent` on the
    /// squared distance (0.25 for centripetal, 0.5 for chordal).
    pub(crate) fn non_uniform(
        p0: Vec3,
        p1: Vec3,
        p2: Vec3,
        p3: Vec3,
        exponent: f32,
    ) -> Self {
        let mut dt0 = p0.distance_squared(p1).powf(exponent);
        let mut dt1 = p1.distance_squared(p2).powf(exponent);
        let mut dt2 = p2.distance_squared(p3).powf(exponent);

        if dt1 < MIN_SPAN {
            dt1 = 1.0;
        }
        if dt0 < MIN_SPAN {
            dt0 = dt1;
        }
        if dt2 < MIN_SPAN {
            dt2 = dt1;
        }

        let t1 = (p1 - p0) / dt0 - (p2 - p0) / (dt0 + dt1) + (p2 - p1) / dt1;
        let t2 = (p2 - p1) / dt1 - (p3 - p1) / (dt1 + dt2) + (p3 - p2) / dt2;

        // Rescale tangents from knot space to the [0, 1] span parameter
        Self::hermite(p1, p2, t1 * dt1, t2 * dt1)
    }

    #[inline]
    pub(crate) fn eval(&self, t: f32) -> Vec3 {
        let t2 = t * t;
        let t3 = t2 * t;
        self.c0 + self.c1 * t + self.c2 * t2 + self.c3 * t3
    }
}
