//! Cumulative arc-length table for re-parameterizing a curve by distance.

use glam::Vec3;

/// Chord lengths accumulated over `divisions + 1` uniform parameter samples.
#[derive(Debug, Clone)]
pub(crate) struct ArcLengthTable {
    lengths: Vec<f32>,
}

impl ArcLengthTable {
    /// Sample `curve` at `divisions + 1` evenly spaced parameters.
    pub(crate) fn build(divisions: u32, curve: impl Fn(f32) -> Vec3) -> Self {
        let divisions = divisions.max(1);
        let mut lengths = Vec::with_capacity(divisions as usize + 1);
        let mut last = curve(0.0);
        let mut sum = 0.0;
        lengths.push(sum);

        for d in 1..=divisions {
            let current = curve(d as f32 / divisions as f32);
            sum += current.distance(last);
            lengths.push(sum);
            last = current;
        }

        Self { lengths }
    }

    /// Total approximate length of the curve.
    pub(crate) fn total(&self) -> f32 {
        self.lengths.last().copied().unwrap_or(0.0)
    }

    /// Map a distance fraction `u` in [0, 1] to the curve parameter `t`.
    pub(crate) fn u_to_t(&self, u: f32) -> f32 {
        let u = if u.is_nan() { 0.0 } else { u.clamp(0.0, 1.0) };
        let last = self.lengths.len() - 1;
        let total = self.total();
        if total <= 0.0 {
            return u;
        }
        let target = u * total;

        // Last sample whose cumulative length does not exceed the target
        let i = self
            .lengths
            .partition_point(|&len| len <= target)
            .saturating_sub(1)
            .min(last);

        if self.lengths[i] == target || i == last {
            return i as f32 / last as f32;
        }

        let before = self.lengths[i];
        let span = self.lengths[i + 1] - before;
        let fraction = if span > 0.0 { (target - before) / span } else { 0.0 };
        (i as f32 + fraction) / last as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_line_maps_distance_to_parameter() {
        let table = ArcLengthTable::build(10, |t| Vec3::new(0.0, 0.0, -100.0 * t));
        assert!((table.total() - 100.0).abs() < 1e-3);
        assert!((table.u_to_t(0.35) - 0.35).abs() < 1e-5);
        assert_eq!(table.u_to_t(0.0), 0.0);
        assert_eq!(table.u_to_t(1.0), 1.0);
    }

    #[test]
    fn uneven_speed_is_compensated() {
        // Quadratic speed-up: half the distance is covered at t = sqrt(0.5)
        let table = ArcLengthTable::build(1000, |t| Vec3::new(t * t, 0.0, 0.0));
        let t = table.u_to_t(0.5);
        assert!((t - 0.5_f32.sqrt()).abs() < 1e-3);
    }

    #[test]
    fn out_of_range_fractions_are_clamped() {
        let table = ArcLengthTable::build(4, |t| Vec3::X * t);
        assert_eq!(table.u_to_t(-2.0), 0.0);
        assert_eq!(table.u_to_t(3.0), 1.0);
        assert_eq!(table.u_to_t(f32::NAN), 0.0);
    }
}
