//! Frame-rate independent smoothing factors.
//!
//! Both helpers return the fraction of the remaining distance to a target
//! that should be covered this frame, or `None` when the frame's time step
//! is zero, negative or NaN and the smoothing step must be skipped.

/// Linear follow factor `min(1, delta * rate)`.
///
/// A stalled frame with a huge (or infinite) `delta` snaps onto the target
/// instead of overshooting it.
#[inline]
#[must_use]
pub fn follow_factor(delta: f32, rate: f32) -> Option<f32> {
    if delta.is_nan() || delta <= 0.0 {
        return None;
    }
    Some((delta * rate).clamp(0.0, 1.0))
}

/// Exponential decay factor `1 - exp(-lambda * delta)`.
///
/// Unlike [`follow_factor`] the factor depends on `delta` non-linearly, so
/// splitting a step in two covers the same distance as taking it whole.
#[inline]
#[must_use]
pub fn damp_factor(delta: f32, lambda: f32) -> Option<f32> {
    if delta.is_nan() || delta <= 0.0 {
        return None;
    }
    Some((1.0 - (-lambda * delta).exp()).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_steps_are_skipped() {
        assert_eq!(follow_factor(0.0, 24.0), None);
        assert_eq!(follow_factor(-0.016, 24.0), None);
        assert_eq!(follow_factor(f32::NAN, 24.0), None);
        assert_eq!(damp_factor(0.0, 4.0), None);
    }

    #[test]
    fn follow_factor_grows_with_delta_and_saturates() {
        let mut prev = 0.0;
        for i in 1..=20 {
            let f = follow_factor(i as f32 * 0.005, 24.0).unwrap();
            assert!(f >= prev);
            assert!(f <= 1.0);
            prev = f;
        }
        assert_eq!(follow_factor(1.0, 24.0), Some(1.0));
        assert_eq!(follow_factor(f32::INFINITY, 24.0), Some(1.0));
    }

    #[test]
    fn damp_factor_approaches_one() {
        let small = damp_factor(0.016, 4.0).unwrap();
        let large = damp_factor(10.0, 4.0).unwrap();
        assert!(small > 0.0 && small < large);
        assert!(large <= 1.0);
    }
}
