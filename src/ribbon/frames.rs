//! Sweep frames along the path for extruding the guide ribbon.

use glam::Vec3;

use crate::path::PathCurve;

/// A sample along the sweep with position, tangent, and frame vectors.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SweepFrame {
    pub pos: Vec3,
    pub tangent: Vec3,
    pub normal: Vec3,
    pub binormal: Vec3,
}

/// `segments + 1` frames equally spaced by arc length.
pub(crate) fn sweep_frames(path: &PathCurve, segments: u32) -> Vec<SweepFrame> {
    let segments = segments.max(1);
    let mut frames: Vec<SweepFrame> = (0..=segments)
        .map(|s| {
            let u = s as f32 / segments as f32;
            SweepFrame {
                pos: path.point_at(u),
                tangent: path.tangent_at(u),
                normal: Vec3::ZERO,
                binormal: Vec3::ZERO,
            }
        })
        .collect();
    fill_missing_tangents(&mut frames);
    propagate_frames(&mut frames);
    frames
}

/// Borrow a neighbour's tangent where the curve stalls.
fn fill_missing_tangents(frames: &mut [SweepFrame]) {
    let fallback = frames
        .iter()
        .map(|f| f.tangent)
        .find(|t| *t != Vec3::ZERO)
        .unwrap_or(Vec3::NEG_Z);
    let mut last = fallback;
    for frame in frames.iter_mut() {
        if frame.tangent == Vec3::ZERO {
            frame.tangent = last;
        } else {
            last = frame.tangent;
        }
    }
}

/// Initial normal: built against the world axis the tangent has the least
/// of, ties going to the later axis.
///
/// A route heading down -Z gets normal -Y and binormal -X, so a profile
/// laid along the binormal lies flat.
fn seed_normal(tangent: Vec3) -> Vec3 {
    let a = tangent.abs();
    let mut axis = Vec3::X;
    let mut min = a.x;
    if a.y <= min {
        min = a.y;
        axis = Vec3::Y;
    }
    if a.z <= min {
        axis = Vec3::Z;
    }
    let side = tangent.cross(axis).normalize_or_zero();
    tangent.cross(side).normalize_or(Vec3::NEG_Y)
}

/// Mirror `v` through the plane with normal `axis`; `len_sq` is
/// `axis.length_squared()`.
fn reflect(v: Vec3, axis: Vec3, len_sq: f32) -> Vec3 {
    v - axis * (2.0 * axis.dot(v) / len_sq)
}

/// Rotation-minimizing frames by double reflection (Wang et al. 2008),
/// carried forward from [`seed_normal`].
fn propagate_frames(frames: &mut [SweepFrame]) {
    let Some(first) = frames.first_mut() else {
        return;
    };
    first.normal = seed_normal(first.tangent);
    first.binormal = first.tangent.cross(first.normal).normalize();

    for i in 1..frames.len() {
        let prev = frames[i - 1];
        let cur = &mut frames[i];

        let chord = cur.pos - prev.pos;
        let chord_sq = chord.length_squared();
        if chord_sq < 1e-10 {
            cur.normal = prev.normal;
            cur.binormal = prev.binormal;
            continue;
        }

        // Reflect across the chord's bisector plane, then across the plane
        // mapping the reflected tangent onto the new one
        let normal = reflect(prev.normal, chord, chord_sq);
        let tangent = reflect(prev.tangent, chord, chord_sq);
        let fix = cur.tangent - tangent;
        let fix_sq = fix.length_squared();
        let normal = if fix_sq < 1e-10 {
            normal
        } else {
            reflect(normal, fix, fix_sq)
        };

        cur.normal = (normal - cur.tangent * cur.tangent.dot(normal)).normalize();
        cur.binormal = cur.tangent.cross(cur.normal).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::CurveType;

    #[test]
    fn seed_matches_axis_of_least_tangent() {
        let n = seed_normal(Vec3::NEG_Z);
        assert!((n - Vec3::NEG_Y).length() < 1e-6);
        assert!((Vec3::NEG_Z.cross(n) - Vec3::NEG_X).length() < 1e-6);

        let t = Vec3::new(0.3, -0.1, 0.9).normalize();
        let n = seed_normal(t);
        assert!((n.length() - 1.0).abs() < 1e-5);
        assert!(n.dot(t).abs() < 1e-5);
    }

    #[test]
    fn level_route_lies_flat() {
        let path = PathCurve::new(
            vec![
                Vec3::ZERO,
                Vec3::new(0.0, 0.0, -250.0),
                Vec3::new(100.0, 0.0, -500.0),
                Vec3::new(-100.0, 0.0, -750.0),
            ],
            CurveType::Centripetal,
        )
        .unwrap();
        let frames = sweep_frames(&path, 200);
        assert_eq!(frames.len(), 201);
        for f in &frames {
            assert!((f.normal - Vec3::NEG_Y).length() < 1e-3);
            assert!(f.binormal.y.abs() < 1e-3);
            assert!(f.binormal.dot(f.tangent).abs() < 1e-4);
        }
    }

    #[test]
    fn frames_are_orthonormal_on_a_climbing_route() {
        let path = PathCurve::new(
            vec![
                Vec3::ZERO,
                Vec3::new(10.0, 20.0, -50.0),
                Vec3::new(-30.0, 5.0, -90.0),
            ],
            CurveType::Chordal,
        )
        .unwrap();
        for f in sweep_frames(&path, 64) {
            assert!((f.normal.length() - 1.0).abs() < 1e-4);
            assert!((f.binormal.length() - 1.0).abs() < 1e-4);
            assert!(f.normal.dot(f.binormal).abs() < 1e-4);
            assert!(f.tangent.dot(f.binormal).abs() < 1e-3);
        }
    }
}
