//! Guide ribbon traced under the flight path.
//!
//! A short profile segment is swept along the route at arc-length spaced
//! steps and dropped below it. On a level route it lies flat, a thin floor
//! strip the camera looks down onto.
//! The mesh is built once; the renderer uploads it as-is.

mod frames;

use glam::Vec3;

use crate::options::PathOptions;
use crate::path::PathCurve;

/// Vertex layout of the ribbon mesh.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RibbonVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// Unit face normal.
    pub normal: [f32; 3],
}

/// Indexed triangle list for the guide ribbon.
#[derive(Debug, Clone, Default)]
pub struct RibbonMesh {
    /// Two vertices (one per edge) per sweep step.
    pub vertices: Vec<RibbonVertex>,
    /// Two triangles per sweep segment.
    pub indices: Vec<u32>,
}

impl RibbonMesh {
    /// Sweep the profile along `path` with the configured resolution.
    #[must_use]
    pub fn build(path: &PathCurve, options: &PathOptions) -> Self {
        let frames = frames::sweep_frames(path, options.ribbon_segments);
        log::debug!(
            "Sweeping guide ribbon over {} arc-length steps",
            frames.len()
        );
        let offset = Vec3::new(0.0, options.ribbon_offset_y, 0.0);
        let half = options.ribbon_half_width;

        let mut vertices = Vec::with_capacity(frames.len() * 2);
        for frame in &frames {
            let center = frame.pos + offset;
            let normal = frame.normal.to_array();
            for side in [-half, half] {
                vertices.push(RibbonVertex {
                    position: (center + frame.binormal * side).to_array(),
                    normal,
                });
            }
        }

        let segments = frames.len().saturating_sub(1) as u32;
        let mut indices = Vec::with_capacity(segments as usize * 6);
        for s in 0..segments {
            let lower = s * 2;
            let upper = lower + 1;
            let next_lower = lower + 2;
            let next_upper = lower + 3;
            indices.extend_from_slice(&[
                lower, next_lower, upper, upper, next_lower, next_upper,
            ]);
        }

        log::info!(
            "Built guide ribbon: {} vertices, {} triangles",
            vertices.len(),
            indices.len() / 3
        );

        Self { vertices, indices }
    }

    /// Number of triangles in the mesh.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Raw vertex bytes for a GPU upload.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index bytes for a GPU upload.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::CurveType;

    fn straight_path() -> PathCurve {
        PathCurve::new(
            vec![Vec3::ZERO, Vec3::new(0.0, 0.0, -100.0)],
            CurveType::Centripetal,
        )
        .unwrap()
    }

    #[test]
    fn counts_follow_segment_resolution() {
        let options = PathOptions {
            ribbon_segments: 10,
            ..PathOptions::default()
        };
        let mesh = RibbonMesh::build(&straight_path(), &options);
        assert_eq!(mesh.vertices.len(), 22);
        assert_eq!(mesh.indices.len(), 60);
        assert_eq!(mesh.triangle_count(), 20);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
        assert_eq!(mesh.vertex_bytes().len(), 22 * 24);
        assert_eq!(mesh.index_bytes().len(), 60 * 4);
    }

    #[test]
    fn level_ribbon_is_a_floor_strip_below_the_route() {
        let options = PathOptions {
            ribbon_segments: 4,
            ..PathOptions::default()
        };
        let mesh = RibbonMesh::build(&straight_path(), &options);

        let left = Vec3::from(mesh.vertices[0].position);
        let right = Vec3::from(mesh.vertices[1].position);
        assert!((left.y - right.y).abs() < 1e-5);
        assert!((left.y + 2.0).abs() < 1e-5);
        assert!((left.distance(right) - 0.16).abs() < 1e-4);
        assert!((left.x.abs() - 0.08).abs() < 1e-5);
        assert!(left.z.abs() < 1e-5);

        let last = Vec3::from(mesh.vertices[8].position);
        assert!((last.z + 100.0).abs() < 1e-3);
        assert!((last.y + 2.0).abs() < 1e-5);

        for v in &mesh.vertices {
            assert!((v.normal[1].abs() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn reference_route_uses_default_resolution() {
        let options = PathOptions::default();
        let path = PathCurve::from_options(&options).unwrap();
        let mesh = RibbonMesh::build(&path, &options);
        assert_eq!(mesh.vertices.len(), 2 * (options.ribbon_segments as usize + 1));
        assert!(mesh
            .vertices
            .iter()
            .all(|v| v.position.iter().all(|c| c.is_finite())));
    }
}
