use glam::{Mat4, Vec3};

use super::rig::CameraRig;
use crate::options::CameraOptions;

/// Perspective camera mounted on the rig, as handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewpoint {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Unit view direction.
    pub forward: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Viewpoint {
    /// Place the camera at `viewpoint_offset` in rig-local space, looking
    /// down the rig's local -Z.
    #[must_use]
    pub fn from_rig(rig: &CameraRig, options: &CameraOptions, aspect: f32) -> Self {
        let orientation = rig.orientation();
        Self {
            eye: rig.position()
                + orientation * Vec3::from(options.viewpoint_offset),
            forward: orientation * Vec3::NEG_Z,
            up: orientation * Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// World-to-view transform.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.eye, self.forward, self.up)
    }

    /// Clip-space projection.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.6,
            forward: [0.0, 0.0, -1.0],
            fovy: 30.0,
        }
    }

    /// Update uniform fields from the given viewpoint.
    pub fn update_view_proj(&mut self, viewpoint: &Viewpoint) {
        self.view_proj = viewpoint.build_matrix().to_cols_array_2d();
        self.position = viewpoint.eye.to_array();
        self.aspect = viewpoint.aspect;
        self.forward = viewpoint.forward.to_array();
        self.fovy = viewpoint.fovy;
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;

    #[test]
    fn default_rig_puts_camera_behind_the_vehicle() {
        let rig = CameraRig::default();
        let vp = Viewpoint::from_rig(&rig, &CameraOptions::default(), 1.5);
        assert!((vp.eye - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-6);
        assert!((vp.forward - Vec3::NEG_Z).length() < 1e-6);
        assert!((vp.up - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn vehicle_at_rig_origin_projects_to_screen_center() {
        let rig = CameraRig::new(Vec3::new(10.0, 0.0, -300.0), Vec3::X);
        let vp = Viewpoint::from_rig(&rig, &CameraOptions::default(), 1.0);
        let clip = vp.build_matrix() * Vec4::from((rig.position(), 1.0));
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn uniform_mirrors_viewpoint() {
        let vp = Viewpoint::from_rig(
            &CameraRig::default(),
            &CameraOptions::default(),
            2.0,
        );
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&vp);
        assert_eq!(uniform.position, vp.eye.to_array());
        assert_eq!(uniform.aspect, 2.0);
        assert_eq!(uniform.fovy, 30.0);
        assert_eq!(size_of::<CameraUniform>(), 96);
    }
}
