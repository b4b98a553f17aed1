use glam::Mat4;

use crate::config::ProjectionConfig;

pub const FOVY_DEGREES: f32 = 35.0;
pub const NEAR_PLANE: f32 = 1.0;
pub const FAR_PLANE: f32 = 50.0;

/// Perspective projection that tracks the window's aspect ratio
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fovy_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub aspect: f32,
}

impl Projection {
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_config(&ProjectionConfig::default(), width, height)
    }

    pub fn from_config(config: &ProjectionConfig, width: u32, height: u32) -> Self {
        let mut projection = Self {
            fovy_degrees: config.fovy_degrees,
            near: config.near,
            far: config.far,
            aspect: 1.0,
        };
        projection.resize(width, height);
        projection
    }

    /// Recompute the aspect ratio. A zero height is treated as 1; a zero
    /// width (minimized window) keeps the previous aspect.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 {
            return;
        }
        let height = height.max(1);
        self.aspect = width as f32 / height as f32;
    }

    /// Right-handed perspective with a [0, 1] depth range
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_degrees.to_radians(), self.aspect, self.near, self.far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_aspect_from_size() {
        let projection = Projection::new(800, 600);
        assert!((projection.aspect - 800.0 / 600.0).abs() < 1e-6);
        assert_eq!(projection.fovy_degrees, 35.0);
    }

    #[test]
    fn test_zero_height_is_clamped() {
        let mut projection = Projection::new(800, 600);
        projection.resize(640, 0);
        assert_eq!(projection.aspect, 640.0);
        assert!(projection.matrix().is_finite());
    }

    #[test]
    fn test_zero_width_keeps_previous_aspect() {
        let mut projection = Projection::new(800, 600);
        let before = projection.aspect;
        projection.resize(0, 600);
        assert_eq!(projection.aspect, before);
        assert!(projection.matrix().is_finite());

        let minimized = Projection::new(0, 600);
        assert_eq!(minimized.aspect, 1.0);
        assert!(minimized.matrix().is_finite());
    }

    #[test]
    fn test_near_and_far_planes_map_to_depth_range() {
        let projection = Projection::new(100, 100);
        let m = projection.matrix();
        let near = m.project_point3(Vec3::new(0.0, 0.0, -1.0));
        let far = m.project_point3(Vec3::new(0.0, 0.0, -50.0));
        assert!(near.z.abs() < 1e-5);
        assert!((far.z - 1.0).abs() < 1e-5);
    }
}
