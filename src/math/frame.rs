use glam::{Mat4, Vec3, Vec4};

use super::rotation::{cross_product, rotate_vector, rotation_matrix};

/// Frame of reference: a position plus an up/forward basis.
///
/// `up` and `forward` are expected to stay unit length and orthogonal.
/// Nothing here enforces it; [`Frame::orthonormalize`] can restore it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub location: Vec3,
    pub up: Vec3,
    pub forward: Vec3,
}

impl Frame {
    /// Frame at the origin looking down -Z with +Y up
    pub fn new() -> Self {
        let mut frame = Self {
            location: Vec3::ZERO,
            up: Vec3::ZERO,
            forward: Vec3::ZERO,
        };
        init_frame(&mut frame);
        frame
    }

    pub fn move_forward(&mut self, step: f32) {
        move_frame_forward(self, step);
    }

    pub fn rotate_local_y(&mut self, angle_degrees: f32) {
        rotate_frame_local_y(self, angle_degrees);
    }

    pub fn view_transform(&self) -> Mat4 {
        build_view_transform(self)
    }

    /// Camera-space +X expressed in world space
    pub fn right(&self) -> Vec3 {
        cross_product(self.forward, self.up)
    }

    /// Re-derive `up` so it is orthogonal to `forward`, then normalize both.
    ///
    /// Skipped when the basis is degenerate (`up` parallel to `forward`),
    /// since there is no vertical to recover.
    pub fn orthonormalize(&mut self) {
        let forward = self.forward.normalize_or_zero();
        let right = cross_product(forward, self.up);
        if forward == Vec3::ZERO || right.length_squared() <= f32::EPSILON {
            return;
        }
        self.forward = forward;
        self.up = cross_product(right, forward).normalize();
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

/// Reset a frame to the default viewing position and orientation
pub fn init_frame(frame: &mut Frame) {
    frame.location = Vec3::ZERO;
    frame.up = Vec3::Y;
    frame.forward = Vec3::NEG_Z;
}

/// March the frame along its forward vector. Orientation is untouched.
pub fn move_frame_forward(frame: &mut Frame, step: f32) {
    frame.location += frame.forward * step;
}

/// Yaw the frame about its own up axis by `angle_degrees`.
///
/// Positive angles turn left (counter-clockwise seen from above). `up` is
/// not re-orthogonalized, so very long sequences of calls can drift.
pub fn rotate_frame_local_y(frame: &mut Frame, angle_degrees: f32) {
    let rotation = rotation_matrix(
        angle_degrees.to_radians(),
        frame.up.x,
        frame.up.y,
        frame.up.z,
    );
    frame.forward = rotate_vector(frame.forward, &rotation);
}

/// World-to-camera transform for a frame, equivalent to a look-at from
/// `location` along `forward`.
///
/// The rotation block is the transpose of the camera basis, applied after
/// translating the world by `-location`. `up` must not be parallel to
/// `forward`, otherwise the derived X axis collapses to zero.
pub fn build_view_transform(camera: &Frame) -> Mat4 {
    let z_axis = -camera.forward;
    let x_axis = cross_product(camera.up, z_axis);
    let up = camera.up;

    let rotation = Mat4::from_cols(
        Vec4::new(x_axis.x, up.x, z_axis.x, 0.0),
        Vec4::new(x_axis.y, up.y, z_axis.y, 0.0),
        Vec4::new(x_axis.z, up.z, z_axis.z, 0.0),
        Vec4::W,
    );

    rotation * Mat4::from_translation(-camera.location)
}
