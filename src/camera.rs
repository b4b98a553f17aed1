use glam::Mat4;

use crate::config::CameraConfig;
use crate::input::Command;
use crate::math::{init_frame, move_frame_forward, rotate_frame_local_y, Frame};

pub const CAMERA_SPEED: f32 = 0.1;
pub const CAMERA_YAW_DEGREES: f32 = 0.1;

/// Owns the camera frame and turns input commands into frame updates
#[derive(Debug, Clone)]
pub struct CameraController {
    frame: Frame,
    move_step: f32,
    yaw_step_degrees: f32,
    /// Re-orthonormalize after this many yaw steps (0 disables)
    renormalize_every: u32,
    rotations_since_renormalize: u32,
}

impl CameraController {
    pub fn new() -> Self {
        Self::with_steps(CAMERA_SPEED, CAMERA_YAW_DEGREES)
    }

    pub fn with_steps(move_step: f32, yaw_step_degrees: f32) -> Self {
        Self {
            frame: Frame::new(),
            move_step,
            yaw_step_degrees,
            renormalize_every: 0,
            rotations_since_renormalize: 0,
        }
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        let mut controller = Self::with_steps(config.move_step, config.yaw_step_degrees);
        controller.renormalize_every = config.renormalize_every;
        controller
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn move_step(&self) -> f32 {
        self.move_step
    }

    pub fn yaw_step_degrees(&self) -> f32 {
        self.yaw_step_degrees
    }

    /// Apply one command to the frame
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::MoveForward => move_frame_forward(&mut self.frame, self.move_step),
            Command::MoveBackward => move_frame_forward(&mut self.frame, -self.move_step),
            Command::YawLeft => self.yaw(self.yaw_step_degrees),
            Command::YawRight => self.yaw(-self.yaw_step_degrees),
        }

        log::debug!(
            "{:?} -> location {:?}, forward {:?}",
            command,
            self.frame.location,
            self.frame.forward
        );
    }

    fn yaw(&mut self, angle_degrees: f32) {
        rotate_frame_local_y(&mut self.frame, angle_degrees);

        if self.renormalize_every == 0 {
            return;
        }
        self.rotations_since_renormalize += 1;
        if self.rotations_since_renormalize >= self.renormalize_every {
            self.frame.orthonormalize();
            self.rotations_since_renormalize = 0;
        }
    }

    /// Put the camera back at its initial position and orientation
    pub fn reset(&mut self) {
        init_frame(&mut self.frame);
        self.rotations_since_renormalize = 0;
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.frame.view_transform()
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_default_steps() {
        let camera = CameraController::default();
        assert_eq!(camera.move_step(), 0.1);
        assert_eq!(camera.yaw_step_degrees(), 0.1);
        assert_eq!(*camera.frame(), Frame::new());
    }

    #[test]
    fn test_forward_and_backward_cancel() {
        let mut camera = CameraController::with_steps(0.5, 1.0);
        camera.apply(Command::MoveForward);
        assert_eq!(camera.frame().location, Vec3::new(0.0, 0.0, -0.5));
        camera.apply(Command::MoveBackward);
        assert_eq!(camera.frame().location, Vec3::ZERO);
    }

    #[test]
    fn test_yaw_left_then_right_cancels() {
        let mut camera = CameraController::with_steps(0.1, 15.0);
        camera.apply(Command::YawLeft);
        assert!(camera.frame().forward.x < 0.0);
        camera.apply(Command::YawRight);
        assert!(camera.frame().forward.abs_diff_eq(Vec3::NEG_Z, 1e-6));
    }

    #[test]
    fn test_reset() {
        let mut camera = CameraController::new();
        camera.apply(Command::MoveForward);
        camera.apply(Command::YawRight);
        camera.reset();
        assert_eq!(*camera.frame(), Frame::new());
    }

    #[test]
    fn test_renormalize_interval() {
        let config = CameraConfig {
            move_step: 0.1,
            yaw_step_degrees: 7.0,
            renormalize_every: 3,
        };
        let mut camera = CameraController::from_config(&config);
        for _ in 0..2 {
            camera.apply(Command::YawLeft);
        }
        assert_eq!(camera.rotations_since_renormalize, 2);
        camera.apply(Command::YawLeft);
        assert_eq!(camera.rotations_since_renormalize, 0);
        assert!((camera.frame().forward.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_view_matrix_follows_frame() {
        let mut camera = CameraController::with_steps(2.0, 0.1);
        camera.apply(Command::MoveForward);
        let view = camera.view_matrix();
        // Camera sits at z = -2, so the world origin is 2 units behind it
        let origin = view.transform_point3(Vec3::ZERO);
        assert!(origin.abs_diff_eq(Vec3::new(0.0, 0.0, 2.0), 1e-6));
    }
}
