pub mod camera;
pub mod cli;
pub mod config;
pub mod grid;
pub mod input;
pub mod math;
pub mod projection;
pub mod renderer;
pub mod types;

pub use camera::CameraController;
pub use config::ViewerConfig;
pub use math::Frame;
