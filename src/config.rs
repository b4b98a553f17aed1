use std::{fs::File, io::BufReader, path::Path};

use anyhow::{bail, ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::camera::{CAMERA_SPEED, CAMERA_YAW_DEGREES};
use crate::cli::Cli;
use crate::grid::{GroundGrid, GRID_EXTENT, GRID_HEIGHT, GRID_STEP, MAX_GRID_LINES};
use crate::projection::{FAR_PLANE, FOVY_DEGREES, NEAR_PLANE};

/// Full viewer configuration. Every field has a default, so a config file
/// only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub grid: GridConfig,
    pub projection: ProjectionConfig,
    /// Background RGBA
    pub clear_color: [f64; 4],
    pub show_hud: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub move_step: f32,
    pub yaw_step_degrees: f32,
    pub renormalize_every: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub extent: f32,
    pub step: f32,
    pub height: f32,
    pub color: [f32; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub fovy_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
            grid: GridConfig::default(),
            projection: ProjectionConfig::default(),
            clear_color: [0.0, 0.0, 0.5, 1.0],
            show_hud: true,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Frame Viewer".to_string(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            move_step: CAMERA_SPEED,
            yaw_step_degrees: CAMERA_YAW_DEGREES,
            renormalize_every: 0,
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            extent: GRID_EXTENT,
            step: GRID_STEP,
            height: GRID_HEIGHT,
            color: [1.0, 1.0, 1.0],
        }
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            fovy_degrees: FOVY_DEGREES,
            near: NEAR_PLANE,
            far: FAR_PLANE,
        }
    }
}

impl ViewerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse config")
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Build the effective configuration: defaults, then the config file if
    /// one was given, then command-line overrides.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(step) = cli.move_step {
            self.camera.move_step = step;
        }
        if let Some(step) = cli.yaw_step {
            self.camera.yaw_step_degrees = step;
        }
        if let Some(width) = cli.width {
            self.window.width = width;
        }
        if let Some(height) = cli.height {
            self.window.height = height;
        }
        if cli.no_ui {
            self.show_hud = false;
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.window.width > 0 && self.window.height > 0,
            "window size must be non-zero, got {}x{}",
            self.window.width,
            self.window.height
        );
        ensure_positive("camera.move_step", self.camera.move_step)?;
        ensure_positive("camera.yaw_step_degrees", self.camera.yaw_step_degrees)?;
        ensure_positive("grid.step", self.grid.step)?;
        ensure_positive("grid.extent", self.grid.extent)?;
        ensure!(self.grid.height.is_finite(), "grid.height must be finite");
        let lines = GroundGrid::from_config(&self.grid).line_count();
        ensure!(
            lines <= MAX_GRID_LINES,
            "grid.extent / grid.step gives {} lines per axis, at most {} allowed",
            lines,
            MAX_GRID_LINES
        );

        let projection = &self.projection;
        ensure!(
            projection.fovy_degrees > 0.0 && projection.fovy_degrees < 180.0,
            "projection.fovy_degrees must be in (0, 180), got {}",
            projection.fovy_degrees
        );
        ensure_positive("projection.near", projection.near)?;
        ensure!(
            projection.far.is_finite() && projection.far > projection.near,
            "projection.far ({}) must be greater than projection.near ({})",
            projection.far,
            projection.near
        );
        Ok(())
    }
}

fn ensure_positive(name: &str, value: f32) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        bail!("{} must be a positive finite number, got {}", name, value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ViewerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.window.width, 800);
        assert_eq!(config.projection.fovy_degrees, 35.0);
        assert_eq!(config.clear_color, [0.0, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ViewerConfig::from_json_str(r#"{ "camera": { "move_step": 0.5 } }"#).unwrap();
        assert_eq!(config.camera.move_step, 0.5);
        assert_eq!(config.camera.yaw_step_degrees, 0.1);
        assert_eq!(config.grid, GridConfig::default());
    }

    #[test]
    fn test_rejects_bad_projection() {
        let mut config = ViewerConfig::default();
        config.projection.far = 0.5;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("projection.far"));
    }

    fn validation_error(config: &ViewerConfig) -> String {
        config.validate().unwrap_err().to_string()
    }

    #[test]
    fn test_rejects_zero_window_size() {
        let mut config = ViewerConfig::default();
        config.window.width = 0;
        assert!(validation_error(&config).contains("window size"));

        let mut config = ViewerConfig::default();
        config.window.height = 0;
        assert!(validation_error(&config).contains("window size"));
    }

    #[test]
    fn test_rejects_fov_out_of_range() {
        for fov in [0.0, -10.0, 180.0, 270.0] {
            let mut config = ViewerConfig::default();
            config.projection.fovy_degrees = fov;
            assert!(
                validation_error(&config).contains("projection.fovy_degrees"),
                "fov {}",
                fov
            );
        }
    }

    #[test]
    fn test_rejects_non_positive_near() {
        for near in [0.0, -1.0] {
            let mut config = ViewerConfig::default();
            config.projection.near = near;
            assert!(validation_error(&config).contains("projection.near"), "near {}", near);
        }
    }

    #[test]
    fn test_rejects_non_positive_grid_step() {
        for step in [0.0, -1.0] {
            let mut config = ViewerConfig::default();
            config.grid.step = step;
            assert!(validation_error(&config).contains("grid.step"), "step {}", step);
        }
    }

    #[test]
    fn test_rejects_oversized_grid() {
        let mut config = ViewerConfig::default();
        config.grid.extent = 1e7;
        config.grid.step = 1e-3;
        assert!(validation_error(&config).contains("lines per axis"));
    }

    #[test]
    fn test_rejects_nan_step() {
        let mut config = ViewerConfig::default();
        config.camera.move_step = f32::NAN;
        assert!(config.validate().is_err());
    }
}
