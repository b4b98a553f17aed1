use glam::Vec3;

use crate::config::GridConfig;

pub const GRID_EXTENT: f32 = 20.0;
pub const GRID_STEP: f32 = 1.0;
pub const GRID_HEIGHT: f32 = -0.4;
/// Upper bound on lines per axis, keeps the vertex buffer small
pub const MAX_GRID_LINES: usize = 100_000;

/// Flat wireframe lattice at a fixed height, spanning `[-extent, extent]`
/// on X and Z
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundGrid {
    pub extent: f32,
    pub step: f32,
    pub height: f32,
}

impl GroundGrid {
    pub fn new(extent: f32, step: f32, height: f32) -> Self {
        Self {
            extent,
            step,
            height,
        }
    }

    pub fn from_config(config: &GridConfig) -> Self {
        Self::new(config.extent, config.step, config.height)
    }

    /// Number of line positions per axis
    pub fn line_count(&self) -> usize {
        if !(self.step > 0.0 && self.extent >= 0.0) {
            return 0;
        }
        let span = 2.0 * self.extent / self.step;
        if !span.is_finite() {
            return usize::MAX;
        }
        (span + 1e-4).floor() as usize + 1
    }

    /// Line offsets from `-extent` to `extent` inclusive.
    ///
    /// Computed from the index so long grids don't accumulate error. An
    /// offset that lands within rounding of the far edge snaps to `extent`.
    pub fn offsets(&self) -> impl Iterator<Item = f32> {
        let (start, step, end) = (-self.extent, self.step, self.extent);
        (0..self.line_count()).map(move |k| (start + k as f32 * step).min(end))
    }

    /// Independent line segments: for each offset, one line along Z then
    /// one line along X
    pub fn segments(&self) -> Vec<[Vec3; 2]> {
        let (e, y) = (self.extent, self.height);
        self.offsets()
            .flat_map(|i| {
                [
                    [Vec3::new(i, y, e), Vec3::new(i, y, -e)],
                    [Vec3::new(e, y, i), Vec3::new(-e, y, i)],
                ]
            })
            .collect()
    }

    pub fn vertex_count(&self) -> usize {
        self.line_count().saturating_mul(4)
    }
}

impl Default for GroundGrid {
    fn default() -> Self {
        Self::new(GRID_EXTENT, GRID_STEP, GRID_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_offsets() {
        let offsets: Vec<f32> = GroundGrid::default().offsets().collect();
        assert_eq!(offsets.len(), 41);
        assert_eq!(offsets[0], -20.0);
        assert_eq!(offsets[20], 0.0);
        assert_eq!(offsets[40], 20.0);
    }

    #[test]
    fn test_non_positive_step_is_empty() {
        assert_eq!(GroundGrid::new(20.0, 0.0, 0.0).segments().len(), 0);
        assert_eq!(GroundGrid::new(20.0, -1.0, 0.0).vertex_count(), 0);
    }

    #[test]
    fn test_line_count_of_huge_grid() {
        let grid = GroundGrid::new(1e7, 1e-3, 0.0);
        assert!(grid.line_count() > MAX_GRID_LINES);
        assert_eq!(GroundGrid::new(f32::MAX, f32::MIN_POSITIVE, 0.0).line_count(), usize::MAX);
    }

    #[test]
    fn test_fractional_step_reaches_extent() {
        let grid = GroundGrid::new(1.0, 0.1, 0.0);
        let offsets: Vec<f32> = grid.offsets().collect();
        assert_eq!(offsets.len(), 21);
        assert!((offsets[20] - 1.0).abs() < 1e-5);
    }
}
