use glam::{Mat4, Vec3};

/// View-projection uniform for the line shader
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ViewUniform {
    pub view_proj: [[f32; 4]; 4],
    pub color: [f32; 3],
    pub _pad: f32,
}

impl ViewUniform {
    pub fn new(view_proj: Mat4, color: [f32; 3]) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            color,
            _pad: 0.0,
        }
    }
}

/// One end of a grid line
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
}

impl LineVertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    pub fn from_segments(segments: &[[Vec3; 2]]) -> Vec<Self> {
        segments
            .iter()
            .flatten()
            .map(|p| Self {
                position: p.to_array(),
            })
            .collect()
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}
