//! GPU mesh upload and the vertex format shared with the shader.
//!
//! Vertices carry only an object-space position: the shading model derives
//! its normal analytically at fragment time, so storing normals or UVs
//! would be dead weight.

use crate::gpu::GpuContext;
use crate::torus::TorusGeometry;

/// A position-only vertex, 12 bytes on the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Object-space position.
    pub position: [f32; 3],
}

impl Vertex {
    /// Vertex buffer layout: a single `Float32x3` attribute at location 0.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[wgpu::VertexAttribute {
            offset: 0,
            shader_location: 0,
            format: wgpu::VertexFormat::Float32x3,
        }],
    };

    pub fn new(position: [f32; 3]) -> Self {
        Self { position }
    }
}

/// GPU-resident geometry: vertex and u32 index buffers.
///
/// Buffers are written once at creation and read-only afterwards; meshes
/// live for the renderer's lifetime and are never remeshed at runtime.
#[derive(Debug)]
pub struct Mesh {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
}

impl Mesh {
    /// Uploads vertex and index data to GPU buffers.
    pub fn new(gpu: &GpuContext, vertices: &[Vertex], indices: &[u32]) -> Self {
        use wgpu::util::DeviceExt;

        let vertex_buffer = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Torus Vertex Buffer"),
                contents: bytemuck::cast_slice(vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let index_buffer = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Torus Index Buffer"),
                contents: bytemuck::cast_slice(indices),
                usage: wgpu::BufferUsages::INDEX,
            });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }

    /// Uploads generated torus geometry.
    pub fn from_geometry(gpu: &GpuContext, geometry: &TorusGeometry) -> Self {
        Self::new(gpu, &geometry.vertices, &geometry.indices)
    }
}
