//! Torus render pass: pipeline, frame uniforms, and depth buffer.
//!
//! One bind group carries everything the shader needs per frame: the
//! shared combined matrix, the fixed light direction, and elapsed time.
//! Uniforms are written once per frame; each mesh then issues one indexed
//! draw against the same state.

use crate::gpu::GpuContext;
use crate::mesh::{Mesh, Vertex};

/// Per-frame shading inputs, uploaded once and shared by every mesh.
///
/// Layout matches the WGSL `FrameUniforms` struct: the vec3 light
/// direction is 16-byte aligned after the matrix and `time` packs into
/// its trailing padding.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    /// Combined projection * view * model matrix.
    pub mvp: [[f32; 4]; 4],
    /// Unit light direction.
    pub light_dir: [f32; 3],
    /// Elapsed time in seconds.
    pub time: f32,
}

/// Renders noise-shaded tori with depth testing.
pub struct TorusPass {
    pipeline: wgpu::RenderPipeline,
    frame_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    depth_view: wgpu::TextureView,
    depth_size: (u32, u32),
}

impl TorusPass {
    /// Creates the pipeline, the frame uniform buffer, and a depth buffer
    /// sized to the current surface.
    pub fn new(gpu: &GpuContext) -> Self {
        let device = &gpu.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Torus Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/torus.wgsl").into()),
        });

        let frame_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Frame Uniforms"),
            size: std::mem::size_of::<FrameUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let frame_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Frame Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Frame Bind Group"),
            layout: &frame_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Torus Pipeline Layout"),
            bind_group_layouts: &[&frame_bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Torus Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs"),
                buffers: &[Vertex::LAYOUT],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: gpu.config.format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                // The quad split yields mixed winding and the scene is
                // watertight tori seen from outside; depth testing alone
                // sorts it out.
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let depth_view = Self::create_depth_view(gpu);

        Self {
            pipeline,
            frame_buffer,
            frame_bind_group,
            depth_view,
            depth_size: gpu.surface_size(),
        }
    }

    fn create_depth_view(gpu: &GpuContext) -> wgpu::TextureView {
        let (width, height) = gpu.surface_size();
        let texture = gpu.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Depth32Float,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    /// Recreates the depth buffer if the surface was resized since the
    /// last frame.
    pub fn ensure_depth_size(&mut self, gpu: &GpuContext) {
        if self.depth_size != gpu.surface_size() {
            self.depth_view = Self::create_depth_view(gpu);
            self.depth_size = gpu.surface_size();
        }
    }

    /// View of the depth texture for render pass attachment.
    pub fn depth_view(&self) -> &wgpu::TextureView {
        &self.depth_view
    }

    /// Uploads the frame uniforms and draws each mesh.
    ///
    /// All meshes share one combined matrix, light direction, and time
    /// value; the pass writes the uniform buffer once and issues one
    /// indexed draw per mesh.
    pub fn render(
        &self,
        gpu: &GpuContext,
        render_pass: &mut wgpu::RenderPass,
        uniforms: FrameUniforms,
        meshes: &[Mesh],
    ) {
        if meshes.is_empty() {
            return;
        }

        gpu.queue
            .write_buffer(&self.frame_buffer, 0, bytemuck::cast_slice(&[uniforms]));

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.frame_bind_group, &[]);

        for mesh in meshes {
            render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            render_pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            render_pass.draw_indexed(0..mesh.index_count, 0, 0..1);
        }
    }
}
