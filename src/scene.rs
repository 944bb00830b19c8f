//! Scene orchestration: owned meshes, the shared transform, and time.
//!
//! [`SceneRenderer`] generates its tori once at startup and owns them for
//! its whole lifetime; per frame it advances elapsed time, computes the
//! combined matrix once, and draws every mesh with that shared state.

use std::sync::Arc;
use std::time::Instant;

use crate::gpu::GpuContext;
use crate::mesh::Mesh;
use crate::orbit::OrbitController;
use crate::shading::LIGHT_DIR;
use crate::torus::{TorusError, TorusGeometry, TorusSpec};
use crate::torus_pass::{FrameUniforms, TorusPass};
use crate::transform::combined_matrix;

/// The reference scene: a large and a small torus sharing one transform.
pub fn reference_specs(resolution: u32) -> [TorusSpec; 2] {
    [
        TorusSpec::new(2.0, 0.5, resolution, resolution),
        TorusSpec::new(1.5, 0.3, resolution, resolution),
    ]
}

/// Owns the generated meshes and drives per-frame rendering.
pub struct SceneRenderer {
    pass: TorusPass,
    meshes: Vec<Mesh>,
    orbit: Arc<OrbitController>,
    start: Instant,
}

impl SceneRenderer {
    /// Generates and uploads one mesh per spec. Fails fast on a degenerate
    /// spec rather than uploading a corrupt mesh.
    pub fn new(
        gpu: &GpuContext,
        specs: &[TorusSpec],
        orbit: Arc<OrbitController>,
    ) -> Result<Self, TorusError> {
        let mut meshes = Vec::with_capacity(specs.len());
        for spec in specs {
            let geometry = TorusGeometry::generate(spec)?;
            log::info!(
                "torus R={} r={}: {} vertices, {} triangles",
                spec.major_radius,
                spec.minor_radius,
                geometry.vertices.len(),
                geometry.indices.len() / 3
            );
            meshes.push(Mesh::from_geometry(gpu, &geometry));
        }

        Ok(Self {
            pass: TorusPass::new(gpu),
            meshes,
            orbit,
            start: Instant::now(),
        })
    }

    /// Renders one frame to the given surface view.
    ///
    /// Time comes from the monotonic clock started at construction and
    /// never resets; the combined matrix is computed once from the current
    /// orbit angles and shared by both tori.
    pub fn render_frame(&mut self, gpu: &GpuContext, target: &wgpu::TextureView) {
        self.pass.ensure_depth_size(gpu);

        let (theta, phi) = self.orbit.angles();
        let uniforms = FrameUniforms {
            mvp: combined_matrix(theta, phi, gpu.aspect()).to_cols_array_2d(),
            light_dir: LIGHT_DIR.to_array(),
            time: self.start.elapsed().as_secs_f32(),
        };

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Scene Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Torus Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: self.pass.depth_view(),
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.pass.render(gpu, &mut render_pass, uniforms, &self.meshes);
        }

        gpu.queue.submit(std::iter::once(encoder.finish()));
    }
}
