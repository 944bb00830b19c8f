//! wgpu surface, device, and queue bring-up.
//!
//! [`GpuContext`] owns the fundamental wgpu objects and is passed by
//! reference everywhere rendering happens. Fields are public so callers
//! can reach the raw wgpu API when they need it. Bring-up is fallible:
//! errors carry context and surface to the binary's `anyhow` boundary.

use anyhow::{Context, Result};
use std::sync::Arc;
use winit::window::Window;

/// Backends offered to adapter selection.
const BACKENDS: wgpu::Backends = wgpu::Backends::PRIMARY;
/// Fifo is available everywhere and paces the continuous redraw loop at
/// the display refresh rate, which is the cadence the scene wants.
const PRESENT_MODE: wgpu::PresentMode = wgpu::PresentMode::Fifo;
const FRAME_LATENCY: u32 = 2;

/// Core GPU context holding wgpu resources.
pub struct GpuContext {
    /// Surface presenting rendered frames to the window.
    pub surface: wgpu::Surface<'static>,
    /// Logical device for creating resources and pipelines.
    pub device: wgpu::Device,
    /// Command queue for submitting work.
    pub queue: wgpu::Queue,
    /// Current surface configuration (format, size, present mode).
    pub config: wgpu::SurfaceConfiguration,
}

impl GpuContext {
    /// Brings up wgpu for a window: instance, surface, adapter, and
    /// device/queue, then configures the surface with an sRGB format and
    /// [`PRESENT_MODE`].
    pub fn new(window: Arc<Window>) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: BACKENDS,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .context("failed to create rendering surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("no suitable GPU adapter")?;

        log::info!("using adapter: {}", adapter.get_info().name);

        let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
            label: Some("Gyre Device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            memory_hints: Default::default(),
            trace: Default::default(),
            experimental_features: Default::default(),
        }))
        .context("failed to create GPU device")?;

        let caps = surface.get_capabilities(&adapter);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: preferred_surface_format(&caps.formats),
            width: size.width,
            height: size.height,
            present_mode: PRESENT_MODE,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: FRAME_LATENCY,
        };
        surface.configure(&device, &config);

        Ok(Self {
            surface,
            device,
            queue,
            config,
        })
    }

    /// Resizes the surface. Meshes are untouched; only the aspect ratio
    /// fed to the transform pipeline changes.
    pub fn resize(&mut self, width: u32, height: u32) {
        // Minimized windows report zero; reconfiguring at 0x0 trips wgpu
        // validation.
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Current surface size in pixels.
    pub fn surface_size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    /// Current aspect ratio (width / height).
    pub fn aspect(&self) -> f32 {
        let (width, height) = self.surface_size();
        width as f32 / height as f32
    }
}

/// Picks an sRGB format when the surface offers one, otherwise falls back
/// to the first supported format.
fn preferred_surface_format(formats: &[wgpu::TextureFormat]) -> wgpu::TextureFormat {
    formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .unwrap_or(formats[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srgb_format_is_preferred() {
        let formats = [
            wgpu::TextureFormat::Bgra8Unorm,
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ];
        assert_eq!(
            preferred_surface_format(&formats),
            wgpu::TextureFormat::Bgra8UnormSrgb
        );
    }

    #[test]
    fn falls_back_to_first_format_without_srgb() {
        let formats = [
            wgpu::TextureFormat::Rgba16Float,
            wgpu::TextureFormat::Bgra8Unorm,
        ];
        assert_eq!(
            preferred_surface_format(&formats),
            wgpu::TextureFormat::Rgba16Float
        );
    }
}
