use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use gyre::{DRAG_SCALE, DragTracker, GpuContext, OrbitController, SceneRenderer, Vec2, reference_specs};

#[derive(Parser, Debug)]
#[command(name = "gyre")]
#[command(about = "Interactive twin-torus visualizer with fractal-noise shading", long_about = None)]
struct Cli {
    /// Angular tessellation resolution per torus dimension
    #[arg(long, default_value_t = 512)]
    resolution: u32,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 900)]
    width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 900)]
    height: u32,
}

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    scene: Option<SceneRenderer>,
    orbit: Arc<OrbitController>,
    drag: DragTracker,
    dragging: bool,
}

impl App {
    fn new(cli: Cli) -> Self {
        Self {
            cli,
            window: None,
            gpu: None,
            scene: None,
            orbit: Arc::new(OrbitController::new()),
            drag: DragTracker::new(),
            dragging: false,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let window = Arc::new(
            event_loop
                .create_window(
                    Window::default_attributes()
                        .with_title("gyre")
                        .with_inner_size(LogicalSize::new(self.cli.width, self.cli.height)),
                )
                .expect("failed to create window"),
        );

        let gpu = match GpuContext::new(window.clone()) {
            Ok(gpu) => gpu,
            Err(e) => {
                log::error!("GPU initialization failed: {:#}", e);
                event_loop.exit();
                return;
            }
        };
        let specs = reference_specs(self.cli.resolution);
        match SceneRenderer::new(&gpu, &specs, self.orbit.clone()) {
            Ok(scene) => self.scene = Some(scene),
            Err(e) => {
                log::error!("mesh generation failed: {}", e);
                event_loop.exit();
                return;
            }
        }

        self.gpu = Some(gpu);
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(size.width, size.height);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left {
                    self.dragging = state == ElementState::Pressed;
                    if !self.dragging {
                        self.drag.release();
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if self.dragging {
                    let pos = Vec2::new(position.x as f32, position.y as f32);
                    if let Some(delta) = self.drag.sample(pos) {
                        self.orbit.apply_drag(delta.x, delta.y, DRAG_SCALE);
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                if let (Some(gpu), Some(scene)) = (&self.gpu, &mut self.scene) {
                    match gpu.surface.get_current_texture() {
                        Ok(output) => {
                            let view = output
                                .texture
                                .create_view(&wgpu::TextureViewDescriptor::default());
                            scene.render_frame(gpu, &view);
                            output.present();
                        }
                        Err(e) => log::warn!("dropped frame: {}", e),
                    }
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => (),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(cli);
    event_loop.run_app(&mut app).context("event loop failed")?;
    Ok(())
}
