//! # Gyre
//!
//! **Two interlocking tori, fractal-noise shading, and an orbit you drive
//! by dragging.**
//!
//! Gyre procedurally tessellates a pair of tori, renders them with wgpu,
//! and shades every fragment with a layered sinusoidal noise field plus a
//! reciprocal particle overlay. Dragging the pointer accumulates yaw and
//! pitch that spin the whole scene.
//!
//! The shading math lives twice on purpose: once in WGSL for the render
//! path, and once as pure Rust ([`fractal_noise`], [`shade`]) so every
//! constant is testable on the CPU, sample by sample.
//!
//! ## Structure
//!
//! - [`TorusSpec`] / [`TorusGeometry`] — parametric tessellation with a
//!   closed, seamless index topology
//! - [`OrbitController`] / [`DragTracker`] — drag deltas to accumulated
//!   angles, safe to feed from another thread
//! - [`combined_matrix`] — model rotation, look-at view, and perspective
//!   projection folded into one matrix per frame
//! - [`SceneRenderer`] — owns the meshes and draws them each frame

mod gpu;
mod mesh;
pub mod noise;
mod orbit;
mod scene;
pub mod shading;
mod torus;
mod torus_pass;
pub mod transform;

pub use gpu::GpuContext;
pub use mesh::{Mesh, Vertex};
pub use noise::{fractal_noise, particle_field};
pub use orbit::{DRAG_SCALE, DragTracker, OrbitController};
pub use scene::{SceneRenderer, reference_specs};
pub use shading::{LIGHT_DIR, shade};
pub use torus::{TorusError, TorusGeometry, TorusSpec};
pub use torus_pass::{FrameUniforms, TorusPass};
pub use transform::combined_matrix;

// Re-export glam math types for convenience
pub use glam::{Mat4, Vec2, Vec3, Vec4};
