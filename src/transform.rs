//! Per-frame transform pipeline.
//!
//! Composes the drag-driven model rotation with a fixed look-at view and a
//! perspective projection into one combined matrix. Both tori share this
//! single transform; there are no per-mesh transforms.

use glam::{Mat4, Vec3};

/// Camera eye position; the view always looks at the origin with +Y up.
pub const EYE: Vec3 = Vec3::new(0.0, 0.0, -6.0);
/// Vertical field of view in radians (45 degrees).
pub const FOV_Y: f32 = std::f32::consts::FRAC_PI_4;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;

/// Builds the combined matrix for the given orbit angles and aspect ratio.
///
/// Model rotation is yaw about Y, then pitch about X, applied to an
/// identity matrix in that order; the order decides which drag axis maps
/// to which visual rotation. Multiplication is projection outermost,
/// model innermost, so model transforms hit vertex-local coordinates
/// first:
///
/// ```text
/// combined = P * V * Ry(theta) * Rx(phi)
/// ```
pub fn combined_matrix(theta: f32, phi: f32, aspect_ratio: f32) -> Mat4 {
    let model = Mat4::from_rotation_y(theta) * Mat4::from_rotation_x(phi);
    let view = Mat4::look_at_rh(EYE, Vec3::ZERO, Vec3::Y);
    let proj = Mat4::perspective_rh(FOV_Y, aspect_ratio, Z_NEAR, Z_FAR);
    proj * view * model
}
