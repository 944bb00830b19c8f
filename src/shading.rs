//! CPU mirror of the fragment shading model.
//!
//! The render path runs this logic per fragment in `shaders/torus.wgsl`;
//! this module is the same formula as pure functions over
//! `(position, light, time)` so the constants and behavior can be tested
//! sample by sample without a GPU. Shading operates on object-space
//! position, before any transform, exactly like the shader's varying.

use crate::noise::{fractal_noise, particle_field};
use glam::{Vec3, Vec4};

/// Fixed light direction, a unit corner diagonal. A tuning constant, kept
/// verbatim from the reference scene.
pub const LIGHT_DIR: Vec3 = Vec3::new(0.577, 0.577, -0.577);

/// Blinn-Phong specular exponent.
pub const SPECULAR_POWER: f32 = 96.0;

/// Noise detail scale for a surface point.
///
/// Points within 2 units of the origin belong to the small torus and get
/// full-scale detail; the large torus gets 0.8. A spatial heuristic, not a
/// precise classification.
pub fn noise_scale(pos: Vec3) -> f32 {
    if pos.length() < 2.0 { 1.0 } else { 0.8 }
}

/// Perturbs the outward-from-origin normal by a scalar noise sample.
///
/// Deliberately cheap: no parametric derivatives, just
/// `normalize(pos + noise * 0.25)`. Replacing this with an exact surface
/// normal changes the visual character, so the approximation is the
/// contract.
pub fn perturbed_normal(pos: Vec3, time: f32) -> Vec3 {
    let n = fractal_noise(pos, noise_scale(pos), time);
    (pos + Vec3::splat(n * 0.25)).normalize()
}

/// Shades one surface sample, returning RGBA.
///
/// Ambient 0.1, diffuse 0.5, specular 0.4, plus 0.3 of the particle-field
/// overlay, all folded into a fixed cyan-leaning tint
/// `(0.2 b, b, 0.7 b, 1)`.
pub fn shade(pos: Vec3, light_dir: Vec3, time: f32) -> Vec4 {
    let normal = perturbed_normal(pos, time);
    let diffuse = normal.dot(light_dir).max(0.0);
    let view_dir = (-pos).normalize();
    let half_vector = (light_dir + view_dir).normalize();
    let specular = normal.dot(half_vector).max(0.0).powf(SPECULAR_POWER);

    let mut brightness = 0.1 + diffuse * 0.5 + specular * 0.4;
    brightness += particle_field(pos, time) * 0.3;

    Vec4::new(0.2 * brightness, brightness, 0.7 * brightness, 1.0)
}
