//! Layered sinusoidal noise and the particle-field overlay derived from it.
//!
//! These are the CPU twins of the functions in `shaders/torus.wgsl`. The
//! render path evaluates them per fragment on the GPU; keeping the same
//! formulas here makes every constant testable without a device.
//!
//! Both functions are pure: identical inputs always produce identical
//! outputs, and they are defined for all finite inputs.

use glam::Vec3;

/// Number of octaves summed by [`fractal_noise`].
pub const OCTAVES: u32 = 4;

/// Evaluates layered sinusoidal noise at a point.
///
/// Starting from frequency `4.0 * scale` and amplitude `0.12`, each octave
/// adds `amp * sin(freq*x + time) * cos(freq*y) * sin(freq*z)`, then raises
/// the frequency by 2.1x and drops the amplitude to 0.45x. The sum is a
/// classic fractal shaping, not normalized; empirically it stays within
/// roughly [-0.3, 0.3].
pub fn fractal_noise(p: Vec3, scale: f32, time: f32) -> f32 {
    let mut n = 0.0;
    let mut freq = 4.0 * scale;
    let mut amp = 0.12;
    for _ in 0..OCTAVES {
        n += amp * (freq * p.x + time).sin() * (freq * p.y).cos() * (freq * p.z).sin();
        freq *= 2.1;
        amp *= 0.45;
    }
    n
}

/// Reciprocal spike transform of the noise field.
///
/// Bright filaments appear wherever the underlying noise crosses near zero.
/// The 0.01 offset keeps the denominator away from zero; without it this
/// divides by zero at every noise root.
pub fn particle_field(p: Vec3, time: f32) -> f32 {
    let n = fractal_noise(p * 2.0, 1.0, time);
    0.02 / (0.01 + n.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noise_is_deterministic() {
        let p = Vec3::new(1.3, -0.7, 2.9);
        let a = fractal_noise(p, 1.0, 12.5);
        let b = fractal_noise(p, 1.0, 12.5);
        assert_eq!(a, b);
    }

    #[test]
    fn noise_stays_small() {
        // Amplitude sum is 0.12 * (1 + 0.45 + 0.45^2 + 0.45^3) < 0.22,
        // so the octave sum can never leave that band.
        let bound = 0.12 * (1.0 + 0.45 + 0.45 * 0.45 + 0.45 * 0.45 * 0.45);
        for i in 0..200 {
            let t = i as f32 * 0.37;
            let p = Vec3::new((i as f32).sin() * 3.0, t.cos() * 2.0, i as f32 * 0.11);
            let n = fractal_noise(p, 1.0, t);
            assert!(n.abs() <= bound, "noise {} out of bound at {:?}", n, p);
        }
    }

    #[test]
    fn noise_vanishes_on_zero_plane() {
        // sin(freq * 0) = 0 in the z term zeroes every octave.
        let p = Vec3::new(0.4, 1.7, 0.0);
        assert_eq!(fractal_noise(p, 1.0, 3.0), 0.0);
    }

    #[test]
    fn particle_field_is_finite_near_zero_crossings() {
        // The z = 0 plane is an exact noise root, the worst case for the
        // reciprocal. Fuzz points on and just off it.
        for i in 0..500 {
            let t = i as f32 * 0.013;
            let eps = (i as f32 - 250.0) * 1e-6;
            let p = Vec3::new(0.9 * t.sin(), 1.4 * t.cos(), eps);
            let f = particle_field(p, t);
            assert!(f.is_finite(), "particle field not finite at {:?}", p);
            // Denominator guard caps the spike at 0.02 / 0.01.
            assert!(f <= 2.0 + 1e-6);
            assert!(f > 0.0);
        }
    }
}
