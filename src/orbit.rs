//! Drag-driven orbit control.
//!
//! [`OrbitController`] accumulates two angles, yaw (`theta`) and pitch
//! (`phi`), from incremental 2D drag deltas. Neither angle is clamped or
//! wrapped: free-look orbit accumulates without bound, and pitching
//! through the pole is accepted behavior.
//!
//! The angles live in atomic f32-bit cells so an input-delivery thread can
//! feed deltas while the render thread reads the current pair. Each field
//! is individually tear-free; the pair is only eventually consistent
//! across frames, which is all a visual orbit needs.

use glam::Vec2;
use std::sync::atomic::{AtomicU32, Ordering};

/// Drag scale applied to pointer deltas, in radians per pixel.
pub const DRAG_SCALE: f32 = 0.01;

/// Accumulated orbit angles, shared between input and render threads.
#[derive(Debug, Default)]
pub struct OrbitController {
    theta_bits: AtomicU32,
    phi_bits: AtomicU32,
}

impl OrbitController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulates a drag delta: `theta += dx * scale`, `phi += dy * scale`.
    pub fn apply_drag(&self, delta_x: f32, delta_y: f32, scale: f32) {
        add_to(&self.theta_bits, delta_x * scale);
        add_to(&self.phi_bits, delta_y * scale);
    }

    /// Current `(theta, phi)` in radians.
    pub fn angles(&self) -> (f32, f32) {
        (
            f32::from_bits(self.theta_bits.load(Ordering::Relaxed)),
            f32::from_bits(self.phi_bits.load(Ordering::Relaxed)),
        )
    }
}

fn add_to(cell: &AtomicU32, delta: f32) {
    if delta == 0.0 {
        return;
    }
    cell.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |bits| {
        Some((f32::from_bits(bits) + delta).to_bits())
    })
    .ok();
}

/// Turns absolute pointer positions into drag deltas.
///
/// The first sample after a drag starts records the position without
/// emitting a delta; otherwise touching down far from the previous release
/// point would produce a spurious jump.
#[derive(Debug, Default)]
pub struct DragTracker {
    last: Option<Vec2>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the next absolute pointer position while a drag is active.
    /// Returns the delta from the previous sample, or `None` on the first.
    pub fn sample(&mut self, position: Vec2) -> Option<Vec2> {
        let delta = self.last.map(|prev| position - prev);
        self.last = Some(position);
        delta
    }

    /// Call when the drag ends so the next drag starts fresh.
    pub fn release(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_moves_only_its_axis() {
        let orbit = OrbitController::new();
        orbit.apply_drag(3.0, 0.0, 0.5);
        let (theta, phi) = orbit.angles();
        assert_eq!(theta, 1.5);
        assert_eq!(phi, 0.0);

        orbit.apply_drag(0.0, -2.0, 0.5);
        let (theta, phi) = orbit.angles();
        assert_eq!(theta, 1.5);
        assert_eq!(phi, -1.0);
    }

    #[test]
    fn accumulation_is_additive_and_unbounded() {
        let orbit = OrbitController::new();
        for _ in 0..1000 {
            orbit.apply_drag(1.0, 0.0, DRAG_SCALE);
        }
        let (theta, _) = orbit.angles();
        // No clamping and no wraparound: 1000 * 0.01 = 10 radians.
        assert!((theta - 10.0).abs() < 1e-4);
    }

    #[test]
    fn concurrent_drags_all_land() {
        use std::sync::Arc;
        let orbit = Arc::new(OrbitController::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let orbit = orbit.clone();
                std::thread::spawn(move || {
                    for _ in 0..250 {
                        orbit.apply_drag(1.0, 1.0, DRAG_SCALE);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        let (theta, phi) = orbit.angles();
        assert!((theta - 10.0).abs() < 1e-3);
        assert!((phi - 10.0).abs() < 1e-3);
    }

    #[test]
    fn first_sample_emits_no_delta() {
        let mut tracker = DragTracker::new();
        assert_eq!(tracker.sample(Vec2::new(100.0, 50.0)), None);
        assert_eq!(
            tracker.sample(Vec2::new(103.0, 48.0)),
            Some(Vec2::new(3.0, -2.0))
        );

        tracker.release();
        // A new drag at a distant position must not jump.
        assert_eq!(tracker.sample(Vec2::new(500.0, 500.0)), None);
    }
}
