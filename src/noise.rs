//! Cheap smooth pseudo-noise.
//!
//! Products of offset sinusoids at incommensurate frequencies. Continuous in
//! position and time, roughly zero-mean in `[-1, 1]`, and far cheaper than a
//! gradient noise table. Good enough for a subtle organic breathing term.

use glam::Vec3;

pub fn organic(p: Vec3, t: f32) -> f32 {
    let a = (p.x * 1.7 + t).sin() * (p.y * 1.3 + t * 0.8).cos();
    let b = (p.y * 2.3 - t * 0.6).sin() * (p.z * 1.9 + t * 1.1).cos();
    let c = (p.z * 1.1 + t * 0.9).sin() * (p.x * 2.9 - t * 0.7).cos();
    (a + b + c) / 3.0
}
