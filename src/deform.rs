//! The vertex deformation engine.
//!
//! One parameterized implementation shared by the main, floating and orbital
//! bodies: per vertex, an always-on organic noise term plus Gaussian-falloff
//! contributions from nearby influence sources, pushed along the outward
//! radial direction and temporally damped. Output is continuous: targets are
//! continuous functions of time and intensities, and positions only ever move
//! a damped fraction toward them per frame.

use crate::body::DeformableBody;
use crate::constants::*;
use crate::influence::InfluenceSource;
use crate::noise;
use crate::spectrum::BandIntensities;
use glam::Vec3;

/// Advance one body's vertices one frame toward their deformation targets.
///
/// With an empty source list only the noise term applies and the body relaxes
/// toward a gently breathing sphere.
pub fn step(
    body: &mut DeformableBody,
    sources: &[InfluenceSource],
    time: f32,
    bands: &BandIntensities,
    dt: f32,
) {
    let boost = DEFORM_INTENSITY_BASE + bands.total() * DEFORM_INTENSITY_SPAN;
    let alpha = damping_alpha(bands.high, dt);
    let morph = body.profile.morph_intensity;
    let speed = body.profile.deformation_speed;

    let mut max_outward = 0.0f32;
    for i in 0..body.vertex_count() {
        let p = body.original[i];
        let ph = body.noise_phases[i];

        let sample_at = p + Vec3::new(ph.x, ph.y, ph.z);
        let n = noise::organic(sample_at, time * ph.speed * speed) * NOISE_AMPLITUDE;

        let mut music = 0.0;
        for s in sources {
            let d = p.distance(s.position);
            // Beyond the cutoff the Gaussian contributes ~0; skip it
            if d < s.radius * SOURCE_CUTOFF_RADII {
                let falloff = (-(d / s.radius) * (d / s.radius)).exp();
                music += falloff * s.intensity * s.strength;
            }
        }

        let deformation = (n + music) * morph * boost;
        let outward = p.normalize_or_zero();
        body.target[i] = p + outward * deformation;

        let current = body.mesh.position(i);
        let next = current + (body.target[i] - current) * alpha;
        body.mesh.set_position(i, next);

        max_outward = max_outward.max(next.length() - BASE_SPHERE_RADIUS);
    }
    body.max_outward = max_outward.max(0.0);
    body.mesh.recompute_normals();
}

/// Frame-rate-independent damping factor.
///
/// The tuned per-frame factor rises with high-band energy so sharp transients
/// register quickly while bass motion stays fluid; it is then converted from
/// the 60 fps reference to the actual dt. Always in `(0, 1)` for `dt > 0`,
/// so the interpolation contracts and never overshoots.
pub fn damping_alpha(high_intensity: f32, dt: f32) -> f32 {
    let per_frame = BASE_DAMPING + (high_intensity * HIGH_DAMPING_SCALE).min(HIGH_DAMPING_MAX);
    1.0 - (1.0 - per_frame).powf(dt * REFERENCE_FRAME_RATE)
}
