//! Influence source generation.
//!
//! Each frame, the current band intensities become a transient list of
//! weighted points over the sphere. Band semantics shape the output: bass
//! produces few, wide, shallow swells; mids a moderate number of bumpier
//! protrusions; highs many sharp needle spikes. Sources live for exactly one
//! frame and are never mutated or reused.

use crate::constants::*;
use crate::rng::RandomSource;
use crate::spectrum::BandIntensities;
use glam::Vec3;
use smallvec::SmallVec;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Frequency band an influence source belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    Low,
    Mid,
    High,
}

/// Transient weighted point biasing mesh deformation for one frame.
/// `position` is relative to the body centre, in body-local unscaled units.
#[derive(Clone, Copy, Debug)]
pub struct InfluenceSource {
    pub position: Vec3,
    pub radius: f32,
    pub intensity: f32,
    pub strength: f32,
    pub band: Band,
}

/// Per-body tuning consulted by influence generation and deformation.
///
/// Every body shares one algorithm; the profile's timing multipliers and
/// phase offsets keep instances moving asynchronously, and `size_scale`
/// shrinks the effect for smaller bodies.
#[derive(Clone, Copy, Debug)]
pub struct DeformProfile {
    pub size_scale: f32,
    pub response_gain: f32,
    pub morph_intensity: f32,
    pub deformation_speed: f32,
    /// Per-band sweep-speed multipliers (low, mid, high).
    pub timing: [f32; 3],
    /// Per-band angular phase offsets (low, mid, high).
    pub phase: [f32; 3],
}

impl DeformProfile {
    /// Profile of the permanent main body.
    pub fn main() -> Self {
        Self {
            size_scale: 1.0,
            response_gain: 1.0,
            morph_intensity: 1.0,
            deformation_speed: 1.0,
            timing: [1.0; 3],
            phase: [0.0; 3],
        }
    }
}

pub type InfluenceList = SmallVec<[InfluenceSource; 24]>;

/// Generate this frame's influence sources from the current intensities.
pub fn generate_influences(
    time: f32,
    bands: &BandIntensities,
    profile: &DeformProfile,
    rng: &mut dyn RandomSource,
) -> InfluenceList {
    let mut out = InfluenceList::new();
    low_sources(time, bands.low, profile, rng, &mut out);
    mid_sources(time, bands.mid, profile, rng, &mut out);
    high_sources(time, bands.high, profile, rng, &mut out);
    out
}

/// Point on the sphere of the base geometry from azimuth `theta` and polar
/// angle `phi`.
fn on_sphere(theta: f32, phi: f32) -> Vec3 {
    Vec3::new(
        phi.sin() * theta.cos(),
        phi.cos(),
        phi.sin() * theta.sin(),
    ) * BASE_SPHERE_RADIUS
}

fn low_sources(
    time: f32,
    intensity: f32,
    profile: &DeformProfile,
    rng: &mut dyn RandomSource,
    out: &mut InfluenceList,
) {
    if intensity < LOW_MIN_INTENSITY {
        return;
    }
    let count = (1.0 + intensity * LOW_COUNT_SCALE) as usize;
    let sweep = time * LOW_SWEEP_RAD_PER_SEC * profile.timing[0] + profile.phase[0];
    for i in 0..count {
        // Slow sweep plus jitter so swells never look mechanically symmetric
        let theta = sweep
            + i as f32 * TAU / count as f32
            + rng.range(-LOW_ANGLE_JITTER, LOW_ANGLE_JITTER);
        let phi = FRAC_PI_2
            + (sweep * 0.7 + i as f32 * 1.3).sin() * 0.9
            + rng.range(-0.3, 0.3);
        let radius = LOW_SOURCE_RADIUS
            * (1.0 + LOW_RADIUS_SWELL * intensity)
            * rng.range(0.7, 1.3)
            * profile.size_scale;
        out.push(InfluenceSource {
            position: on_sphere(theta, phi),
            radius,
            intensity,
            strength: LOW_STRENGTH * intensity * profile.response_gain,
            band: Band::Low,
        });
    }
}

fn mid_sources(
    time: f32,
    intensity: f32,
    profile: &DeformProfile,
    rng: &mut dyn RandomSource,
    out: &mut InfluenceList,
) {
    if intensity < MID_MIN_INTENSITY {
        return;
    }
    let count = (MID_COUNT_BASE + intensity * MID_COUNT_SCALE) as usize;
    let sweep = time * MID_SWEEP_RAD_PER_SEC * profile.timing[1] + profile.phase[1];
    for i in 0..count {
        let theta = sweep
            + i as f32 * TAU / count as f32
            + rng.range(-MID_ANGLE_JITTER, MID_ANGLE_JITTER);
        let phi = FRAC_PI_2
            + (sweep * 1.3 + i as f32 * 2.1).sin() * 1.0
            + rng.range(-0.4, 0.4);
        let radius = MID_SOURCE_RADIUS
            * (1.0 + MID_RADIUS_SWELL * intensity)
            * rng.range(0.8, 1.2)
            * profile.size_scale;
        out.push(InfluenceSource {
            position: on_sphere(theta, phi),
            radius,
            intensity,
            strength: MID_STRENGTH * intensity * profile.response_gain,
            band: Band::Mid,
        });
    }
}

fn high_sources(
    time: f32,
    intensity: f32,
    profile: &DeformProfile,
    rng: &mut dyn RandomSource,
    out: &mut InfluenceList,
) {
    if intensity < HIGH_MIN_INTENSITY {
        return;
    }
    let count = (HIGH_COUNT_BASE + intensity * HIGH_COUNT_SCALE) as usize;
    // Exponent >1 strongly emphasizes peaks: only real transients spike
    let shaped = intensity.powf(HIGH_INTENSITY_EXPONENT);
    let jitter = (time * profile.timing[2] * 0.5 + profile.phase[2]).sin() * HIGH_TIME_JITTER;
    for _ in 0..count {
        // Uniform sphere sampling: inverse-cosine polar angle avoids the
        // pole clustering a naive (theta, phi) draw would produce
        let theta = TAU * rng.next_f32() + jitter;
        let phi = (2.0 * rng.next_f32() - 1.0).acos();
        let (spike_radius, strength_mul) = spike_profile(rng);
        out.push(InfluenceSource {
            position: on_sphere(theta, phi),
            radius: spike_radius * profile.size_scale,
            intensity: shaped,
            strength: HIGH_STRENGTH * strength_mul * intensity * profile.response_gain,
            band: Band::High,
        });
    }
}

fn spike_profile(rng: &mut dyn RandomSource) -> (f32, f32) {
    match (rng.next_f32() * 3.0) as usize {
        0 => SPIKE_ULTRA_THIN,
        1 => SPIKE_THIN,
        _ => SPIKE_MEDIUM,
    }
}
