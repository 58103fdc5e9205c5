//! Opportunistic spawning and retirement of secondary bodies.
//!
//! Spawn checks run once per body kind per frame, after all bodies have
//! updated: intensity above a threshold, a per-kind cooldown elapsed and the
//! quality cap not reached. A full cap or quiet music is normal backpressure,
//! not an error: the spawner just declines.

use crate::body::{BodyKind, DeformableBody};
use crate::constants::*;
use crate::influence::{Band, DeformProfile, InfluenceSource};
use crate::orbit::{OrbitPattern, OrbitalState};
use crate::rng::RandomSource;
use crate::sim::QualitySettings;
use crate::spectrum::BandIntensities;
use glam::Vec3;
use std::f32::consts::TAU;

/// Lifecycle event for logging/telemetry consumers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyEvent {
    Spawned { id: u32, kind: BodyKind },
    Removed { id: u32, kind: BodyKind },
}

/// Thresholds and cooldowns gating spawn checks.
#[derive(Clone, Copy, Debug)]
pub struct SpawnerConfig {
    /// Sum of band intensities required before any spawn roll happens.
    pub spawn_threshold: f32,
    pub floating_cooldown_sec: f32,
    pub orbital_cooldown_sec: f32,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            spawn_threshold: SPAWN_THRESHOLD,
            floating_cooldown_sec: FLOATING_COOLDOWN_SEC,
            orbital_cooldown_sec: ORBITAL_COOLDOWN_SEC,
        }
    }
}

pub struct Spawner {
    config: SpawnerConfig,
    floating_cooldown: f32,
    orbital_cooldown: f32,
    next_id: u32,
}

impl Spawner {
    pub fn new(config: SpawnerConfig) -> Self {
        Self {
            config,
            floating_cooldown: 0.0,
            orbital_cooldown: 0.0,
            next_id: 1,
        }
    }

    pub(crate) fn next_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Run this frame's spawn checks. `main_sources` is the main body's
    /// influence list from step (2) of the tick; new bodies are placed just
    /// beyond one of its spikes.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        bands: &BandIntensities,
        dt: f32,
        main_center: Vec3,
        main_sources: &[InfluenceSource],
        floating: &mut Vec<DeformableBody>,
        orbitals: &mut Vec<DeformableBody>,
        quality: &QualitySettings,
        rng: &mut dyn RandomSource,
        events: &mut Vec<BodyEvent>,
    ) {
        self.floating_cooldown = (self.floating_cooldown - dt).max(0.0);
        self.orbital_cooldown = (self.orbital_cooldown - dt).max(0.0);

        let total = bands.total();
        if total <= self.config.spawn_threshold {
            return;
        }
        // Probability scales with how far intensity exceeds the threshold
        let probability = ((total - self.config.spawn_threshold) * SPAWN_PROBABILITY_SCALE)
            .min(SPAWN_PROBABILITY_MAX);

        if self.floating_cooldown <= 0.0
            && floating.len() < quality.max_floating
            && rng.next_f32() < probability
        {
            let body = self.spawn_floating(
                main_center,
                main_sources,
                quality.body_sphere_segments,
                quality.body_sphere_rings,
                rng,
            );
            log::debug!("spawned floating body {} at {:?}", body.id, body.center);
            events.push(BodyEvent::Spawned {
                id: body.id,
                kind: BodyKind::Floating,
            });
            floating.push(body);
            self.floating_cooldown = self.config.floating_cooldown_sec;
        }

        if self.orbital_cooldown <= 0.0
            && orbitals.len() < quality.max_orbital
            && rng.next_f32() < probability
        {
            let body = self.spawn_orbital(
                main_center,
                quality.body_sphere_segments,
                quality.body_sphere_rings,
                rng,
            );
            log::debug!("spawned orbital body {} pattern {:?}", body.id, body.orbital);
            events.push(BodyEvent::Spawned {
                id: body.id,
                kind: BodyKind::Orbital,
            });
            orbitals.push(body);
            self.orbital_cooldown = self.config.orbital_cooldown_sec;
        }
    }

    fn spawn_floating(
        &mut self,
        main_center: Vec3,
        main_sources: &[InfluenceSource],
        segments: u32,
        rings: u32,
        rng: &mut dyn RandomSource,
    ) -> DeformableBody {
        let id = self.next_id();
        let profile = random_profile(rng);
        let mut body = DeformableBody::new(id, BodyKind::Floating, profile, segments, rings, rng);
        body.center = spawn_point(main_center, main_sources, rng);
        body.velocity = Vec3::new(
            rng.range(-0.5, 0.5),
            rng.range(-0.5, 0.5),
            rng.range(-0.5, 0.5),
        );
        body.max_life_sec = rng.range(FLOATING_LIFE_MIN_SEC, FLOATING_LIFE_MAX_SEC);
        body.growth_potential = rng.range(GROWTH_POTENTIAL_MIN, GROWTH_POTENTIAL_MAX);
        body
    }

    fn spawn_orbital(
        &mut self,
        main_center: Vec3,
        segments: u32,
        rings: u32,
        rng: &mut dyn RandomSource,
    ) -> DeformableBody {
        let id = self.next_id();
        let profile = random_profile(rng);
        let mut body = DeformableBody::new(id, BodyKind::Orbital, profile, segments, rings, rng);
        let pattern = match (rng.next_f32() * 4.0) as usize {
            0 => OrbitPattern::Circular,
            1 => OrbitPattern::Elliptical,
            2 => OrbitPattern::Precessing,
            _ => OrbitPattern::FigureEight,
        };
        let mut orbit = OrbitalState::new(
            pattern,
            rng.range(ORBIT_RADIUS_MIN, ORBIT_RADIUS_MAX),
            rng.range(ORBIT_SPEED_MIN, ORBIT_SPEED_MAX),
        );
        orbit.angle = rng.range(0.0, TAU);
        orbit.inclination = rng.range(-ORBIT_INCLINATION_MAX, ORBIT_INCLINATION_MAX);
        orbit.eccentricity = rng.range(ORBIT_ECCENTRICITY_MIN, ORBIT_ECCENTRICITY_MAX);
        orbit.precession_rate = rng.range(ORBIT_PRECESSION_MIN, ORBIT_PRECESSION_MAX);
        body.center = orbit.position(0.0, main_center);
        body.max_life_sec = rng.range(ORBITAL_LIFE_MIN_SEC, ORBITAL_LIFE_MAX_SEC);
        body.growth_potential = rng.range(GROWTH_POTENTIAL_MIN, GROWTH_POTENTIAL_MAX);
        body.orbital = Some(orbit);
        body
    }
}

/// Place a new body just beyond one of the main body's high-band spikes,
/// falling back to mid-band swells, then to a random direction.
fn spawn_point(
    main_center: Vec3,
    main_sources: &[InfluenceSource],
    rng: &mut dyn RandomSource,
) -> Vec3 {
    let candidate = pick_source(main_sources, Band::High, rng)
        .or_else(|| pick_source(main_sources, Band::Mid, rng));
    match candidate {
        Some(s) => {
            let dir = s.position.normalize_or_zero();
            main_center + dir * (BASE_SPHERE_RADIUS + s.radius + SPAWN_CLEARANCE)
        }
        None => {
            let theta = rng.range(0.0, TAU);
            let phi = (2.0 * rng.next_f32() - 1.0).acos();
            let dir = Vec3::new(
                phi.sin() * theta.cos(),
                phi.cos(),
                phi.sin() * theta.sin(),
            );
            main_center + dir * (BASE_SPHERE_RADIUS * 2.0)
        }
    }
}

fn pick_source<'a>(
    sources: &'a [InfluenceSource],
    band: Band,
    rng: &mut dyn RandomSource,
) -> Option<&'a InfluenceSource> {
    let count = sources.iter().filter(|s| s.band == band).count();
    if count == 0 {
        return None;
    }
    let idx = ((rng.next_f32() * count as f32) as usize).min(count - 1);
    sources.iter().filter(|s| s.band == band).nth(idx)
}

/// Randomized personality for a secondary body: smaller than the main blob,
/// with its own response gain, timing multipliers and phase offsets so no
/// two bodies ever move in sync.
fn random_profile(rng: &mut dyn RandomSource) -> DeformProfile {
    DeformProfile {
        size_scale: rng.range(SECONDARY_SIZE_MIN, SECONDARY_SIZE_MAX),
        response_gain: rng.range(0.7, 1.3),
        morph_intensity: rng.range(0.8, 1.2),
        deformation_speed: rng.range(0.7, 1.4),
        timing: [
            rng.range(0.8, 1.4),
            rng.range(0.8, 1.4),
            rng.range(0.8, 1.4),
        ],
        phase: [
            rng.range(0.0, TAU),
            rng.range(0.0, TAU),
            rng.range(0.0, TAU),
        ],
    }
}
