//! Deformable bodies and their lifecycle.
//!
//! A body owns its mesh buffers (original/current/target positions, one
//! noise phase per vertex) plus the instance tuning that makes it move
//! unlike its siblings. Non-permanent bodies additionally run the
//! Spawning → Growing → Mature → Aging → Collapsing → Removed state machine:
//! retirement is a size collapse, never an opacity fade, so a dying body
//! shrinks to nothing instead of popping out of existence.

use crate::constants::*;
use crate::deform;
use crate::influence::{generate_influences, DeformProfile, InfluenceList, InfluenceSource};
use crate::mesh::MeshBuffer;
use crate::orbit::OrbitalState;
use crate::rng::RandomSource;
use crate::spectrum::BandIntensities;
use glam::Vec3;
use std::f32::consts::TAU;

/// Which visual entity a body is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    Main,
    Floating,
    Orbital,
}

/// Lifecycle phase of a non-permanent body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifePhase {
    Spawning,
    Growing,
    Mature,
    Aging,
    Collapsing,
    Removed,
}

/// Per-vertex noise phase, assigned once at creation and never mutated.
#[derive(Clone, Copy, Debug)]
pub struct NoisePhase {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub speed: f32,
}

/// One mesh instance (main, floating or orbital) with owned vertex buffers.
///
/// Mesh positions stay in body-local space; `center` and `scale` are the
/// transform data the scene/placement layer applies when drawing.
pub struct DeformableBody {
    pub id: u32,
    pub kind: BodyKind,
    pub mesh: MeshBuffer,
    pub(crate) original: Vec<Vec3>,
    pub(crate) target: Vec<Vec3>,
    pub(crate) noise_phases: Vec<NoisePhase>,
    pub(crate) max_outward: f32,
    pub profile: DeformProfile,
    pub center: Vec3,
    pub velocity: Vec3,
    pub scale: f32,
    pub target_scale: f32,
    /// Remaining life fraction, 1 at spawn, 0 at removal. Main body ignores it.
    pub life: f32,
    pub max_life_sec: f32,
    pub growth_potential: f32,
    pub phase: LifePhase,
    /// Scale of the concentric darker inner shell, as a fraction of the outer
    /// sphere. Sized so an extreme outward spike never exposes it.
    pub inner_core_scale: f32,
    pub orbital: Option<OrbitalState>,
}

impl DeformableBody {
    pub fn new(
        id: u32,
        kind: BodyKind,
        profile: DeformProfile,
        segments: u32,
        rings: u32,
        rng: &mut dyn RandomSource,
    ) -> Self {
        let mesh = MeshBuffer::sphere(BASE_SPHERE_RADIUS, segments, rings);
        let original = mesh.positions().to_vec();
        let target = original.clone();
        let noise_phases = (0..original.len())
            .map(|_| NoisePhase {
                x: rng.range(0.0, TAU),
                y: rng.range(0.0, TAU),
                z: rng.range(0.0, TAU),
                speed: rng.range(0.5, 1.5),
            })
            .collect();
        Self {
            id,
            kind,
            mesh,
            original,
            target,
            noise_phases,
            max_outward: 0.0,
            profile,
            center: Vec3::ZERO,
            velocity: Vec3::ZERO,
            scale: 1.0,
            target_scale: 1.0,
            life: 1.0,
            max_life_sec: 1.0,
            growth_potential: 1.0,
            phase: LifePhase::Spawning,
            inner_core_scale: INNER_CORE_MARGIN,
            orbital: None,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.original.len()
    }

    /// Immutable base sphere coordinates.
    pub fn original_positions(&self) -> &[Vec3] {
        &self.original
    }

    /// Current deformation targets (updated every frame).
    pub fn target_positions(&self) -> &[Vec3] {
        &self.target
    }

    /// One frame of audio-driven deformation: generate this body's influence
    /// sources, displace vertices toward them, resize the inner core.
    /// Returns the sources so the caller can sample them (the spawner places
    /// new bodies on the main body's spikes).
    pub fn update_deformation(
        &mut self,
        time: f32,
        bands: &BandIntensities,
        dt: f32,
        rng: &mut dyn RandomSource,
    ) -> InfluenceList {
        let sources = generate_influences(time, bands, &self.profile, rng);
        deform::step(self, &sources, time, bands, dt);
        self.update_inner_core();
        sources
    }

    /// Apply an externally generated source list (used by tests and by any
    /// caller that wants to drive a body with custom sources).
    pub fn apply_sources(
        &mut self,
        sources: &[InfluenceSource],
        time: f32,
        bands: &BandIntensities,
        dt: f32,
    ) {
        deform::step(self, sources, time, bands, dt);
        self.update_inner_core();
    }

    fn update_inner_core(&mut self) {
        let base = BASE_SPHERE_RADIUS;
        self.inner_core_scale =
            ((base - self.max_outward) * INNER_CORE_MARGIN).max(base * INNER_CORE_MIN_RATIO) / base;
    }

    /// Advance life and the scale animation. Returns `false` once the body
    /// should be dropped from the active set.
    pub fn update_lifecycle(&mut self, time: f32, bands: &BandIntensities, dt: f32) -> bool {
        if self.kind == BodyKind::Main {
            // The permanent body only breathes with the music
            self.target_scale = 1.0 + bands.total() * MAIN_BREATH_SCALE;
            self.smooth_scale(dt, SCALE_SMOOTHING);
            return true;
        }

        self.life -= dt / self.max_life_sec;
        if self.life <= 0.0 || self.center.length() > MAX_BODY_DISTANCE {
            self.phase = LifePhase::Removed;
            return false;
        }

        let elapsed = 1.0 - self.life;
        self.phase = if self.life < COLLAPSE_LIFE_THRESHOLD {
            LifePhase::Collapsing
        } else if elapsed < GROW_PHASE_END {
            LifePhase::Growing
        } else if elapsed < MATURE_PHASE_END {
            LifePhase::Mature
        } else {
            LifePhase::Aging
        };

        let gp = self.growth_potential;
        let mut smoothing = SCALE_SMOOTHING;
        self.target_scale = match self.phase {
            LifePhase::Growing => {
                let t = (elapsed / GROW_PHASE_END).clamp(0.0, 1.0);
                let eased = 1.0 - (1.0 - t) * (1.0 - t) * (1.0 - t);
                (1.0 + (gp - 1.0) * eased) * (1.0 + bands.total() * GROWTH_MUSIC_BOOST)
            }
            LifePhase::Mature => {
                gp * (1.0 + (time * MATURE_PULSE_RATE).sin() * MATURE_PULSE_DEPTH * bands.total())
            }
            LifePhase::Aging => {
                let t = ((elapsed - MATURE_PHASE_END) / (1.0 - MATURE_PHASE_END)).clamp(0.0, 1.0);
                gp * (1.0 - t * (1.0 - AGING_SCALE_FLOOR))
            }
            LifePhase::Collapsing => {
                // Quadratic ramp on top of the aging decay, with snappier
                // smoothing: the shrink must visibly outrun the interpolation
                // lag. At onset the ramp is 1, so scale stays continuous.
                smoothing = COLLAPSE_SMOOTHING;
                let aging_t =
                    ((elapsed - MATURE_PHASE_END) / (1.0 - MATURE_PHASE_END)).clamp(0.0, 1.0);
                let aged = gp * (1.0 - aging_t * (1.0 - AGING_SCALE_FLOOR));
                let t = self.life / COLLAPSE_LIFE_THRESHOLD;
                aged * t * t
            }
            LifePhase::Spawning | LifePhase::Removed => self.target_scale,
        };
        self.smooth_scale(dt, smoothing);
        true
    }

    fn smooth_scale(&mut self, dt: f32, per_frame: f32) {
        let alpha = 1.0 - (1.0 - per_frame).powf(dt * REFERENCE_FRAME_RATE);
        self.scale += (self.target_scale - self.scale) * alpha;
    }
}
