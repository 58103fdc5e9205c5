//! The simulation context: all mutable state, one `tick` entry point.
//!
//! Update order within a tick is fixed so every stage reads a consistent
//! snapshot: spectrum reduction first, then the main body's deformation
//! (whose influence sources are kept for the spawner), then floating bodies
//! (deform, physics, lifecycle), then orbital bodies (kinematics, deform,
//! lifecycle), and spawn checks last so a new body's first update happens on
//! the following tick.

use crate::body::{BodyKind, DeformableBody};
use crate::constants::*;
use crate::influence::{DeformProfile, InfluenceList, InfluenceSource};
use crate::physics;
use crate::rng::{RandomSource, SeededRandom};
use crate::spawner::{BodyEvent, Spawner, SpawnerConfig};
use crate::spectrum::{self, BandIntensities, SpectrumFrame};
use thiserror::Error;

/// Invalid [`SimConfig`] values rejected at construction.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("sensitivity must be positive and finite, got {0}")]
    InvalidSensitivity(f32),
    #[error("sphere tessellation needs at least 3 segments and 2 rings, got {segments}x{rings}")]
    DegenerateSphere { segments: u32, rings: u32 },
}

/// Mesh resolution and body caps, adjustable for slower machines.
#[derive(Clone, Copy, Debug)]
pub struct QualitySettings {
    pub max_floating: usize,
    pub max_orbital: usize,
    pub main_sphere_segments: u32,
    pub main_sphere_rings: u32,
    pub body_sphere_segments: u32,
    pub body_sphere_rings: u32,
}

impl Default for QualitySettings {
    fn default() -> Self {
        Self {
            max_floating: DEFAULT_MAX_FLOATING,
            max_orbital: DEFAULT_MAX_ORBITAL,
            main_sphere_segments: MAIN_SPHERE_SEGMENTS,
            main_sphere_rings: MAIN_SPHERE_RINGS,
            body_sphere_segments: BODY_SPHERE_SEGMENTS,
            body_sphere_rings: BODY_SPHERE_RINGS,
        }
    }
}

/// Construction-time configuration. Everything else is tuned via
/// [`crate::constants`].
#[derive(Clone, Copy, Debug)]
pub struct SimConfig {
    /// Global gain applied to every reduced band intensity.
    pub sensitivity: f32,
    /// RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    pub quality: QualitySettings,
    pub spawner: SpawnerConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            sensitivity: 1.0,
            seed: None,
            quality: QualitySettings::default(),
            spawner: SpawnerConfig::default(),
        }
    }
}

/// Number of live secondary bodies of each kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BodyCounts {
    pub floating: usize,
    pub orbital: usize,
}

/// Owns every body, the band state and the spawner. No global state: two
/// simulations in one process never interfere, and two built from the same
/// seed and fed the same frames produce identical output.
pub struct Simulation {
    bands: BandIntensities,
    elapsed: f32,
    main: DeformableBody,
    floating: Vec<DeformableBody>,
    orbitals: Vec<DeformableBody>,
    main_sources: InfluenceList,
    sensitivity: f32,
    quality: QualitySettings,
    spawner: Spawner,
    rng: Box<dyn RandomSource>,
    events: Vec<BodyEvent>,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let rng: Box<dyn RandomSource> = match config.seed {
            Some(seed) => Box::new(SeededRandom::new(seed)),
            None => Box::new(SeededRandom::from_entropy()),
        };
        Self::with_random_source(config, rng)
    }

    /// Build with a caller-supplied random source (tests pass fixed
    /// sequences to make spawn rolls and jitter deterministic).
    pub fn with_random_source(
        config: SimConfig,
        mut rng: Box<dyn RandomSource>,
    ) -> Result<Self, ConfigError> {
        if !config.sensitivity.is_finite() || config.sensitivity <= 0.0 {
            return Err(ConfigError::InvalidSensitivity(config.sensitivity));
        }
        let q = config.quality;
        for (segments, rings) in [
            (q.main_sphere_segments, q.main_sphere_rings),
            (q.body_sphere_segments, q.body_sphere_rings),
        ] {
            if segments < 3 || rings < 2 {
                return Err(ConfigError::DegenerateSphere { segments, rings });
            }
        }

        let mut spawner = Spawner::new(config.spawner);
        let main = DeformableBody::new(
            spawner.next_id(),
            BodyKind::Main,
            DeformProfile::main(),
            q.main_sphere_segments,
            q.main_sphere_rings,
            rng.as_mut(),
        );
        Ok(Self {
            bands: BandIntensities::default(),
            elapsed: 0.0,
            main,
            floating: Vec::new(),
            orbitals: Vec::new(),
            main_sources: InfluenceList::new(),
            sensitivity: config.sensitivity,
            quality: q,
            spawner,
            rng,
            events: Vec::new(),
        })
    }

    /// Advance the whole simulation by `dt` seconds. `frame` carries this
    /// tick's spectrum, or `None` when the audio source produced nothing, in
    /// which case the previous intensities decay toward silence.
    pub fn tick(&mut self, dt: f32, frame: Option<&SpectrumFrame>) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.elapsed += dt;
        let time = self.elapsed;

        // (1) spectrum
        match frame {
            Some(f) => self.bands = spectrum::reduce_spectrum(f, self.sensitivity),
            None => self.bands.decay(dt),
        }
        let bands = self.bands;

        // (2) main body
        self.main_sources = self
            .main
            .update_deformation(time, &bands, dt, self.rng.as_mut());
        self.main.update_lifecycle(time, &bands, dt);

        // (3) floating bodies
        for body in self.floating.iter_mut() {
            body.update_deformation(time, &bands, dt, self.rng.as_mut());
        }
        physics::step_floating(&mut self.floating, time, &bands, dt);
        let events = &mut self.events;
        self.floating.retain_mut(|body| {
            let alive = body.update_lifecycle(time, &bands, dt);
            if !alive {
                log::debug!("removed floating body {}", body.id);
                events.push(BodyEvent::Removed {
                    id: body.id,
                    kind: BodyKind::Floating,
                });
            }
            alive
        });

        // (4) orbital bodies
        let main_center = self.main.center;
        for body in self.orbitals.iter_mut() {
            if let Some(orbit) = body.orbital.as_mut() {
                orbit.advance(&bands, dt);
                let target = orbit.position(time, main_center);
                // Ease toward the computed point instead of snapping
                let alpha = 1.0 - (1.0 - ORBIT_POSITION_EASE).powf(dt * REFERENCE_FRAME_RATE);
                body.center += (target - body.center) * alpha;
            }
            body.update_deformation(time, &bands, dt, self.rng.as_mut());
        }
        self.orbitals.retain_mut(|body| {
            let alive = body.update_lifecycle(time, &bands, dt);
            if !alive {
                log::debug!("removed orbital body {}", body.id);
                events.push(BodyEvent::Removed {
                    id: body.id,
                    kind: BodyKind::Orbital,
                });
            }
            alive
        });

        // (5) spawn checks
        self.spawner.update(
            &bands,
            dt,
            main_center,
            &self.main_sources,
            &mut self.floating,
            &mut self.orbitals,
            &self.quality,
            self.rng.as_mut(),
            &mut self.events,
        );
    }

    /// Band intensities from the most recent tick.
    pub fn bands(&self) -> BandIntensities {
        self.bands
    }

    /// Seconds of simulated time accumulated so far.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn main_body(&self) -> &DeformableBody {
        &self.main
    }

    /// The main body's influence sources from the most recent tick.
    pub fn main_sources(&self) -> &[InfluenceSource] {
        &self.main_sources
    }

    pub fn floating_bodies(&self) -> &[DeformableBody] {
        &self.floating
    }

    pub fn orbital_bodies(&self) -> &[DeformableBody] {
        &self.orbitals
    }

    pub fn body_counts(&self) -> BodyCounts {
        BodyCounts {
            floating: self.floating.len(),
            orbital: self.orbitals.len(),
        }
    }

    /// Every live body, main first, for rendering traversal.
    pub fn bodies(&self) -> impl Iterator<Item = &DeformableBody> {
        std::iter::once(&self.main)
            .chain(self.floating.iter())
            .chain(self.orbitals.iter())
    }

    /// Take all spawn/removal events accumulated since the last drain.
    pub fn drain_events(&mut self) -> Vec<BodyEvent> {
        std::mem::take(&mut self.events)
    }
}
