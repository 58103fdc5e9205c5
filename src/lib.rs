//! Audio-reactive ferrofluid simulation core.
//!
//! Feeds per-frame FFT spectra through a small pipeline: band reduction,
//! influence source generation, damped vertex deformation of one main sphere
//! plus spawned floating and orbital bodies. Everything lives inside a
//! [`sim::Simulation`] value; there is no global state, no rendering and no
//! audio capture here. A frontend owns the clock, hands each tick a
//! [`spectrum::SpectrumFrame`], and reads back meshes, transforms and
//! lifecycle events.
//!
//! ```no_run
//! use ferroviz::sim::{SimConfig, Simulation};
//! use ferroviz::spectrum::SpectrumFrame;
//!
//! let mut sim = Simulation::new(SimConfig::default()).unwrap();
//! let magnitudes = vec![0.5f32; 1024];
//! let frame = SpectrumFrame {
//!     magnitudes: &magnitudes,
//!     sample_rate: 44_100.0,
//!     fft_size: 2048,
//! };
//! sim.tick(1.0 / 60.0, Some(&frame));
//! for body in sim.bodies() {
//!     let _positions = body.mesh.position_bytes();
//! }
//! ```

pub mod body;
pub mod constants;
pub mod deform;
pub mod influence;
pub mod mesh;
pub mod noise;
pub mod orbit;
pub mod physics;
pub mod rng;
pub mod sim;
pub mod spawner;
pub mod spectrum;

pub use body::{BodyKind, DeformableBody, LifePhase};
pub use influence::{Band, DeformProfile, InfluenceSource};
pub use mesh::MeshBuffer;
pub use rng::{RandomSource, SeededRandom, SequenceRandom};
pub use sim::{BodyCounts, ConfigError, QualitySettings, SimConfig, Simulation};
pub use spawner::{BodyEvent, SpawnerConfig};
pub use spectrum::{reduce_spectrum, BandIntensities, SpectrumFrame};
