//! Simulation tuning constants.
//!
//! These values are hand-tuned for look and feel, not derived from a physical
//! model. They keep magic numbers out of the update code and act as the
//! defaults a frontend may override through `SimConfig`.

// ---------------------------------------------------------------------------
// Spectrum reduction
// ---------------------------------------------------------------------------

// Musically-defined band edges (Hz), independent of FFT resolution
pub const LOW_BAND_MIN_HZ: f32 = 20.0;
pub const LOW_BAND_MAX_HZ: f32 = 250.0;
pub const MID_BAND_MAX_HZ: f32 = 4000.0;
pub const HIGH_BAND_MAX_HZ: f32 = 20000.0;

// Per-band gain applied after averaging bin magnitudes
pub const LOW_BAND_GAIN: f32 = 0.8;
pub const MID_BAND_GAIN: f32 = 1.2;
pub const HIGH_BAND_GAIN: f32 = 1.1;

// Linear decay toward silence when no spectrum arrives (intensity per second)
pub const BAND_IDLE_DECAY_PER_SEC: f32 = 1.2;

// ---------------------------------------------------------------------------
// Influence generation
// ---------------------------------------------------------------------------

// Radius of every body's undeformed sphere (body-local units)
pub const BASE_SPHERE_RADIUS: f32 = 2.0;

// Minimum band intensity before that band emits sources (prevents silent jitter)
pub const LOW_MIN_INTENSITY: f32 = 0.18;
pub const MID_MIN_INTENSITY: f32 = 0.07;
pub const HIGH_MIN_INTENSITY: f32 = 0.025;

// Low band: few wide, shallow swells swept slowly around the sphere
pub const LOW_COUNT_SCALE: f32 = 0.7;
pub const LOW_SWEEP_RAD_PER_SEC: f32 = 0.16;
pub const LOW_SOURCE_RADIUS: f32 = 3.1;
pub const LOW_RADIUS_SWELL: f32 = 0.5;
pub const LOW_STRENGTH: f32 = 0.22;
pub const LOW_ANGLE_JITTER: f32 = 0.4;

// Mid band: moderate count, bumpier mid-size protrusions
pub const MID_COUNT_BASE: f32 = 2.0;
pub const MID_COUNT_SCALE: f32 = 4.0;
pub const MID_SWEEP_RAD_PER_SEC: f32 = 0.7;
pub const MID_SOURCE_RADIUS: f32 = 0.75;
pub const MID_RADIUS_SWELL: f32 = 0.4;
pub const MID_STRENGTH: f32 = 0.6;
pub const MID_ANGLE_JITTER: f32 = 0.6;

// High band: sparse needle spikes, intensity strongly peak-weighted
pub const HIGH_COUNT_BASE: f32 = 6.0;
pub const HIGH_COUNT_SCALE: f32 = 16.0;
pub const HIGH_INTENSITY_EXPONENT: f32 = 3.0;
pub const HIGH_STRENGTH: f32 = 2.5;
pub const HIGH_TIME_JITTER: f32 = 0.2;

// Spike shape variants: (radius, strength multiplier)
pub const SPIKE_ULTRA_THIN: (f32, f32) = (0.16, 10.0);
pub const SPIKE_THIN: (f32, f32) = (0.28, 5.0);
pub const SPIKE_MEDIUM: (f32, f32) = (0.45, 2.5);

// ---------------------------------------------------------------------------
// Vertex deformation
// ---------------------------------------------------------------------------

// Amplitude of the always-on organic noise term
pub const NOISE_AMPLITUDE: f32 = 0.2;

// Sources beyond this many radii contribute ~0 and are skipped
pub const SOURCE_CUTOFF_RADII: f32 = 2.0;

// Scalar deformation multiplier: base + span * total band intensity
pub const DEFORM_INTENSITY_BASE: f32 = 0.8;
pub const DEFORM_INTENSITY_SPAN: f32 = 1.1;

// Damped interpolation toward target positions. The per-frame factors below
// are tuned at the reference rate and converted for the actual dt each frame.
pub const BASE_DAMPING: f32 = 0.14;
pub const HIGH_DAMPING_SCALE: f32 = 2.5;
pub const HIGH_DAMPING_MAX: f32 = 0.18;
pub const REFERENCE_FRAME_RATE: f32 = 60.0;

// ---------------------------------------------------------------------------
// Body lifecycle
// ---------------------------------------------------------------------------

// Phase boundaries as fractions of elapsed life
pub const GROW_PHASE_END: f32 = 0.4;
pub const MATURE_PHASE_END: f32 = 0.7;
// Collapse starts when remaining life drops below this, overriding the above
pub const COLLAPSE_LIFE_THRESHOLD: f32 = 0.3;

pub const GROWTH_MUSIC_BOOST: f32 = 0.15;
pub const MATURE_PULSE_RATE: f32 = 3.0;
pub const MATURE_PULSE_DEPTH: f32 = 0.08;
pub const AGING_SCALE_FLOOR: f32 = 0.7;
pub const MAIN_BREATH_SCALE: f32 = 0.05;

// Per-frame scale smoothing at the reference rate; collapse is snappier so a
// dying body visibly shrinks to nothing instead of lagging behind its target
pub const SCALE_SMOOTHING: f32 = 0.08;
pub const COLLAPSE_SMOOTHING: f32 = 0.25;

// Inner core shell sizing (fraction of the outer sphere)
pub const INNER_CORE_MIN_RATIO: f32 = 0.3;
pub const INNER_CORE_MARGIN: f32 = 0.6;

// Bodies drifting beyond this distance are retired
pub const MAX_BODY_DISTANCE: f32 = 100.0;

// ---------------------------------------------------------------------------
// Spawner
// ---------------------------------------------------------------------------

pub const SPAWN_THRESHOLD: f32 = 0.9;
pub const SPAWN_PROBABILITY_SCALE: f32 = 1.5;
pub const SPAWN_PROBABILITY_MAX: f32 = 0.9;
pub const FLOATING_COOLDOWN_SEC: f32 = 1.2;
pub const ORBITAL_COOLDOWN_SEC: f32 = 2.5;

pub const FLOATING_LIFE_MIN_SEC: f32 = 8.0;
pub const FLOATING_LIFE_MAX_SEC: f32 = 15.0;
pub const ORBITAL_LIFE_MIN_SEC: f32 = 12.0;
pub const ORBITAL_LIFE_MAX_SEC: f32 = 20.0;

pub const GROWTH_POTENTIAL_MIN: f32 = 1.0;
pub const GROWTH_POTENTIAL_MAX: f32 = 2.0;

pub const SECONDARY_SIZE_MIN: f32 = 0.35;
pub const SECONDARY_SIZE_MAX: f32 = 0.6;

// Clearance between a spike's surface and a freshly spawned body
pub const SPAWN_CLEARANCE: f32 = 0.5;

// ---------------------------------------------------------------------------
// Orbit kinematics
// ---------------------------------------------------------------------------

pub const ORBIT_SPEED_MIN: f32 = 0.3;
pub const ORBIT_SPEED_MAX: f32 = 0.9;
pub const ORBIT_RADIUS_MIN: f32 = 5.0;
pub const ORBIT_RADIUS_MAX: f32 = 9.0;
pub const ORBIT_INCLINATION_MAX: f32 = 0.6;

pub const ORBIT_MUSIC_SPEED_SCALE: f32 = 1.5;
pub const ORBIT_RADIUS_MID_WEIGHT: f32 = 0.3;
pub const ORBIT_RADIUS_SWELL: f32 = 0.8;
pub const ORBIT_RADIUS_SMOOTHING: f32 = 0.15;
pub const ORBIT_POSITION_EASE: f32 = 0.1;

pub const ORBIT_ECCENTRICITY_MIN: f32 = 0.2;
pub const ORBIT_ECCENTRICITY_MAX: f32 = 0.5;
pub const ORBIT_PRECESSION_MIN: f32 = 0.1;
pub const ORBIT_PRECESSION_MAX: f32 = 0.4;

// ---------------------------------------------------------------------------
// Floating-body physics
// ---------------------------------------------------------------------------

pub const FLOAT_DRIFT_ACCEL: f32 = 1.6;
pub const FLOAT_DAMPING_PER_FRAME: f32 = 0.98;
pub const FLOAT_MAX_SPEED: f32 = 4.0;
pub const FLOAT_BOUNDS: f32 = 12.0;
pub const WALL_RESTITUTION: f32 = 0.8;
pub const COLLISION_PUSH: f32 = 0.5;

// ---------------------------------------------------------------------------
// Quality defaults
// ---------------------------------------------------------------------------

pub const DEFAULT_MAX_FLOATING: usize = 6;
pub const DEFAULT_MAX_ORBITAL: usize = 4;
pub const MAIN_SPHERE_SEGMENTS: u32 = 48;
pub const MAIN_SPHERE_RINGS: u32 = 32;
pub const BODY_SPHERE_SEGMENTS: u32 = 24;
pub const BODY_SPHERE_RINGS: u32 = 16;
