//! Orbit kinematics for orbital bodies.
//!
//! A pure position function: phase angle advanced by music-modulated angular
//! speed, radius low-pass filtered toward a music-modulated target, position
//! computed from one of four closed-form parametric curves and offset by the
//! main body's centre. The caller eases the mesh toward the computed point
//! rather than snapping, to avoid jitter.

use crate::constants::*;
use crate::spectrum::BandIntensities;
use glam::Vec3;

/// Closed-form orbital path family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrbitPattern {
    Circular,
    Elliptical,
    Precessing,
    FigureEight,
}

/// Orbital motion state owned by one orbital body.
#[derive(Clone, Debug)]
pub struct OrbitalState {
    pub pattern: OrbitPattern,
    pub angle: f32,
    pub base_radius: f32,
    pub smoothed_radius: f32,
    pub inclination: f32,
    pub orbit_speed: f32,
    /// Minor-axis shrink factor; elliptical pattern only.
    pub eccentricity: f32,
    /// Orbit-plane rotation rate; precessing pattern only.
    pub precession_rate: f32,
}

impl OrbitalState {
    pub fn new(pattern: OrbitPattern, base_radius: f32, orbit_speed: f32) -> Self {
        Self {
            pattern,
            angle: 0.0,
            base_radius,
            smoothed_radius: base_radius,
            inclination: 0.0,
            orbit_speed,
            eccentricity: 0.3,
            precession_rate: 0.2,
        }
    }

    /// Advance phase and radius: music speeds the orbit up and swells the
    /// radius, with the radius low-pass filtered to avoid visible snapping.
    pub fn advance(&mut self, bands: &BandIntensities, dt: f32) {
        self.angle += self.orbit_speed * (1.0 + bands.total() * ORBIT_MUSIC_SPEED_SCALE) * dt;
        let target = self.base_radius
            * (1.0 + (bands.high + ORBIT_RADIUS_MID_WEIGHT * bands.mid) * ORBIT_RADIUS_SWELL);
        let alpha = 1.0 - (1.0 - ORBIT_RADIUS_SMOOTHING).powf(dt * REFERENCE_FRAME_RATE);
        self.smoothed_radius += (target - self.smoothed_radius) * alpha;
    }

    /// Closed-form position on the current pattern, tilted by inclination and
    /// offset by the main body's centre.
    pub fn position(&self, time: f32, main_center: Vec3) -> Vec3 {
        let r = self.smoothed_radius;
        let a = self.angle;
        let flat = match self.pattern {
            OrbitPattern::Circular => Vec3::new(a.cos() * r, 0.0, a.sin() * r),
            OrbitPattern::Elliptical => {
                Vec3::new(a.cos() * r, 0.0, a.sin() * r * (1.0 - self.eccentricity))
            }
            OrbitPattern::Precessing => {
                let p = time * self.precession_rate;
                let (x, z) = (a.cos() * r, a.sin() * r);
                Vec3::new(x * p.cos() - z * p.sin(), 0.0, x * p.sin() + z * p.cos())
            }
            // Gerono lemniscate: crosses through the centre twice per cycle
            OrbitPattern::FigureEight => Vec3::new(a.sin() * r, 0.0, a.sin() * a.cos() * r),
        };
        main_center + tilt(flat, self.inclination)
    }
}

/// Rotate an XZ-plane point about the X axis by `inclination`.
fn tilt(p: Vec3, inclination: f32) -> Vec3 {
    Vec3::new(
        p.x,
        -p.z * inclination.sin(),
        p.z * inclination.cos(),
    )
}
