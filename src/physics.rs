//! Drift and collision physics for floating bodies.
//!
//! Deliberately cheap and fully decoupled from the deformation core: noise
//! acceleration, velocity damping, a speed clamp, wall bounces at a bounding
//! box and pairwise overlap push-apart. Orbital bodies are positioned by
//! orbit kinematics instead and never pass through here.

use crate::body::DeformableBody;
use crate::constants::*;
use crate::noise;
use crate::spectrum::BandIntensities;
use glam::Vec3;

pub fn step_floating(bodies: &mut [DeformableBody], time: f32, bands: &BandIntensities, dt: f32) {
    let t = time * 0.25;
    let damp = FLOAT_DAMPING_PER_FRAME.powf(dt * REFERENCE_FRAME_RATE);
    for body in bodies.iter_mut() {
        // Offset sample points per axis so drift direction decorrelates
        let drift = Vec3::new(
            noise::organic(body.center * 0.1 + Vec3::splat(7.3), t),
            noise::organic(body.center * 0.1 + Vec3::splat(19.1), t),
            noise::organic(body.center * 0.1 + Vec3::splat(31.7), t),
        ) * (FLOAT_DRIFT_ACCEL * (1.0 + bands.total()));

        body.velocity += drift * dt;
        body.velocity *= damp;
        let speed = body.velocity.length();
        if speed > FLOAT_MAX_SPEED {
            body.velocity *= FLOAT_MAX_SPEED / speed;
        }
        body.center += body.velocity * dt;

        bounce_axis(&mut body.center.x, &mut body.velocity.x);
        bounce_axis(&mut body.center.y, &mut body.velocity.y);
        bounce_axis(&mut body.center.z, &mut body.velocity.z);
    }

    push_apart(bodies);
}

fn bounce_axis(pos: &mut f32, vel: &mut f32) {
    if *pos < -FLOAT_BOUNDS {
        *pos = -FLOAT_BOUNDS;
        *vel = vel.abs() * WALL_RESTITUTION;
    } else if *pos > FLOAT_BOUNDS {
        *pos = FLOAT_BOUNDS;
        *vel = -vel.abs() * WALL_RESTITUTION;
    }
}

/// Pairwise overlap resolution: overlapping bodies are pushed apart along the
/// line between centres, half each.
fn push_apart(bodies: &mut [DeformableBody]) {
    let n = bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (head, tail) = bodies.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];
            let min_dist =
                BASE_SPHERE_RADIUS * (a.profile.size_scale * a.scale + b.profile.size_scale * b.scale);
            let delta = b.center - a.center;
            let dist = delta.length();
            if dist < min_dist && dist > 1e-4 {
                let push = delta / dist * (min_dist - dist) * 0.5 * COLLISION_PUSH;
                a.center -= push;
                b.center += push;
            }
        }
    }
}
