use ferroviz::body::{BodyKind, DeformableBody};
use ferroviz::constants::*;
use ferroviz::influence::DeformProfile;
use ferroviz::physics::step_floating;
use ferroviz::rng::SequenceRandom;
use ferroviz::spectrum::BandIntensities;
use glam::Vec3;

const DT: f32 = 1.0 / 60.0;

fn quiet() -> BandIntensities {
    BandIntensities::default()
}

fn floater(id: u32) -> DeformableBody {
    let mut rng = SequenceRandom::constant(0.0);
    DeformableBody::new(id, BodyKind::Floating, DeformProfile::main(), 8, 6, &mut rng)
}

#[test]
fn speed_is_clamped() {
    let mut bodies = vec![floater(1)];
    bodies[0].velocity = Vec3::new(100.0, 0.0, 0.0);
    step_floating(&mut bodies, 0.0, &quiet(), DT);
    assert!(bodies[0].velocity.length() <= FLOAT_MAX_SPEED + 1e-4);
}

#[test]
fn bodies_bounce_off_the_bounds() {
    let mut bodies = vec![floater(1)];
    bodies[0].center = Vec3::new(FLOAT_BOUNDS + 1.0, 0.0, 0.0);
    bodies[0].velocity = Vec3::new(2.0, 0.0, 0.0);
    step_floating(&mut bodies, 0.0, &quiet(), DT);
    assert!(bodies[0].center.x <= FLOAT_BOUNDS);
    assert!(bodies[0].velocity.x < 0.0, "velocity not reflected inward");
}

#[test]
fn overlapping_bodies_are_pushed_apart() {
    let mut bodies = vec![floater(1), floater(2)];
    bodies[0].center = Vec3::ZERO;
    bodies[1].center = Vec3::new(0.2, 0.0, 0.0);
    let before = (bodies[1].center - bodies[0].center).length();
    step_floating(&mut bodies, 0.0, &quiet(), DT);
    let after = (bodies[1].center - bodies[0].center).length();
    assert!(after > before, "still overlapping: {} -> {}", before, after);
}

#[test]
fn separated_bodies_are_left_alone_by_the_collision_pass() {
    let mut bodies = vec![floater(1), floater(2)];
    bodies[0].center = Vec3::new(-6.0, 0.0, 0.0);
    bodies[1].center = Vec3::new(6.0, 0.0, 0.0);
    step_floating(&mut bodies, 0.0, &quiet(), DT);
    // Drift moves them a little, but nothing near a collision shove
    assert!((bodies[0].center + Vec3::new(6.0, 0.0, 0.0)).length() < 0.1);
    assert!((bodies[1].center - Vec3::new(6.0, 0.0, 0.0)).length() < 0.1);
}

#[test]
fn drift_stays_inside_the_bounds_over_time() {
    let loud = BandIntensities {
        low: 1.0,
        mid: 1.0,
        high: 1.0,
    };
    let mut bodies = vec![floater(1), floater(2), floater(3)];
    bodies[0].center = Vec3::new(3.0, 0.0, 0.0);
    bodies[1].center = Vec3::new(-3.0, 2.0, 0.0);
    bodies[2].center = Vec3::new(0.0, -2.0, 3.0);
    for i in 0..600 {
        step_floating(&mut bodies, i as f32 * DT, &loud, DT);
        for body in &bodies {
            assert!(body.center.is_finite());
            // The collision pass can shove a wall-hugging body slightly past
            // the bounds; the bounce recovers it next frame
            assert!(body.center.abs().max_element() <= FLOAT_BOUNDS + 1.1);
            assert!(body.velocity.length() <= FLOAT_MAX_SPEED + 1e-4);
        }
    }
}
