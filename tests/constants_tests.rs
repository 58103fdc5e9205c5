//! Sanity checks on the tuned constants: relationships the update code
//! silently relies on.

use ferroviz::constants::*;

#[test]
fn band_edges_are_ordered() {
    assert!(LOW_BAND_MIN_HZ < LOW_BAND_MAX_HZ);
    assert!(LOW_BAND_MAX_HZ < MID_BAND_MAX_HZ);
    assert!(MID_BAND_MAX_HZ < HIGH_BAND_MAX_HZ);
}

#[test]
fn lifecycle_fractions_are_ordered() {
    assert!(GROW_PHASE_END > 0.0 && GROW_PHASE_END < MATURE_PHASE_END);
    assert!(MATURE_PHASE_END < 1.0);
    assert!(COLLAPSE_LIFE_THRESHOLD > 0.0 && COLLAPSE_LIFE_THRESHOLD < 1.0);
    assert!(AGING_SCALE_FLOOR > 0.0 && AGING_SCALE_FLOOR < 1.0);
}

#[test]
fn smoothing_factors_are_valid_per_frame_fractions() {
    for k in [
        SCALE_SMOOTHING,
        COLLAPSE_SMOOTHING,
        ORBIT_RADIUS_SMOOTHING,
        ORBIT_POSITION_EASE,
        BASE_DAMPING,
        FLOAT_DAMPING_PER_FRAME,
    ] {
        assert!(k > 0.0 && k < 1.0, "factor {} out of (0, 1)", k);
    }
    // Damping stays a contraction even at the high-intensity cap
    assert!(BASE_DAMPING + HIGH_DAMPING_MAX < 1.0);
}

#[test]
fn spike_profiles_trade_width_for_strength() {
    assert!(SPIKE_ULTRA_THIN.0 < SPIKE_THIN.0 && SPIKE_THIN.0 < SPIKE_MEDIUM.0);
    assert!(SPIKE_ULTRA_THIN.1 > SPIKE_THIN.1 && SPIKE_THIN.1 > SPIKE_MEDIUM.1);
}

#[test]
fn spawner_ranges_are_well_formed() {
    assert!(SPAWN_PROBABILITY_MAX <= 1.0);
    assert!(SPAWN_THRESHOLD > 0.0);
    assert!(FLOATING_LIFE_MIN_SEC < FLOATING_LIFE_MAX_SEC);
    assert!(ORBITAL_LIFE_MIN_SEC < ORBITAL_LIFE_MAX_SEC);
    assert!(GROWTH_POTENTIAL_MIN >= 1.0 && GROWTH_POTENTIAL_MIN < GROWTH_POTENTIAL_MAX);
    assert!(SECONDARY_SIZE_MIN < SECONDARY_SIZE_MAX && SECONDARY_SIZE_MAX < 1.0);
    assert!(ORBIT_SPEED_MIN < ORBIT_SPEED_MAX);
    assert!(ORBIT_RADIUS_MIN > BASE_SPHERE_RADIUS);
    assert!(ORBIT_RADIUS_MIN < ORBIT_RADIUS_MAX);
    assert!(ORBIT_ECCENTRICITY_MIN < ORBIT_ECCENTRICITY_MAX);
}

#[test]
fn inner_core_never_pokes_through() {
    assert!(INNER_CORE_MIN_RATIO > 0.0);
    assert!(INNER_CORE_MIN_RATIO < INNER_CORE_MARGIN);
    assert!(INNER_CORE_MARGIN < 1.0);
}

#[test]
fn default_quality_is_buildable() {
    assert!(MAIN_SPHERE_SEGMENTS >= 3 && MAIN_SPHERE_RINGS >= 2);
    assert!(BODY_SPHERE_SEGMENTS >= 3 && BODY_SPHERE_RINGS >= 2);
    assert!(DEFAULT_MAX_FLOATING > 0 && DEFAULT_MAX_ORBITAL > 0);
}
