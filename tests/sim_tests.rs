use ferroviz::body::BodyKind;
use ferroviz::rng::SequenceRandom;
use ferroviz::sim::{ConfigError, QualitySettings, SimConfig, Simulation};
use ferroviz::spawner::BodyEvent;
use ferroviz::spectrum::SpectrumFrame;

const DT: f32 = 1.0 / 60.0;

fn loud_frame(magnitudes: &[f32]) -> SpectrumFrame<'_> {
    SpectrumFrame {
        magnitudes,
        sample_rate: 44_100.0,
        fft_size: 2048,
    }
}

fn small_quality() -> QualitySettings {
    QualitySettings {
        main_sphere_segments: 12,
        main_sphere_rings: 8,
        body_sphere_segments: 8,
        body_sphere_rings: 6,
        ..QualitySettings::default()
    }
}

#[test]
fn default_config_builds() {
    let sim = Simulation::new(SimConfig::default()).unwrap();
    assert_eq!(sim.body_counts().floating, 0);
    assert_eq!(sim.body_counts().orbital, 0);
    assert_eq!(sim.main_body().kind, BodyKind::Main);
}

#[test]
fn invalid_configs_are_rejected() {
    let bad_sensitivity = SimConfig {
        sensitivity: 0.0,
        ..SimConfig::default()
    };
    assert!(matches!(
        Simulation::new(bad_sensitivity),
        Err(ConfigError::InvalidSensitivity(_))
    ));

    let bad_sphere = SimConfig {
        quality: QualitySettings {
            body_sphere_segments: 2,
            ..QualitySettings::default()
        },
        ..SimConfig::default()
    };
    assert!(matches!(
        Simulation::new(bad_sphere),
        Err(ConfigError::DegenerateSphere { .. })
    ));
}

#[test]
fn non_positive_dt_is_ignored() {
    let mut sim = Simulation::new(SimConfig {
        seed: Some(1),
        quality: small_quality(),
        ..SimConfig::default()
    })
    .unwrap();
    sim.tick(0.0, None);
    sim.tick(-1.0, None);
    sim.tick(f32::NAN, None);
    assert_eq!(sim.elapsed(), 0.0);
}

#[test]
fn idle_simulation_settles_near_the_base_sphere() {
    let mut sim = Simulation::new(SimConfig {
        seed: Some(7),
        quality: small_quality(),
        ..SimConfig::default()
    })
    .unwrap();
    // Two seconds of silence to settle
    for _ in 0..120 {
        sim.tick(DT, None);
    }
    let before = sim.main_body().mesh.positions().to_vec();
    sim.tick(DT, None);
    let after = sim.main_body().mesh.positions();

    let mean_movement: f32 = before
        .iter()
        .zip(after)
        .map(|(a, b)| (*b - *a).length())
        .sum::<f32>()
        / before.len() as f32;
    assert!(mean_movement < 0.05, "still moving by {}", mean_movement);

    for p in after {
        assert!((p.length() - 2.0).abs() < 0.5, "unbounded vertex at {:?}", p);
    }
    assert_eq!(sim.body_counts().floating, 0, "spawned in silence");
}

#[test]
fn missing_frames_decay_the_bands() {
    let mut sim = Simulation::new(SimConfig {
        seed: Some(3),
        quality: small_quality(),
        ..SimConfig::default()
    })
    .unwrap();
    let magnitudes = vec![1.0f32; 1024];
    sim.tick(DT, Some(&loud_frame(&magnitudes)));
    let loud_total = sim.bands().total();
    assert!(loud_total > 1.0);

    sim.tick(DT, None);
    assert!(sim.bands().total() < loud_total);
    for _ in 0..240 {
        sim.tick(DT, None);
    }
    assert_eq!(sim.bands().total(), 0.0);
}

#[test]
fn loud_music_spawns_and_retires_bodies() {
    // A constant-zero random source makes every spawn roll succeed and picks
    // the minimum of every randomized range
    let config = SimConfig {
        quality: small_quality(),
        ..SimConfig::default()
    };
    let mut sim =
        Simulation::with_random_source(config, Box::new(SequenceRandom::constant(0.0))).unwrap();
    let magnitudes = vec![1.0f32; 1024];

    sim.tick(0.1, Some(&loud_frame(&magnitudes)));
    let counts = sim.body_counts();
    assert_eq!(counts.floating, 1);
    assert_eq!(counts.orbital, 1);
    let events = sim.drain_events();
    assert_eq!(events.len(), 2);
    assert!(events
        .iter()
        .any(|e| matches!(e, BodyEvent::Spawned { kind: BodyKind::Floating, .. })));
    assert!(events
        .iter()
        .any(|e| matches!(e, BodyEvent::Spawned { kind: BodyKind::Orbital, .. })));

    // Ten loud seconds: cooldowns refill the population up to the caps, and
    // the first floating bodies (minimum life, 8s) die off
    let mut all_events = Vec::new();
    for _ in 0..100 {
        sim.tick(0.1, Some(&loud_frame(&magnitudes)));
        let counts = sim.body_counts();
        assert!(counts.floating <= sim_caps().0);
        assert!(counts.orbital <= sim_caps().1);
        all_events.extend(sim.drain_events());
    }
    assert!(all_events
        .iter()
        .any(|e| matches!(e, BodyEvent::Removed { kind: BodyKind::Floating, .. })));
}

fn sim_caps() -> (usize, usize) {
    let q = QualitySettings::default();
    (q.max_floating, q.max_orbital)
}

#[test]
fn bodies_iterator_walks_main_first() {
    let config = SimConfig {
        quality: small_quality(),
        ..SimConfig::default()
    };
    let mut sim =
        Simulation::with_random_source(config, Box::new(SequenceRandom::constant(0.0))).unwrap();
    let magnitudes = vec![1.0f32; 1024];
    for _ in 0..30 {
        sim.tick(0.1, Some(&loud_frame(&magnitudes)));
    }
    let bodies: Vec<_> = sim.bodies().collect();
    assert_eq!(bodies[0].kind, BodyKind::Main);
    let counts = sim.body_counts();
    assert_eq!(bodies.len(), 1 + counts.floating + counts.orbital);
}

#[test]
fn same_seed_and_frames_reproduce_the_run() {
    let config = SimConfig {
        seed: Some(42),
        quality: small_quality(),
        ..SimConfig::default()
    };
    let magnitudes = vec![0.8f32; 1024];

    let run = |mut sim: Simulation| {
        for i in 0..120 {
            // Alternate loud and missing frames to cover both paths
            if i % 3 == 0 {
                sim.tick(DT, None);
            } else {
                sim.tick(DT, Some(&loud_frame(&magnitudes)));
            }
        }
        sim
    };
    let a = run(Simulation::new(config).unwrap());
    let b = run(Simulation::new(config).unwrap());

    assert_eq!(a.body_counts(), b.body_counts());
    assert_eq!(
        a.main_body().mesh.position_bytes(),
        b.main_body().mesh.position_bytes()
    );
    for (x, y) in a.floating_bodies().iter().zip(b.floating_bodies()) {
        assert_eq!(x.center, y.center);
        assert_eq!(x.scale, y.scale);
        assert_eq!(x.life, y.life);
    }
}

#[test]
fn main_sources_are_refreshed_each_loud_tick() {
    let mut sim = Simulation::new(SimConfig {
        seed: Some(9),
        quality: small_quality(),
        ..SimConfig::default()
    })
    .unwrap();
    assert!(sim.main_sources().is_empty());
    let magnitudes = vec![1.0f32; 1024];
    sim.tick(DT, Some(&loud_frame(&magnitudes)));
    assert!(!sim.main_sources().is_empty());
}
