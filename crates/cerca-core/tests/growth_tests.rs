// Host-side tests for the time-derived population targets.

use cerca_core::{GrowthPolicy, SimConfig};

fn policies() -> Vec<(&'static str, GrowthPolicy)> {
    let c = SimConfig::default();
    vec![
        ("pedestrians", c.pedestrians),
        ("particles", c.particles),
        ("exterior", c.exterior),
    ]
}

#[test]
fn target_starts_at_minimum() {
    for (name, p) in policies() {
        assert_eq!(p.target(0.0), p.min, "{name} should start at its minimum");
    }
}

#[test]
fn target_never_exceeds_cap() {
    for (name, p) in policies() {
        for secs in [0.0, 1.0, 30.0, 600.0, 1.0e6, 1.0e30, f32::MAX, f32::INFINITY] {
            assert!(p.target(secs) <= p.max, "{name} exceeded cap at {secs}s");
        }
    }
}

#[test]
fn target_is_monotonic_in_time() {
    for (name, p) in policies() {
        let mut prev = p.target(0.0);
        for step in 1..2000 {
            let t = step as f32 * 0.25;
            let cur = p.target(t);
            assert!(cur >= prev, "{name} shrank at {t}s: {prev} -> {cur}");
            prev = cur;
        }
        assert_eq!(prev, p.max, "{name} should reach its cap within 500s");
    }
}

#[test]
fn target_floors_the_grown_count() {
    let p = GrowthPolicy::new(2.0, 0, 100);
    assert_eq!(p.target(0.4), 0);
    assert_eq!(p.target(0.5), 1);
    assert_eq!(p.target(10.9), 21);
}

#[test]
fn nan_and_negative_elapsed_fall_back_to_minimum() {
    let p = GrowthPolicy::new(1.0, 5, 50);
    assert_eq!(p.target(f32::NAN), 5);
    assert_eq!(p.target(-100.0), 5);
    assert_eq!(p.target(f32::NEG_INFINITY), 5);
}

#[test]
fn pedestrians_grow_fastest_to_the_highest_cap() {
    let c = SimConfig::default();
    assert!(c.pedestrians.rate_per_sec > c.particles.rate_per_sec);
    assert!(c.pedestrians.rate_per_sec > c.exterior.rate_per_sec);
    assert!(c.pedestrians.max > c.particles.max);
    assert!(c.pedestrians.max > c.exterior.max);
}

#[test]
fn scaled_target_stays_within_bounds() {
    let p = GrowthPolicy::new(1.0, 10, 40);
    assert_eq!(p.scaled_target(1000.0, 1.0), 40);
    assert_eq!(p.scaled_target(1000.0, 0.5), 20);
    assert_eq!(p.scaled_target(1000.0, 0.0), 10);
    assert_eq!(p.scaled_target(1000.0, 7.0), 40);
}
