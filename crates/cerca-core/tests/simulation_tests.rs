// Host-side tests for the entity simulation: growth, containment, identity.

use cerca_core::sim::{
    cull_radius, exterior_point, spawn_band, EntityId, PopulationCaps, Simulation,
};
use cerca_core::{Frame, SimConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

const FRAME_DT: f32 = 1.0 / 60.0;

fn make_sim(seed: u64) -> Simulation {
    let frame = Frame::new(1280.0, 800.0).unwrap();
    Simulation::new(frame, SimConfig::default(), StdRng::seed_from_u64(seed))
}

fn live_ids(sim: &Simulation) -> HashSet<EntityId> {
    sim.pedestrians()
        .iter()
        .map(|p| p.id)
        .chain(sim.particles().iter().map(|p| p.id))
        .collect()
}

#[test]
fn frame_zero_seeds_the_minimum_particle_set() {
    let sim = make_sim(1);
    let cfg = SimConfig::default();
    assert_eq!(sim.particles().len(), cfg.particles.min);
    assert!(sim.pedestrians().is_empty());
    let (lo, hi) = spawn_band(sim.frame());
    for p in sim.particles() {
        assert!(p.orbit_radius >= lo - 1e-3 && p.orbit_radius <= hi + 1e-3);
    }
}

#[test]
fn pedestrians_stay_inside_the_cull_radius() {
    let mut sim = make_sim(7);
    let limit = cull_radius(sim.frame());
    let mut seen_dead: HashSet<EntityId> = HashSet::new();
    let mut prev: HashSet<EntityId> = HashSet::new();
    for tick in 0..6000 {
        sim.step(tick as f32 * FRAME_DT, 0.0);
        let cur: HashSet<EntityId> = sim.pedestrians().iter().map(|p| p.id).collect();
        for p in sim.pedestrians() {
            assert!(
                p.distance_from_center() <= limit,
                "pedestrian {:?} at {} beyond {}",
                p.id,
                p.distance_from_center(),
                limit
            );
            assert!(!seen_dead.contains(&p.id), "culled pedestrian came back");
        }
        seen_dead.extend(prev.difference(&cur).copied());
        prev = cur;
    }
    assert!(!seen_dead.is_empty(), "expected some pedestrians to walk out");
}

#[test]
fn pedestrian_lane_never_changes() {
    let mut sim = make_sim(3);
    for tick in 0..30 {
        sim.step(tick as f32 * FRAME_DT, 0.0);
    }
    let snapshot: Vec<_> = sim
        .pedestrians()
        .iter()
        .map(|p| (p.id, p.axis, p.street_offset, p.direction, p.speed))
        .collect();
    sim.step(31.0 * FRAME_DT, 0.0);
    for (id, axis, offset, dir, speed) in snapshot {
        if let Some(p) = sim.pedestrians().iter().find(|p| p.id == id) {
            assert_eq!(p.axis, axis);
            assert_eq!(p.street_offset, offset);
            assert_eq!(p.direction, dir);
            assert_eq!(p.speed, speed);
        }
    }
}

#[test]
fn populations_never_exceed_their_caps() {
    let mut sim = make_sim(11);
    let cfg = SimConfig::default();
    for tick in 0..4000 {
        // jump time forward fast so every cap is hit
        let elapsed = tick as f32 * 0.5;
        sim.step(elapsed, (tick % 3) as f32 * 0.5);
        assert!(sim.pedestrians().len() <= cfg.pedestrians.max);
        assert!(sim.particles().len() <= cfg.particles.max);
        assert!(sim.exterior_points(elapsed).count() <= cfg.exterior.max);
    }
    assert_eq!(sim.particles().len(), cfg.particles.max);
}

#[test]
fn huge_elapsed_time_is_still_bounded() {
    let mut sim = make_sim(5);
    let cfg = SimConfig::default();
    for _ in 0..500 {
        sim.step(f32::MAX, 0.0);
    }
    assert!(sim.pedestrians().len() <= cfg.pedestrians.max);
    assert!(sim.particles().len() <= cfg.particles.max);
    assert_eq!(sim.exterior_points(f32::INFINITY).count(), cfg.exterior.max);
}

#[test]
fn particles_are_never_removed() {
    let mut sim = make_sim(9);
    let mut known: HashSet<EntityId> = sim.particles().iter().map(|p| p.id).collect();
    for tick in 0..3000 {
        sim.step(tick as f32 * 0.2, 0.0);
        let cur: HashSet<EntityId> = sim.particles().iter().map(|p| p.id).collect();
        assert!(known.is_subset(&cur), "a particle disappeared at tick {tick}");
        known = cur;
    }
}

#[test]
fn particle_angle_moves_by_its_fixed_velocity() {
    let mut sim = make_sim(13);
    let before: Vec<(f32, f32)> = sim
        .particles()
        .iter()
        .map(|p| (p.angle, p.angular_velocity))
        .collect();
    sim.step(0.0, 0.0);
    for (p, (a0, w)) in sim.particles().iter().zip(before) {
        assert!(w != 0.0);
        let expected = (a0 + w).rem_euclid(std::f32::consts::TAU);
        assert!((p.angle - expected).abs() < 1e-5);
        assert!(p.angle >= 0.0 && p.angle < std::f32::consts::TAU);
    }
}

#[test]
fn particle_radius_wobbles_within_eight_percent() {
    let mut sim = make_sim(17);
    for tick in 0..2000 {
        sim.step(tick as f32 * FRAME_DT, 0.0);
        for p in sim.particles() {
            let r = p.radius();
            assert!(r <= p.orbit_radius * 1.08 + 1e-3);
            assert!(r >= p.orbit_radius * 0.92 - 1e-3);
            assert!(p.opacity > 0.0 && p.opacity <= 1.0);
        }
    }
}

#[test]
fn resize_discards_every_live_entity() {
    let mut sim = make_sim(21);
    for tick in 0..240 {
        sim.step(tick as f32 * FRAME_DT, 0.0);
    }
    let before = live_ids(&sim);
    assert!(!before.is_empty());

    sim.reinitialize(Frame::new(640.0, 480.0).unwrap());
    assert_eq!(sim.frame().width, 640.0);
    assert!(sim.pedestrians().is_empty());
    sim.step(241.0 * FRAME_DT, 0.0);
    let after = live_ids(&sim);
    assert!(!after.is_empty());
    assert!(before.is_disjoint(&after));
}

#[test]
fn calm_blend_lowers_the_pedestrian_target_only() {
    let sim = make_sim(2);
    let busy = sim.targets(60.0, 0.0);
    let calm = sim.targets(60.0, 1.0);
    assert!(calm.pedestrians < busy.pedestrians);
    assert_eq!(calm.particles, busy.particles);
    assert_eq!(calm.exterior, busy.exterior);
}

#[test]
fn exterior_points_are_a_pure_function_of_time() {
    let sim = make_sim(4);
    let a: Vec<_> = sim.exterior_points(42.0).collect();
    let b: Vec<_> = sim.exterior_points(42.0).collect();
    assert_eq!(a, b);
    let later: Vec<_> = sim.exterior_points(43.0).collect();
    assert_ne!(a[0].position, later[0].position);

    let frame = *sim.frame();
    for i in 0..40 {
        let p = exterior_point(i, 10.0, &frame);
        assert!(p.position.x.is_finite() && p.position.y.is_finite());
        assert!((p.position - frame.center).length() <= frame.half_size() + 1e-3);
    }
    // wrapped indices do not sit on top of their table twin
    assert_ne!(exterior_point(0, 0.0, &frame).position, exterior_point(12, 0.0, &frame).position);
}

#[test]
fn every_population_reports_reaching_its_cap() {
    let mut sim = make_sim(21);
    assert_eq!(sim.caps(), PopulationCaps::default());

    sim.step(1.0, 0.0);
    assert!(!sim.caps().exterior);
    assert!(!sim.caps().pedestrians);

    let late = 10_000.0;
    for _ in 0..400 {
        sim.step(late, 0.0);
    }
    let caps = sim.caps();
    assert!(caps.pedestrians, "pedestrians never reached {}", SimConfig::default().pedestrians.max);
    assert!(caps.particles);
    assert!(caps.exterior);

    let frame = *sim.frame();
    sim.reinitialize(frame);
    assert_eq!(sim.caps(), PopulationCaps::default());
}
