//! Proximity-map entity simulation.
//!
//! Owns the three populations drawn by the background: pedestrians inside
//! the city disc, proximity particles orbiting in the band around it, and
//! exterior points that are recomputed from a lookup table every frame.
//! Each population grows toward a time-derived, capped target.

mod exterior;
mod particle;
mod pedestrian;

pub use exterior::{exterior_point, ExteriorPoint};
pub use particle::{spawn_band, ProximityParticle};
pub use pedestrian::{cull_radius, street_offsets, Axis, Pedestrian};

use crate::config::SimConfig;
use crate::geometry::Frame;
use rand::rngs::StdRng;
use rand::Rng;
use std::ops::Range;

/// Identity of a spawned entity, unique for the lifetime of a [`Simulation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

/// Target sizes of the three populations at a given time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PopulationTargets {
    pub pedestrians: usize,
    pub particles: usize,
    pub exterior: usize,
}

/// Which populations have reached their configured cap since the last
/// (re)initialisation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PopulationCaps {
    pub pedestrians: bool,
    pub particles: bool,
    pub exterior: bool,
}

/// Sample from `range`, returning its start when the range is empty.
#[inline]
pub(crate) fn sample<R: Rng>(rng: &mut R, range: &Range<f32>) -> f32 {
    if range.start < range.end {
        rng.gen_range(range.clone())
    } else {
        range.start
    }
}

pub struct Simulation {
    config: SimConfig,
    frame: Frame,
    rng: StdRng,
    next_id: u64,
    pedestrians: Vec<Pedestrian>,
    particles: Vec<ProximityParticle>,
    caps: PopulationCaps,
}

impl Simulation {
    pub fn new(frame: Frame, config: SimConfig, rng: StdRng) -> Self {
        let mut sim = Self {
            config,
            frame,
            rng,
            next_id: 0,
            pedestrians: Vec::new(),
            particles: Vec::new(),
            caps: PopulationCaps::default(),
        };
        sim.seed_particles();
        sim
    }

    /// Discard every live entity and rebuild the frame-zero set for `frame`.
    pub fn reinitialize(&mut self, frame: Frame) {
        log::debug!(
            "[sim] reinit {}x{} (dropping {} pedestrians, {} particles)",
            frame.width,
            frame.height,
            self.pedestrians.len(),
            self.particles.len()
        );
        self.frame = frame;
        self.pedestrians.clear();
        self.particles.clear();
        self.caps = PopulationCaps::default();
        self.seed_particles();
    }

    fn seed_particles(&mut self) {
        let count = self.config.particles.target(0.0);
        for i in 0..count {
            let id = self.alloc_id();
            let p = ProximityParticle::seeded(
                &mut self.rng,
                &self.frame,
                i,
                count,
                &self.config.particle_angular_speed,
                id,
            );
            self.particles.push(p);
        }
    }

    fn alloc_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Targets at `elapsed_secs`; the pedestrian target shrinks as `blend` rises.
    pub fn targets(&self, elapsed_secs: f32, blend: f32) -> PopulationTargets {
        let calm = 1.0 - self.config.calm_pedestrian_factor * blend.clamp(0.0, 1.0);
        PopulationTargets {
            pedestrians: self.config.pedestrians.scaled_target(elapsed_secs, calm),
            particles: self.config.particles.target(elapsed_secs),
            exterior: self.config.exterior.target(elapsed_secs),
        }
    }

    /// One tick: advance every live entity, cull escaped pedestrians, then
    /// spawn toward the current targets.
    pub fn step(&mut self, elapsed_secs: f32, blend: f32) {
        for p in &mut self.pedestrians {
            p.advance();
        }
        let limit = cull_radius(&self.frame);
        self.pedestrians.retain(|p| p.distance_from_center() <= limit);

        for p in &mut self.particles {
            p.advance();
        }

        let targets = self.targets(elapsed_secs, blend);
        let mut spawned = 0;
        while self.pedestrians.len() < targets.pedestrians
            && spawned < self.config.pedestrian_spawns_per_tick
        {
            let id = self.alloc_id();
            let p = Pedestrian::spawn(
                &mut self.rng,
                &self.frame,
                &self.config.pedestrian_speed,
                id,
            );
            self.pedestrians.push(p);
            spawned += 1;
        }

        if self.particles.len() < targets.particles {
            let id = self.alloc_id();
            let p = ProximityParticle::random(
                &mut self.rng,
                &self.frame,
                &self.config.particle_angular_speed,
                id,
            );
            self.particles.push(p);
        }
        self.note_caps(targets);
    }

    fn note_caps(&mut self, targets: PopulationTargets) {
        let max = (
            self.config.pedestrians.max,
            self.config.particles.max,
            self.config.exterior.max,
        );
        if !self.caps.pedestrians && self.pedestrians.len() >= max.0 {
            self.caps.pedestrians = true;
            log::info!("[sim] pedestrians reached cap ({})", max.0);
        }
        if !self.caps.particles && self.particles.len() >= max.1 {
            self.caps.particles = true;
            log::info!("[sim] proximity particles reached cap ({})", max.1);
        }
        if !self.caps.exterior && targets.exterior >= max.2 {
            self.caps.exterior = true;
            log::info!("[sim] exterior points reached cap ({})", max.2);
        }
    }

    /// Exterior points for this instant. Stateless: a pure function of time.
    pub fn exterior_points(&self, elapsed_secs: f32) -> impl Iterator<Item = ExteriorPoint> {
        let frame = self.frame;
        let n = self.config.exterior.target(elapsed_secs);
        (0..n).map(move |i| exterior_point(i, elapsed_secs, &frame))
    }

    pub fn caps(&self) -> PopulationCaps {
        self.caps
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn pedestrians(&self) -> &[Pedestrian] {
        &self.pedestrians
    }

    pub fn particles(&self) -> &[ProximityParticle] {
        &self.particles
    }
}
