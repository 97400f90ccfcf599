use super::{sample, EntityId};
use crate::constants::*;
use crate::geometry::{band_ratio, Frame};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;
use std::ops::Range;

/// Orbiting point in the proximity band. Never removed once spawned.
#[derive(Clone, Debug)]
pub struct ProximityParticle {
    pub id: EntityId,
    pub orbit_radius: f32,
    pub angle: f32,
    pub angular_velocity: f32,
    pub base_size: f32,
    pub size: f32,
    pub breath_speed: f32,
    pub breath_phase: f32,
    pub opacity: f32,
    pub radial_wobble_phase: f32,
    pub radial_wobble_speed: f32,
}

/// Radius range particles are spawned in: `[1.5 * inner, 0.8 * outer]`.
pub fn spawn_band(frame: &Frame) -> (f32, f32) {
    let lo = PARTICLE_INNER_BAND * frame.inner_radius;
    let hi = PARTICLE_OUTER_BAND * frame.outer_radius;
    (lo, hi.max(lo))
}

impl ProximityParticle {
    /// One of the frame-zero particles, evenly spread by angle and radius.
    pub fn seeded<R: Rng>(
        rng: &mut R,
        frame: &Frame,
        index: usize,
        count: usize,
        angular_speed: &Range<f32>,
        id: EntityId,
    ) -> Self {
        let count = count.max(1);
        let (lo, hi) = spawn_band(frame);
        let along = (index as f32 + 0.5) / count as f32;
        let angle = index as f32 / count as f32 * TAU;
        Self::with_orbit(rng, frame, lo + (hi - lo) * along, angle, angular_speed, id)
    }

    pub fn random<R: Rng>(
        rng: &mut R,
        frame: &Frame,
        angular_speed: &Range<f32>,
        id: EntityId,
    ) -> Self {
        let (lo, hi) = spawn_band(frame);
        let orbit_radius = sample(rng, &(lo..hi));
        let angle = rng.gen_range(0.0..TAU);
        Self::with_orbit(rng, frame, orbit_radius, angle, angular_speed, id)
    }

    fn with_orbit<R: Rng>(
        rng: &mut R,
        frame: &Frame,
        orbit_radius: f32,
        angle: f32,
        angular_speed: &Range<f32>,
        id: EntityId,
    ) -> Self {
        let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        let base_size = rng.gen_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX);
        let depth = band_ratio(
            orbit_radius,
            frame.inner_radius,
            frame.outer_radius,
            PARTICLE_DEFAULT_RATIO,
        );
        let opacity =
            PARTICLE_OPACITY_NEAR + (PARTICLE_OPACITY_FAR - PARTICLE_OPACITY_NEAR) * depth;
        Self {
            id,
            orbit_radius,
            angle,
            angular_velocity: sign * sample(rng, angular_speed),
            base_size,
            size: base_size,
            breath_speed: rng.gen_range(PARTICLE_BREATH_SPEED_MIN..PARTICLE_BREATH_SPEED_MAX),
            breath_phase: rng.gen_range(0.0..TAU),
            opacity,
            radial_wobble_phase: rng.gen_range(0.0..TAU),
            radial_wobble_speed: rng.gen_range(RADIAL_WOBBLE_SPEED_MIN..RADIAL_WOBBLE_SPEED_MAX),
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.angle = (self.angle + self.angular_velocity).rem_euclid(TAU);
        self.breath_phase += self.breath_speed;
        self.size = self.base_size * (1.0 + PARTICLE_BREATH_DEPTH * self.breath_phase.sin());
        self.radial_wobble_phase += self.radial_wobble_speed;
    }

    /// Current radius, wobbling within +/-8% of the base orbit.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.orbit_radius * (1.0 + RADIAL_WOBBLE_DEPTH * self.radial_wobble_phase.sin())
    }

    pub fn position(&self, frame: &Frame) -> Vec2 {
        frame.center + Vec2::new(self.angle.cos(), self.angle.sin()) * self.radius()
    }
}
