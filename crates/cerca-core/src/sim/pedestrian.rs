use super::{sample, EntityId};
use crate::constants::*;
use crate::geometry::Frame;
use glam::Vec2;
use rand::Rng;
use std::ops::Range;

/// Which street family a pedestrian walks along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A walker confined to the city disc.
///
/// Fields:
/// - `street_offset`: signed perpendicular offset of its lane, including the sidewalk bias
/// - `position`: signed distance walked along the lane, measured from the center
/// - `direction`: +1 or -1, fixed at spawn
/// - `speed`: pixels per frame, fixed at spawn
/// - `wobble_phase` / `wobble_speed`: small lateral jitter, independent of forward motion
#[derive(Clone, Debug)]
pub struct Pedestrian {
    pub id: EntityId,
    pub axis: Axis,
    pub street_offset: f32,
    pub position: f32,
    pub direction: f32,
    pub speed: f32,
    pub wobble_phase: f32,
    pub wobble_speed: f32,
}

/// Radius beyond which a pedestrian is removed.
#[inline]
pub fn cull_radius(frame: &Frame) -> f32 {
    PEDESTRIAN_CULL_RATIO * frame.inner_radius
}

/// Signed lane offsets of the street grid (same set for both axes).
pub fn street_offsets(frame: &Frame) -> impl Iterator<Item = f32> {
    let span = STREET_SPAN_RATIO * frame.inner_radius;
    let n = STREETS_PER_AXIS;
    (0..n).map(move |k| {
        if n <= 1 {
            0.0
        } else {
            -span + 2.0 * span * k as f32 / (n - 1) as f32
        }
    })
}

impl Pedestrian {
    /// Place a walker at a random end of a random lane, heading inward.
    pub fn spawn<R: Rng>(rng: &mut R, frame: &Frame, speed: &Range<f32>, id: EntityId) -> Self {
        let axis = if rng.gen_bool(0.5) {
            Axis::Horizontal
        } else {
            Axis::Vertical
        };
        let lanes: Vec<f32> = street_offsets(frame).collect();
        let lane = lanes[rng.gen_range(0..lanes.len())];
        let side = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        let street_offset = lane + side * SIDEWALK_BIAS_RATIO * frame.inner_radius;

        let limit = cull_radius(frame);
        let extent = (limit * limit - street_offset * street_offset).max(0.0).sqrt() * 0.98;
        let direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };

        Self {
            id,
            axis,
            street_offset,
            position: -direction * extent,
            direction,
            speed: sample(rng, speed),
            wobble_phase: rng.gen_range(0.0..std::f32::consts::TAU),
            wobble_speed: rng.gen_range(WOBBLE_SPEED_MIN..WOBBLE_SPEED_MAX),
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.position += self.direction * self.speed;
        self.wobble_phase += self.wobble_speed;
    }

    /// Distance from the disc center along the lane grid (jitter excluded).
    #[inline]
    pub fn distance_from_center(&self) -> f32 {
        self.position.hypot(self.street_offset)
    }

    /// Drawn position, including the lateral wobble.
    pub fn screen_position(&self, frame: &Frame) -> Vec2 {
        let lateral = self.street_offset + self.wobble_phase.sin() * WOBBLE_AMPLITUDE;
        match self.axis {
            Axis::Horizontal => frame.center + Vec2::new(self.position, lateral),
            Axis::Vertical => frame.center + Vec2::new(lateral, self.position),
        }
    }
}
