use crate::constants::EXTERIOR_PULSE_DEPTH;
use crate::geometry::{polar_to_viewport, Frame};
use glam::Vec2;

/// Fixed parameters of one exterior orbit.
#[derive(Clone, Copy, Debug)]
struct ExteriorSeed {
    angle: f32,
    ratio: f32,
    size: f32,
    speed: f32, // rad per second
}

const fn seed(angle: f32, ratio: f32, size: f32, speed: f32) -> ExteriorSeed {
    ExteriorSeed {
        angle,
        ratio,
        size,
        speed,
    }
}

const EXTERIOR_SEEDS: [ExteriorSeed; 12] = [
    seed(0.20, 0.94, 2.2, 0.030),
    seed(0.85, 0.97, 1.6, -0.022),
    seed(1.40, 0.92, 2.6, 0.018),
    seed(2.05, 0.98, 1.4, -0.035),
    seed(2.60, 0.95, 2.0, 0.026),
    seed(3.10, 0.93, 1.8, -0.015),
    seed(3.75, 0.99, 2.4, 0.020),
    seed(4.30, 0.96, 1.5, -0.028),
    seed(4.90, 0.92, 2.1, 0.033),
    seed(5.35, 0.97, 1.7, -0.019),
    seed(5.80, 0.94, 2.3, 0.024),
    seed(6.15, 0.99, 1.3, -0.031),
];

const GOLDEN_ANGLE: f32 = 2.399_963;

/// A renderable exterior point, rebuilt every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExteriorPoint {
    pub position: Vec2,
    pub size: f32,
    pub alpha: f32,
}

/// Pure function of `(index, time)`: indices past the table wrap around it,
/// each lap rotated by the golden angle so repeats do not overlap.
pub fn exterior_point(index: usize, time_secs: f32, frame: &Frame) -> ExteriorPoint {
    let s = EXTERIOR_SEEDS[index % EXTERIOR_SEEDS.len()];
    let lap = (index / EXTERIOR_SEEDS.len()) as f32;
    let phase = index as f32;
    let angle = s.angle + lap * GOLDEN_ANGLE + s.speed * time_secs;
    let size = s.size * (1.0 + EXTERIOR_PULSE_DEPTH * (time_secs * 1.5 + phase).sin());
    let alpha = 0.35 + 0.4 * (0.5 + 0.5 * (time_secs * 0.8 + phase * 1.3).sin());
    ExteriorPoint {
        position: polar_to_viewport(angle, s.ratio, frame),
        size,
        alpha,
    }
}
