//! Viewport frame and the polar mapping shared by the canvas and the DOM nodes.

use crate::constants::{INNER_RADIUS_RATIO, OUTER_RADIUS_RATIO};
use crate::error::CercaError;
use glam::Vec2;

/// Geometric reference recomputed on every resize (never persisted).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub width: f32,
    pub height: f32,
    pub center: Vec2,
    /// `min(width, height)`
    pub ref_size: f32,
    pub inner_radius: f32,
    pub outer_radius: f32,
}

impl Frame {
    pub fn new(width: f32, height: f32) -> Result<Self, CercaError> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(CercaError::DegenerateViewport { width, height });
        }
        let ref_size = width.min(height);
        Ok(Self {
            width,
            height,
            center: Vec2::new(width * 0.5, height * 0.5),
            ref_size,
            inner_radius: INNER_RADIUS_RATIO * ref_size,
            outer_radius: OUTER_RADIUS_RATIO * ref_size,
        })
    }

    #[inline]
    pub fn half_size(&self) -> f32 {
        self.ref_size * 0.5
    }
}

/// Map `angle` (radians, 0 = +x, clockwise on screen) and a distance ratio in
/// \[0, 1\] of half the centered square to viewport pixels.
#[inline]
pub fn polar_to_viewport(angle: f32, distance_ratio: f32, frame: &Frame) -> Vec2 {
    let r = distance_ratio * frame.half_size();
    frame.center + Vec2::new(angle.cos(), angle.sin()) * r
}

/// Normalized position of `r` inside `[lo, hi]`, or `fallback` when the range collapses.
#[inline]
pub fn band_ratio(r: f32, lo: f32, hi: f32, fallback: f32) -> f32 {
    let span = hi - lo;
    if !span.is_finite() || span.abs() < crate::constants::EPSILON {
        return fallback;
    }
    ((r - lo) / span).clamp(0.0, 1.0)
}
