//! Tunable configuration assembled from the named constants.
//!
//! The web front-end builds these with `Default::default()`; tests build
//! custom values to pin growth and timing behavior.

use crate::constants::*;
use std::ops::Range;
use std::time::Duration;

/// Time-derived, capped target population: `clamp(floor(secs * rate), min, max)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrowthPolicy {
    pub rate_per_sec: f32,
    pub min: usize,
    pub max: usize,
}

impl GrowthPolicy {
    pub const fn new(rate_per_sec: f32, min: usize, max: usize) -> Self {
        Self {
            rate_per_sec,
            min,
            max,
        }
    }

    /// Target population after `elapsed_secs` of simulation time.
    ///
    /// NaN or negative elapsed times collapse to `min`; the result never
    /// exceeds `max`, however large the elapsed time.
    pub fn target(&self, elapsed_secs: f32) -> usize {
        let grown = (elapsed_secs * self.rate_per_sec).floor();
        let grown = if grown.is_nan() || grown <= 0.0 {
            0
        } else {
            // saturating float -> int cast
            grown as usize
        };
        grown.max(self.min).min(self.max)
    }

    /// Like [`target`](Self::target), with the grown count scaled by `factor` in \[0, 1\].
    pub fn scaled_target(&self, elapsed_secs: f32, factor: f32) -> usize {
        let base = self.target(elapsed_secs) as f32;
        let scaled = (base * factor.clamp(0.0, 1.0)).floor() as usize;
        scaled.max(self.min).min(self.max)
    }
}

/// Per-population growth policies plus motion ranges.
#[derive(Clone, Debug)]
pub struct SimConfig {
    pub pedestrians: GrowthPolicy,
    pub particles: GrowthPolicy,
    pub exterior: GrowthPolicy,
    pub pedestrian_speed: Range<f32>,
    pub pedestrian_spawns_per_tick: usize,
    pub particle_angular_speed: Range<f32>,
    /// Share by which the pedestrian target shrinks at full calm blend.
    pub calm_pedestrian_factor: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            pedestrians: GrowthPolicy::new(PEDESTRIAN_RATE_PER_SEC, PEDESTRIAN_MIN, PEDESTRIAN_MAX),
            particles: GrowthPolicy::new(PARTICLE_RATE_PER_SEC, PARTICLE_MIN, PARTICLE_MAX),
            exterior: GrowthPolicy::new(EXTERIOR_RATE_PER_SEC, EXTERIOR_MIN, EXTERIOR_MAX),
            pedestrian_speed: PEDESTRIAN_SPEED_MIN..PEDESTRIAN_SPEED_MAX,
            pedestrian_spawns_per_tick: PEDESTRIAN_SPAWNS_PER_TICK,
            particle_angular_speed: PARTICLE_ANGULAR_SPEED_MIN..PARTICLE_ANGULAR_SPEED_MAX,
            calm_pedestrian_factor: CALM_PEDESTRIAN_FACTOR,
        }
    }
}

/// Delays used by the panel state machine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelTiming {
    pub open_delay: Duration,
    pub close_delay: Duration,
    pub intensity_delay: Duration,
}

impl Default for PanelTiming {
    fn default() -> Self {
        Self {
            open_delay: Duration::from_millis(PANEL_OPEN_DELAY_MS),
            close_delay: Duration::from_millis(PANEL_CLOSE_DELAY_MS),
            intensity_delay: Duration::from_millis(INTENSITY_DELAY_MS),
        }
    }
}
