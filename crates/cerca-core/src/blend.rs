//! Background blend factor driven by the panel's section and intensity.

use crate::constants::CAPTION_THRESHOLD;

/// 0 with no active section, otherwise `min(1, intensity)`.
#[inline]
pub fn blend_target(active: Option<usize>, intensity: f32) -> f32 {
    match active {
        None => 0.0,
        Some(_) => intensity.clamp(0.0, 1.0),
    }
}

/// Move `current` toward `target` at a rate that covers the full range in
/// `transition_secs`.
pub fn step_blend(current: f32, target: f32, dt_secs: f32, transition_secs: f32) -> f32 {
    if transition_secs <= 0.0 || !transition_secs.is_finite() {
        return target;
    }
    let max_step = (dt_secs.max(0.0) / transition_secs).min(1.0);
    let delta = (target - current).clamp(-max_step, max_step);
    (current + delta).clamp(0.0, 1.0)
}

/// Caption opacity: hidden up to the threshold, then fades in to 1.
#[inline]
pub fn caption_alpha(blend: f32) -> f32 {
    if blend <= CAPTION_THRESHOLD {
        0.0
    } else {
        ((blend - CAPTION_THRESHOLD) / (1.0 - CAPTION_THRESHOLD)).clamp(0.0, 1.0)
    }
}
