//! Navigation nodes: five fixed markers laid out on the shared polar frame.

use crate::constants::{NODE_DISTANCE_RATIO, SECTION_COUNT};
use crate::geometry::{polar_to_viewport, Frame};
use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, TAU};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeVisual {
    Selected,
    Unselected,
}

/// Angle of node `index`: starts at the top and advances by 2π/5.
#[inline]
pub fn node_angle(index: usize) -> f32 {
    -FRAC_PI_2 + index as f32 * TAU / SECTION_COUNT as f32
}

#[inline]
pub fn node_position(index: usize, frame: &Frame) -> Vec2 {
    polar_to_viewport(node_angle(index), NODE_DISTANCE_RATIO, frame)
}

/// Centers of all nodes for `frame`, in section order.
pub fn node_positions(frame: &Frame) -> [Vec2; SECTION_COUNT] {
    std::array::from_fn(|i| node_position(i, frame))
}

/// Selection state is derived, never stored.
#[inline]
pub fn node_visual(index: usize, active: Option<usize>) -> NodeVisual {
    if active == Some(index) {
        NodeVisual::Selected
    } else {
        NodeVisual::Unselected
    }
}
