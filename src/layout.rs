// Pure placement helpers for the DOM layer. Positions come from the same
// polar mapping the canvas uses, so nodes sit exactly on the drawn map.

use crate::constants::{
    NODE_CLASS, NODE_SELECTED_CLASS, NODE_SIZE_PX, PANEL_CLASS, PANEL_OPEN_CLASS,
};
use cerca_core::nav::{node_position, NodeVisual};
use cerca_core::Frame;
use glam::Vec2;

/// Absolutely positioned box for a navigation node, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeBox {
    pub center: Vec2,
    pub left: f32,
    pub top: f32,
    pub size: f32,
}

#[inline]
pub fn node_box(index: usize, frame: &Frame) -> NodeBox {
    let center = node_position(index, frame);
    let half = NODE_SIZE_PX * 0.5;
    NodeBox {
        center,
        left: center.x - half,
        top: center.y - half,
        size: NODE_SIZE_PX,
    }
}

pub fn node_style(b: &NodeBox) -> String {
    format!(
        "left:{:.2}px;top:{:.2}px;width:{:.0}px;height:{:.0}px",
        b.left, b.top, b.size, b.size
    )
}

#[inline]
pub fn node_class(visual: NodeVisual) -> &'static str {
    match visual {
        NodeVisual::Selected => NODE_SELECTED_CLASS,
        NodeVisual::Unselected => NODE_CLASS,
    }
}

#[inline]
pub fn panel_class(open: bool) -> &'static str {
    if open {
        PANEL_OPEN_CLASS
    } else {
        PANEL_CLASS
    }
}

/// Center-anchored caption shown while a topic is active.
pub fn caption_text(label: &str) -> String {
    format!("{} · {}", crate::constants::BRAND_NAME.to_lowercase(), label.to_lowercase())
}

/// Caption to draw next: the active topic's, otherwise the previous one
/// until its fade-out alpha reaches zero.
pub fn retained_caption(
    active_label: Option<&str>,
    previous: Option<String>,
    alpha: f32,
) -> Option<String> {
    match active_label {
        Some(label) => Some(caption_text(label)),
        None if alpha > 0.0 => previous,
        None => None,
    }
}

#[inline]
pub fn canvas_visible(client_width: i32, client_height: i32) -> bool {
    client_width > 0 && client_height > 0
}

/// A canvas mounted at zero size has no simulation; rebuild once it shows.
#[inline]
pub fn needs_rebuild(has_sim: bool, client_width: i32, client_height: i32) -> bool {
    !has_sim && canvas_visible(client_width, client_height)
}
