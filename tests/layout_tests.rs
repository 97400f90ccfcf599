// Host-side tests for DOM node placement and class mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod layout {
    include!("../src/layout.rs");
}

use cerca_core::constants::{NODE_DISTANCE_RATIO, SECTION_COUNT};
use cerca_core::nav::{node_angle, NodeVisual};
use cerca_core::{polar_to_viewport, Frame};
use constants::*;
use layout::*;

#[test]
fn node_centers_match_the_canvas_mapping() {
    for (w, h) in [(1920.0, 1080.0), (390.0, 844.0), (800.0, 800.0)] {
        let frame = Frame::new(w, h).unwrap();
        for i in 0..SECTION_COUNT {
            let b = node_box(i, &frame);
            let canvas = polar_to_viewport(node_angle(i), NODE_DISTANCE_RATIO, &frame);
            assert!((b.center - canvas).length() < 1e-4, "node {i} drifted at {w}x{h}");
            assert!((b.left + b.size * 0.5 - canvas.x).abs() < 1e-3);
            assert!((b.top + b.size * 0.5 - canvas.y).abs() < 1e-3);
        }
    }
}

#[test]
fn node_style_positions_the_box() {
    let frame = Frame::new(1000.0, 1000.0).unwrap();
    let b = node_box(0, &frame);
    // top node: x centered, y = 500 - 0.72 * 500
    assert!((b.center.x - 500.0).abs() < 1e-3);
    assert!((b.center.y - 140.0).abs() < 1e-3);
    let style = node_style(&b);
    assert_eq!(
        style,
        format!("left:{:.2}px;top:{:.2}px;width:84px;height:84px", 500.0 - 42.0, 140.0 - 42.0)
    );
}

#[test]
fn classes_follow_semantic_state() {
    assert_eq!(node_class(NodeVisual::Selected), NODE_SELECTED_CLASS);
    assert_eq!(node_class(NodeVisual::Unselected), NODE_CLASS);
    assert_eq!(panel_class(true), PANEL_OPEN_CLASS);
    assert_eq!(panel_class(false), PANEL_CLASS);
}

#[test]
fn caption_names_the_active_topic() {
    assert_eq!(caption_text("Narrativa"), "cerca · narrativa");
}

#[test]
fn caption_lingers_until_faded_out() {
    let shown = retained_caption(Some("Cliente"), None, 0.0);
    assert_eq!(shown.as_deref(), Some("cerca · cliente"));

    let fading = retained_caption(None, shown.clone(), 0.4);
    assert_eq!(fading, shown);

    assert_eq!(retained_caption(None, fading, 0.0), None);
    assert_eq!(retained_caption(None, None, 0.7), None);
}

#[test]
fn new_topic_replaces_a_fading_caption() {
    let old = Some("cerca · cliente".to_string());
    let next = retained_caption(Some("Recursos"), old, 0.2);
    assert_eq!(next.as_deref(), Some("cerca · recursos"));
}

#[test]
fn hidden_canvas_is_rebuilt_once_it_has_size() {
    assert!(!needs_rebuild(false, 0, 0));
    assert!(!needs_rebuild(false, 640, 0));
    assert!(needs_rebuild(false, 640, 480));
    assert!(!needs_rebuild(true, 640, 480));
    assert!(!canvas_visible(0, 480));
    assert!(canvas_visible(1, 1));
}
