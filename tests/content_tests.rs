// Host-side tests for the static topic blocks.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod content {
    include!("../src/content.rs");
}

use cerca_core::{section, CercaError, SECTIONS};
use content::render_content;

#[test]
fn every_section_has_a_block() {
    for s in SECTIONS.iter() {
        let html = render_content(s.id);
        assert!(html.starts_with("<p>"), "section {} has no block", s.label);
    }
}

#[test]
fn unknown_sections_render_nothing() {
    assert_eq!(render_content(5), "");
    assert_eq!(section(7), Err(CercaError::UnknownSection(7)));
}

#[test]
fn section_ids_match_their_positions() {
    for (i, s) in SECTIONS.iter().enumerate() {
        assert_eq!(s.id, i);
        assert_eq!(section(i).unwrap().title, s.title);
    }
    assert_eq!(SECTIONS[0].label, "Cliente");
    assert_eq!(SECTIONS[4].title, "Semiótica de Proximidad");
}
