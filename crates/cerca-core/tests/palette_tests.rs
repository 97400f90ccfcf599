// Host-side tests for palette blending and the background blend factor.

use cerca_core::palette::{Palette, Rgb, CALM, URBAN};
use cerca_core::{blend_target, caption_alpha, step_blend};

#[test]
fn blend_endpoints_are_the_named_palettes() {
    assert_eq!(Palette::blend(&URBAN, &CALM, 0.0), URBAN);
    assert_eq!(Palette::blend(&URBAN, &CALM, 1.0), CALM);
    assert_eq!(Palette::blend(&URBAN, &CALM, 3.0), CALM);
}

#[test]
fn rgb_css_formats_and_clamps() {
    assert_eq!(Rgb::hex(0xd4a373).css(1.0), "rgba(212,163,115,1.000)");
    assert_eq!(Rgb(300.0, -4.0, 10.4).css(2.0), "rgba(255,0,10,1.000)");
    let mid = Rgb(0.0, 0.0, 0.0).lerp(Rgb(100.0, 200.0, 50.0), 0.5);
    assert_eq!(mid, Rgb(50.0, 100.0, 25.0));
}

#[test]
fn blend_target_is_zero_without_a_section() {
    assert_eq!(blend_target(None, 1.0), 0.0);
    assert_eq!(blend_target(Some(3), 0.0), 0.0);
    assert_eq!(blend_target(Some(3), 1.0), 1.0);
    assert_eq!(blend_target(Some(0), 4.0), 1.0);
}

#[test]
fn step_blend_is_gradual_and_reaches_target() {
    let mut t = 0.0;
    let mut steps = 0;
    while t < 1.0 {
        let next = step_blend(t, 1.0, 1.0 / 60.0, 1.2);
        assert!(next > t && next - t <= 1.0 / 72.0 + 1e-6);
        t = next;
        steps += 1;
        assert!(steps < 100, "blend did not converge");
    }
    assert_eq!(step_blend(0.5, 0.0, 10.0, 1.2), 0.0);
    assert_eq!(step_blend(0.5, 1.0, 0.1, 0.0), 1.0);
}

#[test]
fn caption_fades_in_only_above_threshold() {
    assert_eq!(caption_alpha(0.0), 0.0);
    assert_eq!(caption_alpha(0.1), 0.0);
    assert!(caption_alpha(0.2) > 0.0);
    assert_eq!(caption_alpha(1.0), 1.0);
}
