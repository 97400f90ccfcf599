use crate::constants::{CAPTION_FONT, RING_DASH, RING_DASH_DRIFT, RING_LABELS, RING_LABEL_FONT};
use cerca_core::caption_alpha;
use cerca_core::constants::{RING_PULSE_SPEED, RING_RATIOS};
use cerca_core::palette::{Palette, Rgb};
use cerca_core::{polar_to_viewport, Frame, Simulation};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};
use std::f64::consts::TAU;
use web_sys as web;

const GLOW_SCALE: f32 = 4.0;

pub(super) fn draw_backdrop(ctx: &web::CanvasRenderingContext2d, frame: &Frame, palette: &Palette) {
    let cx = frame.center.x as f64;
    let cy = frame.center.y as f64;
    let reach = (frame.width as f64).hypot(frame.height as f64) * 0.5;
    match ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, reach) {
        Ok(g) => {
            _ = g.add_color_stop(0.0, &palette.backdrop_inner.css(1.0));
            _ = g.add_color_stop(1.0, &palette.backdrop_outer.css(1.0));
            ctx.set_fill_style_canvas_gradient(&g);
        }
        Err(_) => ctx.set_fill_style_str(&palette.backdrop_outer.css(1.0)),
    }
    ctx.fill_rect(0.0, 0.0, frame.width as f64, frame.height as f64);
}

/// Soft radial halo followed by a solid core.
fn glow_dot(
    ctx: &web::CanvasRenderingContext2d,
    x: f32,
    y: f32,
    size: f32,
    color: Rgb,
    alpha: f32,
) {
    let (x, y) = (x as f64, y as f64);
    let size = size.max(0.1);
    let halo = (size * GLOW_SCALE) as f64;
    if let Ok(g) = ctx.create_radial_gradient(x, y, 0.0, x, y, halo) {
        _ = g.add_color_stop(0.0, &color.css(alpha * 0.35));
        _ = g.add_color_stop(1.0, &color.css(0.0));
        ctx.set_fill_style_canvas_gradient(&g);
        ctx.begin_path();
        _ = ctx.arc(x, y, halo, 0.0, TAU);
        ctx.fill();
    }
    ctx.set_fill_style_str(&color.css(alpha));
    ctx.begin_path();
    _ = ctx.arc(x, y, size as f64, 0.0, TAU);
    ctx.fill();
}

pub(super) fn draw_particles(
    ctx: &web::CanvasRenderingContext2d,
    frame: &Frame,
    sim: &Simulation,
    palette: &Palette,
) {
    for p in sim.particles() {
        let pos = p.position(frame);
        glow_dot(ctx, pos.x, pos.y, p.size, palette.particle, p.opacity);
    }
}

/// Four dashed distance rings, each pulsing a quarter period after the last.
pub(super) fn draw_rings(
    ctx: &web::CanvasRenderingContext2d,
    frame: &Frame,
    palette: &Palette,
    elapsed: f32,
) {
    let cx = frame.center.x as f64;
    let cy = frame.center.y as f64;
    let dash = js_sys::Array::of2(&RING_DASH[0].into(), &RING_DASH[1].into());
    _ = ctx.set_line_dash(&dash);
    ctx.set_line_dash_offset((-elapsed * RING_DASH_DRIFT) as f64);
    ctx.set_line_width(1.0);
    ctx.set_font(RING_LABEL_FONT);
    ctx.set_text_align("left");
    ctx.set_text_baseline("bottom");

    for (i, ratio) in RING_RATIOS.iter().enumerate() {
        let pulse = 0.5 + 0.5 * (elapsed * RING_PULSE_SPEED - i as f32 * FRAC_PI_2).sin();
        let alpha = 0.12 + 0.18 * pulse;
        let r = (ratio * frame.half_size()) as f64;
        ctx.set_stroke_style_str(&palette.ring.css(alpha));
        ctx.begin_path();
        _ = ctx.arc(cx, cy, r, 0.0, TAU);
        ctx.stroke();

        if let Some(label) = RING_LABELS.get(i) {
            let at = polar_to_viewport(-FRAC_PI_4, *ratio, frame);
            ctx.set_fill_style_str(&palette.ring.css(alpha + 0.2));
            _ = ctx.fill_text(label, at.x as f64 + 4.0, at.y as f64 - 4.0);
        }
    }
    _ = ctx.set_line_dash(&js_sys::Array::new());
}

pub(super) fn draw_exterior(
    ctx: &web::CanvasRenderingContext2d,
    sim: &Simulation,
    palette: &Palette,
    elapsed: f32,
) {
    for p in sim.exterior_points(elapsed) {
        glow_dot(ctx, p.position.x, p.position.y, p.size, palette.exterior, p.alpha);
    }
}

pub(super) fn draw_caption(
    ctx: &web::CanvasRenderingContext2d,
    frame: &Frame,
    palette: &Palette,
    blend: f32,
    text: &str,
) {
    let alpha = caption_alpha(blend);
    if alpha <= 0.0 {
        return;
    }
    ctx.set_font(CAPTION_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_fill_style_str(&palette.caption.css(alpha));
    _ = ctx.fill_text(text, frame.center.x as f64, frame.center.y as f64);
}
