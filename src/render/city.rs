use cerca_core::palette::Palette;
use cerca_core::sim::street_offsets;
use cerca_core::{Frame, Simulation};
use std::f64::consts::TAU;
use web_sys as web;

const PEDESTRIAN_DOT: f64 = 1.4;
const STREET_WIDTH: f64 = 1.5;

/// Clipped city disc: fill, street grid and pedestrians, then the border.
pub(super) fn draw_city(
    ctx: &web::CanvasRenderingContext2d,
    frame: &Frame,
    sim: &Simulation,
    palette: &Palette,
) {
    let cx = frame.center.x as f64;
    let cy = frame.center.y as f64;
    let r = frame.inner_radius as f64;

    ctx.save();
    ctx.begin_path();
    _ = ctx.arc(cx, cy, r, 0.0, TAU);
    ctx.clip();

    ctx.set_fill_style_str(&palette.disc.css(0.9));
    ctx.fill_rect(cx - r, cy - r, 2.0 * r, 2.0 * r);

    ctx.set_stroke_style_str(&palette.street.css(0.6));
    ctx.set_line_width(STREET_WIDTH);
    ctx.begin_path();
    for offset in street_offsets(frame) {
        let o = offset as f64;
        ctx.move_to(cx - r, cy + o);
        ctx.line_to(cx + r, cy + o);
        ctx.move_to(cx + o, cy - r);
        ctx.line_to(cx + o, cy + r);
    }
    ctx.stroke();

    ctx.set_fill_style_str(&palette.pedestrian.css(0.85));
    for p in sim.pedestrians() {
        let pos = p.screen_position(frame);
        ctx.begin_path();
        _ = ctx.arc(pos.x as f64, pos.y as f64, PEDESTRIAN_DOT, 0.0, TAU);
        ctx.fill();
    }
    ctx.restore();

    ctx.set_stroke_style_str(&palette.ring.css(0.5));
    ctx.set_line_width(1.0);
    ctx.begin_path();
    _ = ctx.arc(cx, cy, r, 0.0, TAU);
    ctx.stroke();
}
