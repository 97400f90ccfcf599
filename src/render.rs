use crate::constants::MAX_FRAME_DT_SECS;
use crate::dom;
use crate::layout;
use cerca_core::constants::BLEND_TRANSITION_SECS;
use cerca_core::palette::{Palette, CALM, URBAN};
use cerca_core::{blend_target, step_blend, Frame, SimConfig, Simulation};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::JsCast;
use web_sys as web;

mod city;
mod orbits;

/// What the background reads from the panel at the start of each tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct BackgroundSignal<'a> {
    pub active: Option<usize>,
    pub intensity: f32,
    pub caption: Option<&'a str>,
}

// ===================== Canvas 2D proximity map =====================

pub struct Background {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    config: SimConfig,
    // None while the viewport is degenerate
    sim: Option<Simulation>,
    elapsed: f32,
    blend: f32,
    last_instant: Instant,
    skipping: bool,
}

impl Background {
    pub fn new(canvas: web::HtmlCanvasElement, config: SimConfig) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow::anyhow!("not a 2d context"))?;
        let mut bg = Self {
            canvas,
            ctx,
            config,
            sim: None,
            elapsed: 0.0,
            blend: 0.0,
            last_instant: Instant::now(),
            skipping: false,
        };
        bg.resize();
        Ok(bg)
    }

    pub fn blend(&self) -> f32 {
        self.blend
    }

    pub fn frame(&self) -> Option<Frame> {
        self.sim.as_ref().map(|s| *s.frame())
    }

    /// Resize the drawing surface and rebuild every population from scratch.
    ///
    /// The time accumulator survives, so regrowth resumes at the current target.
    pub fn resize(&mut self) -> Option<Frame> {
        let (w, h, dpr) = dom::sync_canvas_backing_size(&self.canvas);
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        match Frame::new(w, h) {
            Ok(frame) => {
                match &mut self.sim {
                    Some(sim) => sim.reinitialize(frame),
                    None => {
                        self.sim = Some(Simulation::new(
                            frame,
                            self.config.clone(),
                            StdRng::from_entropy(),
                        ))
                    }
                }
                log::info!("[render] viewport {:.0}x{:.0} @{}x", w, h, dpr);
                Some(frame)
            }
            Err(e) => {
                log::debug!("[render] {}", e);
                self.sim = None;
                None
            }
        }
    }

    /// Advance and draw one frame. Returns the new frame when a canvas that
    /// was mounted with zero size has become visible and was rebuilt.
    pub fn tick(&mut self, signal: BackgroundSignal<'_>) -> Option<Frame> {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SECS);
        self.last_instant = now;
        self.elapsed += dt;

        let target = blend_target(signal.active, signal.intensity);
        self.blend = step_blend(self.blend, target, dt, BLEND_TRANSITION_SECS);

        let (cw, ch) = (self.canvas.client_width(), self.canvas.client_height());
        let visible = layout::canvas_visible(cw, ch);
        let mut rebuilt = None;
        if layout::needs_rebuild(self.sim.is_some(), cw, ch) {
            rebuilt = self.resize();
        }
        let sim = match self.sim.as_mut() {
            Some(sim) if visible => sim,
            _ => {
                if !self.skipping {
                    log::debug!("[render] degenerate viewport, skipping frames");
                    self.skipping = true;
                }
                return rebuilt;
            }
        };
        self.skipping = false;
        sim.step(self.elapsed, self.blend);

        let palette = Palette::blend(&URBAN, &CALM, self.blend);
        let frame = *sim.frame();
        let ctx = &self.ctx;
        // back to front
        orbits::draw_backdrop(ctx, &frame, &palette);
        city::draw_city(ctx, &frame, sim, &palette);
        orbits::draw_particles(ctx, &frame, sim, &palette);
        orbits::draw_rings(ctx, &frame, &palette, self.elapsed);
        orbits::draw_exterior(ctx, sim, &palette, self.elapsed);
        if let Some(text) = signal.caption {
            orbits::draw_caption(ctx, &frame, &palette, self.blend, text);
        }
        rebuilt
    }
}
