#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use cerca_core::{caption_alpha, section, PanelController, SimConfig};
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod content;
mod dom;
mod events;
mod frame;
mod layout;
mod nodes;
mod panel;
mod render;
mod timers;

use nodes::NodeLayer;
use panel::PanelView;
use render::{Background, BackgroundSignal};
use timers::Deferred;

/// Slot holding the mounted app; emptied on unmount so stale callbacks find nothing.
pub(crate) type SharedApp = RefCell<Option<App>>;

/// Run `f` against the app if it is still mounted and not already borrowed.
pub(crate) fn with_app(app: &Weak<SharedApp>, f: impl FnOnce(&mut App)) {
    let Some(shared) = app.upgrade() else {
        return;
    };
    let Ok(mut slot) = shared.try_borrow_mut() else {
        log::debug!("[mount] re-entrant callback ignored");
        return;
    };
    if let Some(app) = slot.as_mut() {
        f(app);
    }
}

pub(crate) struct App {
    me: Weak<SharedApp>,
    clock: Instant,
    panel: PanelController,
    background: Background,
    nodes: NodeLayer,
    panel_view: PanelView,
    deferred: Deferred,
    caption: Option<String>,
}

impl App {
    fn now(&self) -> Duration {
        self.clock.elapsed()
    }

    pub(crate) fn select(&mut self, index: usize) {
        let now = self.now();
        if let Err(e) = self.panel.select(index, now) {
            log::warn!("[panel] {}", e);
            return;
        }
        self.sync();
    }

    pub(crate) fn close(&mut self) {
        let now = self.now();
        self.panel.close(now);
        self.sync();
    }

    fn on_deadline(&mut self) {
        let now = self.now();
        let fired = self.panel.advance(now);
        if !fired.is_empty() {
            log::debug!("[panel] fired {:?} -> {:?}", fired, self.panel.state());
        }
        self.sync();
    }

    pub(crate) fn resize(&mut self) {
        if let Some(frame) = self.background.resize() {
            self.nodes.relayout(&frame);
        }
    }

    fn frame(&mut self) {
        let rebuilt = self.background.tick(BackgroundSignal {
            active: self.panel.active_section(),
            intensity: self.panel.intensity(),
            caption: self.caption.as_deref(),
        });
        if let Some(frame) = rebuilt {
            self.nodes.relayout(&frame);
        }
        if self.panel.active_section().is_none() && self.caption.is_some() {
            let alpha = caption_alpha(self.background.blend());
            self.caption = layout::retained_caption(None, self.caption.take(), alpha);
        }
    }

    /// Push controller state to the DOM and arm the next deferred transition.
    fn sync(&mut self) {
        let active = self.panel.active_section();
        self.nodes.sync(active);
        self.panel_view.sync(&self.panel);
        let label = active.and_then(|i| section(i).ok()).map(|s| s.label);
        let alpha = caption_alpha(self.background.blend());
        self.caption = layout::retained_caption(label, self.caption.take(), alpha);

        match self.panel.next_deadline() {
            Some(due) => {
                let delay = due.saturating_sub(self.now());
                let me = self.me.clone();
                self.deferred.arm(delay, move || with_app(&me, App::on_deadline));
            }
            None => self.deferred.cancel(),
        }
    }

    fn teardown(&mut self) {
        self.deferred.cancel();
        self.panel.dispose();
    }
}

/// Handle returned by [`mount`]; dropping or unmounting stops everything.
#[wasm_bindgen]
pub struct CercaHandle {
    app: Option<Rc<SharedApp>>,
    raf: Option<frame::AnimationLoop>,
    listeners: Vec<dom::Listener>,
}

#[wasm_bindgen]
impl CercaHandle {
    /// Cancel the frame loop, pending delays and listeners. Idempotent.
    pub fn unmount(&mut self) {
        if let Some(raf) = self.raf.take() {
            raf.stop();
        }
        self.listeners.clear();
        if let Some(shared) = self.app.take() {
            match shared.try_borrow_mut() {
                Ok(mut slot) => {
                    if let Some(mut app) = slot.take() {
                        app.teardown();
                    }
                }
                Err(_) => log::error!("[mount] unmount while app is busy"),
            }
            log::info!("[mount] unmounted");
        }
    }
}

impl Drop for CercaHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn build_chrome(document: &web::Document, body: &web::Element) -> anyhow::Result<()> {
    let style = dom::ensure_child(document, body, "style", STYLE_ID)?;
    style.set_text_content(Some(STYLESHEET));
    let hero = dom::ensure_child(document, body, "header", HERO_ID)?;
    hero.set_inner_html(&format!(
        "<h1>{}<span style=\"color:{}\">.</span></h1><p>\"{}\"</p>",
        BRAND_NAME, ACCENT, TAGLINE
    ));
    _ = body.set_attribute("style", &format!("background:{}", BACKDROP));
    Ok(())
}

fn mount_inner(canvas_id: &str) -> anyhow::Result<CercaHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let body: web::Element = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?
        .into();

    build_chrome(&document, &body)?;
    let canvas: web::HtmlCanvasElement = dom::ensure_child(&document, &body, "canvas", canvas_id)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", canvas_id, e))?;

    let shared: Rc<SharedApp> = Rc::new(RefCell::new(None));
    let weak = Rc::downgrade(&shared);

    let nodes_el = dom::ensure_child(&document, &body, "nav", NODES_ID)?;
    let on_select = weak.clone();
    let nodes = NodeLayer::build(&document, &nodes_el, move |i| {
        with_app(&on_select, |app| app.select(i))
    })?;
    let on_close = weak.clone();
    let panel_view = PanelView::build(&document, &body, move || with_app(&on_close, App::close))?;

    let background = Background::new(canvas, SimConfig::default())?;
    if let Some(frame) = background.frame() {
        nodes.relayout(&frame);
    }

    *shared.borrow_mut() = Some(App {
        me: weak.clone(),
        clock: Instant::now(),
        panel: PanelController::default(),
        background,
        nodes,
        panel_view,
        deferred: Deferred::default(),
        caption: None,
    });

    let listeners = events::wire_window_events(&window, &weak);
    let on_frame = weak.clone();
    let raf = frame::start_loop(move || {
        let mut alive = false;
        with_app(&on_frame, |app| {
            app.frame();
            alive = true;
        });
        // a busy borrow skips this frame but keeps the loop
        alive
            || on_frame
                .upgrade()
                .is_some_and(|s| s.try_borrow().map(|slot| slot.is_some()).unwrap_or(true))
    });

    log::info!("[mount] cerca mounted on #{}", canvas_id);
    Ok(CercaHandle {
        app: Some(shared),
        raf: Some(raf),
        listeners,
    })
}

/// Mount the presentation onto `#canvas_id` (created under `<body>` if missing).
#[wasm_bindgen]
pub fn mount(canvas_id: &str) -> Result<CercaHandle, JsValue> {
    mount_inner(canvas_id).map_err(|e| JsValue::from_str(&format!("{:?}", e)))
}

thread_local! {
    static MOUNTED: RefCell<Option<CercaHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cerca-web starting");

    match mount_inner(CANVAS_ID) {
        Ok(handle) => MOUNTED.with(|m| *m.borrow_mut() = Some(handle)),
        Err(e) => log::error!("init error: {:?}", e),
    }
    Ok(())
}
