use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Handle to a running `requestAnimationFrame` loop.
pub struct AnimationLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    handle: Rc<Cell<Option<i32>>>,
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    web::window()?
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .ok()
}

/// Call `on_frame` once per display refresh until it returns `false` or the
/// loop is stopped.
pub fn start_loop(mut on_frame: impl FnMut() -> bool + 'static) -> AnimationLoop {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick_weak = Rc::downgrade(&tick);
    let handle_tick = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        handle_tick.set(None);
        if !on_frame() {
            log::debug!("[frame] loop finished");
            return;
        }
        if let Some(tick) = tick_weak.upgrade() {
            if let Some(cb) = tick.borrow().as_ref() {
                handle_tick.set(request_frame(cb));
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = tick.borrow().as_ref() {
        handle.set(request_frame(cb));
    }
    AnimationLoop { tick, handle }
}

impl AnimationLoop {
    /// Cancel the pending frame and release the callback.
    pub fn stop(&self) {
        if let Some(h) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(h);
            }
        }
        self.tick.borrow_mut().take();
    }
}
