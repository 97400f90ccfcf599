use crate::constants::CLOSE_KEY;
use crate::dom::Listener;
use crate::{with_app, App, SharedApp};
use std::rc::Weak;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window-level listeners: resize re-initializes the map, Escape closes the panel.
pub fn wire_window_events(window: &web::Window, app: &Weak<SharedApp>) -> Vec<Listener> {
    let on_resize = app.clone();
    let resize = Listener::new(window, "resize", move |_| with_app(&on_resize, App::resize));

    let on_key = app.clone();
    let keydown = Listener::new(window, "keydown", move |ev| {
        let Some(kev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if kev.key() == CLOSE_KEY {
            with_app(&on_key, App::close);
        }
    });

    vec![resize, keydown]
}
