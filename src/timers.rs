use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Whole milliseconds for `setTimeout`, rounded up so the callback never
/// runs before `delay` has passed.
pub fn timeout_millis(delay: Duration) -> i32 {
    delay.as_nanos().div_ceil(1_000_000).min(i32::MAX as u128) as i32
}

/// A single cancellable one-shot `setTimeout`.
///
/// Re-arming cancels whatever was pending. Callbacks must tolerate firing
/// after their owner is gone; cancellation only covers the normal path.
#[derive(Default)]
pub struct Deferred {
    handle: Option<i32>,
}

impl Deferred {
    pub fn arm(&mut self, delay: Duration, callback: impl FnOnce() + 'static) {
        self.cancel();
        let Some(window) = web::window() else {
            return;
        };
        let cb = Closure::once_into_js(callback);
        let ms = timeout_millis(delay);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms) {
            Ok(h) => self.handle = Some(h),
            Err(e) => log::error!("[timers] setTimeout failed: {:?}", e),
        }
    }

    pub fn cancel(&mut self) {
        if let Some(h) = self.handle.take() {
            if let Some(window) = web::window() {
                window.clear_timeout_with_handle(h);
            }
        }
    }
}

impl Drop for Deferred {
    fn drop(&mut self) {
        self.cancel();
    }
}
