use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Cancellable one-shot timer over `window.setTimeout`.
///
/// Re-scheduling cancels the pending callback first, so only the most recent
/// deadline ever fires. Dropping the timer cancels it, which keeps a torn
/// down view from being called back.
pub struct DebounceTimer {
    handle: Option<i32>,
    closure: Option<Closure<dyn FnMut()>>,
}

impl DebounceTimer {
    pub fn new() -> Self {
        Self {
            handle: None,
            closure: None,
        }
    }

    pub fn schedule(&mut self, delay_ms: i32, callback: impl FnMut() + 'static) {
        self.cancel();
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        if let Some(window) = web::window() {
            if let Ok(handle) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms,
            ) {
                self.handle = Some(handle);
            }
        }
        // The closure must outlive the timeout; it is released on cancel.
        self.closure = Some(closure);
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Some(window) = web::window() {
                window.clear_timeout_with_handle(handle);
            }
        }
        self.closure = None;
    }
}

impl Default for DebounceTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DebounceTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
