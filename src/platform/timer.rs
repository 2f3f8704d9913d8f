//! Browser tick clock built on `setInterval`

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Owns at most one running interval
#[derive(Default)]
pub struct TickTimer {
    handle: Option<i32>,
    callback: Option<Closure<dyn FnMut()>>,
}

impl TickTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Start calling `on_tick` every `period_ms`, replacing any previous interval.
    ///
    /// Must not be called from inside the current interval's own callback.
    pub fn start(&mut self, period_ms: u32, on_tick: impl FnMut() + 'static) -> Result<(), JsValue> {
        self.cancel();
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let callback = Closure::<dyn FnMut()>::new(on_tick);
        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            period_ms as i32,
        )?;
        self.handle = Some(handle);
        // Dropping the previous closure is safe now that its interval is gone
        self.callback = Some(callback);
        Ok(())
    }

    /// Stop the interval; safe to call from inside the tick callback
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(handle);
            }
        }
    }
}

impl Drop for TickTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
