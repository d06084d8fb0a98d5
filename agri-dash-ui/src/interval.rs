//! Cancellable periodic tasks on top of `setInterval`.

use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// A running `setInterval`. Cleared on `cancel()` or drop.
pub struct Interval {
    handle: i32,
    // Must outlive the JS timer that calls it.
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    /// Call `callback` every `period` until cancelled.
    pub fn start<F>(period: Duration, callback: F) -> Result<Self, JsValue>
    where
        F: FnMut() + 'static,
    {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))?;
        let callback = Closure::<dyn FnMut()>::new(callback);
        let millis = i32::try_from(period.as_millis()).unwrap_or(i32::MAX);
        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            millis,
        )?;
        log::debug!("Started interval {} every {:?}", handle, period);
        Ok(Self {
            handle,
            _callback: callback,
        })
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.handle);
            log::debug!("Cleared interval {}", self.handle);
        }
    }
}

/// Run `on_tick` every `period` while the calling component is mounted.
///
/// The interval starts on first render and is cancelled when the component
/// is torn down. Later renders reuse the running interval.
pub fn use_interval<F>(period: Duration, on_tick: F)
where
    F: FnMut() + 'static,
{
    let timer = use_hook(move || {
        let interval = match Interval::start(period, on_tick) {
            Ok(interval) => Some(interval),
            Err(e) => {
                log::error!("Failed to start interval: {:?}", e);
                None
            }
        };
        Rc::new(RefCell::new(interval))
    });

    use_drop(move || {
        if let Some(interval) = timer.borrow_mut().take() {
            interval.cancel();
        }
    });
}
