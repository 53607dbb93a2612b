//! Animation-frame scheduling
//!
//! Wraps the requestAnimationFrame self-rescheduling recursion in an
//! explicit loop handle with a `stop()`, so the caller can cancel the
//! pending frame instead of looping forever by construction.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// A running requestAnimationFrame loop
///
/// The callback receives the DOMHighResTimeStamp for the frame. Dropping
/// the handle does not stop the loop; call [`FrameLoop::stop`].
pub struct FrameLoop {
    raf_id: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    /// Start the loop; the callback runs once per animation frame until
    /// [`FrameLoop::stop`] is called.
    pub fn start<F>(mut callback: F) -> Result<Self, JsValue>
    where
        F: FnMut(f64) + 'static,
    {
        let raf_id = Rc::new(Cell::new(None));

        // Self-referential closure: each frame reschedules itself unless
        // the loop has been stopped in the meantime.
        let handle: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let handle_inner = handle.clone();
        let raf_id_inner = raf_id.clone();

        *handle.borrow_mut() = Some(Closure::new(move |time: f64| {
            if raf_id_inner.get().is_none() {
                return; // stopped between schedule and fire
            }
            callback(time);

            if raf_id_inner.get().is_some() {
                if let Some(ref closure) = *handle_inner.borrow() {
                    match request_frame(closure) {
                        Ok(id) => raf_id_inner.set(Some(id)),
                        Err(e) => {
                            log::error!("requestAnimationFrame failed: {e:?}");
                            raf_id_inner.set(None);
                        }
                    }
                }
            }
        }));

        let first = {
            let borrowed = handle.borrow();
            let closure = borrowed.as_ref().expect("closure just stored");
            request_frame(closure)?
        };
        raf_id.set(Some(first));

        // The closure must outlive the loop; the Rc cycle keeps it alive.
        std::mem::forget(handle);

        Ok(Self { raf_id })
    }

    /// Cancel the pending frame and end the loop
    pub fn stop(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
            log::info!("frame loop stopped");
        }
    }
}

fn request_frame(closure: &Closure<dyn FnMut(f64)>) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .request_animation_frame(closure.as_ref().unchecked_ref())
}
