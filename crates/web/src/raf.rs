//! `requestAnimationFrame` scheduling.
//!
//! The display's timing source invokes a registered callback once per refresh
//! with a monotonically increasing DOM timestamp. The loop is self-sustaining:
//! the callback re-registers itself while the driver reports `Continue`, and
//! ends by simply not re-registering (there is no cancel surface).

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::console;

use simbridge_core::FrameDriver;

use crate::error::to_js;
use crate::sim::JsSimulation;

type FrameClosure = Closure<dyn FnMut(f64)>;

/// Registers the frame loop for a booted driver.
///
/// The closure owns the driver; the surrounding `Rc` slot exists only so the
/// closure can hand itself back to `requestAnimationFrame`. On a `Halt`
/// outcome the slot is emptied, no registration remains outstanding, and the
/// loop ends with the current invocation.
pub fn start(mut driver: FrameDriver<JsSimulation>) -> Result<(), JsValue> {
    let slot: Rc<RefCell<Option<FrameClosure>>> = Rc::new(RefCell::new(None));
    let hook = Rc::clone(&slot);

    let closure: FrameClosure = Closure::wrap(Box::new(move |timestamp: f64| {
        let report = driver.on_frame(timestamp);
        if let Some(err) = &report.error {
            console::error_1(&to_js(err));
        }
        if report.should_continue() {
            if let Some(cb) = hook.borrow().as_ref() {
                if let Err(e) = request_frame(cb) {
                    console::error_1(&e);
                }
            }
        } else {
            drop(hook.borrow_mut().take());
        }
    }) as Box<dyn FnMut(f64)>);

    *slot.borrow_mut() = Some(closure);
    if let Some(cb) = slot.borrow().as_ref() {
        let _handle = request_frame(cb)?;
    }
    Ok(())
}

fn request_frame(cb: &FrameClosure) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window in this context"))?
        .request_animation_frame(cb.as_ref().unchecked_ref())
}
