//! Document-level keyboard subscription.
//!
//! Subscribes `keydown`/`keyup` listeners on the document and feeds each DOM
//! event to the input translator as a [`KeySignal`]. The listeners live for
//! the page lifetime; nothing unsubscribes them.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{console, Document, KeyboardEvent};

use simbridge_core::input::KeySignal;
use simbridge_core::{InputTranslator, KeyCode};

use crate::error::to_js;
use crate::sim::JsSimulation;

/// A DOM `KeyboardEvent` viewed through the translator's seam.
#[derive(Debug)]
struct DomKeySignal<'a> {
    event: &'a KeyboardEvent,
}

impl KeySignal for DomKeySignal<'_> {
    fn code(&self) -> KeyCode {
        KeyCode::from(self.event.code())
    }

    fn suppress_default(&self) {
        self.event.prevent_default();
    }
}

/// Registers the two key listeners for a booted translator.
///
/// `log_keys` mirrors the per-key diagnostic record onto the browser console,
/// where the core's structured log has no subscriber.
pub fn register(translator: InputTranslator<JsSimulation>, log_keys: bool) -> Result<(), JsValue> {
    let document = document()?;
    let translator = Rc::new(RefCell::new(translator));

    let down = {
        let translator = Rc::clone(&translator);
        Closure::<dyn FnMut(KeyboardEvent)>::wrap(Box::new(move |event: KeyboardEvent| {
            if log_keys {
                console::debug_1(&JsValue::from_str(&format!("down: {}", event.code())));
            }
            let signal = DomKeySignal { event: &event };
            if let Err(err) = translator.borrow_mut().on_key_down(&signal) {
                console::error_1(&to_js(&err));
            }
        }))
    };
    document.add_event_listener_with_callback("keydown", down.as_ref().unchecked_ref())?;
    down.forget();

    let up = Closure::<dyn FnMut(KeyboardEvent)>::wrap(Box::new(move |event: KeyboardEvent| {
        if log_keys {
            console::debug_1(&JsValue::from_str(&format!("up: {}", event.code())));
        }
        let signal = DomKeySignal { event: &event };
        if let Err(err) = translator.borrow_mut().on_key_up(&signal) {
            console::error_1(&to_js(&err));
        }
    }));
    document.add_event_listener_with_callback("keyup", up.as_ref().unchecked_ref())?;
    up.forget();

    Ok(())
}

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window in this context"))?
        .document()
        .ok_or_else(|| JsValue::from_str("no document in this context"))
}
