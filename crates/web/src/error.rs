//! Bridge-to-JS error mapping.

use wasm_bindgen::{JsCast, JsValue};

use simbridge_core::BridgeError;

/// Maps a bridge failure to a JS `Error` for throwing across the boundary.
pub fn to_js(err: &BridgeError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Best-effort message extraction from a thrown JS value.
pub(crate) fn js_value_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}
