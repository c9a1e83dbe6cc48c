//! JS↔Rust configuration conversion.
//!
//! Converts a JS config object into the core `BridgeConfig` via JSON
//! serialization, so the same schema is used from both sides of the boundary.

use wasm_bindgen::JsValue;

use simbridge_core::BridgeConfig;

/// Converts a JS value to a [`BridgeConfig`].
///
/// `undefined`/`null` yield the defaults. Anything else is serialized with
/// `JSON.stringify` and deserialized into the Rust config; unknown keys are
/// rejected.
pub fn js_to_config(value: &JsValue) -> Result<BridgeConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(BridgeConfig::default());
    }

    let json: String = js_sys::JSON::stringify(value)?.into();
    serde_json::from_str(&json)
        .map_err(|e| js_sys::Error::new(&format!("invalid config: {e}")).into())
}
