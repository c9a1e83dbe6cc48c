//! Browser bindings for the frame-and-input bridge.
//!
//! This crate wires the environment-independent core to the browser's native
//! facilities. It provides:
//! 1. **Adapter:** [`sim::JsSimulation`] binds an opaque JS engine module
//!    (`run`/`update`/`key_down`/`key_up`) to the core contract.
//! 2. **Frame loop:** a self-re-registering `requestAnimationFrame` callback
//!    driving per-frame updates.
//! 3. **Keyboard:** document-level `keydown`/`keyup` listeners with default
//!    actions suppressed.
//! 4. **Entry points:** [`attach`]/[`attach_with_config`] boot everything in
//!    order, failing before any callback registration if construction fails.

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

use simbridge_core::{Bridge, BridgeConfig};

/// JS config object to `BridgeConfig` conversion.
pub mod conversion;
/// Bridge-to-JS error mapping.
pub mod error;
/// Document keyboard subscription.
pub mod keyboard;
/// `requestAnimationFrame` loop.
pub mod raf;
/// Opaque JS simulation adapter.
pub mod sim;

/// Boots the bridge against `module` with default configuration.
///
/// Constructs the simulation (calling the module's `run` if present), then
/// registers the keyboard listeners and starts the frame loop. Throws before
/// any registration if construction fails.
///
/// # Errors
///
/// A JS `Error` describing the construction or registration failure.
#[wasm_bindgen]
pub fn attach(module: &JsValue) -> Result<(), JsValue> {
    attach_inner(module, BridgeConfig::default())
}

/// Boots the bridge against `module` with a JS config object.
///
/// See [`attach`]; `config` keys are `fault_policy`
/// (`"log_and_continue"`/`"halt"`), `log_keys`, `warn_on_clock_regression`.
///
/// # Errors
///
/// A JS `Error` for an invalid config or any [`attach`] failure.
#[wasm_bindgen]
pub fn attach_with_config(module: &JsValue, config: &JsValue) -> Result<(), JsValue> {
    attach_inner(module, conversion::js_to_config(config)?)
}

fn attach_inner(module: &JsValue, config: BridgeConfig) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let bridge = Bridge::boot(|| sim::JsSimulation::bind(module), config)
        .map_err(|e| error::to_js(&e))?;
    let (driver, translator) = bridge.split();

    keyboard::register(translator, config.log_keys)?;
    raf::start(driver)?;
    Ok(())
}

/// Returns the bridge version string (e.g., for scripting or diagnostics).
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
