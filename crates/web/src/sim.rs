//! Opaque JS simulation adapter.
//!
//! Binds a JavaScript engine module to the core [`Simulation`] trait. The
//! module is opaque: the adapter resolves `run`, `update`, `key_down`, and
//! `key_up` as callable properties at bind time and never touches anything
//! else. Engine exceptions surface as [`SimError`]s.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use simbridge_core::{KeyCode, SimError, Simulation};

use crate::error::js_value_message;

/// A bound engine instance plus its three per-event entry points.
///
/// Binding resolves the entry points once; per-frame and per-key calls are
/// plain `Function::call1` invocations with the instance as `this`.
#[derive(Debug)]
pub struct JsSimulation {
    instance: JsValue,
    update: Function,
    key_down: Function,
    key_up: Function,
}

impl JsSimulation {
    /// Binds an engine module or instance.
    ///
    /// If `module` exposes a callable `run`, it is invoked once to construct
    /// the instance (the contract's construct operation); otherwise `module`
    /// itself is taken as an already-constructed instance. A missing or
    /// non-callable `update`, `key_down`, or `key_up` is a fatal construction
    /// failure.
    pub fn bind(module: &JsValue) -> Result<Self, SimError> {
        let instance = match optional_function(module, "run")? {
            Some(run) => run
                .call0(module)
                .map_err(|e| SimError::fatal(format!("run() threw: {}", js_value_message(&e))))?,
            None => module.clone(),
        };

        let update = required_function(&instance, "update")?;
        let key_down = required_function(&instance, "key_down")?;
        let key_up = required_function(&instance, "key_up")?;

        Ok(Self {
            instance,
            update,
            key_down,
            key_up,
        })
    }

    fn call(&self, entry: &Function, name: &str, arg: &JsValue) -> Result<(), SimError> {
        entry
            .call1(&self.instance, arg)
            .map(drop)
            .map_err(|e| SimError::new(format!("{name}() threw: {}", js_value_message(&e))))
    }
}

impl Simulation for JsSimulation {
    fn update(&mut self, timestamp_ms: f64) -> Result<(), SimError> {
        self.call(&self.update, "update", &JsValue::from_f64(timestamp_ms))
    }

    fn key_down(&mut self, code: &KeyCode) -> Result<(), SimError> {
        self.call(&self.key_down, "key_down", &JsValue::from_str(code.as_str()))
    }

    fn key_up(&mut self, code: &KeyCode) -> Result<(), SimError> {
        self.call(&self.key_up, "key_up", &JsValue::from_str(code.as_str()))
    }
}

fn optional_function(target: &JsValue, name: &str) -> Result<Option<Function>, SimError> {
    let value = Reflect::get(target, &JsValue::from_str(name))
        .map_err(|e| SimError::fatal(js_value_message(&e)))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    value
        .dyn_into::<Function>()
        .map(Some)
        .map_err(|_| SimError::fatal(format!("`{name}` is not callable")))
}

fn required_function(target: &JsValue, name: &str) -> Result<Function, SimError> {
    optional_function(target, name)?
        .ok_or_else(|| SimError::fatal(format!("simulation module has no `{name}`")))
}
