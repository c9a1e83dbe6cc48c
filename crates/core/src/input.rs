//! Input translator.
//!
//! Turns environment keyboard notifications into simulation key state
//! changes. One event in, one call out: no queue, no key-state table, no
//! auto-repeat de-duplication — key state lives inside the simulation.
//! Default-action suppression is unconditional so the environment behaves
//! the same whether or not the engine faulted on the forwarding call.

use tracing::debug;

use crate::config::BridgeConfig;
use crate::error::BridgeError;
use crate::key::{KeyCode, KeyDirection};
use crate::sim::{SimHandle, Simulation};

/// One keyboard notification as the environment delivers it.
///
/// The seam between the translator and the environment's event system: the
/// browser bindings wrap a DOM `KeyboardEvent` in this, tests wrap a mock.
pub trait KeySignal {
    /// The physical key identifier carried by the event.
    fn code(&self) -> KeyCode;

    /// Suppresses the environment's default action for this event
    /// (e.g. page scrolling on an arrow key).
    fn suppress_default(&self);
}

/// Key event pump for a single simulation handle.
///
/// Constructed by [`crate::boot::Bridge::split`]; holds the other clone of
/// the session's simulation handle.
#[derive(Debug)]
pub struct InputTranslator<S> {
    sim: SimHandle<S>,
    log_keys: bool,
}

impl<S: Simulation> InputTranslator<S> {
    pub(crate) fn new(sim: SimHandle<S>, config: &BridgeConfig) -> Self {
        Self {
            sim,
            log_keys: config.log_keys,
        }
    }

    /// Forwards a key press (or auto-repeat) to the simulation and suppresses
    /// the default action.
    pub fn on_key_down(&mut self, signal: &impl KeySignal) -> Result<(), BridgeError> {
        self.forward(signal, KeyDirection::Down)
    }

    /// Forwards a key release to the simulation and suppresses the default
    /// action.
    pub fn on_key_up(&mut self, signal: &impl KeySignal) -> Result<(), BridgeError> {
        self.forward(signal, KeyDirection::Up)
    }

    fn forward(
        &mut self,
        signal: &impl KeySignal,
        direction: KeyDirection,
    ) -> Result<(), BridgeError> {
        let code = signal.code();
        if self.log_keys {
            debug!(%code, %direction, "key event");
        }

        let result = {
            let mut sim = self.sim.borrow_mut();
            match direction {
                KeyDirection::Down => sim.key_down(&code),
                KeyDirection::Up => sim.key_up(&code),
            }
        };

        // Suppression must happen even when forwarding failed.
        signal.suppress_default();

        result.map_err(|source| BridgeError::Key {
            code,
            direction,
            source,
        })
    }
}
