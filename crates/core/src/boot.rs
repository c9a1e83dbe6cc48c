//! Bootstrapper.
//!
//! Constructs the simulation exactly once, synchronously, before any frame or
//! input event can be processed, then hands the frame driver and the input
//! translator their shared handle. A construction failure yields no bridge at
//! all: with no bridge there is nothing to register callbacks with, so no
//! update or key event can ever be dispatched against an absent handle.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::info;

use crate::config::BridgeConfig;
use crate::driver::FrameDriver;
use crate::error::BridgeError;
use crate::input::InputTranslator;
use crate::sim::{SimError, SimHandle, Simulation};

/// A booted bridge: the simulation handle plus the session configuration.
///
/// Split it into its two pumps with [`Bridge::split`] and wire those into the
/// environment's frame and keyboard facilities.
#[derive(Debug)]
pub struct Bridge<S> {
    sim: SimHandle<S>,
    config: BridgeConfig,
}

impl<S: Simulation> Bridge<S> {
    /// Constructs the simulation and wraps it in a bridge.
    ///
    /// The factory runs synchronously; its failure is fatal and is returned
    /// as [`BridgeError::Init`] rather than swallowed.
    ///
    /// # Arguments
    ///
    /// * `factory` - Constructs the engine instance (the external module's
    ///   `run` operation, behind whatever adapter the environment needs).
    /// * `config` - Session configuration.
    pub fn boot<F>(factory: F, config: BridgeConfig) -> Result<Self, BridgeError>
    where
        F: FnOnce() -> Result<S, SimError>,
    {
        let sim = factory().map_err(|source| BridgeError::Init { source })?;
        info!(?config, "simulation constructed");
        Ok(Self {
            sim: Rc::new(RefCell::new(sim)),
            config,
        })
    }

    /// A clone of the session's simulation handle.
    pub fn handle(&self) -> SimHandle<S> {
        Rc::clone(&self.sim)
    }

    /// Splits the bridge into its frame and input pumps.
    ///
    /// Both sides hold a clone of the same handle, so every update and key
    /// event reaches the one engine instance.
    pub fn split(self) -> (FrameDriver<S>, InputTranslator<S>) {
        let driver = FrameDriver::new(Rc::clone(&self.sim), &self.config);
        let translator = InputTranslator::new(self.sim, &self.config);
        (driver, translator)
    }
}
