//! The simulation contract.
//!
//! The engine behind the bridge is opaque: the bridge drives it through
//! exactly four operations (construct, update, key down, key up) and never
//! inspects its state. This module defines that seam:
//! 1. **`Simulation`:** the trait every engine adapter implements.
//! 2. **`SimError`:** an engine-raised failure, surfaced but never retried.
//! 3. **`SimHandle`:** the single shared handle to the engine instance.

use std::cell::RefCell;
use std::rc::Rc;

use crate::key::KeyCode;

/// Failure raised by the simulation engine during update or key forwarding.
///
/// The engine is opaque, so the bridge carries its failures as an opaque
/// message. A failure may be marked *fatal* to signal unrecoverable engine
/// corruption; the frame driver halts on fatal errors regardless of the
/// configured fault policy.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct SimError {
    message: String,
    fatal: bool,
}

impl SimError {
    /// Creates a non-fatal engine failure with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            fatal: false,
        }
    }

    /// Creates a fatal engine failure; the frame loop will not continue past it.
    pub fn fatal(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            fatal: true,
        }
    }

    /// Whether this failure indicates unrecoverable engine corruption.
    pub fn is_fatal(&self) -> bool {
        self.fatal
    }

    /// The engine-supplied failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The four-operation contract the bridge drives an engine through.
///
/// Construction is environment-specific and handled by the bootstrapper
/// (see [`crate::boot::Bridge::boot`]); the remaining three operations are
/// the per-event entry points. All calls are synchronous and non-blocking
/// from the bridge's perspective, and are serialized by the single-threaded
/// event loop — an implementation never observes concurrent calls.
pub trait Simulation {
    /// Advances the simulation by one frame.
    ///
    /// # Arguments
    ///
    /// * `timestamp_ms` - Monotonically non-decreasing time in milliseconds,
    ///   forwarded verbatim from the display timing source.
    fn update(&mut self, timestamp_ms: f64) -> Result<(), SimError>;

    /// Marks a physical key as pressed.
    ///
    /// Auto-repeat events arrive here as-is; de-duplication, if wanted, is
    /// the engine's job.
    fn key_down(&mut self, code: &KeyCode) -> Result<(), SimError>;

    /// Marks a physical key as released.
    fn key_up(&mut self, code: &KeyCode) -> Result<(), SimError>;
}

/// The single shared handle to the engine instance.
///
/// The bridge runs on a single-threaded cooperative event loop, so the handle
/// is `Rc<RefCell<_>>` rather than `Arc<Mutex<_>>`: serialization is inherited
/// from the loop, not enforced with locks. Exactly one handle exists per page
/// session; the frame driver and the input translator share it.
pub type SimHandle<S> = Rc<RefCell<S>>;
