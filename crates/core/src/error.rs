//! Bridge error taxonomy.
//!
//! Three failure classes, matching the three places the engine can raise:
//! construction (fatal to startup), per-frame update, and key forwarding.
//! No failure is retried anywhere in this layer; each is either fatal or
//! surfaced to the caller with enough context to identify the faulting call.

use crate::key::{KeyCode, KeyDirection};
use crate::sim::SimError;

/// Failure surfaced by the bridge.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum BridgeError {
    /// Simulation construction failed.
    ///
    /// Fatal: the bootstrapper returns this instead of a bridge, so no frame
    /// callback is ever registered and no key event is ever forwarded.
    #[error("simulation construction failed: {source}")]
    Init {
        /// The engine-raised construction failure.
        source: SimError,
    },

    /// The simulation raised during a frame update.
    #[error("update at t={timestamp}ms failed: {source}")]
    Update {
        /// Timestamp of the faulting frame, as supplied by the environment.
        timestamp: f64,
        /// The engine-raised failure.
        source: SimError,
    },

    /// The simulation raised while a key event was being forwarded.
    ///
    /// Default-action suppression has already happened by the time this is
    /// returned; environment behavior stays consistent either way.
    #[error("key {direction} for `{code}` failed: {source}")]
    Key {
        /// The physical key being forwarded.
        code: KeyCode,
        /// Whether the key was going down or up.
        direction: KeyDirection,
        /// The engine-raised failure.
        source: SimError,
    },
}

impl BridgeError {
    /// The underlying engine failure.
    pub fn sim_error(&self) -> &SimError {
        match self {
            Self::Init { source } | Self::Update { source, .. } | Self::Key { source, .. } => {
                source
            }
        }
    }
}
