//! Frame-and-input bridge between an event-driven environment and an opaque
//! simulation engine.
//!
//! This crate is the environment-independent half of the bridge. It provides:
//! 1. **Contract:** the [`Simulation`] trait — the four operations the engine
//!    exposes (construct, update, key down, key up) and nothing else.
//! 2. **Bootstrapper:** [`Bridge`] constructs the engine once, before any
//!    event, and fails fatally if construction fails.
//! 3. **Frame driver:** [`FrameDriver`] forwards display-refresh timestamps
//!    to the engine and keeps the self-sustaining loop going.
//! 4. **Input translator:** [`InputTranslator`] forwards physical-key events
//!    and suppresses the environment's default actions.
//!
//! Environment bindings (the browser crate, test harnesses) implement
//! [`Simulation`] and [`input::KeySignal`] and drive the two pumps from their
//! native scheduling and event facilities.

/// Bootstrapper: one-shot simulation construction and handle wiring.
pub mod boot;
/// Session configuration (fault policy and diagnostic toggles).
pub mod config;
/// Frame driver: per-refresh update pump.
pub mod driver;
/// Bridge error taxonomy.
pub mod error;
/// Input translator: keyboard event pump.
pub mod input;
/// Physical key identifiers.
pub mod key;
/// The simulation contract and shared handle.
pub mod sim;

/// One-shot constructor of the session's bridge; use [`Bridge::boot`].
pub use crate::boot::Bridge;
/// Session configuration; use `BridgeConfig::default()` or deserialize from JSON.
pub use crate::config::{BridgeConfig, FaultPolicy};
/// Per-frame pump; drive from the environment's refresh callback.
pub use crate::driver::{FrameDriver, FrameOutcome, FrameReport};
/// Bridge failure type.
pub use crate::error::BridgeError;
/// Keyboard pump; drive from the environment's key events.
pub use crate::input::InputTranslator;
/// Physical key token and transition direction.
pub use crate::key::{KeyCode, KeyDirection};
/// Engine contract and failure type.
pub use crate::sim::{SimError, SimHandle, Simulation};
