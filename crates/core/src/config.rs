//! Bridge configuration.
//!
//! A small, flat config: the only genuine policy decision in this layer is
//! what to do when a frame update faults, plus two diagnostic toggles.
//! Configuration arrives either as `BridgeConfig::default()` or as JSON from
//! the embedding environment (the web entry point serializes a JS object and
//! deserializes it here, so both sides share one schema).

use serde::Deserialize;

/// Default configuration constants for the bridge.
mod defaults {
    /// Emit a per-key diagnostic record (code + direction) for every key event.
    pub const LOG_KEYS: bool = true;

    /// Warn when the environment delivers a timestamp lower than the previous
    /// one. The value is still forwarded verbatim; the bridge never rewrites
    /// the clock.
    pub const WARN_ON_CLOCK_REGRESSION: bool = true;
}

/// What the frame driver does when a (non-fatal) update faults.
///
/// The choice is deliberate configuration, never inferred: a faulting frame is
/// always logged, and this policy decides whether the loop re-registers for
/// the next frame afterwards. Fatal engine errors halt the loop under either
/// policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultPolicy {
    /// Log the failure and continue to the next frame.
    #[default]
    LogAndContinue,
    /// Log the failure and stop re-registering the frame callback.
    Halt,
}

/// Bridge configuration.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BridgeConfig {
    /// Policy applied when a frame update faults.
    pub fault_policy: FaultPolicy,
    /// Emit the per-key diagnostic record.
    pub log_keys: bool,
    /// Warn when frame timestamps go backwards.
    pub warn_on_clock_regression: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            fault_policy: FaultPolicy::default(),
            log_keys: defaults::LOG_KEYS,
            warn_on_clock_regression: defaults::WARN_ON_CLOCK_REGRESSION,
        }
    }
}
