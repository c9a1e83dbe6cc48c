//! Frame driver.
//!
//! Driven once per display refresh by the environment's timing source. Each
//! invocation forwards the environment-supplied timestamp to the simulation,
//! then tells the environment whether to re-register for the next frame. The
//! loop is self-sustaining: under normal operation it reports
//! [`FrameOutcome::Continue`] forever and ends only with the page itself.

use tracing::{error, warn};

use crate::config::{BridgeConfig, FaultPolicy};
use crate::error::BridgeError;
use crate::sim::{SimHandle, Simulation};

/// Whether the environment should schedule another frame after this one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Re-register the frame callback for the next display refresh.
    Continue,
    /// Stop the loop; no further frames will be delivered.
    Halt,
}

/// Result of one frame invocation.
///
/// Carries both the scheduling decision and the error, if any, so a faulting
/// frame is never silently skipped: under [`FaultPolicy::LogAndContinue`] the
/// error rides along with a `Continue` outcome instead of being discarded.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameReport {
    /// Scheduling decision for the next frame.
    pub outcome: FrameOutcome,
    /// The update failure, if this frame faulted.
    pub error: Option<BridgeError>,
}

impl FrameReport {
    /// True when the environment should re-register the frame callback.
    pub fn should_continue(&self) -> bool {
        self.outcome == FrameOutcome::Continue
    }

    fn ok() -> Self {
        Self {
            outcome: FrameOutcome::Continue,
            error: None,
        }
    }
}

/// Per-frame update pump for a single simulation handle.
///
/// Constructed by [`crate::boot::Bridge::split`]; holds one of the two clones
/// of the session's simulation handle.
#[derive(Debug)]
pub struct FrameDriver<S> {
    sim: SimHandle<S>,
    policy: FaultPolicy,
    warn_on_clock_regression: bool,
    last_timestamp: Option<f64>,
}

impl<S: Simulation> FrameDriver<S> {
    pub(crate) fn new(sim: SimHandle<S>, config: &BridgeConfig) -> Self {
        Self {
            sim,
            policy: config.fault_policy,
            warn_on_clock_regression: config.warn_on_clock_regression,
            last_timestamp: None,
        }
    }

    /// Runs one frame: forwards `timestamp_ms` to the simulation's update
    /// entry point and decides whether the loop continues.
    ///
    /// The timestamp is forwarded verbatim, exactly once per invocation. The
    /// environment guarantees non-decreasing timestamps; a regression is
    /// logged (unless configured off) but never corrected. A faulting update
    /// is logged and reported; whether the loop continues follows the
    /// configured [`FaultPolicy`], except that a fatal engine error halts
    /// unconditionally.
    ///
    /// # Arguments
    ///
    /// * `timestamp_ms` - Time in milliseconds from the display timing source.
    pub fn on_frame(&mut self, timestamp_ms: f64) -> FrameReport {
        if self.warn_on_clock_regression
            && self.last_timestamp.is_some_and(|prev| timestamp_ms < prev)
        {
            warn!(timestamp_ms, "frame timestamp went backwards");
        }
        self.last_timestamp = Some(timestamp_ms);

        match self.sim.borrow_mut().update(timestamp_ms) {
            Ok(()) => FrameReport::ok(),
            Err(source) => {
                error!(timestamp_ms, %source, "simulation update failed");
                let outcome = if source.is_fatal() || self.policy == FaultPolicy::Halt {
                    FrameOutcome::Halt
                } else {
                    FrameOutcome::Continue
                };
                FrameReport {
                    outcome,
                    error: Some(BridgeError::Update {
                        timestamp: timestamp_ms,
                        source,
                    }),
                }
            }
        }
    }

    /// Timestamp of the most recent frame, if any frame has run yet.
    pub fn last_timestamp(&self) -> Option<f64> {
        self.last_timestamp
    }
}
