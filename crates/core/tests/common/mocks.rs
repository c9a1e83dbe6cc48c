//! Mock simulations and key signals.

use std::cell::Cell;
use std::collections::VecDeque;

use mockall::mock;

use simbridge_core::input::KeySignal;
use simbridge_core::{KeyCode, SimError, Simulation};

/// One recorded contract call, in dispatch order.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    /// `update(timestamp_ms)`.
    Update(f64),
    /// `key_down(code)`.
    KeyDown(KeyCode),
    /// `key_up(code)`.
    KeyUp(KeyCode),
}

/// A simulation that records every call and can be scripted to fail.
///
/// Queued faults are consumed in order by whichever contract call runs next;
/// an empty queue means every call succeeds. Calls are recorded whether or
/// not they fault, so tests can assert on exact dispatch order.
#[derive(Debug, Default)]
pub struct RecordingSim {
    /// Every contract call, in the order the bridge dispatched it.
    pub calls: Vec<Call>,
    faults: VecDeque<SimError>,
}

impl RecordingSim {
    /// Queues a fault for the next contract call.
    pub fn fail_next(&mut self, error: SimError) {
        self.faults.push_back(error);
    }

    /// Timestamps of all recorded update calls, in order.
    pub fn updates(&self) -> Vec<f64> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Update(t) => Some(*t),
                _ => None,
            })
            .collect()
    }

    fn outcome(&mut self) -> Result<(), SimError> {
        match self.faults.pop_front() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Simulation for RecordingSim {
    fn update(&mut self, timestamp_ms: f64) -> Result<(), SimError> {
        self.calls.push(Call::Update(timestamp_ms));
        self.outcome()
    }

    fn key_down(&mut self, code: &KeyCode) -> Result<(), SimError> {
        self.calls.push(Call::KeyDown(code.clone()));
        self.outcome()
    }

    fn key_up(&mut self, code: &KeyCode) -> Result<(), SimError> {
        self.calls.push(Call::KeyUp(code.clone()));
        self.outcome()
    }
}

/// A key signal that counts how often its default action was suppressed.
#[derive(Debug)]
pub struct FakeKeySignal {
    code: KeyCode,
    suppressed: Cell<u32>,
}

impl FakeKeySignal {
    /// Creates a signal for the given physical key.
    pub fn new(code: impl Into<KeyCode>) -> Self {
        Self {
            code: code.into(),
            suppressed: Cell::new(0),
        }
    }

    /// Number of times the default action was suppressed.
    pub fn suppressions(&self) -> u32 {
        self.suppressed.get()
    }
}

impl KeySignal for FakeKeySignal {
    fn code(&self) -> KeyCode {
        self.code.clone()
    }

    fn suppress_default(&self) {
        self.suppressed.set(self.suppressed.get() + 1);
    }
}

mock! {
    /// mockall-backed key signal for expectation-style tests.
    pub Signal {}

    impl KeySignal for Signal {
        fn code(&self) -> KeyCode;
        fn suppress_default(&self);
    }
}
