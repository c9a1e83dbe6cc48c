//! Physical key identification.
//!
//! The bridge never interprets keys. A key is a stable string token naming a
//! physical position on the keyboard (`"KeyW"`, `"ArrowUp"`), independent of
//! layout and modifier state, exactly as delivered by the environment. What a
//! key *means* is the simulation's business.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Layout-independent token naming a physical keyboard key.
///
/// Wraps the identifier string delivered by the environment (the DOM
/// `KeyboardEvent.code` value in the browser). The bridge forwards it to the
/// simulation verbatim; no normalization or validation is applied.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(String);

impl KeyCode {
    /// Creates a key code from the environment-supplied identifier.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The raw identifier string, as handed to the simulation.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for KeyCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for KeyCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

/// Direction of a key transition, used in diagnostics and error reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyDirection {
    /// Key was pressed (or auto-repeated while held).
    Down,
    /// Key was released.
    Up,
}

impl fmt::Display for KeyDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Down => f.write_str("down"),
            Self::Up => f.write_str("up"),
        }
    }
}
