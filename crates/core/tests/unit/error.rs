//! Error taxonomy tests.

use pretty_assertions::assert_eq;

use simbridge_core::{BridgeError, KeyCode, KeyDirection, SimError};

#[test]
fn init_error_display_names_construction() {
    let err = BridgeError::Init {
        source: SimError::fatal("out of memory"),
    };
    assert_eq!(
        err.to_string(),
        "simulation construction failed: out of memory"
    );
}

#[test]
fn update_error_display_carries_timestamp() {
    let err = BridgeError::Update {
        timestamp: 16.6,
        source: SimError::new("step failed"),
    };
    assert!(err.to_string().contains("t=16.6ms"));
    assert!(err.to_string().contains("step failed"));
}

#[test]
fn key_error_display_carries_code_and_direction() {
    let err = BridgeError::Key {
        code: KeyCode::from("ArrowUp"),
        direction: KeyDirection::Down,
        source: SimError::new("unmapped"),
    };
    let rendered = err.to_string();
    assert!(rendered.contains("ArrowUp"));
    assert!(rendered.contains("down"));
    assert!(rendered.contains("unmapped"));
}

#[test]
fn sim_error_accessor_reaches_the_engine_failure() {
    let err = BridgeError::Update {
        timestamp: 1.0,
        source: SimError::fatal("corrupted"),
    };
    assert!(err.sim_error().is_fatal());
    assert_eq!(err.sim_error().message(), "corrupted");
}

#[test]
fn sim_error_fatality_is_preserved_through_clone() {
    let original = SimError::fatal("boom");
    let clone = original.clone();
    assert!(clone.is_fatal());
    assert_eq!(clone, original);
}

#[test]
fn plain_sim_error_is_not_fatal() {
    assert!(!SimError::new("transient").is_fatal());
}
