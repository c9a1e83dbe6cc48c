//! Configuration tests.

use pretty_assertions::assert_eq;
use rstest::rstest;

use simbridge_core::{BridgeConfig, FaultPolicy};

#[test]
fn defaults_log_and_continue_with_diagnostics_on() {
    let config = BridgeConfig::default();
    assert_eq!(config.fault_policy, FaultPolicy::LogAndContinue);
    assert!(config.log_keys);
    assert!(config.warn_on_clock_regression);
}

#[rstest]
#[case::continue_policy("log_and_continue", FaultPolicy::LogAndContinue)]
#[case::halt_policy("halt", FaultPolicy::Halt)]
fn fault_policy_deserializes_from_snake_case(#[case] name: &str, #[case] expected: FaultPolicy) {
    let json = format!(r#"{{ "fault_policy": "{name}" }}"#);
    let config: BridgeConfig = match serde_json::from_str(&json) {
        Ok(config) => config,
        Err(e) => panic!("config failed to parse: {e}"),
    };
    assert_eq!(config.fault_policy, expected);
}

#[test]
fn empty_object_yields_defaults() {
    let config: Result<BridgeConfig, _> = serde_json::from_str("{}");
    match config {
        Ok(config) => assert_eq!(config.fault_policy, FaultPolicy::LogAndContinue),
        Err(e) => panic!("empty config must parse: {e}"),
    }
}

#[test]
fn partial_config_keeps_remaining_defaults() {
    let config: Result<BridgeConfig, _> = serde_json::from_str(r#"{ "log_keys": false }"#);
    match config {
        Ok(config) => {
            assert!(!config.log_keys);
            assert_eq!(config.fault_policy, FaultPolicy::LogAndContinue);
            assert!(config.warn_on_clock_regression);
        }
        Err(e) => panic!("partial config must parse: {e}"),
    }
}

#[test]
fn unknown_keys_are_rejected() {
    let config: Result<BridgeConfig, _> = serde_json::from_str(r#"{ "fault_polcy": "halt" }"#);
    assert!(config.is_err(), "typoed keys must not be silently ignored");
}
