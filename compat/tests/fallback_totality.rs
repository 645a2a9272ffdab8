//! Exhaustive walk of the fallback tables: for every (value, version)
//! pair, the chain must reach a valid-at-version value in finitely many
//! steps or end at the explicit no-fallback marker. Checked by full
//! enumeration, not sampling.

use compat::{
    element_action_fallback_for, element_action_valid_at, status_fallback_for, status_valid_at,
    CompatError, ProtocolVersion,
};
use message::{element_action, StatusMessage};

/// Every protocol version the tables distinguish, plus the boundaries
/// around each window.
fn all_versions() -> Vec<ProtocolVersion> {
    (1000..=2800).map(ProtocolVersion::new).collect()
}

#[test]
fn status_fallback_is_total_and_terminating() {
    for version in all_versions() {
        for sv in 0..=StatusMessage::SV_MAX {
            match status_fallback_for(sv, version) {
                Ok(fallen) => {
                    assert!(
                        status_valid_at(fallen, version),
                        "fallback of {sv} at {version} gave invalid {fallen}"
                    );
                    // substitutes never move forward to a newer value
                    assert!(
                        fallen <= sv,
                        "fallback of {sv} at {version} moved forward to {fallen}"
                    );
                }
                Err(CompatError::NoFallback { value, .. }) => {
                    assert_eq!(value, sv);
                    assert_eq!(
                        sv,
                        StatusMessage::SV_OK_SET_NICKNAME,
                        "only the nickname status is marked no-fallback"
                    );
                }
                Err(other) => panic!("unexpected error for {sv} at {version}: {other}"),
            }
        }
    }
}

#[test]
fn status_windows_are_monotonic_per_value() {
    // once a peer version understands a value, every later version does too
    for sv in 0..=StatusMessage::SV_MAX {
        let mut seen_valid = false;
        for version in all_versions() {
            let valid = status_valid_at(sv, version);
            if seen_valid {
                assert!(valid, "value {sv} became invalid again at {version}");
            }
            seen_valid |= valid;
        }
        assert!(seen_valid, "value {sv} is never valid");
    }
}

#[test]
fn element_action_fallback_is_total() {
    let actions = [
        element_action::SET,
        element_action::GAIN,
        element_action::LOSE,
        element_action::SET_NEWS,
        element_action::GAIN_NEWS,
        element_action::LOSE_NEWS,
    ];
    for version in all_versions() {
        for &action in &actions {
            let fallen = element_action_fallback_for(action, version);
            assert!(
                element_action_valid_at(fallen, version),
                "action {action} at {version} fell back to invalid {fallen}"
            );
        }
    }
}

#[test]
fn documented_fallback_scenario() {
    // a status introduced after the peer's version is invalid there,
    // falls back to the documented older equivalent, and recursively to
    // the floor value for a peer two eras further back
    let newer = StatusMessage::SV_PW_REQUIRED;
    let mid = ProtocolVersion::new(1115);
    assert!(!status_valid_at(newer, mid));
    assert_eq!(status_fallback_for(newer, mid), Ok(StatusMessage::SV_PW_WRONG));

    let ancient = ProtocolVersion::new(1050);
    assert_eq!(status_fallback_for(newer, ancient), Ok(StatusMessage::SV_OK));
}
