use super::*;
use crate::state::kind::OfferState;
use serde_json::json;

const BASIC: &str = include_str!("../../data/chain_basic.json");

#[test]
fn loads_basic_fixture() {
    let spec = ChainSpec::from_json_str(BASIC).unwrap();
    assert_eq!(spec.chain_id(), "spring-chain");
    assert_eq!(spec.frame_size(), FrameSize::new(400.0, 800.0));
    assert_eq!(spec.offers().len(), 3);
    assert_eq!(spec.buttons().len(), 2);
    assert!(spec.timer().is_some());
    assert!(spec.header().is_some());
    assert_eq!(spec.rewards().unwrap().items.len(), 2);
    assert_eq!(spec.metadata().version, "1.4.0");

    let o1 = spec.offer("o1").unwrap();
    assert_eq!(o1.state_bounds[&OfferState::Unlocked].width, 90.0);
    assert!(spec.offer("nope").is_none());
    assert!(spec.button("o3").is_none());
}

#[test]
fn missing_frame_size_uses_default() {
    let spec = ChainSpec::from_value(json!({"offers": [], "buttons": []})).unwrap();
    assert_eq!(spec.declared_frame_size(), None);
    assert_eq!(spec.frame_size(), DEFAULT_FRAME_SIZE);
}

#[test]
fn missing_required_lists_fail_fast() {
    let err = ChainSpec::from_value(json!({"buttons": []})).unwrap_err();
    assert!(matches!(err, ChainError::Serde(_)));
    let err = ChainSpec::from_value(json!({"offers": []})).unwrap_err();
    assert!(matches!(err, ChainError::Serde(_)));
}

#[test]
fn zero_frame_size_is_rejected() {
    let err = ChainSpec::from_value(json!({
        "frameSize": {"width": 0, "height": 800},
        "offers": [],
        "buttons": []
    }))
    .unwrap_err();
    assert!(matches!(err, ChainError::Validation(_)));
    assert!(err.to_string().contains("$.frameSize"));
}

#[test]
fn from_path_reports_missing_file() {
    let err = ChainSpec::from_path("tests/data/does_not_exist.json").unwrap_err();
    assert!(err.to_string().contains("does_not_exist.json"));
}
