use super::*;
use serde_json::json;

fn def(v: serde_json::Value) -> ChainSpecDef {
    serde_json::from_value(v).unwrap()
}

fn offer(key: &str) -> serde_json::Value {
    json!({
        "offerKey": key,
        "stateBounds": {
            "Locked": {"x": 0, "y": 0, "w": 10, "h": 10},
            "Unlocked": {"x": 0, "y": 0, "w": 10, "h": 10},
            "Claimed": {"x": 0, "y": 0, "w": 10, "h": 10}
        }
    })
}

#[test]
fn accepts_minimal_document() {
    let d = def(json!({"frameSize": {"width": 10, "height": 10}, "offers": [], "buttons": []}));
    assert!(validate_chain(&d).is_ok());
}

#[test]
fn rejects_duplicate_offer_keys() {
    let d = def(json!({"offers": [offer("a"), offer("a")], "buttons": []}));
    let err = validate_chain(&d).unwrap_err();
    assert_eq!(err.errors.len(), 1);
    assert!(err.to_string().contains("$.offers[1]"));
    assert!(err.to_string().contains("duplicate offerKey 'a'"));
}

#[test]
fn rejects_button_for_unknown_offer() {
    let d = def(json!({
        "offers": [offer("a")],
        "buttons": [{"offerKey": "b", "stateStyles": {}}]
    }));
    let err = validate_chain(&d).unwrap_err();
    assert!(err.to_string().contains("unknown offerKey 'b'"));
}

#[test]
fn rejects_negative_bounds_but_allows_zero() {
    let d = def(json!({
        "offers": [{
            "offerKey": "a",
            "stateBounds": {
                "Locked": {"x": 0, "y": 0, "w": 0, "h": 0},
                "Unlocked": {"x": 0, "y": 0, "w": -1, "h": 5}
            }
        }],
        "buttons": []
    }));
    let err = validate_chain(&d).unwrap_err();
    assert_eq!(err.errors.len(), 1);
    assert!(err.to_string().contains("stateBounds.Unlocked"));
}

#[test]
fn missing_states_are_not_errors() {
    let d = def(json!({
        "offers": [{"offerKey": "a", "stateBounds": {}}],
        "header": {"stateBounds": {}},
        "buttons": [{"offerKey": "a", "stateStyles": {}}]
    }));
    assert!(validate_chain(&d).is_ok());
}

#[test]
fn collects_multiple_errors_with_paths() {
    let d = def(json!({
        "frameSize": {"width": -5, "height": 10},
        "offers": [],
        "buttons": [],
        "timer": {
            "bounds": {"x": 0, "y": 0, "w": 10, "h": 10},
            "style": {"opacity": 2.0, "cornerRadius": -1}
        }
    }));
    let err = validate_chain(&d).unwrap_err();
    let text = err.to_string();
    assert_eq!(err.errors.len(), 3);
    assert!(text.contains("$.frameSize"));
    assert!(text.contains("$.timer.style.opacity"));
    assert!(text.contains("$.timer.style.cornerRadius"));
}
