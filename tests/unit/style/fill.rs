use super::*;
use serde_json::json;

fn fill(v: serde_json::Value) -> FillSpec {
    serde_json::from_value(v).unwrap()
}

#[test]
fn solid_maps_to_flat_color() {
    let s = fill_to_style(&fill(json!({"type": "solid", "color": "#22aa55"})));
    assert_eq!(
        s,
        StyleValue::Color {
            css: "#22aa55".to_string()
        }
    );
    assert_eq!(s.to_css(), "#22aa55");

    let s = fill_to_style(&fill(json!({"type": "solid", "color": "#000000", "opacity": 0.5})));
    assert_eq!(s.to_css(), "rgba(0, 0, 0, 0.5)");
}

#[test]
fn linear_gradient_keeps_stop_order() {
    let s = fill_to_style(&fill(json!({
        "type": "gradient",
        "rotation": 90,
        "stops": [
            {"color": "#0000ff", "position": 1.0},
            {"color": "#ff0000", "position": 0.25}
        ]
    })));
    assert_eq!(
        s.to_css(),
        "linear-gradient(90deg, #0000ff 100%, #ff0000 25%)"
    );
}

#[test]
fn gradient_rotation_defaults_to_zero() {
    let s = fill_to_style(&fill(json!({
        "type": "gradient",
        "stops": [{"color": "#ffffff", "position": 0}, {"color": "#000000", "position": 1}]
    })));
    assert_eq!(
        s.to_css(),
        "linear-gradient(0deg, #ffffff 0%, #000000 100%)"
    );
}

#[test]
fn unsupported_gradients_degrade_to_transparent() {
    for kind in ["radial", "angular", "diamond"] {
        let s = fill_to_style(&fill(json!({
            "type": "gradient",
            "gradientType": kind,
            "stops": [{"color": "#ffffff", "position": 0}]
        })));
        assert_eq!(s, StyleValue::transparent());
        assert!(s.is_none());
    }

    let empty = fill_to_style(&fill(json!({"type": "gradient", "stops": []})));
    assert_eq!(empty, StyleValue::transparent());
}

#[test]
fn optional_fill() {
    assert_eq!(optional_fill_to_style(None), StyleValue::None);
    assert_eq!(StyleValue::None.to_css(), "none");
}
