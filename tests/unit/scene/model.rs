use super::*;
use serde_json::json;

#[test]
fn bounds_accept_short_synonyms() {
    let b: ImageBounds =
        serde_json::from_value(json!({"x": 10, "y": 20, "w": 30, "h": 40})).unwrap();
    assert_eq!(b, ImageBounds::new(10.0, 20.0, 30.0, 40.0));
}

#[test]
fn bounds_prefer_long_names_over_synonyms() {
    let b: ImageBounds = serde_json::from_value(
        json!({"x": 0, "y": 0, "width": 5, "w": 99, "height": 6, "h": 99, "rotation": 45}),
    )
    .unwrap();
    assert_eq!(b.width, 5.0);
    assert_eq!(b.height, 6.0);
    assert_eq!(b.rotation, 45.0);
}

#[test]
fn bounds_require_a_size() {
    let err = serde_json::from_value::<ImageBounds>(json!({"x": 0, "y": 0, "h": 1})).unwrap_err();
    assert!(err.to_string().contains("width"));
}

#[test]
fn state_keyed_maps_reject_unknown_states() {
    let ok = json!({
        "offerKey": "o1",
        "stateBounds": {"Locked": {"x": 1, "y": 2, "w": 3, "h": 4}}
    });
    let offer: OfferSpec = serde_json::from_value(ok).unwrap();
    assert!(offer.state_bounds.contains_key(&OfferState::Locked));

    let bad = json!({
        "offerKey": "o1",
        "stateBounds": {"Pending": {"x": 1, "y": 2, "w": 3, "h": 4}}
    });
    assert!(serde_json::from_value::<OfferSpec>(bad).is_err());
}

#[test]
fn fill_variants_parse() {
    let solid: FillSpec =
        serde_json::from_value(json!({"type": "solid", "color": "#112233"})).unwrap();
    assert!(matches!(solid, FillSpec::Solid { opacity, .. } if opacity == 1.0));

    let grad: FillSpec = serde_json::from_value(json!({
        "type": "gradient",
        "gradientType": "radial",
        "stops": [{"color": "#000000", "position": 0.0}]
    }))
    .unwrap();
    match grad {
        FillSpec::Gradient {
            gradient_type,
            rotation,
            ..
        } => {
            assert_eq!(gradient_type, GradientKind::Radial);
            assert_eq!(rotation, 0.0);
        }
        FillSpec::Solid { .. } => panic!("expected gradient"),
    }
}

#[test]
fn button_style_flattens_box_style() {
    let style: ButtonStyle = serde_json::from_value(json!({
        "bounds": {"x": 50, "y": 50, "w": 100, "h": 40},
        "fill": {"type": "solid", "color": "#ff0000"},
        "cornerRadius": 8,
        "text": "Claim",
        "sizing": {"horizontal": "hug", "vertical": "fixed"},
        "padding": 6
    }))
    .unwrap();
    assert_eq!(style.style.corner_radius, 8.0);
    assert_eq!(style.style.opacity, 1.0);
    assert_eq!(style.sizing.horizontal, SizingMode::Hug);
    assert_eq!(style.sizing.vertical, SizingMode::Fixed);
    assert_eq!(style.padding.left, 6.0);
    assert_eq!(style.text.as_deref(), Some("Claim"));
}

#[test]
fn metadata_keeps_unknown_fields() {
    let m: MetadataSpec =
        serde_json::from_value(json!({"version": "2.1", "exporter": "figma"})).unwrap();
    assert_eq!(m.version, "2.1");
    assert_eq!(m.extra.get("exporter"), Some(&json!("figma")));
}
