use super::*;
use crate::scene::model::EdgesSpec;

fn spec() -> ButtonSpec {
    serde_json::from_value(serde_json::json!({
        "offerKey": "o1",
        "stateStyles": {
            "default": {
                "bounds": {"x": 100, "y": 50, "w": 80, "h": 30},
                "fill": {"type": "solid", "color": "#22aa55"},
                "shadows": [{"x": 0, "y": 2, "blur": 4, "color": "#000000"}],
                "text": "Go",
                "font": {"size": 10}
            },
            "claimed": {
                "bounds": {"x": 100, "y": 50, "w": 80, "h": 30},
                "iconBounds": {"x": 120, "y": 50, "w": 10, "h": 10},
                "opacity": 0.5
            }
        }
    }))
    .unwrap()
}

fn ctx(scale: f64) -> RenderCtx {
    RenderCtx::new(scale, Size::new(400.0 * scale, 200.0 * scale))
}

#[test]
fn fixed_sizing_uses_declared_bounds() {
    let node = render_button(&spec(), ButtonState::Default, &ctx(2.0), None).unwrap();
    assert_eq!(node.id, ElementId::Button("o1".into()));
    assert_eq!(node.layer, Layer::Buttons);
    assert!(node.interactive);
    assert_eq!(node.placement.center, Point::new(200.0, 100.0));
    assert_eq!(node.placement.size, Size::new(160.0, 60.0));
    let NodeContent::Box(b) = &node.content else {
        panic!("button must be a box");
    };
    assert_eq!(b.shadow.to_css(), "0px 4px 8px 0px #000000");
    assert_eq!(b.text.as_ref().map(|t| t.font_size), Some(20.0));
    assert!(node.children.is_empty());
}

#[test]
fn missing_state_style_renders_nothing() {
    assert!(render_button(&spec(), ButtonState::Hover, &ctx(1.0), None).is_none());
}

#[test]
fn icon_overlay_is_positioned_and_passes_through() {
    let icon = ImageRef::new("check.png", 10, 10);
    let node = render_button(&spec(), ButtonState::Claimed, &ctx(1.0), Some(&icon)).unwrap();
    assert_eq!(node.opacity, 0.5);
    assert_eq!(node.children.len(), 1);
    let child = &node.children[0];
    assert_eq!(child.id, ElementId::ButtonIcon("o1".into()));
    assert!(!child.interactive);
    assert_eq!(child.placement.center, Point::new(120.0, 50.0));
    assert_eq!(child.placement.size, Size::new(10.0, 10.0));

    let no_bounds = render_button(&spec(), ButtonState::Default, &ctx(1.0), Some(&icon)).unwrap();
    assert_eq!(no_bounds.children[0].placement, no_bounds.placement);
}

#[test]
fn sizing_modes_are_per_axis() {
    let mut style = spec().state_styles[&ButtonState::Default].clone();
    style.padding = EdgesSpec {
        top: 2.0,
        right: 5.0,
        bottom: 2.0,
        left: 5.0,
    };

    style.sizing.horizontal = SizingMode::Hug;
    style.sizing.vertical = SizingMode::Fill;
    let p = button_placement(&style, &ctx(2.0));
    // "Go": 2 chars * 10 * 0.6 + 10 padding = 22 design units.
    assert!((p.size.width - 44.0).abs() < 1e-9);
    assert_eq!(p.center.x, 200.0);
    assert_eq!(p.size.height, 400.0);
    assert_eq!(p.center.y, 200.0);

    style.sizing.horizontal = SizingMode::Fixed;
    style.sizing.fixed_width = Some(50.0);
    style.sizing.vertical = SizingMode::Hug;
    let p = button_placement(&style, &ctx(1.0));
    assert_eq!(p.size.width, 50.0);
    assert!((p.size.height - 16.0).abs() < 1e-9);
}
