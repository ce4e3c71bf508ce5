use super::*;
use crate::scene::model::ImageBounds;

fn header() -> HeaderSpec {
    serde_json::from_value(serde_json::json!({
        "stateBounds": {
            "active": {"x": 200, "y": 90, "w": 360, "h": 80},
            "fail": {"x": 200, "y": 100, "w": 300, "h": 60, "rotation": -5}
        }
    }))
    .unwrap()
}

#[test]
fn current_state_bounds_are_used() {
    let img = ImageRef::new("header_active.png", 360, 80);
    let node = render_header(&header(), HeaderState::Active, 0.5, Some(&img)).unwrap();
    assert_eq!(node.id, ElementId::Header);
    assert_eq!(node.layer, Layer::Header);
    assert!(node.interactive);
    assert_eq!(
        node.placement,
        Placement::from_bounds(&ImageBounds::new(200.0, 90.0, 360.0, 80.0), 0.5)
    );
    assert_eq!(node.content, NodeContent::Image { image: Some(img) });

    let fail = render_header(&header(), HeaderState::Fail, 1.0, None).unwrap();
    assert_eq!(fail.placement.rotation_deg, -5.0);
    assert_eq!(fail.placement.size.width, 300.0);
}

#[test]
fn missing_state_renders_nothing() {
    assert!(render_header(&header(), HeaderState::Success, 1.0, None).is_none());
}
