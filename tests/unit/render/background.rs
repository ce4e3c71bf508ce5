use super::*;
use crate::foundation::core::{Point, Rect};

#[test]
fn covers_the_scaled_frame() {
    let img = ImageRef::new("background.png", 400, 800);
    let node = render_background(FrameSize::new(400.0, 800.0), 0.5, Some(&img));
    assert_eq!(node.id, ElementId::Background);
    assert_eq!(node.layer, Layer::Background);
    assert!(!node.interactive);
    assert_eq!(node.placement.center, Point::new(100.0, 200.0));
    assert_eq!(node.placement.rect(), Rect::new(0.0, 0.0, 200.0, 400.0));
    assert_eq!(node.content, NodeContent::Image { image: Some(img) });
}

#[test]
fn missing_image_mounts_empty() {
    let node = render_background(FrameSize::new(10.0, 20.0), 1.0, None);
    assert_eq!(node.content, NodeContent::Image { image: None });
    assert_eq!(node.bounding_box(), Rect::new(0.0, 0.0, 10.0, 20.0));
}
