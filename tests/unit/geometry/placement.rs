use super::*;

const EPS: f64 = 1e-9;

#[test]
fn center_anchoring_under_scale() {
    let b = ImageBounds::new(100.0, 80.0, 40.0, 20.0);
    let p = Placement::from_bounds(&b, 2.0);
    assert_eq!(p.center, Point::new(200.0, 160.0));
    assert_eq!(p.size, Size::new(80.0, 40.0));
    assert_eq!(p.top_left(), Point::new(160.0, 140.0));
    assert_eq!(p.rect(), Rect::new(160.0, 140.0, 240.0, 180.0));
}

#[test]
fn rotation_keeps_center_fixed() {
    let b = ImageBounds::new(100.0, 80.0, 40.0, 20.0).rotated(45.0);
    let p = Placement::from_bounds(&b, 2.0);
    let c = p.transform() * Point::ORIGIN;
    assert!((c.x - 200.0).abs() < EPS);
    assert!((c.y - 160.0).abs() < EPS);

    let bbox = p.bounding_box();
    assert!((bbox.center().x - 200.0).abs() < 1e-6);
    assert!((bbox.center().y - 160.0).abs() < 1e-6);
    // A rotated 80x40 box covers (80+40)/sqrt(2) on both axes.
    let expected = 120.0 / 2f64.sqrt();
    assert!((bbox.width() - expected).abs() < 1e-6);
    assert!((bbox.height() - expected).abs() < 1e-6);
}

#[test]
fn zero_scale_is_present_but_empty() {
    let p = Placement::from_bounds(&ImageBounds::new(10.0, 10.0, 5.0, 5.0), 0.0);
    assert_eq!(p.size, Size::ZERO);
    assert_eq!(p.center, Point::ORIGIN);
    assert!(!p.contains(Point::new(1.0, 1.0), Affine::IDENTITY));
}

#[test]
fn contains_respects_rotation() {
    let p = Placement::from_bounds(&ImageBounds::new(0.0, 0.0, 100.0, 10.0).rotated(90.0), 1.0);
    // After a 90 degree turn the long axis is vertical.
    assert!(p.contains(Point::new(0.0, 40.0), Affine::IDENTITY));
    assert!(!p.contains(Point::new(40.0, 0.0), Affine::IDENTITY));
    // Extra transforms move the hit area.
    let moved = Affine::translate((500.0, 0.0));
    assert!(p.contains(Point::new(500.0, 40.0), moved));
}
