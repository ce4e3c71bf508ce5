use super::*;
use crate::foundation::core::Size;
use crate::geometry::placement::Placement;
use crate::render::visual::{BoxVisual, ElementId, Layer, NodeContent, VisualNode};
use crate::scene::model::{ImageBounds, SizingMode};
use crate::style::fill::StyleValue;

fn solid_box_tree() -> VisualTree {
    let mut tree = VisualTree::new(Size::new(8.0, 4.0), 1.0);
    tree.push(VisualNode::new(
        ElementId::Timer,
        Layer::Timer,
        Placement::from_bounds(&ImageBounds::new(2.0, 2.0, 4.0, 4.0), 1.0),
        NodeContent::Box(BoxVisual {
            background: StyleValue::Color {
                css: "#ff0000".into(),
            },
            shadow: StyleValue::None,
            border: None,
            corner_radius: 0.0,
            text: None,
            sizing: [SizingMode::Fixed, SizingMode::Fixed],
        }),
    ));
    tree
}

#[test]
fn renders_boxes_into_premultiplied_pixels() {
    let frame = Rasterizer::default().render_tree(&solid_box_tree()).unwrap();
    assert_eq!((frame.width, frame.height), (8, 4));
    assert!(frame.premultiplied);
    assert_eq!(frame.data.len(), 8 * 4 * 4);
    assert_eq!(frame.pixel(1, 1), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(6, 1), Some([0, 0, 0, 0]));
    assert_eq!(frame.pixel(8, 0), None);
}

#[test]
fn invalid_svg_is_a_render_error() {
    let err = Rasterizer::default().render_svg("<svg").unwrap_err();
    assert!(matches!(err, ChainError::Render(_)));
}

#[test]
fn straight_alpha_conversion() {
    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![64, 0, 0, 128, 10, 20, 30, 255],
        premultiplied: true,
    };
    assert_eq!(frame.to_straight(), vec![128, 0, 0, 128, 10, 20, 30, 255]);
}

#[test]
fn save_png_round_trips_dimensions() {
    let path = std::env::temp_dir().join(format!("chainview_raster_{}.png", std::process::id()));
    let frame = Rasterizer::default().render_tree(&solid_box_tree()).unwrap();
    frame.save_png(&path).unwrap();
    assert_eq!(image::image_dimensions(&path).unwrap(), (8, 4));
    std::fs::remove_file(&path).ok();
}
