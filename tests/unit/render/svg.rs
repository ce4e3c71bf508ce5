use super::*;
use crate::assets::map::ImageRef;
use crate::foundation::core::Size;
use crate::geometry::placement::Placement;
use crate::render::visual::{BorderVisual, Layer, TextVisual};
use crate::scene::model::{ImageBounds, SizingMode};
use crate::style::fill::CssShadow;

fn boxed(text: &str) -> VisualNode {
    VisualNode::new(
        ElementId::Button("o&1".into()),
        Layer::Buttons,
        Placement::from_bounds(&ImageBounds::new(50.0, 20.0, 40.0, 10.0), 1.0),
        NodeContent::Box(BoxVisual {
            background: StyleValue::LinearGradient {
                angle_deg: 90.0,
                stops: vec![
                    CssStop {
                        color: "#ff0000".into(),
                        position: 0.0,
                    },
                    CssStop {
                        color: "#0000ff".into(),
                        position: 1.0,
                    },
                ],
            },
            shadow: StyleValue::Shadows {
                shadows: vec![
                    CssShadow {
                        x: 0.0,
                        y: 2.0,
                        blur: 4.0,
                        spread: 0.0,
                        color: "#111111".into(),
                    },
                    CssShadow {
                        x: 0.0,
                        y: 8.0,
                        blur: 0.0,
                        spread: 1.0,
                        color: "#222222".into(),
                    },
                ],
            },
            border: Some(BorderVisual {
                color: "#ffffff".into(),
                width: 1.0,
            }),
            corner_radius: 50.0,
            text: Some(TextVisual {
                content: text.into(),
                font_size: 12.0,
                font_weight: 700,
                font_family: None,
                color: "#ffffff".into(),
            }),
            sizing: [SizingMode::Fixed, SizingMode::Fixed],
        }),
    )
}

#[test]
fn document_has_canvas_size_and_escaped_text() {
    let mut tree = VisualTree::new(Size::new(100.0, 40.0), 1.0);
    tree.push(boxed("A < B & \"C\""));
    let svg = tree_to_svg(&tree);
    assert!(svg.starts_with("<svg "));
    assert!(svg.contains(r#"width="100" height="40" viewBox="0 0 100 40""#));
    assert!(svg.contains("A &lt; B &amp; &quot;C&quot;"));
    assert!(svg.contains(r#"data-id="button:o&amp;1""#));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn box_paints_shadows_bottom_up_then_fill_then_text() {
    let mut tree = VisualTree::new(Size::new(100.0, 40.0), 1.0);
    tree.push(boxed("Go"));
    let svg = tree_to_svg(&tree);

    let second = svg.find("#222222").unwrap();
    let first = svg.find("#111111").unwrap();
    let fill = svg.find("url(#grad").unwrap();
    let text = svg.find("<text").unwrap();
    assert!(second < first && first < fill && fill < text);

    // Corner radius is clamped to half the shorter side.
    assert!(svg.contains(r#"rx="5" fill="url(#grad"#));
    assert!(svg.contains(r##"stroke="#ffffff" stroke-width="1""##));
    assert!(svg.contains("<feGaussianBlur stdDeviation=\"2\"/>"));
    // 90deg runs left to right.
    assert!(svg.contains(r#"x1="0" y1="0.5" x2="1" y2="0.5""#));
}

#[test]
fn images_and_empty_images() {
    let mut tree = VisualTree::new(Size::new(10.0, 10.0), 1.0);
    tree.push(VisualNode::new(
        ElementId::Offer("a".into()),
        Layer::Content,
        Placement::from_bounds(&ImageBounds::new(5.0, 5.0, 4.0, 2.0), 1.0),
        NodeContent::Image {
            image: Some(ImageRef::href("a_Locked.png")),
        },
    ));
    tree.push(VisualNode::new(
        ElementId::Offer("b".into()),
        Layer::Content,
        Placement::from_bounds(&ImageBounds::new(5.0, 5.0, 4.0, 2.0), 1.0),
        NodeContent::Image { image: None },
    ));
    let svg = tree_to_svg(&tree);
    assert_eq!(svg.matches("<image ").count(), 1);
    assert!(svg.contains(r#"xlink:href="a_Locked.png" x="-2" y="-1" width="4" height="2""#));
    assert!(svg.contains(r#"transform="matrix(1 0 0 1 5 5)""#));
}

#[test]
fn tags_are_written_whole() {
    let mut tree = VisualTree::new(Size::new(100.0, 40.0), 1.0);
    tree.push(boxed("Go"));
    tree.push(VisualNode::new(
        ElementId::Offer("a".into()),
        Layer::Content,
        Placement::from_bounds(&ImageBounds::new(5.0, 5.0, 4.0, 2.0), 1.0),
        NodeContent::Image {
            image: Some(ImageRef::href("a.png")),
        },
    ));
    let svg = tree_to_svg(&tree);
    assert!(svg.starts_with(concat!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" "#,
        r#"width="100" height="40" viewBox="0 0 100 40">"#,
    )));
    assert!(svg.contains(concat!(
        r#"<filter id="blur0" x="-50%" y="-50%" width="200%" height="200%">"#,
        r#"<feGaussianBlur stdDeviation="2"/></filter>"#,
    )));
    assert!(svg.contains(concat!(
        r#"<image xlink:href="a.png" x="-2" y="-1" width="4" height="2" "#,
        r#"preserveAspectRatio="none"/>"#,
    )));
    assert!(svg.contains(r#"text-anchor="middle" dominant-baseline="central" font-size=""#));
    assert!(svg.contains(r#"">Go</text>"#));
}
