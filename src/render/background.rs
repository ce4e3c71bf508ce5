use crate::assets::map::ImageRef;
use crate::foundation::core::FrameSize;
use crate::geometry::placement::Placement;
use crate::render::visual::{ElementId, Layer, NodeContent, VisualNode};

/// Background image covering the scaled frame.
pub fn render_background(frame: FrameSize, scale: f64, image: Option<&ImageRef>) -> VisualNode {
    VisualNode::new(
        ElementId::Background,
        Layer::Background,
        Placement::from_rect(frame.scaled(scale).to_rect()),
        NodeContent::Image {
            image: image.cloned(),
        },
    )
}

#[cfg(test)]
#[path = "../../tests/unit/render/background.rs"]
mod tests;
