use crate::assets::map::ImageRef;
use crate::geometry::placement::Placement;
use crate::render::visual::{ElementId, Layer, NodeContent, VisualNode};
use crate::scene::model::HeaderSpec;
use crate::state::kind::HeaderState;

/// Header in its current state, `None` when that state has no bounds.
pub fn render_header(
    header: &HeaderSpec,
    state: HeaderState,
    scale: f64,
    image: Option<&ImageRef>,
) -> Option<VisualNode> {
    let Some(bounds) = header.state_bounds.get(&state) else {
        tracing::debug!(%state, "no bounds for state, header not rendered");
        return None;
    };
    Some(
        VisualNode::new(
            ElementId::Header,
            Layer::Header,
            Placement::from_bounds(bounds, scale),
            NodeContent::Image {
                image: image.cloned(),
            },
        )
        .interactive(),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/render/header.rs"]
mod tests;
