use crate::assets::map::ImageRef;
use crate::geometry::placement::Placement;
use crate::render::visual::{ElementId, Layer, NodeContent, VisualNode};
use crate::scene::model::OfferSpec;
use crate::state::kind::OfferState;

/// Offer node in its current state.
///
/// Returns `None` when the offer has no bounds for `state`; no other state's bounds are used.
/// A missing image still mounts the node, with an empty image.
pub fn render_offer(
    offer: &OfferSpec,
    state: OfferState,
    scale: f64,
    image: Option<&ImageRef>,
) -> Option<VisualNode> {
    let Some(bounds) = offer.state_bounds.get(&state) else {
        tracing::debug!(
            offer = %offer.offer_key,
            %state,
            "no bounds for state, offer not rendered"
        );
        return None;
    };
    Some(
        VisualNode::new(
            ElementId::Offer(offer.offer_key.clone()),
            Layer::Content,
            Placement::from_bounds(bounds, scale),
            NodeContent::Image {
                image: image.cloned(),
            },
        )
        .interactive(),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/render/offer.rs"]
mod tests;
