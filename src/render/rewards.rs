use crate::assets::map::AssetMap;
use crate::geometry::placement::Placement;
use crate::render::visual::{ElementId, Layer, NodeContent, VisualNode};
use crate::scene::model::RewardsSpec;

/// Reward items in declaration order.
pub fn render_rewards(rewards: &RewardsSpec, scale: f64, assets: &AssetMap) -> Vec<VisualNode> {
    rewards
        .items
        .iter()
        .map(|item| {
            VisualNode::new(
                ElementId::Reward(item.reward_key.clone()),
                Layer::Content,
                Placement::from_bounds(&item.bounds, scale),
                NodeContent::Image {
                    image: assets.reward_image(&item.reward_key).cloned(),
                },
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/render/rewards.rs"]
mod tests;
