use super::*;
use crate::assets::map::ImageRef;

fn rewards() -> RewardsSpec {
    serde_json::from_value(serde_json::json!({
        "items": [
            {"rewardKey": "gems", "bounds": {"x": 340, "y": 760, "w": 40, "h": 40}},
            {"rewardKey": "coins", "bounds": {"x": 60, "y": 760, "w": 40, "h": 40}}
        ]
    }))
    .unwrap()
}

#[test]
fn items_keep_declaration_order() {
    let nodes = render_rewards(&rewards(), 1.0, &AssetMap::new());
    let ids: Vec<_> = nodes.iter().map(|n| n.id.clone()).collect();
    assert_eq!(
        ids,
        vec![ElementId::Reward("gems".into()), ElementId::Reward("coins".into())]
    );
    for n in &nodes {
        assert_eq!(n.layer, Layer::Content);
        assert!(!n.interactive);
        assert_eq!(n.content, NodeContent::Image { image: None });
    }
}

#[test]
fn resolved_images_attach_by_key() {
    let mut assets = AssetMap::new();
    let coins = ImageRef::new("coins.png", 8, 8);
    assets.reward_images.insert("coins".into(), coins.clone());

    let nodes = render_rewards(&rewards(), 2.0, &assets);
    assert_eq!(nodes[0].content, NodeContent::Image { image: None });
    assert_eq!(nodes[1].content, NodeContent::Image { image: Some(coins) });
    assert_eq!(nodes[1].placement.center.x, 120.0);
    assert_eq!(nodes[1].placement.size.width, 80.0);
}

#[test]
fn empty_strip_renders_no_nodes() {
    let empty: RewardsSpec = serde_json::from_value(serde_json::json!({"items": []})).unwrap();
    assert!(render_rewards(&empty, 1.0, &AssetMap::new()).is_empty());
}
