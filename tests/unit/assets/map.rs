use super::*;

fn basic() -> ChainSpec {
    ChainSpec::from_json_str(include_str!("../../data/chain_basic.json")).unwrap()
}

#[test]
fn lookups_use_exact_keys() {
    let mut m = AssetMap::new();
    m.insert_offer_image("o1", OfferState::Locked, ImageRef::href("o1_Locked.png"));
    assert_eq!(
        m.offer_image("o1", OfferState::Locked).map(|i| i.href.as_str()),
        Some("o1_Locked.png")
    );
    assert!(m.offer_image("O1", OfferState::Locked).is_none());
    assert!(m.offer_image("o1", OfferState::Claimed).is_none());
    assert!(m.button_icon("o1", ButtonState::Claimed).is_none());
}

#[test]
fn deserializes_the_external_shape() {
    let m: AssetMap = serde_json::from_value(serde_json::json!({
        "backgroundImage": {"href": "bg.png", "width": 390, "height": 844},
        "offerImages": {"o1": {"Unlocked": {"href": "a.png"}}},
        "headerImages": {"success": {"href": "h.png"}},
        "buttonIcons": {"o1": {"claimed": {"href": "check.png"}}}
    }))
    .unwrap();
    assert_eq!(m.background().map(|b| b.width), Some(390));
    assert!(m.offer_image("o1", OfferState::Unlocked).is_some());
    assert!(m.header_image(HeaderState::Success).is_some());
    assert!(m.button_icon("o1", ButtonState::Claimed).is_some());
    assert_eq!(m.len(), 4);
}

#[test]
fn retain_referenced_drops_only_unknown_keys() {
    let mut m = AssetMap::new();
    m.insert_offer_image("o1", OfferState::Locked, ImageRef::href("o1.png"));
    m.insert_offer_image("stale", OfferState::Locked, ImageRef::href("stale.png"));
    m.insert_button_icon("o2", ButtonState::Default, ImageRef::href("i.png"));
    m.insert_button_icon("o3", ButtonState::Default, ImageRef::href("i3.png"));
    m.reward_images.insert("coins".into(), ImageRef::href("coins.png"));
    m.reward_images.insert("old".into(), ImageRef::href("old.png"));
    m.background_image = Some(ImageRef::href("bg.png"));

    let released = m.retain_referenced(&basic());
    assert_eq!(released, 3);
    assert!(m.offer_image("o1", OfferState::Locked).is_some());
    assert!(m.offer_images.get("stale").is_none());
    assert!(m.button_icons.get("o3").is_none());
    assert!(m.reward_image("coins").is_some());
    assert!(m.background().is_some());
    assert_eq!(m.retain_referenced(&basic()), 0);
}
