use super::*;

#[test]
fn empty_overrides_are_all_visible() {
    assert_eq!(Visibility::merged(&VisibilityOverrides::default()), Visibility::ALL);
}

#[test]
fn partial_overrides_only_touch_named_kinds() {
    let o: VisibilityOverrides = serde_json::from_str(r#"{"timer":false,"quests":false}"#).unwrap();
    let v = Visibility::merged(&o);
    assert!(!v.timer);
    assert!(!v.offers);
    assert!(v.background && v.header && v.buttons && v.rewards);
}

#[test]
fn builder_helpers_set_single_entries() {
    let o = VisibilityOverrides::default()
        .hide(ElementKind::Background)
        .hide(ElementKind::Buttons)
        .show(ElementKind::Buttons);
    assert_eq!(o.background, Some(false));
    assert_eq!(o.buttons, Some(true));
    assert_eq!(o.header, None);

    let base = Visibility {
        header: false,
        ..Visibility::ALL
    };
    assert!(!base.with(&o).header);
    assert!(!base.with(&o).background);
}
