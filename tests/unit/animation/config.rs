use super::*;

#[test]
fn defaults_fill_a_partial_document() {
    let doc = r#"{"offer":{"idle":{"wobble":{"amplitudeDeg":5,"periodMs":800}}}}"#;
    let cfg: AnimationConfig = serde_json::from_str(doc).unwrap();
    assert_eq!(cfg.click_feedback_ms, 150);
    assert_eq!(cfg.offer.transition, TransitionTiming::default());
    assert_eq!(
        cfg.offer.idle.wobble,
        Some(WobbleConfig {
            amplitude_deg: 5.0,
            period_ms: 800
        })
    );
    assert!(cfg.offer.idle.spring.is_none());
    assert_eq!(cfg.button, AnimationConfig::default().button);
}

#[test]
fn sub_config_setters_replace_one_field() {
    let base = ElementAnimation::default()
        .with_spring(Some(SpringConfig::default()))
        .with_orbital(Some(OrbitalConfig::default()));
    let next = base.with_wobble(Some(WobbleConfig::default()));
    assert_eq!(next.idle.spring, base.idle.spring);
    assert_eq!(next.idle.orbital, base.idle.orbital);
    assert!(next.idle.wobble.is_some());

    let cleared = next.with_spring(None);
    assert!(cleared.idle.spring.is_none());
    assert_eq!(cleared.idle.wobble, next.idle.wobble);
}

#[test]
fn update_touches_only_one_kind() {
    let mut cfg = AnimationConfig::default();
    let header_before = cfg.header;
    cfg.update(AnimatedKind::Offer, |a| {
        a.with_transition(TransitionTiming::new(50, Ease::Linear))
    });
    assert_eq!(cfg.offer.transition.duration_ms, 50);
    assert_eq!(cfg.header, header_before);
    assert_eq!(cfg.element(AnimatedKind::Offer).transition.ease, Ease::Linear);
}

#[test]
fn builder_rejects_zero_periods() {
    let err = AnimationConfig::builder()
        .with(AnimatedKind::Button, |a| {
            a.with_wobble(Some(WobbleConfig {
                amplitude_deg: 2.0,
                period_ms: 0,
            }))
        })
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("button.idle.wobble"));

    let ok = AnimationConfig::builder()
        .click_feedback(Duration::from_millis(90))
        .build()
        .unwrap();
    assert_eq!(ok.click_feedback(), Duration::from_millis(90));
}

#[test]
fn transition_progress_honours_delay() {
    let t = TransitionTiming {
        duration_ms: 100,
        delay_ms: 50,
        ease: Ease::Linear,
    };
    assert_eq!(t.progress(Duration::from_millis(20)), 0.0);
    assert!((t.progress(Duration::from_millis(100)) - 0.5).abs() < 1e-9);
    assert_eq!(t.progress(Duration::from_millis(500)), 1.0);
    assert_eq!(t.total(), Duration::from_millis(150));
    assert_eq!(TransitionTiming::none().progress(Duration::ZERO), 1.0);
}

#[test]
fn still_config_has_no_motion() {
    let cfg = AnimationConfig::still();
    assert!(cfg.offer.idle.is_still());
    assert_eq!(cfg.button.transition.total(), Duration::ZERO);
    assert_eq!(cfg.click_feedback_ms, DEFAULT_CLICK_FEEDBACK_MS);
}
