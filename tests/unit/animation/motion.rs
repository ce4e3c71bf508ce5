use super::*;

#[test]
fn still_config_samples_identity() {
    let s = sample_idle(
        &IdleMotion::default(),
        Duration::from_millis(700),
        Some(Duration::ZERO),
        2.0,
    );
    assert!(s.is_identity());
    assert_eq!(s.about(kurbo::Point::new(10.0, 10.0)), Affine::IDENTITY);
}

#[test]
fn spring_starts_at_initial_scale_and_settles() {
    let s = SpringConfig::default();
    assert!((spring_scale(&s, Duration::ZERO) - s.initial_scale).abs() < 1e-9);
    assert!((spring_scale(&s, Duration::from_secs(5)) - 1.0).abs() < 1e-3);

    let stiff = SpringConfig {
        damping: 100.0,
        ..SpringConfig::default()
    };
    assert!((spring_scale(&stiff, Duration::ZERO) - stiff.initial_scale).abs() < 1e-9);
    assert!((spring_scale(&stiff, Duration::from_secs(5)) - 1.0).abs() < 1e-3);
}

#[test]
fn spring_needs_a_state_change() {
    let idle = IdleMotion {
        spring: Some(SpringConfig::default()),
        ..IdleMotion::default()
    };
    assert_eq!(sample_idle(&idle, Duration::from_secs(1), None, 1.0).scale, 1.0);
    assert!(sample_idle(&idle, Duration::from_secs(1), Some(Duration::ZERO), 1.0).scale < 1.0);
}

#[test]
fn wobble_peaks_at_quarter_period() {
    let idle = IdleMotion {
        wobble: Some(WobbleConfig {
            amplitude_deg: 4.0,
            period_ms: 1000,
        }),
        ..IdleMotion::default()
    };
    let s = sample_idle(&idle, Duration::from_millis(250), None, 1.0);
    assert!((s.rotation_deg - 4.0).abs() < 1e-9);
    let s = sample_idle(&idle, Duration::from_millis(500), None, 1.0);
    assert!(s.rotation_deg.abs() < 1e-9);
}

#[test]
fn orbital_offset_is_scaled() {
    let idle = IdleMotion {
        orbital: Some(OrbitalConfig {
            radius: 5.0,
            period_ms: 1000,
            phase_deg: 0.0,
        }),
        ..IdleMotion::default()
    };
    let s = sample_idle(&idle, Duration::ZERO, None, 2.0);
    assert!((s.offset.x - 10.0).abs() < 1e-9);
    assert!(s.offset.y.abs() < 1e-9);
    let s = sample_idle(&idle, Duration::from_millis(250), None, 2.0);
    assert!(s.offset.x.abs() < 1e-9);
    assert!((s.offset.y - 10.0).abs() < 1e-9);
}

#[test]
fn about_keeps_center_fixed_under_scale() {
    let m = MotionSample {
        offset: Vec2::ZERO,
        rotation_deg: 30.0,
        scale: 0.5,
    };
    let c = kurbo::Point::new(40.0, 60.0);
    let p = m.about(c) * c;
    assert!((p.x - 40.0).abs() < 1e-9 && (p.y - 60.0).abs() < 1e-9);
}
