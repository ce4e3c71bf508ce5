use super::*;

const ALL: [Ease; 8] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::OutBack,
];

#[test]
fn endpoints_are_fixed() {
    for e in ALL {
        assert!(e.apply(0.0).abs() < 1e-9, "{e:?}");
        assert!((e.apply(1.0) - 1.0).abs() < 1e-9, "{e:?}");
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::Linear.apply(-1.0), 0.0);
    assert_eq!(Ease::Linear.apply(2.0), 1.0);
}

#[test]
fn out_back_overshoots() {
    assert!(Ease::OutBack.apply(0.7) > 1.0);
    assert!(Ease::InOutQuad.apply(0.5) - 0.5 < 1e-9);
}
