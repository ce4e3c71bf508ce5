use super::*;

const EPS: f64 = 1e-9;

#[test]
fn contain_fit_example() {
    let fit = compute_scale(FrameSize::new(800.0, 600.0), FrameSize::new(400.0, 400.0)).unwrap();
    assert_eq!(fit.scale, 0.5);
    assert_eq!(fit.scaled_width, 400.0);
    assert_eq!(fit.scaled_height, 300.0);
}

#[test]
fn never_exceeds_target_and_touches_one_side() {
    let originals = [(800.0, 600.0), (390.0, 844.0), (1.0, 1.0), (1920.0, 1080.0), (3.0, 7.0)];
    let targets = [(400.0, 400.0), (1024.0, 768.0), (13.0, 2000.0), (0.5, 0.25), (390.0, 844.0)];
    for (ow, oh) in originals {
        for (tw, th) in targets {
            let fit = compute_scale(FrameSize::new(ow, oh), FrameSize::new(tw, th)).unwrap();
            assert!(fit.scaled_width <= tw + EPS, "{ow}x{oh} -> {tw}x{th}");
            assert!(fit.scaled_height <= th + EPS, "{ow}x{oh} -> {tw}x{th}");
            let touches =
                (fit.scaled_width - tw).abs() < 1e-6 || (fit.scaled_height - th).abs() < 1e-6;
            assert!(touches, "{ow}x{oh} -> {tw}x{th}");
            // Aspect ratio preserved.
            assert!((fit.scaled_width / fit.scaled_height - ow / oh).abs() < 1e-9);
        }
    }
}

#[test]
fn zero_target_gives_zero_scale() {
    let fit = compute_scale(FrameSize::new(100.0, 100.0), FrameSize::new(0.0, 50.0)).unwrap();
    assert_eq!(fit.scale, 0.0);
    assert_eq!(fit.scaled_size(), FrameSize::new(0.0, 0.0));
}

#[test]
fn degenerate_frame_is_an_error() {
    assert!(compute_scale(FrameSize::new(0.0, 100.0), FrameSize::new(10.0, 10.0)).is_err());
    assert!(compute_scale(FrameSize::new(100.0, -1.0), FrameSize::new(10.0, 10.0)).is_err());
    assert!(compute_scale(FrameSize::new(100.0, 100.0), FrameSize::new(-1.0, 10.0)).is_err());
}
