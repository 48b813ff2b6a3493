use super::*;

const ALL: [Ease; 3] = [Ease::OutQuad, Ease::OutCubic, Ease::InOutCubic];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn out_cubic_smoothing_factor() {
    // Per-frame countdown smoothing factor derived from 0.08.
    let k = Ease::OutCubic.apply(0.08);
    assert!((k - 0.221_312).abs() < 1e-6);
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::OutQuad.apply(-1.0), 0.0);
    assert_eq!(Ease::InOutCubic.apply(2.0), 1.0);
}
