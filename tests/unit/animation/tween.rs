use super::*;

#[test]
fn samples_clamp_outside_the_window() {
    let t = Tween::new(0.0, 1.0, 100.0, 200.0, Ease::OutQuad);
    assert_eq!(t.sample(0.0), 0.0);
    assert_eq!(t.progress(200.0), 0.5);
    assert_eq!(t.sample(200.0), 0.75);
    assert_eq!(t.sample(1000.0), 1.0);
    assert!(!t.is_done(299.0));
    assert!(t.is_done(300.0));
}

#[test]
fn zero_duration_is_immediately_done() {
    let t = Tween::new(0.95, 1.0, 50.0, 0.0, Ease::OutCubic);
    assert!(t.is_done(50.0));
    assert_eq!(t.sample(50.0), 1.0);
}

#[test]
fn eased_sample_leads_linear() {
    let eased = Tween::new(0.0, 10.0, 0.0, 100.0, Ease::OutCubic);
    assert!(eased.sample(30.0) > 10.0 * eased.progress(30.0));
}
