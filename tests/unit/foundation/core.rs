use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(60, 0).is_err());
}

#[test]
fn fps_interval_matches_rate() {
    let fps = Fps::new(50, 1).unwrap();
    assert_eq!(fps.frame_interval(), Duration::from_millis(20));
    assert!((fps.frame_ms() - 20.0).abs() < 1e-9);
    assert!((Fps::default().frame_ms() - 16.666_666).abs() < 1e-3);
}

#[test]
fn viewport_visible_rect_follows_scroll() {
    let vp = Viewport::new(800.0, 600.0).unwrap();
    let r = vp.visible_rect(250.0);
    assert_eq!(r, Rect::new(0.0, 250.0, 800.0, 850.0));
    assert!(Viewport::new(0.0, 10.0).is_err());
}

#[test]
fn transform_defaults_to_identity() {
    let t = Transform::new(Vec2::new(10.0, -4.5), 1.25);
    assert_eq!(t.translate, Vec2::new(10.0, -4.5));
    assert_eq!(Transform::default(), Transform::IDENTITY);
}
