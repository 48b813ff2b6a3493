use super::*;

#[test]
fn pointer_starts_centred() {
    let inputs = Inputs::new(Viewport::new(1000.0, 600.0).unwrap(), false);
    assert_eq!(inputs.get().pointer, Point::new(500.0, 300.0));
    assert_eq!(inputs.get().scroll_y, 0.0);
}

#[test]
fn clones_share_updates() {
    let inputs = Inputs::new(Viewport::default(), false);
    let seen = inputs.clone();
    inputs.pointer_moved(Point::new(3.0, 4.0));
    inputs.scrolled(120.0);
    inputs.set_hovering(true);

    let s = seen.get();
    assert_eq!(s.pointer, Point::new(3.0, 4.0));
    assert_eq!(s.scroll_y, 120.0);
    assert!(s.hovering);
}

#[test]
fn negative_scroll_is_clamped() {
    let inputs = Inputs::new(Viewport::default(), true);
    inputs.scrolled(-40.0);
    assert_eq!(inputs.get().scroll_y, 0.0);
    assert!(inputs.get().touch);
}
