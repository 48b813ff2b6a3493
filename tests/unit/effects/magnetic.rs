use super::*;

fn field() -> MagneticField {
    MagneticField::new(
        MagneticConfig {
            elements: vec![
                Rect::new(0.0, 0.0, 100.0, 40.0),
                Rect::new(200.0, 0.0, 300.0, 40.0),
            ],
            ..MagneticConfig::default()
        },
        42,
    )
}

#[test]
fn seeded_phases_are_reproducible_and_in_range() {
    let a = field();
    let b = field();
    for (x, y) in a.elements.iter().zip(&b.elements) {
        assert_eq!(x.angle, y.angle);
        assert_eq!(x.speed, y.speed);
        assert!((0.0..TAU).contains(&x.angle));
        assert!((0.002..0.005).contains(&x.speed));
    }
}

#[test]
fn pointer_pulls_toward_itself() {
    let mut f = field();
    f.pointer_moved(0, Point::new(90.0, 20.0)).unwrap();
    assert_eq!(f.elements[0].velocity, Vec2::new(10.0, 0.0));

    f.update().unwrap();
    let el = &f.elements[0];
    assert!((el.offset.x - 1.8).abs() < 1e-9);
    let float_x = el.angle.sin() * 2.0;
    assert!((el.transform.translate.x - (1.8 + float_x)).abs() < 1e-9);
    assert_eq!(el.transform.scale, 1.03);
}

#[test]
fn leaving_relaxes_offset() {
    let mut f = field();
    f.pointer_moved(1, Point::new(300.0, 40.0)).unwrap();
    for _ in 0..10 {
        f.update().unwrap();
    }
    f.pointer_left(1).unwrap();
    for _ in 0..300 {
        f.update().unwrap();
    }
    assert!(f.elements[1].offset.hypot() < 1e-9);
}

#[test]
fn drift_stays_within_float_amplitude() {
    let mut f = field();
    for _ in 0..1000 {
        f.update().unwrap();
        for t in f.transforms() {
            assert!(t.translate.x.abs() <= 2.0 + 1e-12);
            assert!(t.translate.y.abs() <= 1.5 + 1e-12);
        }
    }
}

#[test]
fn unknown_element_is_an_error() {
    let mut f = field();
    assert!(f.pointer_moved(5, Point::ZERO).is_err());
    assert!(f.pointer_left(2).is_err());
}

#[test]
fn zero_sized_element_is_invalid() {
    let c = MagneticConfig {
        elements: vec![Rect::new(0.0, 0.0, 0.0, 10.0)],
        ..MagneticConfig::default()
    };
    assert!(c.validate().is_err());
}
