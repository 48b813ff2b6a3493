use super::*;

use crate::clock::ManualClock;

fn popup() -> (ManualClock, Popup) {
    let clock = ManualClock::new(0);
    let p = Popup::new(PopupConfig::default(), Rc::new(clock.clone()));
    (clock, p)
}

#[test]
fn entrance_runs_to_shown() {
    let (clock, mut p) = popup();
    p.update().unwrap();
    let s = p.snapshot();
    assert_eq!(s.phase, PopupPhase::Entering);
    assert_eq!(s.opacity, 0.0);
    assert_eq!(s.scale, 0.95);
    assert_eq!(s.translate_y, 20.0);

    clock.advance(450.0);
    p.update().unwrap();
    let mid = p.snapshot();
    assert!(mid.opacity > 0.5 && mid.opacity < 1.0);

    clock.advance(450.0);
    assert_eq!(p.update().unwrap(), EffectStatus::Continue);
    let s = p.snapshot();
    assert_eq!(s.phase, PopupPhase::Shown);
    assert_eq!(s.opacity, 1.0);
    assert_eq!(s.scale, 1.0);
    assert_eq!(s.translate_y, 0.0);
}

#[test]
fn close_fades_out_then_finishes() {
    let (clock, mut p) = popup();
    clock.advance(1000.0);
    p.update().unwrap();

    p.close();
    assert_eq!(p.snapshot().phase, PopupPhase::Exiting);
    clock.advance(300.0);
    assert_eq!(p.update().unwrap(), EffectStatus::Continue);
    assert!((p.snapshot().opacity - 0.5).abs() < 1e-12);

    clock.advance(300.0);
    assert_eq!(p.update().unwrap(), EffectStatus::Finished);
    let s = p.snapshot();
    assert_eq!(s.phase, PopupPhase::Removed);
    assert_eq!(s.opacity, 0.0);
    assert_eq!(s.scale, 0.95);
}

#[test]
fn close_is_idempotent() {
    let (clock, mut p) = popup();
    p.close();
    clock.advance(500.0);
    p.close();
    clock.advance(100.0);
    assert_eq!(p.update().unwrap(), EffectStatus::Finished);
}
