use super::*;

use crate::foundation::core::Viewport;

fn tracker() -> (Inputs, RevealTracker) {
    let inputs = Inputs::new(Viewport::new(1000.0, 800.0).unwrap(), false);
    let t = RevealTracker::new(
        RevealConfig {
            elements: vec![
                Rect::new(0.0, 100.0, 1000.0, 300.0),
                Rect::new(0.0, 1000.0, 1000.0, 1200.0),
                Rect::new(0.0, 3000.0, 1000.0, 3100.0),
            ],
            ..RevealConfig::default()
        },
        inputs.clone(),
    );
    (inputs, t)
}

#[test]
fn reveals_what_is_on_screen() {
    let (_, mut t) = tracker();
    assert_eq!(t.update().unwrap(), EffectStatus::Continue);
    assert_eq!(t.revealed(), vec![true, false, false]);
    assert_eq!(t.pending(), 2);
}

#[test]
fn below_threshold_stays_hidden() {
    let (inputs, mut t) = tracker();
    // 30px of the 200px element (15%) is visible.
    inputs.scrolled(230.0);
    t.update().unwrap();
    assert!(!t.revealed()[1]);

    // 40px (20%) crosses the 18% threshold.
    inputs.scrolled(240.0);
    t.update().unwrap();
    assert!(t.revealed()[1]);
}

#[test]
fn reveal_is_one_shot_and_finishes() {
    let (inputs, mut t) = tracker();
    inputs.scrolled(1000.0);
    t.update().unwrap();
    inputs.scrolled(0.0);
    t.update().unwrap();
    assert_eq!(t.revealed(), vec![true, true, false]);

    inputs.scrolled(2500.0);
    assert_eq!(t.update().unwrap(), EffectStatus::Finished);
    assert_eq!(t.revealed(), vec![true, true, true]);
}

#[test]
fn empty_tracker_finishes_immediately() {
    let inputs = Inputs::new(Viewport::default(), false);
    let mut t = RevealTracker::new(RevealConfig::default(), inputs);
    assert_eq!(t.update().unwrap(), EffectStatus::Finished);
}
