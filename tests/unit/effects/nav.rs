use super::*;

use crate::foundation::core::Viewport;

fn section(id: &str, y0: f64, y1: f64) -> NavSection {
    NavSection {
        id: id.to_owned(),
        rect: Rect::new(0.0, y0, 1000.0, y1),
    }
}

fn nav() -> (Inputs, NavSync) {
    let inputs = Inputs::new(Viewport::new(1000.0, 1000.0).unwrap(), false);
    let n = NavSync::new(
        NavConfig {
            sections: vec![
                section("home", 0.0, 1000.0),
                section("about", 1000.0, 2000.0),
                section("contact", 2000.0, 2500.0),
            ],
            links: vec!["#home".into(), "#about".into(), "#about".into(), "/blog".into()],
            ..NavConfig::default()
        },
        inputs.clone(),
    );
    (inputs, n)
}

fn active(n: &NavSync) -> Vec<bool> {
    n.links().iter().map(|l| l.active).collect()
}

#[test]
fn marks_matching_links() {
    let (inputs, mut n) = nav();
    n.update().unwrap();
    assert_eq!(n.active_section(), Some("home"));
    assert_eq!(active(&n), vec![true, false, false, false]);

    inputs.scrolled(1000.0);
    n.update().unwrap();
    assert_eq!(n.active_section(), Some("about"));
    assert_eq!(active(&n), vec![false, true, true, false]);
}

#[test]
fn keeps_state_between_sections() {
    let (inputs, mut n) = nav();
    n.update().unwrap();
    // Half of home and half of about: neither reaches 60%.
    inputs.scrolled(500.0);
    n.update().unwrap();
    assert_eq!(n.active_section(), Some("home"));
    assert_eq!(active(&n), vec![true, false, false, false]);
}

#[test]
fn newly_crossing_section_takes_over() {
    let (inputs, mut n) = nav();
    // About 80%, contact 40%.
    inputs.scrolled(1200.0);
    n.update().unwrap();
    assert_eq!(n.active_section(), Some("about"));

    // About stays at 60%, contact rises to 80% and crosses.
    inputs.scrolled(1400.0);
    n.update().unwrap();
    assert_eq!(n.active_section(), Some("contact"));
    assert_eq!(active(&n), vec![false, false, false, false]);

    // Nothing new crosses on the way back up while contact is still above.
    inputs.scrolled(1300.0);
    n.update().unwrap();
    assert_eq!(n.active_section(), Some("contact"));
}

fn stacked() -> (Inputs, NavSync) {
    let inputs = Inputs::new(Viewport::new(1000.0, 1000.0).unwrap(), false);
    let n = NavSync::new(
        NavConfig {
            sections: vec![
                section("a", 0.0, 500.0),
                section("b", 500.0, 1000.0),
                section("c", 1000.0, 1400.0),
            ],
            links: vec!["#a".into(), "#b".into(), "#c".into()],
            ..NavConfig::default()
        },
        inputs.clone(),
    );
    (inputs, n)
}

#[test]
fn last_section_wins_when_several_cross_together() {
    let (_inputs, mut n) = stacked();
    n.update().unwrap();
    assert_eq!(n.active_section(), Some("b"));
    assert_eq!(active(&n), vec![false, true, false]);
}

#[test]
fn crossing_switches_even_while_current_stays_above() {
    let (inputs, mut n) = stacked();
    n.update().unwrap();

    // a drops to 40%, b stays fully visible, c reaches 75%.
    inputs.scrolled(300.0);
    n.update().unwrap();
    assert_eq!(n.active_section(), Some("c"));
    assert_eq!(active(&n), vec![false, false, true]);

    // Scrolling back re-crosses a; b never dropped, so it does not come back.
    inputs.scrolled(0.0);
    n.update().unwrap();
    assert_eq!(n.active_section(), Some("a"));
}

#[test]
fn duplicate_ids_are_rejected() {
    let c = NavConfig {
        sections: vec![section("a", 0.0, 1.0), section("a", 1.0, 2.0)],
        ..NavConfig::default()
    };
    assert!(c.validate().is_err());
}
