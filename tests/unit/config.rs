use super::*;

#[test]
fn empty_object_is_the_default_page() {
    let c = PageConfig::from_json_str("{}").unwrap();
    assert_eq!(c, PageConfig::default());
    assert_eq!(c.cursor.dot_follow, 0.35);
    assert_eq!(c.parallax.smoothing, 0.08);
    assert_eq!(c.reveal.threshold, 0.18);
    assert_eq!(c.nav.threshold, 0.6);
    assert!(c.countdown.target.is_none());
}

#[test]
fn partial_sections_keep_other_defaults() {
    let c = PageConfig::from_json_str(
        r##"{
            "fps": { "num": 120, "den": 1 },
            "cursor": { "dot_follow": 0.5 },
            "countdown": { "target": "2026-02-21T00:00:00Z" },
            "nav": {
                "sections": [{ "id": "about", "rect": { "x0": 0, "y0": 0, "x1": 10, "y1": 10 } }],
                "links": ["#about"]
            }
        }"##,
    )
    .unwrap();
    assert_eq!(c.fps.num, 120);
    assert_eq!(c.cursor.dot_follow, 0.5);
    assert_eq!(c.cursor.outline_follow, 0.12);
    assert_eq!(
        c.countdown.target.unwrap().timestamp_millis(),
        1_771_632_000_000
    );
    assert_eq!(c.nav.sections[0].id, "about");
}

#[test]
fn invalid_values_are_rejected() {
    let err = PageConfig::from_json_str(r#"{ "fps": { "num": 0, "den": 1 } }"#).unwrap_err();
    assert!(matches!(err, LuxError::Validation(_)));

    let err = PageConfig::from_json_str(r#"{ "parallax": { "smoothing": 0 } }"#).unwrap_err();
    assert!(err.to_string().contains("parallax.smoothing"));

    let err = PageConfig::from_json_str(r#"{ "reveal": { "threshold": 1.5 } }"#).unwrap_err();
    assert!(matches!(err, LuxError::Config(_)));
}

#[test]
fn unknown_fields_and_bad_json_are_serde_errors() {
    assert!(matches!(
        PageConfig::from_json_str(r#"{ "colour": 1 }"#).unwrap_err(),
        LuxError::Serde(_)
    ));
    for nested in [
        r#"{ "cursor": { "dot_folow": 0.9 } }"#,
        r#"{ "popup": { "exit": 600 } }"#,
        r#"{ "viewport": { "width": 800, "height": 600, "dpr": 2 } }"#,
        r#"{ "nav": { "sections": [{ "id": "a", "rect": { "x0": 0, "y0": 0, "x1": 1, "y1": 1 }, "name": "A" }] } }"#,
    ] {
        assert!(
            matches!(PageConfig::from_json_str(nested).unwrap_err(), LuxError::Serde(_)),
            "{nested}"
        );
    }
    assert!(matches!(
        PageConfig::from_json_str("{").unwrap_err(),
        LuxError::Serde(_)
    ));
}

#[test]
fn range_helpers() {
    assert!(check_fraction("f", 1.0).is_ok());
    assert!(check_fraction("f", 0.0).is_err());
    assert!(check_unit("u", 0.0).is_ok());
    assert!(check_positive("p", f64::INFINITY).is_err());
    assert!(check_non_negative("n", -0.1).is_err());
}
