use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LuxError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        LuxError::scheduler("x")
            .to_string()
            .contains("scheduler error:")
    );
    assert!(LuxError::config("x").to_string().contains("config error:"));
    assert!(
        LuxError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LuxError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let err: LuxError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, LuxError::Serde(_)));
}
