use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GalaxiaError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        GalaxiaError::calendar("x")
            .to_string()
            .contains("calendar error:")
    );
    assert!(GalaxiaError::render("x").to_string().contains("render error:"));
    assert!(
        GalaxiaError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GalaxiaError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: GalaxiaError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, GalaxiaError::Serde(_)));
}
