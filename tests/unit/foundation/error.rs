use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MockupError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(MockupError::render("x").to_string().contains("render error:"));
    assert!(MockupError::layout("x").to_string().contains("layout error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MockupError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn font_errors_name_the_path() {
    let err = FontLoadError::Missing {
        path: PathBuf::from("/nope/Avenir.ttc"),
    };
    assert!(err.to_string().contains("/nope/Avenir.ttc"));

    let wrapped: MockupError = err.into();
    assert!(matches!(wrapped, MockupError::Font(FontLoadError::Missing { .. })));
}
