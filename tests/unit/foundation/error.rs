use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ConvertError::config("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        ConvertError::document("x")
            .to_string()
            .contains("document error:")
    );
    assert!(
        ConvertError::storage("x")
            .to_string()
            .contains("storage error:")
    );
    assert!(ConvertError::scene("x").to_string().contains("scene error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ConvertError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
