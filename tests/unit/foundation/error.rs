use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FarmError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(FarmError::config("x").to_string().contains("config error:"));
    assert!(
        FarmError::submission("x")
            .to_string()
            .contains("submission error:")
    );
    assert!(
        FarmError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn only_validation_reports_is_validation() {
    assert!(FarmError::validation("x").is_validation());
    assert!(!FarmError::submission("x").is_validation());
    assert!(!FarmError::config("x").is_validation());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FarmError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
