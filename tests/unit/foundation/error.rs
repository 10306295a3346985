use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CoverError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(CoverError::decode("x").to_string().contains("decode error:"));
    assert!(CoverError::render("x").to_string().contains("render error:"));
    assert!(
        CoverError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn surface_allocation_names_the_size() {
    let err = CoverError::surface_allocation(70000, 10, "width exceeds u16");
    let msg = err.to_string();
    assert!(msg.contains("70000x10"));
    assert!(msg.contains("width exceeds u16"));
    assert!(!err.is_decode());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CoverError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
