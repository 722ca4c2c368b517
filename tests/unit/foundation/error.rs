use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RasterError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(RasterError::scene("x").to_string().contains("scene error:"));
    assert!(
        RasterError::BufferTooSmall {
            needed: 10,
            actual: 4
        }
        .to_string()
        .contains("need 10 pixels, got 4")
    );
}

#[test]
fn missing_baseline_hints_at_record() {
    let err = RasterError::MissingBaseline {
        path: PathBuf::from("test/fill_rect_expected.png"),
    };
    let msg = err.to_string();
    assert!(msg.contains("fill_rect_expected.png"));
    assert!(msg.contains("olive record"));
}

#[test]
fn io_keeps_path_and_source() {
    let err = RasterError::io("out/a.png", std::io::Error::other("disk full"));
    let msg = err.to_string();
    assert!(msg.contains("out/a.png"));
    assert!(msg.contains("disk full"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RasterError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
