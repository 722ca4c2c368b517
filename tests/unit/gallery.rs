use super::*;

#[test]
fn checker_alternates_cells() {
    let f = gallery_images()[0].render();
    assert_eq!(f.pixel(0, 0), Some(FOREGROUND_COLOR));
    assert_eq!(f.pixel(CELL_WIDTH as u32, 0), Some(BACKGROUND_COLOR));
    assert_eq!(
        f.pixel(CELL_WIDTH as u32, CELL_HEIGHT as u32),
        Some(FOREGROUND_COLOR)
    );
    assert_eq!(f.pixel(799, 599), Some(FOREGROUND_COLOR));
}

#[test]
fn circles_are_centred_in_cells() {
    let f = gallery_images()[1].render();
    let (cx, cy) = (CELL_WIDTH as u32 / 2, CELL_HEIGHT as u32 / 2);
    assert_eq!(f.pixel(cx, cy), Some(FOREGROUND_COLOR));
    assert_eq!(f.pixel(0, 0), Some(BACKGROUND_COLOR));
}

#[test]
fn lines_cross_in_the_middle() {
    let f = gallery_images()[2].render();
    assert_eq!(f.pixel(400, 10), Some(ACCENT_BLUE));
    assert_eq!(f.pixel(10, 300), Some(ACCENT_BLUE));
    assert_eq!(f.pixel(0, 0), Some(ACCENT_GREEN));
}

#[test]
fn render_gallery_writes_one_png_per_image() {
    let dir = std::path::PathBuf::from("target").join("unit_gallery");
    let _ = std::fs::remove_dir_all(&dir);
    let written = render_gallery(&dir).unwrap();
    assert_eq!(written.len(), gallery_images().len());
    for path in written {
        assert!(path.is_file(), "{}", path.display());
    }
}
