use super::*;

fn frame() -> FrameRGBA {
    FrameRGBA {
        width: 2,
        height: 1,
        data: vec![128, 0, 0, 128, 10, 20, 30, 255],
    }
}

#[test]
fn pixel_lookup_is_bounds_checked() {
    let f = frame();
    assert_eq!(f.pixel(1, 0), Some([10, 20, 30, 255]));
    assert_eq!(f.pixel(2, 0), None);
    assert_eq!(f.pixel(0, 1), None);
}

#[test]
fn straight_conversion_undoes_premultiplication() {
    let s = frame().to_straight_rgba8();
    assert_eq!(&s[0..4], &[255, 0, 0, 128]);
    assert_eq!(&s[4..8], &[10, 20, 30, 255]);
}

#[test]
fn png_export_decodes_back_to_straight_pixels() {
    let f = frame();
    let bytes = f.encode(ExportFormat::Png).unwrap();
    let back = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(back.dimensions(), (2, 1));
    assert_eq!(back.into_raw(), f.to_straight_rgba8());
}

#[test]
fn jpeg_export_has_jpeg_magic() {
    let bytes = frame().encode(ExportFormat::Jpeg { quality: 80 }).unwrap();
    assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);
}

#[test]
fn format_from_extension() {
    assert_eq!(ExportFormat::from_extension("PNG"), Some(ExportFormat::Png));
    assert!(matches!(
        ExportFormat::from_extension("jpeg"),
        Some(ExportFormat::Jpeg { .. })
    ));
    assert_eq!(ExportFormat::from_extension("gif"), None);
}
