use serde_json::json;

use super::*;

#[test]
fn canvas_size_rejects_zero_axes() {
    assert!(CanvasSize::new(0, 10).is_err());
    assert!(CanvasSize::new(10, 0).is_err());
    let c = CanvasSize::new(1200, 600).unwrap();
    assert_eq!(c.center(), Point::new(600.0, 300.0));
    assert_eq!(c.pixel_count(), 720_000);
}

#[test]
fn parses_short_long_and_alpha_hex() {
    assert_eq!(Color::from_hex("#fff").unwrap(), Color::WHITE);
    assert_eq!(Color::from_hex("#FF0000").unwrap(), Color::rgb(255, 0, 0));
    assert_eq!(
        Color::from_hex("0000ff80").unwrap(),
        Color::rgba(0, 0, 255, 128)
    );
    assert!(Color::from_hex("#12345").is_err());
    assert!(Color::from_hex("#zzzzzz").is_err());
}

#[test]
fn color_serde_accepts_arrays_and_objects() {
    let c: Color = serde_json::from_value(json!([10, 20, 30])).unwrap();
    assert_eq!(c, Color::rgb(10, 20, 30));

    let c: Color = serde_json::from_value(json!({"r": 1, "g": 2, "b": 3, "a": 4})).unwrap();
    assert_eq!(c, Color::rgba(1, 2, 3, 4));

    assert!(serde_json::from_value::<Color>(json!([1, 2])).is_err());
}

#[test]
fn color_serializes_as_rgba_hex() {
    let s = serde_json::to_string(&Color::rgba(0x12, 0xab, 0x00, 0xff)).unwrap();
    assert_eq!(s, "\"#12ab00ff\"");
}

#[test]
fn premultiply_rounds_half_up() {
    let p = Color::rgba(100, 50, 200, 128).to_premul();
    assert_eq!(
        p.to_array(),
        [
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128
        ]
    );
    assert_eq!(Color::WHITE.to_premul().to_array(), [255; 4]);
}
