use serde_json::json;

use super::*;

#[test]
fn each_update_dirties_its_owning_layer() {
    let mut cfg = CanvasConfig::default();
    let cases = [
        (ConfigUpdate::BlurRadius(4.0), Layer::Background),
        (ConfigUpdate::Tint(Some(Color::rgb(0, 128, 255))), Layer::Background),
        (ConfigUpdate::IconRotation(45.0), Layer::Icon),
        (ConfigUpdate::RingColor(Color::BLACK), Layer::Icon),
        (ConfigUpdate::Text("a\nb".to_string()), Layer::Text),
        (ConfigUpdate::ExtrusionDepth(6.0), Layer::Text),
        (ConfigUpdate::WatermarkText("wm".to_string()), Layer::Watermark),
    ];
    for (update, layer) in cases {
        let dirty = update.apply(&mut cfg).unwrap();
        assert_eq!(dirty, LayerSet::only(layer));
    }
    assert_eq!(cfg.text.lines, vec!["a", "b"]);
    assert_eq!(cfg.icon.rotation_deg, 45.0);
}

#[test]
fn resize_dirties_everything_once() {
    let mut cfg = CanvasConfig::default();
    let dirty = ConfigUpdate::AspectRatio(AspectRatio::Square)
        .apply(&mut cfg)
        .unwrap();
    assert_eq!(dirty, LayerSet::ALL);
    let again = ConfigUpdate::AspectRatio(AspectRatio::Square)
        .apply(&mut cfg)
        .unwrap();
    assert!(again.is_empty());
}

#[test]
fn resize_then_recenter_text_moves_to_new_center() {
    let mut cfg = CanvasConfig::default();
    cfg.text.center = Point::new(600.0, 300.0);
    ConfigUpdate::AspectRatio(AspectRatio::Square)
        .apply(&mut cfg)
        .unwrap();
    ConfigUpdate::RecenterText.apply(&mut cfg).unwrap();
    assert_eq!(cfg.text.center, Point::new(500.0, 500.0));
}

#[test]
fn shrinking_canvas_clamps_positions() {
    let mut cfg = CanvasConfig::default();
    cfg.icon.center = Point::new(1100.0, 500.0);
    ConfigUpdate::CanvasSize(CanvasSize {
        width: 600,
        height: 400,
    })
    .apply(&mut cfg)
    .unwrap();
    assert_eq!(cfg.icon.center, Point::new(500.0, 300.0));
}

#[test]
fn invalid_canvas_size_is_rejected() {
    let mut cfg = CanvasConfig::default();
    let err = ConfigUpdate::CanvasSize(CanvasSize {
        width: 0,
        height: 10,
    })
    .apply(&mut cfg);
    assert!(err.is_err());
    assert_eq!(cfg.canvas_size, CanvasSize::default());
}

#[test]
fn degenerate_values_are_clamped() {
    let mut cfg = CanvasConfig::default();
    ConfigUpdate::FontSize(0.0).apply(&mut cfg).unwrap();
    ConfigUpdate::RingThickness(1000.0).apply(&mut cfg).unwrap();
    ConfigUpdate::BlurRadius(-3.0).apply(&mut cfg).unwrap();
    assert_eq!(cfg.text.font_size_px, MIN_FONT_SIZE_PX);
    assert_eq!(cfg.icon.ring_thickness_px, cfg.icon.diameter_px / 2.0);
    assert_eq!(cfg.background.blur_radius_px, 0.0);
}

#[test]
fn updates_deserialize_from_tagged_json() {
    let u: ConfigUpdate = serde_json::from_value(json!({"op": "blur_radius", "value": 12.5})).unwrap();
    assert_eq!(u, ConfigUpdate::BlurRadius(12.5));

    let u: ConfigUpdate = serde_json::from_value(json!({"op": "recenter_text"})).unwrap();
    assert_eq!(u, ConfigUpdate::RecenterText);

    let u: ConfigUpdate =
        serde_json::from_value(json!({"op": "aspect_ratio", "value": "square"})).unwrap();
    assert_eq!(u, ConfigUpdate::AspectRatio(AspectRatio::Square));
    assert!(u.resizes_canvas());
}
