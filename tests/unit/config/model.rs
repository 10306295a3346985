use serde_json::json;

use super::*;

#[test]
fn defaults_satisfy_invariants() {
    let cfg = CanvasConfig::default();
    assert_eq!(cfg.canvas_size.width, 1200);
    assert_eq!(cfg.canvas_size.height, 600);
    assert!(cfg.icon.diameter_px > 2.0 * cfg.icon.ring_thickness_px);
    assert!(cfg.text.font_size_px > 0.0);
    assert!(cfg.background.effective_tint().is_none());
}

#[test]
fn white_tint_is_treated_as_absent() {
    let mut bg = BackgroundConfig {
        tint_color: Some(Color::WHITE),
        ..BackgroundConfig::default()
    };
    assert!(bg.effective_tint().is_none());
    bg.tint_color = Some(Color::rgb(255, 200, 0));
    assert_eq!(bg.effective_tint(), Some(Color::rgb(255, 200, 0)));
}

#[test]
fn set_text_splits_literally_on_line_breaks() {
    let mut t = TextConfig::default();
    t.set_text("Line1\nLine2\r\n\nLine4");
    assert_eq!(t.lines, vec!["Line1", "Line2", "", "Line4"]);
    assert_eq!(t.longest_line_chars(), 5);
    assert_eq!(t.text(), "Line1\nLine2\n\nLine4");
}

#[test]
fn watermark_anchor_tracks_bottom_right() {
    let wm = WatermarkConfig {
        margin_from_edge: Margin { dx: 30.0, dy: 12.0 },
        ..WatermarkConfig::default()
    };
    let anchor = wm.anchor(CanvasSize {
        width: 1000,
        height: 1000,
    });
    assert_eq!(anchor, Point::new(970.0, 988.0));
}

#[test]
fn normalize_clamps_degenerate_geometry() {
    let mut cfg = CanvasConfig::default();
    cfg.icon.diameter_px = 40.0;
    cfg.icon.ring_thickness_px = 100.0;
    cfg.text.font_size_px = 0.0;
    cfg.text.line_height_multiplier = -1.0;
    cfg.background.blur_radius_px = f64::NAN;
    cfg.normalize();

    assert_eq!(cfg.icon.ring_thickness_px, 20.0);
    assert_eq!(cfg.icon.inner_diameter(), 0.0);
    assert_eq!(cfg.text.font_size_px, MIN_FONT_SIZE_PX);
    assert_eq!(cfg.text.line_height_multiplier, MIN_LINE_HEIGHT);
    assert_eq!(cfg.background.blur_radius_px, 0.0);
}

#[test]
fn from_reader_parses_partial_presets() {
    let preset = json!({
        "canvas_size": {"width": 1000, "height": 1000},
        "background": {"fill_color": "#102030", "tint_color": "#ffcc00"},
        "text": {"lines": ["Hello\nWorld"], "center": {"x": 500.0, "y": 500.0}},
        "watermark": {"text": "@me"}
    });
    let cfg = CanvasConfig::from_reader(preset.to_string().as_bytes()).unwrap();
    assert_eq!(cfg.canvas_size.width, 1000);
    assert_eq!(cfg.background.fill_color, Color::rgb(0x10, 0x20, 0x30));
    assert_eq!(cfg.text.lines, vec!["Hello", "World"]);
    assert_eq!(cfg.watermark.text, "@me");
    assert_eq!(cfg.icon, IconConfig::default());
}

#[test]
fn from_reader_rejects_unknown_fields_and_zero_size() {
    let bad = json!({"canvas_size": {"width": 10, "height": 10}, "bogus": 1});
    assert!(CanvasConfig::from_reader(bad.to_string().as_bytes()).is_err());

    let zero = json!({"canvas_size": {"width": 0, "height": 10}});
    assert!(CanvasConfig::from_reader(zero.to_string().as_bytes()).is_err());
}

#[test]
fn json_round_trip_preserves_preset() {
    let mut cfg = CanvasConfig::default();
    cfg.text.set_text("A\nB");
    cfg.watermark.text = "studio".to_string();
    let s = cfg.to_json().unwrap();
    let back = CanvasConfig::from_reader(s.as_bytes()).unwrap();
    assert_eq!(back, cfg);
}
