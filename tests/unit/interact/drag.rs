use super::*;
use crate::foundation::core::CanvasSize;

fn cfg() -> CanvasConfig {
    let mut cfg = CanvasConfig::default();
    cfg.canvas_size = CanvasSize::new(1200, 600).unwrap();
    cfg.icon.center = Point::new(300.0, 300.0);
    cfg.icon.diameter_px = 200.0;
    cfg.text.set_text("Hello");
    cfg.text.center = Point::new(800.0, 300.0);
    cfg.text.font_size_px = 50.0;
    cfg.text.line_height_multiplier = 1.0;
    cfg
}

#[test]
fn pointer_down_on_icon_records_offset() {
    let cfg = cfg();
    let mut d = DragController::default();
    assert_eq!(d.pointer_down(Point::new(320.0, 290.0), &cfg), Some(DragTarget::Icon));
    assert_eq!(
        d.state(),
        DragState::DraggingIcon {
            offset: Vec2::new(20.0, -10.0)
        }
    );
}

#[test]
fn icon_wins_when_overlapping_text() {
    let mut cfg = cfg();
    cfg.text.center = cfg.icon.center;
    let mut d = DragController::default();
    assert_eq!(d.pointer_down(cfg.icon.center, &cfg), Some(DragTarget::Icon));
}

#[test]
fn pointer_down_on_text_starts_text_drag() {
    let cfg = cfg();
    let mut d = DragController::default();
    assert_eq!(d.pointer_down(Point::new(810.0, 305.0), &cfg), Some(DragTarget::Text));
    assert_eq!(d.state().offset(), Some(Vec2::new(10.0, 5.0)));
}

#[test]
fn pointer_down_on_empty_canvas_stays_idle() {
    let mut cfg = cfg();
    let mut d = DragController::default();
    assert_eq!(d.pointer_down(Point::new(5.0, 5.0), &cfg), None);
    assert!(d.state().is_idle());
    assert_eq!(d.pointer_move(Point::new(50.0, 50.0), &mut cfg), None);
    assert_eq!(cfg.icon.center, Point::new(300.0, 300.0));
}

#[test]
fn move_commits_center_minus_offset() {
    let mut cfg = cfg();
    let mut d = DragController::default();
    d.pointer_down(Point::new(320.0, 290.0), &cfg);
    let fb = d.pointer_move(Point::new(420.0, 390.0), &mut cfg).unwrap();
    assert_eq!(fb.target, DragTarget::Icon);
    assert_eq!(fb.center, Point::new(400.0, 400.0));
    assert_eq!(cfg.icon.center, Point::new(400.0, 400.0));
}

#[test]
fn icon_drag_far_outside_stays_clamped() {
    let mut cfg = cfg();
    let mut d = DragController::default();
    d.pointer_down(Point::new(300.0, 300.0), &cfg);
    for p in [
        Point::new(-1e6, -1e6),
        Point::new(1e6, 1e6),
        Point::new(-500.0, 9000.0),
        Point::new(600.0, -3.0),
    ] {
        d.pointer_move(p, &mut cfg);
        let c = cfg.icon.center;
        assert!((100.0..=1100.0).contains(&c.x), "{c:?}");
        assert!((100.0..=500.0).contains(&c.y), "{c:?}");
    }
}

#[test]
fn text_drag_clamps_to_estimated_extent() {
    let mut cfg = cfg();
    let mut d = DragController::default();
    d.pointer_down(Point::new(800.0, 300.0), &cfg);
    d.pointer_move(Point::new(5000.0, -5000.0), &mut cfg);
    // "Hello": 5 chars * 50 * 0.6 = 150 wide, 50 tall.
    assert_eq!(cfg.text.center, Point::new(1200.0 - 75.0, 25.0));
}

#[test]
fn release_returns_to_idle_and_keeps_position() {
    let mut cfg = cfg();
    let mut d = DragController::default();
    d.pointer_down(Point::new(300.0, 300.0), &cfg);
    d.pointer_move(Point::new(350.0, 310.0), &mut cfg);
    assert_eq!(d.release(), Some(DragTarget::Icon));
    assert!(d.state().is_idle());
    assert_eq!(cfg.icon.center, Point::new(350.0, 310.0));
    assert_eq!(d.release(), None);
}
