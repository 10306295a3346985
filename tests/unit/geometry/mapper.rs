use super::*;

fn canvas() -> CanvasSize {
    CanvasSize {
        width: 1200,
        height: 600,
    }
}

#[test]
fn maps_display_corners_to_canvas_corners() {
    let display = Rect::new(100.0, 50.0, 700.0, 350.0);
    assert_eq!(
        to_canvas_space(Point::new(100.0, 50.0), display, canvas()),
        Point::new(0.0, 0.0)
    );
    assert_eq!(
        to_canvas_space(Point::new(700.0, 350.0), display, canvas()),
        Point::new(1200.0, 600.0)
    );
    assert_eq!(
        to_canvas_space(Point::new(400.0, 200.0), display, canvas()),
        Point::new(600.0, 300.0)
    );
}

#[test]
fn round_trip_is_identity_within_tolerance() {
    let rects = [
        Rect::new(0.0, 0.0, 1200.0, 600.0),
        Rect::new(13.5, 7.25, 613.5, 307.25),
        Rect::new(-40.0, 220.0, 260.0, 370.0),
        Rect::new(0.0, 0.0, 3.0, 1.0),
    ];
    let pointers = [
        Point::new(0.0, 0.0),
        Point::new(123.456, 78.9),
        Point::new(-50.0, 1000.0),
        Point::new(599.99, 0.01),
    ];
    for display in rects {
        for p in pointers {
            let c = to_canvas_space(p, display, canvas());
            let back = to_display_space(c, display, canvas());
            assert!((back.x - p.x).abs() < 1e-9, "{p:?} via {display:?}");
            assert!((back.y - p.y).abs() < 1e-9, "{p:?} via {display:?}");
        }
    }
}

#[test]
fn degenerate_rect_is_not_usable() {
    let display = Rect::new(10.0, 10.0, 10.0, 10.0);
    let p = to_canvas_space(Point::new(12.0, 12.0), display, canvas());
    assert!(!is_usable(p));
    assert!(is_usable(Point::new(1.0, 2.0)));
}
