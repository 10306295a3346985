//! Pointer/display space to canvas pixel space mapping.
//!
//! The visible canvas element is usually displayed at a different size than its raster, so every
//! pointer position has to be rescaled before it can be compared against layout state.

use crate::foundation::core::{CanvasSize, Point, Rect};

/// Map a client-space pointer position into canvas pixel space.
///
/// `display` is the on-screen bounding rectangle of the canvas element. A zero-size rectangle
/// yields non-finite coordinates; callers must not pass one.
pub fn to_canvas_space(pointer: Point, display: Rect, canvas: CanvasSize) -> Point {
    let scale_x = f64::from(canvas.width) / display.width();
    let scale_y = f64::from(canvas.height) / display.height();
    Point::new(
        (pointer.x - display.x0) * scale_x,
        (pointer.y - display.y0) * scale_y,
    )
}

/// Inverse of [`to_canvas_space`]: map a canvas pixel position back into client space.
pub fn to_display_space(p: Point, display: Rect, canvas: CanvasSize) -> Point {
    let scale_x = display.width() / f64::from(canvas.width);
    let scale_y = display.height() / f64::from(canvas.height);
    Point::new(p.x * scale_x + display.x0, p.y * scale_y + display.y0)
}

/// Whether a mapped point can be used for hit testing and dragging.
pub(crate) fn is_usable(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/mapper.rs"]
mod tests;
