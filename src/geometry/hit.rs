//! Hit testing: canvas point → draggable element.
//!
//! Both predicates are deliberately approximate: the icon uses its bounding square rather than
//! the true circle, and the text block uses estimated glyph metrics instead of shaped widths.

use crate::config::model::{IconConfig, TextConfig};
use crate::foundation::core::{CanvasSize, Point, Rect, Size};
use crate::foundation::math::clamp_or_mid;

/// Average glyph advance as a fraction of the font size.
pub const ESTIMATED_CHAR_WIDTH_EM: f64 = 0.6;

/// Whether `p` lies inside the icon's bounding square (`center ± diameter/2`, edges included).
pub fn is_inside_icon(p: Point, icon: &IconConfig) -> bool {
    contains_inclusive(icon_bounds(icon), p)
}

/// Whether `p` lies inside the icon's true circular footprint.
pub fn is_inside_icon_disc(p: Point, icon: &IconConfig) -> bool {
    (p - icon.center).hypot() <= icon.radius()
}

/// Whether `p` lies inside the estimated text block (edges included).
pub fn is_inside_text(p: Point, text: &TextConfig) -> bool {
    contains_inclusive(text_bounds(text), p)
}

/// Estimated extent of the text block.
///
/// Height is `lineHeight * lineCount`; width is `fontSize * 0.6 * longestLineChars`.
pub fn estimated_text_extent(text: &TextConfig) -> Size {
    let width = text.font_size_px * ESTIMATED_CHAR_WIDTH_EM * text.longest_line_chars() as f64;
    let height = text.line_height() * text.lines.len() as f64;
    Size::new(width, height)
}

/// Axis-aligned bounding square of the icon.
pub fn icon_bounds(icon: &IconConfig) -> Rect {
    Rect::from_center_size(icon.center, Size::new(icon.diameter_px, icon.diameter_px))
}

/// Estimated bounding box of the text block.
pub fn text_bounds(text: &TextConfig) -> Rect {
    Rect::from_center_size(text.center, estimated_text_extent(text))
}

/// Clamp an icon center so the full emblem stays on the canvas.
pub fn clamp_icon_center(center: Point, icon: &IconConfig, canvas: CanvasSize) -> Point {
    let r = icon.radius();
    clamp_center(center, Size::new(r, r), canvas)
}

/// Clamp a text center so the estimated block stays on the canvas.
pub fn clamp_text_center(center: Point, text: &TextConfig, canvas: CanvasSize) -> Point {
    let extent = estimated_text_extent(text);
    clamp_center(
        center,
        Size::new(extent.width / 2.0, extent.height / 2.0),
        canvas,
    )
}

fn clamp_center(center: Point, half: Size, canvas: CanvasSize) -> Point {
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);
    Point::new(
        clamp_or_mid(center.x, half.width, w - half.width),
        clamp_or_mid(center.y, half.height, h - half.height),
    )
}

fn contains_inclusive(r: Rect, p: Point) -> bool {
    p.x >= r.x0 && p.x <= r.x1 && p.y >= r.y0 && p.y <= r.y1
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/hit.rs"]
mod tests;
