use crate::foundation::core::{Affine, Point, Rect, Size, Vec2};

/// Placement of an image scaled to cover a target rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoverFit {
    /// Uniform scale applied to the source.
    pub scale: f64,
    /// Scaled source extent; at least as large as the target on both axes.
    pub size: Size,
    /// Top-left corner of the scaled source, centered on the target.
    pub origin: Point,
}

impl CoverFit {
    /// Source-pixel to target-pixel transform.
    pub fn to_affine(self) -> Affine {
        Affine::translate(self.origin.to_vec2()) * Affine::scale(self.scale)
    }
}

/// Scale `source` uniformly so it fully covers `target`, centered; the excess is cropped.
pub fn cover_fit(source: Size, target: Rect) -> CoverFit {
    let scale = (target.width() / source.width).max(target.height() / source.height);
    let size = Size::new(source.width * scale, source.height * scale);
    let origin = target.center() - Vec2::new(size.width / 2.0, size.height / 2.0);
    CoverFit {
        scale,
        size,
        origin,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/fit.rs"]
mod tests;
